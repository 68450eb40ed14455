use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use scraper::{Html, Selector};

const TRUNCATED_MARKER: &str = "\n[truncated]";
pub const MAX_PAGE_TEXT: usize = 8_192;

/// Readable summary of an HTML page the server rendered instead of redirecting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerPage {
    pub title: Option<String>,
    /// Flash messages shown by the page, in document order.
    pub flashes: Vec<String>,
    /// Body converted to markdown, truncated to [`MAX_PAGE_TEXT`] bytes.
    pub text: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<String, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

/// Decodes and summarizes a rendered page.
pub fn summarize_page(bytes: &[u8], content_type: Option<&str>) -> Result<ServerPage, DecodeError> {
    let html = decode_html(bytes, content_type)?;
    let document = Html::parse_document(&html);

    let title = select_first_text(&document, "title");
    let flashes = select_all_text(&document, ".alert");
    let body_html = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next().map(|body| body.inner_html()))
        .unwrap_or(html);
    let text = truncate(html2md::parse_html(&body_html).trim());

    Ok(ServerPage {
        title,
        flashes,
        text,
    })
}

fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    select_all_text(document, selector).into_iter().next()
}

fn select_all_text(document: &Html, selector: &str) -> Vec<String> {
    let Ok(sel) = Selector::parse(selector) else {
        return Vec::new();
    };
    document
        .select(&sel)
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str) -> String {
    if text.len() <= MAX_PAGE_TEXT {
        return text.to_string();
    }
    let mut end = MAX_PAGE_TEXT;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{TRUNCATED_MARKER}", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_from_header_wins_over_detection() {
        let bytes = b"caf\xe9";
        let decoded = decode_html(bytes, Some("text/html; Charset=\"windows-1252\"")).unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn bom_is_honored() {
        let bytes = b"\xEF\xBB\xBFhola";
        assert_eq!(decode_html(bytes, Some("text/html; charset=latin1")).unwrap(), "hola");
    }

    #[test]
    fn long_text_is_truncated_on_char_boundary() {
        let text = "é".repeat(MAX_PAGE_TEXT);
        let out = truncate(&text);
        assert!(out.ends_with(TRUNCATED_MARKER));
        assert!(out.len() <= MAX_PAGE_TEXT + TRUNCATED_MARKER.len());
    }
}

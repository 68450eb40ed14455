use std::path::PathBuf;

use url::Url;

pub const PDF_MIME: &str = "application/pdf";
/// 16 MiB, matching the server's upload limit.
pub const MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// A file chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    #[error("Please select a PDF file only.")]
    NotPdf,
    #[error("File size exceeds 16MB limit. Please choose a smaller file.")]
    TooLarge,
}

/// Type is checked before size; both must pass.
pub fn validate_file(file: &SelectedFile) -> Result<(), FileRejection> {
    if file.mime_type != PDF_MIME {
        return Err(FileRejection::NotPdf);
    }
    if file.size > MAX_FILE_BYTES {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size: `0 Bytes`, `1 KB`, `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Turns pasted drop text into a filesystem path.
///
/// Terminals paste dropped files as a path that may be quoted, shell-escaped, or a
/// `file://` URL. Returns `None` for blank input.
pub fn normalize_dropped_path(raw: &str) -> Option<PathBuf> {
    let first = raw.lines().map(str::trim).find(|line| !line.is_empty())?;
    let unquoted = strip_matching_quotes(first);

    if unquoted.starts_with("file://") {
        if let Some(path) = Url::parse(unquoted)
            .ok()
            .and_then(|url| url.to_file_path().ok())
        {
            return Some(path);
        }
    }

    let mut out = String::with_capacity(unquoted.len());
    let mut chars = unquoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, ' ' | '\'' | '"' | '(' | ')' | '&' | '\\') {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    Some(PathBuf::from(out))
}

fn strip_matching_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

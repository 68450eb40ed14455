const FALLBACK_NAME: &str = "translation.pdf";
const MAX_NAME_LEN: usize = 120;

/// Filename safe to create on any platform, derived from a server-provided name.
pub fn safe_local_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let mut cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    if cleaned.len() > MAX_NAME_LEN {
        let mut end = MAX_NAME_LEN;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
    }
    let stem = cleaned.split('.').next().unwrap_or_default();
    if is_reserved_windows_name(stem) {
        cleaned.insert(stem.len(), '_');
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

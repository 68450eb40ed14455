use crate::language::language_name;

/// A past translation as reported by the server. Never modified locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: Option<i64>,
    pub original_filename: String,
    pub translated_filename: String,
    pub source_language: String,
    pub target_language: String,
    pub created_at: String,
    pub file_size: Option<u64>,
}

pub const NO_HISTORY_PLACEHOLDER: &str = "No recent translations";

/// Server-relative download link for a translated file.
pub fn download_path(translated_filename: &str) -> String {
    format!("/download/{translated_filename}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub original_filename: String,
    pub languages: String,
    pub created_at: String,
    pub download_link: String,
    pub translated_filename: String,
}

impl From<&HistoryEntry> for HistoryRowView {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            original_filename: entry.original_filename.clone(),
            languages: format!(
                "{} → {}",
                language_name(&entry.source_language),
                language_name(&entry.target_language)
            ),
            created_at: entry.created_at.clone(),
            download_link: download_path(&entry.translated_filename),
            translated_filename: entry.translated_filename.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Exactly one placeholder row, no entries.
    Placeholder(&'static str),
    Rows(Vec<HistoryRowView>),
}

impl HistoryView {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            HistoryView::Placeholder(NO_HISTORY_PLACEHOLDER)
        } else {
            HistoryView::Rows(entries.iter().map(HistoryRowView::from).collect())
        }
    }
}

impl Default for HistoryView {
    fn default() -> Self {
        HistoryView::Placeholder(NO_HISTORY_PLACEHOLDER)
    }
}

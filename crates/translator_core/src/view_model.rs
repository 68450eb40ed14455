use crate::history::HistoryView;
use crate::{Alert, Focus, LanguageMenu, Panel, ServerPage, SubmissionState};

pub const DROP_PROMPT: &str = "Drag & drop your PDF here or click to browse";
pub const SUBMIT_LABEL: &str = "Translate PDF";
pub const SUBMIT_BUSY_LABEL: &str = "Translating...";
pub const SWAP_LABEL: &str = "Swap Languages";
pub const SWAP_DONE_LABEL: &str = "Swapped!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropZoneContent {
    Prompt(&'static str),
    File { name: String, size_label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneView {
    pub content: DropZoneContent,
    pub drag_over: bool,
}

impl DropZoneView {
    pub fn is_populated(&self) -> bool {
        matches!(self.content, DropZoneContent::File { .. })
    }
}

/// Everything the renderer needs; rendering is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub panel: Panel,
    pub location: String,
    pub drop_zone: DropZoneView,
    pub picker: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub language_menu: Option<LanguageMenu>,
    pub swap_label: &'static str,
    pub submit_label: &'static str,
    pub submission: SubmissionState,
    pub controls_enabled: bool,
    /// Percent shown by the progress bar; `None` hides it.
    pub progress: Option<u8>,
    pub alerts: Vec<Alert>,
    pub history: HistoryView,
    pub history_selected: Option<usize>,
    pub server_page: Option<ServerPage>,
    pub focus: Focus,
    pub dirty: bool,
}

//! Translator core: pure state machine and view-model helpers for the PDF
//! translation client.
mod alert;
mod effect;
mod file;
mod focus;
mod form;
mod history;
mod language;
mod msg;
mod navigation;
mod progress;
mod state;
mod update;
mod view_model;

pub use alert::{Alert, AlertId, AlertKind, AlertLink, ALERT_TIMEOUT};
pub use effect::{DownloadTarget, Effect};
pub use file::{
    format_file_size, normalize_dropped_path, validate_file, FileRejection, SelectedFile,
    MAX_FILE_BYTES, PDF_MIME,
};
pub use focus::Focus;
pub use form::{validate_form, FormError, UploadRequest};
pub use history::{download_path, HistoryEntry, HistoryRowView, HistoryView, NO_HISTORY_PLACEHOLDER};
pub use language::{
    is_supported, language_name, option_at, option_index, option_label, preferred_language,
    LanguageConflict, LanguageField, LanguageMenu, LanguagePair, LANGUAGES, OPTION_COUNT,
};
pub use msg::{Msg, ServerPage, UploadResult};
pub use navigation::{LocationHistory, Panel, HOW_IT_WORKS_FRAGMENT, TRANSLATE_FRAGMENT};
pub use progress::{SimulatedProgress, MAX_TICK_INCREMENT, PROGRESS_CAP, PROGRESS_INTERVAL};
pub use state::{AppState, SubmissionState};
pub use update::{update, SWAP_FEEDBACK};
pub use view_model::{
    AppViewModel, DropZoneContent, DropZoneView, DROP_PROMPT, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
    SWAP_DONE_LABEL, SWAP_LABEL,
};

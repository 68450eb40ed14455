use crate::alert::AlertStack;
use crate::file::format_file_size;
use crate::history::HistoryView;
use crate::navigation::{LocationHistory, Panel};
use crate::progress::SimulatedProgress;
use crate::view_model::{
    AppViewModel, DropZoneContent, DropZoneView, DROP_PROMPT, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
    SWAP_DONE_LABEL, SWAP_LABEL,
};
use crate::{Focus, HistoryEntry, LanguageMenu, LanguagePair, SelectedFile, ServerPage};

/// Lifecycle of a form submission.
///
/// A failed submission returns to `Idle` within the same update, so it has no
/// resting variant here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    /// Upload redirected to `resource_url`; waiting for the history refresh.
    Succeeded { resource_url: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) panel: Panel,
    pub(crate) location: LocationHistory,
    pub(crate) file: Option<SelectedFile>,
    pub(crate) drag_over: bool,
    pub(crate) picker: Option<String>,
    pub(crate) languages: LanguagePair,
    pub(crate) language_menu: Option<LanguageMenu>,
    pub(crate) swap_generation: u64,
    pub(crate) swap_feedback: Option<u64>,
    pub(crate) submission: SubmissionState,
    pub(crate) progress: Option<SimulatedProgress>,
    pub(crate) alerts: AlertStack,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) history_selected: Option<usize>,
    pub(crate) server_page: Option<ServerPage>,
    pub(crate) focus: Focus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let drop_zone = DropZoneView {
            content: match &self.file {
                Some(file) => DropZoneContent::File {
                    name: file.name.clone(),
                    size_label: format_file_size(file.size),
                },
                None => DropZoneContent::Prompt(DROP_PROMPT),
            },
            drag_over: self.drag_over,
        };

        AppViewModel {
            panel: self.panel,
            location: self.location.current().to_string(),
            drop_zone,
            picker: self.picker.clone(),
            source_language: self.languages.source().map(str::to_string),
            target_language: self.languages.target().map(str::to_string),
            language_menu: self.language_menu,
            swap_label: if self.swap_feedback.is_some() {
                SWAP_DONE_LABEL
            } else {
                SWAP_LABEL
            },
            submit_label: if self.submission == SubmissionState::InFlight {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
            submission: self.submission.clone(),
            controls_enabled: !self.is_locked(),
            progress: self.progress.map(|p| p.percent().round() as u8),
            alerts: self.alerts.all().to_vec(),
            history: HistoryView::from_entries(&self.history),
            history_selected: self.history_selected,
            server_page: self.server_page.clone(),
            focus: self.focus,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Form controls are locked for the whole submission.
    pub fn is_locked(&self) -> bool {
        self.submission != SubmissionState::Idle
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn history_entries(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub(crate) fn show_panel(&mut self, panel: Panel) {
        self.panel = panel;
        self.location.push(panel.fragment());
    }

    pub(crate) fn reset_location(&mut self, fragment: Option<&str>) {
        self.location = LocationHistory::new(fragment);
    }

    /// Inverse of entering InFlight.
    pub(crate) fn reset_form_state(&mut self) {
        self.submission = SubmissionState::Idle;
        self.progress = None;
        self.drag_over = false;
    }

    pub(crate) fn remove_file(&mut self) {
        self.file = None;
        if self.focus == Focus::RemoveFile {
            self.focus = Focus::DropZone;
        }
    }
}

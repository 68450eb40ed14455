use std::path::PathBuf;

use crate::{AlertId, Focus, HistoryEntry, LanguageField, Panel, SelectedFile};

/// Terminal outcome of an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// The server redirected to the finished resource.
    Redirected { final_url: String },
    /// The server answered with a page of its own instead of a redirect.
    ServerRendered(ServerPage),
    /// No response was received.
    TransportFailed { message: String },
}

/// Summary of a server-rendered HTML response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerPage {
    pub status: u16,
    pub title: Option<String>,
    pub flashes: Vec<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Controller constructed: initial location fragment and locale.
    Started {
        fragment: Option<String>,
        locale: Option<String>,
    },
    /// A navigation button (or "Get Started") selected a panel.
    NavigateTo(Panel),
    /// Back through the location stack.
    LocationBack,
    /// Forward through the location stack.
    LocationForward,
    /// Escape key.
    EscapePressed,
    /// Modifier+U shortcut.
    UploadShortcut,
    /// Click or activation on the drop zone; `on_button` when it landed on a button inside it.
    DropZoneClicked { on_button: bool },
    /// Mouse drag entering or leaving the drop zone.
    DragHover(bool),
    /// A path was dropped (pasted) onto the client.
    PathDropped(String),
    /// Picker prompt editing.
    PickerInput(char),
    PickerBackspace,
    PickerConfirmed,
    /// Engine finished inspecting a chosen path.
    FileInspected(Result<SelectedFile, String>),
    RemoveFileClicked,
    LanguageChanged {
        field: LanguageField,
        code: Option<String>,
    },
    /// Open the dropdown of a language selector.
    LanguageMenuOpened(LanguageField),
    LanguageMenuMoved { forward: bool },
    /// Choose the highlighted option of the open dropdown.
    LanguageMenuConfirmed,
    SwapClicked,
    SwapFeedbackExpired { generation: u64 },
    SubmitClicked,
    /// Simulated progress tick with a random increment.
    ProgressTick { increment: f32 },
    UploadFinished(UploadResult),
    RefreshHistoryClicked,
    HistoryLoaded(Result<Vec<HistoryEntry>, String>),
    ClearHistoryClicked,
    HistoryCleared(Result<(), String>),
    HistorySelectionMoved { forward: bool },
    /// Select a history row directly, e.g. by clicking it.
    HistorySelected(usize),
    /// Download the selected history row.
    DownloadSelected,
    /// Download the link of the newest banner that carries one.
    DownloadFromAlert,
    DownloadFinished(Result<PathBuf, String>),
    AlertDismissed(AlertId),
    DismissNewestAlert,
    ServerPageDismissed,
    FocusMoved { forward: bool },
    FocusSet(Focus),
    /// Enter on the focused control.
    ActivateFocused,
    /// Page is going away: stop timers and quit.
    Shutdown,
    /// Fallback for placeholder wiring.
    NoOp,
}

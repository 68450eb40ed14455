use std::path::PathBuf;
use std::time::Duration;

use crate::{AlertId, UploadRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read metadata for a chosen path.
    InspectFile { path: PathBuf },
    SubmitUpload(UploadRequest),
    /// Start the repeating progress tick.
    StartProgress { interval: Duration },
    StopProgress,
    RefreshHistory,
    ClearHistory,
    /// Fetch a translated file; `target` is either a bare filename or a full URL.
    Download { target: DownloadTarget },
    ScheduleAlertDismiss { alert_id: AlertId, after: Duration },
    ScheduleSwapReset { generation: u64, after: Duration },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    Filename(String),
    Url(String),
}

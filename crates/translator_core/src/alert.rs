use std::time::Duration;

/// Banners dismiss themselves after this long unless closed first.
pub const ALERT_TIMEOUT: Duration = Duration::from_millis(5000);

pub type AlertId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Warning,
    Info,
    Success,
}

/// A link carried by a banner, such as the download of a finished translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
    pub link: Option<AlertLink>,
}

/// Newest-first stack of visible banners.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct AlertStack {
    next_id: AlertId,
    alerts: Vec<Alert>,
}

impl AlertStack {
    pub(crate) fn push(&mut self, kind: AlertKind, message: String, link: Option<AlertLink>) -> AlertId {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.insert(
            0,
            Alert {
                id,
                kind,
                message,
                link,
            },
        );
        id
    }

    /// Removes the banner; returns false if it was already gone.
    pub(crate) fn dismiss(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    pub(crate) fn newest(&self) -> Option<&Alert> {
        self.alerts.first()
    }

    pub(crate) fn all(&self) -> &[Alert] {
        &self.alerts
    }
}

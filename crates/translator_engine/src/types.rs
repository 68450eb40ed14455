use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::server_page::ServerPage;

/// Upload payload: the file on disk and the two language codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_path: PathBuf,
    pub file_name: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The request followed a server-side redirect to `final_url`.
    Redirected { final_url: String },
    /// The server answered without redirecting; the body is summarized.
    Rendered { status: u16, page: ServerPage },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadSource {
    /// A translated filename, fetched from the download endpoint.
    Filename(String),
    /// An absolute URL, as returned by a redirected upload.
    Url(String),
}

/// Row of the history endpoint's JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub original_filename: String,
    pub translated_filename: String,
    pub source_language: String,
    pub target_language: String,
    pub created_at: String,
    #[serde(default)]
    pub file_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Metadata of a local file chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FileInspected(Result<FileDescriptor, ClientError>),
    UploadCompleted(Result<UploadOutcome, ClientError>),
    HistoryLoaded(Result<Vec<HistoryRecord>, ClientError>),
    HistoryCleared(Result<(), ClientError>),
    DownloadCompleted(Result<PathBuf, ClientError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ClientError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    NotFound,
    InvalidResponse,
    Io,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

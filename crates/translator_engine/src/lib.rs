//! Translator engine: HTTP calls to the translation server and local file IO.
mod client;
mod engine;
mod filename;
mod inspect;
mod persist;
mod server_page;
mod types;

pub use client::{ClientSettings, ReqwestService, TranslationService};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use filename::safe_local_filename;
pub use inspect::inspect_file;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use server_page::{decode_html, summarize_page, DecodeError, ServerPage, MAX_PAGE_TEXT};
pub use types::{
    ClientError, DownloadSource, EngineEvent, FailureKind, FileDescriptor, HistoryRecord,
    UploadOutcome, UploadPayload,
};

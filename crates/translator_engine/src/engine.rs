use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_error};

use crate::client::{ClientSettings, ReqwestService, TranslationService};
use crate::inspect::inspect_file;
use crate::{ClientError, DownloadSource, EngineEvent, FailureKind, UploadPayload};

/// Receives engine events; implementations must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    InspectFile { path: PathBuf },
    Upload(UploadPayload),
    RefreshHistory,
    ClearHistory,
    Download { source: DownloadSource },
}

/// Runs requests on a dedicated tokio runtime thread; results arrive through the sink.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: ClientSettings,
        download_dir: PathBuf,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ClientError> {
        let service = Arc::new(ReqwestService::new(settings)?);
        Self::with_service(service, download_dir, sink)
    }

    pub fn with_service(
        service: Arc<dyn TranslationService>,
        download_dir: PathBuf,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|err| ClientError::new(FailureKind::Io, err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let download_dir = Arc::new(download_dir);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let sink = sink.clone();
                let download_dir = download_dir.clone();
                runtime.spawn(async move {
                    let event = handle_command(service.as_ref(), command, &download_dir).await;
                    sink.emit(event);
                });
            }
            client_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn inspect_file(&self, path: PathBuf) {
        self.send(EngineCommand::InspectFile { path });
    }

    pub fn upload(&self, payload: UploadPayload) {
        self.send(EngineCommand::Upload(payload));
    }

    pub fn refresh_history(&self) {
        self.send(EngineCommand::RefreshHistory);
    }

    pub fn clear_history(&self) {
        self.send(EngineCommand::ClearHistory);
    }

    pub fn download(&self, source: DownloadSource) {
        self.send(EngineCommand::Download { source });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            client_error!("Engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(
    service: &dyn TranslationService,
    command: EngineCommand,
    download_dir: &std::path::Path,
) -> EngineEvent {
    match command {
        EngineCommand::InspectFile { path } => EngineEvent::FileInspected(inspect_file(&path).await),
        EngineCommand::Upload(payload) => EngineEvent::UploadCompleted(service.upload(&payload).await),
        EngineCommand::RefreshHistory => EngineEvent::HistoryLoaded(service.fetch_history().await),
        EngineCommand::ClearHistory => EngineEvent::HistoryCleared(service.clear_history().await),
        EngineCommand::Download { source } => {
            EngineEvent::DownloadCompleted(service.download(&source, download_dir).await)
        }
    }
}

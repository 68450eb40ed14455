use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use translator_engine::{
    ChannelEventSink, ClientError, DownloadSource, EngineEvent, EngineHandle, FailureKind,
    HistoryRecord, TranslationService, UploadOutcome, UploadPayload,
};

struct CannedService;

#[async_trait::async_trait]
impl TranslationService for CannedService {
    async fn upload(&self, payload: &UploadPayload) -> Result<UploadOutcome, ClientError> {
        Ok(UploadOutcome::Redirected {
            final_url: format!("http://server/download/translated_{}", payload.file_name),
        })
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ClientError> {
        Ok(Vec::new())
    }

    async fn clear_history(&self) -> Result<(), ClientError> {
        Err(ClientError {
            kind: FailureKind::HttpStatus(500),
            message: "boom".to_string(),
        })
    }

    async fn download(
        &self,
        source: &DownloadSource,
        dest_dir: &std::path::Path,
    ) -> Result<PathBuf, ClientError> {
        match source {
            DownloadSource::Filename(name) => Ok(dest_dir.join(name)),
            DownloadSource::Url(url) => Ok(dest_dir.join(url)),
        }
    }
}

fn engine() -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::with_service(
        Arc::new(CannedService),
        PathBuf::from("downloads"),
        Arc::new(ChannelEventSink::new(tx)),
    )
    .unwrap();
    (handle, rx)
}

fn next_event(rx: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    rx.recv_timeout(Duration::from_secs(5)).expect("engine event")
}

#[test]
fn commands_produce_matching_events() {
    let (engine, rx) = engine();

    engine.upload(UploadPayload {
        file_path: PathBuf::from("report.pdf"),
        file_name: "report.pdf".to_string(),
        source_language: "en".to_string(),
        target_language: "de".to_string(),
    });
    assert_eq!(
        next_event(&rx),
        EngineEvent::UploadCompleted(Ok(UploadOutcome::Redirected {
            final_url: "http://server/download/translated_report.pdf".to_string()
        }))
    );

    engine.refresh_history();
    assert_eq!(next_event(&rx), EngineEvent::HistoryLoaded(Ok(Vec::new())));

    engine.clear_history();
    let EngineEvent::HistoryCleared(Err(err)) = next_event(&rx) else {
        panic!("expected clear failure");
    };
    assert_eq!(err.kind, FailureKind::HttpStatus(500));

    engine.download(DownloadSource::Filename("x.pdf".to_string()));
    assert_eq!(
        next_event(&rx),
        EngineEvent::DownloadCompleted(Ok(PathBuf::from("downloads").join("x.pdf")))
    );
}

#[test]
fn inspecting_a_file_reports_size_and_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.PDF");
    std::fs::write(&path, vec![0u8; 1536]).unwrap();
    let (engine, rx) = engine();

    engine.inspect_file(path.clone());

    let EngineEvent::FileInspected(Ok(file)) = next_event(&rx) else {
        panic!("expected inspected file");
    };
    assert_eq!(file.name, "paper.PDF");
    assert_eq!(file.size, 1536);
    assert_eq!(file.mime_type, "application/pdf");
    assert_eq!(file.path, path);
}

#[test]
fn inspecting_missing_or_directory_paths_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, rx) = engine();

    engine.inspect_file(dir.path().to_path_buf());
    let EngineEvent::FileInspected(Err(err)) = next_event(&rx) else {
        panic!("directory should not inspect");
    };
    assert_eq!(err.kind, FailureKind::Io);

    engine.inspect_file(dir.path().join("missing.pdf"));
    assert!(matches!(next_event(&rx), EngineEvent::FileInspected(Err(_))));
}

use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Instant;

use client_logging::{client_debug, client_info, client_warn};
use rand::rngs::ThreadRng;
use translator_core::{
    DownloadTarget, Effect, HistoryEntry, Msg, SelectedFile, ServerPage, UploadRequest,
    UploadResult,
};
use translator_engine::{
    ClientError, ClientSettings, DownloadSource, EngineEvent, EngineHandle, EventSink,
    FileDescriptor, HistoryRecord, UploadOutcome, UploadPayload,
};

use super::timers::Timers;

/// Forwards engine events into the message queue as core messages.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(map_event(event));
    }
}

/// Executes effects: requests go to the engine, timers stay local to the loop.
pub struct EffectRunner {
    engine: EngineHandle,
    timers: Timers,
    rng: ThreadRng,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        download_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, ClientError> {
        let engine = EngineHandle::new(settings, download_dir, Arc::new(MsgSink { tx: msg_tx }))?;
        Ok(Self {
            engine,
            timers: Timers::default(),
            rng: rand::thread_rng(),
        })
    }

    /// Runs the effects; returns true when one of them asks to quit.
    pub fn run(&mut self, effects: Vec<Effect>, now: Instant) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::InspectFile { path } => {
                    client_debug!("InspectFile path={}", path.display());
                    self.engine.inspect_file(path);
                }
                Effect::SubmitUpload(request) => {
                    client_info!(
                        "SubmitUpload file={} {}->{}",
                        request.file_name,
                        request.source_language,
                        request.target_language
                    );
                    self.engine.upload(upload_payload(request));
                }
                Effect::StartProgress { interval } => self.timers.start_progress(now, interval),
                Effect::StopProgress => self.timers.stop_progress(),
                Effect::RefreshHistory => self.engine.refresh_history(),
                Effect::ClearHistory => self.engine.clear_history(),
                Effect::Download { target } => self.engine.download(download_source(target)),
                Effect::ScheduleAlertDismiss { alert_id, after } => {
                    self.timers.schedule(now, after, Msg::AlertDismissed(alert_id));
                }
                Effect::ScheduleSwapReset { generation, after } => {
                    self.timers
                        .schedule(now, after, Msg::SwapFeedbackExpired { generation });
                }
                Effect::Quit => {
                    self.timers.clear();
                    quit = true;
                }
            }
        }
        quit
    }

    pub fn due_messages(&mut self, now: Instant) -> Vec<Msg> {
        self.timers.due(now, &mut self.rng)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}

fn upload_payload(request: UploadRequest) -> UploadPayload {
    UploadPayload {
        file_path: request.file_path,
        file_name: request.file_name,
        source_language: request.source_language,
        target_language: request.target_language,
    }
}

fn download_source(target: DownloadTarget) -> DownloadSource {
    match target {
        DownloadTarget::Filename(name) => DownloadSource::Filename(name),
        DownloadTarget::Url(url) => DownloadSource::Url(url),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FileInspected(result) => {
            Msg::FileInspected(result.map(selected_file).map_err(|err| err.message))
        }
        EngineEvent::UploadCompleted(result) => Msg::UploadFinished(match result {
            Ok(UploadOutcome::Redirected { final_url }) => UploadResult::Redirected { final_url },
            Ok(UploadOutcome::Rendered { status, page }) => {
                UploadResult::ServerRendered(ServerPage {
                    status,
                    title: page.title,
                    flashes: page.flashes,
                    text: page.text,
                })
            }
            Err(err) => {
                client_warn!("Upload failed: {}", err);
                UploadResult::TransportFailed {
                    message: err.to_string(),
                }
            }
        }),
        EngineEvent::HistoryLoaded(result) => Msg::HistoryLoaded(
            result
                .map(|records| records.into_iter().map(history_entry).collect())
                .map_err(|err| err.to_string()),
        ),
        EngineEvent::HistoryCleared(result) => {
            Msg::HistoryCleared(result.map_err(|err| err.to_string()))
        }
        EngineEvent::DownloadCompleted(result) => {
            Msg::DownloadFinished(result.map_err(|err| err.to_string()))
        }
    }
}

fn selected_file(file: FileDescriptor) -> SelectedFile {
    SelectedFile {
        name: file.name,
        size: file.size,
        mime_type: file.mime_type,
        path: file.path,
    }
}

fn history_entry(record: HistoryRecord) -> HistoryEntry {
    HistoryEntry {
        id: record.id,
        original_filename: record.original_filename,
        translated_filename: record.translated_filename,
        source_language: record.source_language,
        target_language: record.target_language,
        created_at: record.created_at,
        file_size: record.file_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use translator_engine::{FailureKind, ServerPage as RenderedPage};

    #[test]
    fn rendered_upload_becomes_server_page() {
        let msg = map_event(EngineEvent::UploadCompleted(Ok(UploadOutcome::Rendered {
            status: 413,
            page: RenderedPage {
                title: Some("Too large".to_string()),
                flashes: vec!["File too big".to_string()],
                text: "body".to_string(),
            },
        })));
        assert_eq!(
            msg,
            Msg::UploadFinished(UploadResult::ServerRendered(ServerPage {
                status: 413,
                title: Some("Too large".to_string()),
                flashes: vec!["File too big".to_string()],
                text: "body".to_string(),
            }))
        );
    }

    #[test]
    fn upload_errors_are_transport_failures() {
        let msg = map_event(EngineEvent::UploadCompleted(Err(ClientError {
            kind: FailureKind::Timeout,
            message: "operation timed out".to_string(),
        })));
        assert!(matches!(
            msg,
            Msg::UploadFinished(UploadResult::TransportFailed { ref message }) if message.contains("timed out")
        ));
    }

    #[test]
    fn inspected_file_keeps_engine_message_on_error() {
        let msg = map_event(EngineEvent::FileInspected(Err(ClientError {
            kind: FailureKind::Io,
            message: "/tmp/x.pdf: No such file or directory".to_string(),
        })));
        assert_eq!(
            msg,
            Msg::FileInspected(Err("/tmp/x.pdf: No such file or directory".to_string()))
        );
    }

    #[test]
    fn history_records_map_field_for_field() {
        let msg = map_event(EngineEvent::HistoryLoaded(Ok(vec![HistoryRecord {
            id: Some(9),
            original_filename: "a.pdf".to_string(),
            translated_filename: "translated_a.pdf".to_string(),
            source_language: "en".to_string(),
            target_language: "te".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
            file_size: None,
        }])));
        let Msg::HistoryLoaded(Ok(entries)) = msg else {
            panic!("expected loaded history");
        };
        assert_eq!(entries[0].translated_filename, "translated_a.pdf");
        assert_eq!(entries[0].target_language, "te");
    }
}

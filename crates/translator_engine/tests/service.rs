use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use translator_engine::{
    ClientSettings, DownloadSource, FailureKind, ReqwestService, TranslationService,
    UploadOutcome, UploadPayload,
};
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(client_logging::initialize_for_tests);
}

fn service_for(server: &MockServer) -> ReqwestService {
    init_logging();
    let base = Url::parse(&format!("{}/", server.uri())).unwrap();
    ReqwestService::new(ClientSettings::new(base)).unwrap()
}

fn sample_pdf(dir: &tempfile::TempDir) -> UploadPayload {
    let file_path: PathBuf = dir.path().join("report.pdf");
    std::fs::write(&file_path, b"%PDF-1.4 sample").unwrap();
    UploadPayload {
        file_path,
        file_name: "report.pdf".to_string(),
        source_language: "en".to_string(),
        target_language: "es".to_string(),
    }
}

#[tokio::test]
async fn redirected_upload_reports_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"source_language\""))
        .and(body_string_contains("filename=\"report.pdf\""))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "/download/translated_report.pdf"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/download/translated_report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("%PDF", "application/pdf"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let outcome = service_for(&server).upload(&sample_pdf(&dir)).await.unwrap();

    assert_eq!(
        outcome,
        UploadOutcome::Redirected {
            final_url: format!("{}/download/translated_report.pdf", server.uri())
        }
    );
}

#[tokio::test]
async fn rendered_upload_response_is_summarized() {
    let server = MockServer::start().await;
    let page = r#"<html><head><title>PDF Translator</title></head>
        <body><div class="alert alert-danger">Translation failed:
          model offline</div><p>Try again later.</p></body></html>"#;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let outcome = service_for(&server).upload(&sample_pdf(&dir)).await.unwrap();

    let UploadOutcome::Rendered { status, page } = outcome else {
        panic!("expected rendered page, got {outcome:?}");
    };
    assert_eq!(status, 200);
    assert_eq!(page.title.as_deref(), Some("PDF Translator"));
    assert_eq!(page.flashes, vec!["Translation failed: model offline".to_string()]);
    assert!(page.text.contains("Try again later."));
}

#[tokio::test]
async fn missing_upload_file_is_an_io_failure() {
    let server = MockServer::start().await;
    let payload = UploadPayload {
        file_path: PathBuf::from("/definitely/not/here.pdf"),
        file_name: "here.pdf".to_string(),
        source_language: "en".to_string(),
        target_language: "fr".to_string(),
    };

    let err = service_for(&server).upload(&payload).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
}

#[tokio::test]
async fn history_is_parsed_from_json() {
    let server = MockServer::start().await;
    let body = r#"{"history": [
        {"id": 3, "original_filename": "a.pdf", "translated_filename": "translated_x_a.pdf",
         "source_language": "en", "target_language": "hi",
         "created_at": "2024-05-01 10:00:00", "file_size": 2048},
        {"original_filename": "b.pdf", "translated_filename": "translated_y_b.pdf",
         "source_language": "fr", "target_language": "en", "created_at": "2024-04-30 09:00:00"}
    ]}"#;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let history = service_for(&server).fetch_history().await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, Some(3));
    assert_eq!(history[0].file_size, Some(2048));
    assert_eq!(history[1].id, None);
    assert_eq!(history[1].translated_filename, "translated_y_b.pdf");
}

#[tokio::test]
async fn history_error_body_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"history": [], "error": "db locked"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let history = service_for(&server).fetch_history().await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn history_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_history().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn malformed_history_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_history().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn clear_history_follows_redirect_home() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clear_history"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    service_for(&server).clear_history().await.unwrap();
}

#[tokio::test]
async fn download_saves_pdf_into_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/translated_abc_report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("%PDF-1.7 body", "application/pdf"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let saved = service_for(&server)
        .download(
            &DownloadSource::Filename("translated_abc_report.pdf".to_string()),
            dir.path(),
        )
        .await
        .unwrap();

    assert_eq!(saved, dir.path().join("translated_abc_report.pdf"));
    assert_eq!(std::fs::read(&saved).unwrap(), b"%PDF-1.7 body");
}

#[tokio::test]
async fn download_redirected_home_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/gone.pdf"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = service_for(&server)
        .download(&DownloadSource::Filename("gone.pdf".to_string()), dir.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::NotFound);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn download_by_absolute_url_uses_last_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/translated_q.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("%PDF", "application/pdf"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/download/translated_q.pdf", server.uri());
    let saved = service_for(&server)
        .download(&DownloadSource::Url(url), dir.path())
        .await
        .unwrap();

    assert_eq!(saved.file_name().unwrap(), "translated_q.pdf");
}

#[tokio::test]
async fn oversized_download_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/big.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![b'x'; 64], "application/pdf"))
        .mount(&server)
        .await;

    init_logging();
    let mut settings = ClientSettings::new(Url::parse(&format!("{}/", server.uri())).unwrap());
    settings.max_download_bytes = 16;
    let service = ReqwestService::new(settings).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let err = service
        .download(&DownloadSource::Filename("big.pdf".to_string()), dir.path())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 16, .. }));
}

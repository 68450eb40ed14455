use std::path::{Path, PathBuf};
use std::time::Duration;

use client_logging::{client_debug, client_info, client_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::filename::safe_local_filename;
use crate::persist::AtomicFileWriter;
use crate::server_page::summarize_page;
use crate::types::HistoryResponse;
use crate::{
    ClientError, DownloadSource, FailureKind, HistoryRecord, UploadOutcome, UploadPayload,
};

const PDF_MIME: &str = "application/pdf";
const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Endpoints and limits for talking to the translation server.
///
/// Paths are resolved against `base_url` the way a browser resolves an
/// absolute-path link.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub upload_path: String,
    pub history_path: String,
    pub clear_history_path: String,
    pub download_path: String,
    pub connect_timeout: Duration,
    /// Translation runs inside the upload request, so this is generous.
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_download_bytes: u64,
    pub max_page_bytes: u64,
}

impl ClientSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            upload_path: "/upload".to_string(),
            history_path: "/api/history".to_string(),
            clear_history_path: "/clear_history".to_string(),
            download_path: "/download/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(600),
            redirect_limit: 10,
            max_download_bytes: 64 * 1024 * 1024,
            max_page_bytes: 2 * 1024 * 1024,
        }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, format!("{path}: {err}")))
    }

    /// `{download_path}{filename}` with the filename percent-encoded as one segment.
    pub fn download_url(&self, filename: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&self.download_path)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::new(FailureKind::InvalidUrl, "server url cannot be a base"))?
            .pop_if_empty()
            .push(filename);
        Ok(url)
    }
}

#[async_trait::async_trait]
pub trait TranslationService: Send + Sync {
    async fn upload(&self, payload: &UploadPayload) -> Result<UploadOutcome, ClientError>;
    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ClientError>;
    async fn clear_history(&self) -> Result<(), ClientError>;
    /// Saves the PDF into `dest_dir` and returns the written path.
    async fn download(&self, source: &DownloadSource, dest_dir: &Path) -> Result<PathBuf, ClientError>;
}

/// HTTP implementation sharing one client, and so one cookie jar, across requests.
#[derive(Debug, Clone)]
pub struct ReqwestService {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestService {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .cookie_store(true)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl TranslationService for ReqwestService {
    async fn upload(&self, payload: &UploadPayload) -> Result<UploadOutcome, ClientError> {
        let url = self.settings.endpoint(&self.settings.upload_path)?;
        let bytes = tokio::fs::read(&payload.file_path).await.map_err(|err| {
            ClientError::new(
                FailureKind::Io,
                format!("{}: {err}", payload.file_path.display()),
            )
        })?;
        if bytes.len() as u64 > MAX_UPLOAD_BYTES {
            return Err(ClientError::new(
                FailureKind::TooLarge {
                    max_bytes: MAX_UPLOAD_BYTES,
                    actual: Some(bytes.len() as u64),
                },
                "file grew past the upload limit",
            ));
        }

        client_info!(
            "Uploading {} ({} bytes, {} -> {})",
            payload.file_name,
            bytes.len(),
            payload.source_language,
            payload.target_language
        );
        let part = Part::bytes(bytes)
            .file_name(payload.file_name.clone())
            .mime_str(PDF_MIME)
            .map_err(map_reqwest_error)?;
        let form = Form::new()
            .part("file", part)
            .text("source_language", payload.source_language.clone())
            .text("target_language", payload.target_language.clone());

        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if response.url() != &url {
            let final_url = response.url().to_string();
            client_info!("Upload redirected to {final_url}");
            return Ok(UploadOutcome::Redirected { final_url });
        }

        let status = response.status().as_u16();
        let content_type = content_type_of(&response);
        client_warn!("Upload answered without redirect (status {status})");
        let body = read_limited(response, self.settings.max_page_bytes).await?;
        let page = summarize_page(&body, content_type.as_deref())
            .map_err(|err| ClientError::new(FailureKind::InvalidResponse, err.to_string()))?;
        Ok(UploadOutcome::Rendered { status, page })
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ClientError> {
        let url = self.settings.endpoint(&self.settings.history_path)?;
        let response = self
            .client
            .get(url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)?;

        let body = read_limited(response, self.settings.max_page_bytes).await?;
        let parsed: HistoryResponse = serde_json::from_slice(&body)
            .map_err(|err| ClientError::new(FailureKind::InvalidResponse, err.to_string()))?;
        if let Some(error) = parsed.error {
            client_warn!("History endpoint reported: {error}");
        }
        client_debug!("History loaded with {} entries", parsed.history.len());
        Ok(parsed.history)
    }

    async fn clear_history(&self) -> Result<(), ClientError> {
        let url = self.settings.endpoint(&self.settings.clear_history_path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)?;
        client_info!("History cleared");
        Ok(())
    }

    async fn download(&self, source: &DownloadSource, dest_dir: &Path) -> Result<PathBuf, ClientError> {
        let url = match source {
            DownloadSource::Filename(name) => self.settings.download_url(name)?,
            DownloadSource::Url(raw) => Url::parse(raw).or_else(|_| self.settings.endpoint(raw))?,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)?;
        // The server redirects home with a flash message when the file is gone.
        if response.url() != &url {
            return Err(ClientError::new(
                FailureKind::NotFound,
                format!("{url} redirected to {}", response.url()),
            ));
        }
        if let Some(ct) = content_type_of(&response) {
            let essence = ct.split(';').next().unwrap_or(&ct).trim();
            if !essence.eq_ignore_ascii_case(PDF_MIME) {
                return Err(ClientError::new(
                    FailureKind::UnsupportedContentType { content_type: ct },
                    "expected a PDF",
                ));
            }
        }

        let filename = safe_local_filename(
            url.path_segments()
                .and_then(|mut segments| segments.next_back())
                .unwrap_or_default(),
        );
        let bytes = read_limited(response, self.settings.max_download_bytes).await?;
        let writer = AtomicFileWriter::new(dest_dir.to_path_buf());
        let written = writer
            .write(&filename, &bytes)
            .map_err(|err| ClientError::new(FailureKind::Io, err.to_string()))?;
        client_info!("Saved {} bytes to {}", bytes.len(), written.display());
        Ok(written)
    }
}

fn content_type_of(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn ensure_success(response: &reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

async fn read_limited(response: reqwest::Response, max_bytes: u64) -> Result<Vec<u8>, ClientError> {
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, content_len));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, next_len));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn too_large(max_bytes: u64, actual: u64) -> ClientError {
    ClientError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return ClientError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}

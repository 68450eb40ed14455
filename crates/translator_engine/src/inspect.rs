use std::path::Path;

use crate::{ClientError, FailureKind, FileDescriptor};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Reads name, size, and guessed MIME type of a local file.
///
/// The MIME type comes from the extension, the way a browser labels a picked file.
pub async fn inspect_file(path: &Path) -> Result<FileDescriptor, ClientError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|err| ClientError::new(FailureKind::Io, format!("{}: {err}", path.display())))?;
    if !metadata.is_file() {
        return Err(ClientError::new(
            FailureKind::Io,
            format!("{} is not a regular file", path.display()),
        ));
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string();

    Ok(FileDescriptor {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
        mime_type,
    })
}

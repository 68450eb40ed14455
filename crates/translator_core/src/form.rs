use std::path::PathBuf;

use crate::file::SelectedFile;
use crate::language::LanguagePair;

/// Payload of one upload: exactly the file and the two language codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_path: PathBuf,
    pub file_name: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please select a PDF file to upload.")]
    MissingFile,
    #[error("Please select a source language.")]
    MissingSource,
    #[error("Please select a target language.")]
    MissingTarget,
    #[error("Source and target languages cannot be the same.")]
    SameLanguage,
}

/// Checks rules in order and reports the first failure.
pub fn validate_form(
    file: Option<&SelectedFile>,
    languages: &LanguagePair,
) -> Result<UploadRequest, FormError> {
    let file = file.ok_or(FormError::MissingFile)?;
    let source = languages.source().ok_or(FormError::MissingSource)?;
    let target = languages.target().ok_or(FormError::MissingTarget)?;
    if source == target {
        return Err(FormError::SameLanguage);
    }
    Ok(UploadRequest {
        file_path: file.path.clone(),
        file_name: file.name.clone(),
        source_language: source.to_string(),
        target_language: target.to_string(),
    })
}

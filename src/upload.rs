//! CSV Upload
//!
//! Selection filtering and the user-facing outcome of an upload.

use thiserror::Error;

use crate::api::{ApiError, Backend};

/// MIME type that marks a file as CSV regardless of its name
pub const CSV_MIME: &str = "text/csv";

/// Anything a file picker can hand over
pub trait SelectedFile {
    fn name(&self) -> String;

    /// Declared MIME type, empty when unknown
    fn mime(&self) -> String;

    fn is_csv(&self) -> bool {
        self.mime() == CSV_MIME || self.name().ends_with(".csv")
    }
}

/// A file held in memory by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    #[cfg(feature = "native")]
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        Ok(Self { name, mime, bytes })
    }
}

impl SelectedFile for UploadedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime(&self) -> String {
        self.mime.clone()
    }
}

/// Selection rejected before anything was uploaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please upload valid CSV files.")]
    NoValidFiles,
}

/// Keep only CSV files; an empty result is an error
pub fn filter_csv<F: SelectedFile>(files: Vec<F>) -> Result<Vec<F>, SelectionError> {
    let total = files.len();
    let accepted: Vec<F> = files.into_iter().filter(|f| f.is_csv()).collect();

    if accepted.is_empty() {
        tracing::warn!(selected = total, "no CSV files in selection");
        return Err(SelectionError::NoValidFiles);
    }

    tracing::debug!(selected = total, accepted = accepted.len(), "filtered selection");
    Ok(accepted)
}

/// What the user is told after an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { name: String },
    /// Backend answered with an error status
    Rejected { message: String },
    /// Transport failure or unreadable response
    Failed,
}

impl UploadOutcome {
    pub fn from_result(name: &str, result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => UploadOutcome::Uploaded {
                name: name.to_string(),
            },
            Err(ApiError::Status { message, .. }) => UploadOutcome::Rejected { message },
            Err(ApiError::Network(_)) | Err(ApiError::Decode(_)) => UploadOutcome::Failed,
        }
    }

    /// Alert text shown to the user
    pub fn alert_message(&self) -> String {
        match self {
            UploadOutcome::Uploaded { name } => format!("{} uploaded successfully!", name),
            UploadOutcome::Rejected { message } => format!("Error: {}", message),
            UploadOutcome::Failed => "Failed to upload file.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

/// Upload one file and translate the result for the user
pub async fn upload_file<B: Backend>(backend: &B, file: &B::File) -> UploadOutcome {
    let name = file.name();
    let result = backend.upload(file).await;

    match &result {
        Ok(()) => tracing::info!(file = %name, "upload complete"),
        Err(e) => tracing::error!(file = %name, error = %e, "upload failed"),
    }

    UploadOutcome::from_result(&name, result)
}

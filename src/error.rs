use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobBankError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Unexpected status code: {status} for URL: {url}. Response preview: {preview}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        preview: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error(
        "Unexpected content type from URL {url}. Expected pattern {expected_pattern}, but got Content-Type: {got_content_type}. Content preview: {content_preview}..."
    )]
    UnexpectedContentType {
        url: String,
        expected_pattern: String,
        got_content_type: String,
        content_preview: String,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid company id {0:?}: expected ASCII letters and digits")]
    InvalidCompanyId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error at {}: {}", .path.display(), .source)]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[cfg(feature = "docx")]
    #[error("ZIP archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("XML writing error: {0}")]
    XmlError(String),
}

/// Coarse classification of [`JobBankError`] variants.
///
/// Fetch failures are either `Transport` (the request never produced a usable
/// response) or `Decode` (a response arrived but its body is not the expected
/// JSON shape). Renderer failures are all `Filesystem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Filesystem,
    Config,
}

impl JobBankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JobBankError::RequestError(_)
            | JobBankError::NotFound
            | JobBankError::UnexpectedStatus { .. } => ErrorKind::Transport,
            JobBankError::InvalidResponse(_)
            | JobBankError::UnexpectedContentType { .. }
            | JobBankError::JsonError(_) => ErrorKind::Decode,
            JobBankError::InvalidCompanyId(_) | JobBankError::ConfigError(_) => ErrorKind::Config,
            JobBankError::FileError { .. } | JobBankError::XmlError(_) => ErrorKind::Filesystem,
            #[cfg(feature = "csv")]
            JobBankError::CsvError(_) => ErrorKind::Filesystem,
            #[cfg(feature = "docx")]
            JobBankError::ZipError(_) => ErrorKind::Filesystem,
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JobBankError::FileError {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, JobBankError>;

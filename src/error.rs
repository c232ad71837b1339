// src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which extractor came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractKind {
    StoredProcedure,
    Table,
}

impl fmt::Display for ExtractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoredProcedure => write!(f, "stored procedure name"),
            Self::Table => write!(f, "table name"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SpscanError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Cannot enumerate {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("No {kind} found on line")]
    ExtractionNotFound { kind: ExtractKind },

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report {path}: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl SpscanError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ExtractionNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpscanError>;

impl From<walkdir::Error> for SpscanError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        SpscanError::Walk {
            path,
            message: e.to_string(),
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a document's text into a value tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "hcl")]
    #[error("invalid HCL: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("{format} support is not available in this build")]
    Unsupported { format: &'static str },
}

#[derive(Debug, Error)]
pub enum TfvarsError {
    #[error("Failed to list {path}: {source}")]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("not a dict root (found {found})")]
    NotAMappingRoot { path: PathBuf, found: &'static str },

    #[error("Failed to serialize merged variables: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(#[from] confique::Error),

    #[error("Invalid setting override: {reason}")]
    InvalidOverride { reason: String },
}

impl TfvarsError {
    /// Whether the error is contained to a single input file.
    ///
    /// Per-file errors skip that file; everything else ends the run.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            TfvarsError::Read { .. }
                | TfvarsError::Parse { .. }
                | TfvarsError::NotAMappingRoot { .. }
        )
    }
}

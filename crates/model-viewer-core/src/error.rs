use std::path::PathBuf;

use thiserror::Error;

/// Model load failure.
///
/// The variants only record where the detail text came from; callers treat
/// every variant the same way.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The artifact could not be read (missing, permissions, ...).
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact was read but is not a valid model.
    #[error("cannot deserialize {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: safetensors::SafeTensorError,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Format { path, .. } => path,
        }
    }
}

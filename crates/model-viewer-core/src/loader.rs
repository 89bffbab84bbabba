use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use safetensors::SafeTensors;
use sha2::{Digest, Sha256};

use crate::error::LoadError;

/// A model file that deserialized cleanly.
///
/// The raw bytes are retained for the lifetime of the process; the service
/// never looks inside them beyond what deserialization reported.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    path: PathBuf,
    bytes: Vec<u8>,
    tensor_names: Vec<String>,
    total_params: usize,
    checksum: [u8; 32],
}

impl ModelArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn tensor_count(&self) -> usize {
        self.tensor_names.len()
    }

    /// Tensor names, sorted.
    pub fn tensor_names(&self) -> &[String] {
        &self.tensor_names
    }

    pub fn total_params(&self) -> usize {
        self.total_params
    }

    /// Lowercase hex SHA-256 of the file contents.
    pub fn checksum_hex(&self) -> String {
        self.checksum.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Reads and deserializes a SafeTensors model file.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, LoadError> {
    let path = path.as_ref();
    let start = Instant::now();

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (tensor_names, total_params) = {
        let tensors = SafeTensors::deserialize(&bytes).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        let mut total = 0usize;
        for (name, view) in tensors.tensors() {
            total += view.shape().iter().product::<usize>();
            names.push(name);
        }
        names.sort();
        (names, total)
    };

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let checksum: [u8; 32] = hasher.finalize().into();

    tracing::debug!(
        path = %path.display(),
        tensors = tensor_names.len(),
        params = total_params,
        elapsed = ?start.elapsed(),
        "deserialized model artifact"
    );

    Ok(ModelArtifact {
        path: path.to_path_buf(),
        bytes,
        tensor_names,
        total_params,
        checksum,
    })
}

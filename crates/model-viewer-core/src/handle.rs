use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::loader::{load_artifact, ModelArtifact};

/// Process-wide reference to the loaded model, absent if loading failed.
///
/// Cloning is cheap; all clones share the same artifact.
#[derive(Debug, Clone, Default)]
pub struct ModelHandle {
    artifact: Option<Arc<ModelArtifact>>,
}

impl ModelHandle {
    /// Attempts to load the artifact at `path`, logging the outcome.
    ///
    /// Never fails: any load error is reported and yields an empty handle.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_artifact(path) {
            Ok(artifact) => {
                info!(
                    tensors = artifact.tensor_count(),
                    params = artifact.total_params(),
                    bytes = artifact.size_bytes(),
                    sha256 = %artifact.checksum_hex(),
                    "Model '{}' loaded successfully.",
                    path.display()
                );
                debug!(tensors = ?artifact.tensor_names(), "model tensors");
                Self::from_artifact(artifact)
            }
            Err(e) => {
                error!(path = %e.path().display(), "Failed to load model: {}", e);
                Self::empty()
            }
        }
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self { artifact: Some(Arc::new(artifact)) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn artifact(&self) -> Option<&ModelArtifact> {
        self.artifact.as_deref()
    }
}

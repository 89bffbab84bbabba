//! Model artifact loading for the model viewer.
//!
//! - [`ModelArtifact`]: a deserialized SafeTensors model file
//! - [`ModelHandle`]: the process-wide, optionally-absent reference to it
//! - [`LoadError`]: the one failure kind a load can produce
//!
//! # Example
//!
//! ```rust,no_run
//! use model_viewer_core::ModelHandle;
//!
//! let handle = ModelHandle::load("model_aug_best.safetensors");
//! if handle.is_loaded() {
//!     println!("ready");
//! }
//! ```

mod error;
mod handle;
mod loader;

pub use error::LoadError;
pub use handle::ModelHandle;
pub use loader::{load_artifact, ModelArtifact};

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::{Path, PathBuf};

    use safetensors::tensor::{Dtype, TensorView};

    /// Writes a two-tensor classifier head to `dir/name` and returns its path.
    pub fn write_model(dir: &Path, name: &str) -> PathBuf {
        let kernel: Vec<u8> = (0..6u32).flat_map(|i| (i as f32).to_le_bytes()).collect();
        let bias: Vec<u8> = (0..3u32).flat_map(|i| (i as f32).to_le_bytes()).collect();

        let tensors = vec![
            ("dense/kernel", TensorView::new(Dtype::F32, vec![2, 3], &kernel).unwrap()),
            ("dense/bias", TensorView::new(Dtype::F32, vec![3], &bias).unwrap()),
        ];
        let bytes = safetensors::serialize(tensors, &None).unwrap();

        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }
}

use model_viewer_config::{StatusMode, ViewerConfig};
use model_viewer_core::ModelHandle;
use tracing::info;

pub struct AppState {
    pub model: ModelHandle,
    pub model_name: String,
    pub status_mode: StatusMode,
}

impl AppState {
    /// Runs the model loader once and captures everything the handlers need.
    pub fn new(config: &ViewerConfig) -> Self {
        info!("Loading model from {}", config.model_path.display());
        let model = ModelHandle::load(&config.model_path);
        Self::with_model(config, model)
    }

    pub fn with_model(config: &ViewerConfig, model: ModelHandle) -> Self {
        Self {
            model,
            model_name: config.model_name(),
            status_mode: config.status_mode,
        }
    }

    pub fn confirmation(&self) -> String {
        format!("Model '{}' loaded successfully!", self.model_name)
    }
}

//! HTTP route handlers for the model viewer.

use std::sync::Arc;

use axum::extract::State;
use model_viewer_config::StatusMode;

use crate::error::AppError;
use crate::state::AppState;

/// GET / - Confirms the model was loaded.
///
/// In parity mode the answer does not depend on the handle.
pub async fn status(State(state): State<Arc<AppState>>) -> Result<String, AppError> {
    if state.status_mode == StatusMode::Strict && !state.model.is_loaded() {
        return Err(AppError::ModelUnavailable(format!(
            "model '{}' is not loaded",
            state.model_name
        )));
    }
    Ok(state.confirmation())
}

//! Error types for the ht-app service layer.

use ht_graph::{GraphError, ResolveError};
use ht_loader::LoadError;
use ht_physics::PhysicsError;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Inconsistent harness: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Invalid limits: {0}")]
    Limits(#[from] PhysicsError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ht-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The resolver error, if this is one.
    pub fn as_resolve(&self) -> Option<&ResolveError> {
        match self {
            AppError::Resolve(err) => Some(err),
            _ => None,
        }
    }
}

use std::path::PathBuf;

use selframe_core::geometry::GeometryError;
use selframe_layout::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read trace {path}: {source}")]
    TraceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario not found: {name}")]
    UnknownScenario { name: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("invariant violated at step {step} ({op}): {detail}")]
    InvariantViolation {
        step: usize,
        op: &'static str,
        detail: String,
    },
}

impl ReplayError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::UnknownScenario { .. } => 2,
            Self::InvariantViolation { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

//! Error types for the registry and the HTTP layer.

use crate::registry::GameId;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::{Display, From};
use serde::Serialize;
use tictactoe_engine::MoveError;

/// Errors raised by [`GameRegistry`](crate::GameRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum RegistryError {
    /// No game with this id.
    #[display("Game {} not found", _0)]
    #[from(skip)]
    NotFound(GameId),

    /// The engine rejected the move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The registry refuses new games beyond its limit.
    #[display("Registry is full ({} games)", _0)]
    #[from(skip)]
    CapacityExceeded(usize),
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Move(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors returned by route handlers.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ApiError {
    /// Registry or engine failure.
    #[display("{}", _0)]
    Registry(RegistryError),

    /// A marker string other than `X` or `O`.
    #[display("Invalid marker '{}' (expected X or O)", _0)]
    #[from(skip)]
    InvalidMarker(String),

    /// An index that cannot name a cell, e.g. a negative number.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    #[from(skip)]
    InvalidIndex(i64),
}

impl std::error::Error for ApiError {}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Registry(RegistryError::Move(err))
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, derive_new::new)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Stable machine-readable kind.
    pub kind: &'static str,
}

impl ApiError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Registry(RegistryError::Move(e)) => e.kind(),
            ApiError::Registry(RegistryError::NotFound(_)) => "not_found",
            ApiError::Registry(RegistryError::CapacityExceeded(_)) => "capacity_exceeded",
            ApiError::InvalidMarker(_) => "invalid_marker",
            ApiError::InvalidIndex(_) => "invalid_index",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::Move(MoveError::InvariantViolation(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Registry(RegistryError::Move(_)) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::CapacityExceeded(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::InvalidMarker(_) | ApiError::InvalidIndex(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.to_string(), self.kind());
        (self.status(), Json(body)).into_response()
    }
}

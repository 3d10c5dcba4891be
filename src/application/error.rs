// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure of a use case. Every variant carries the message shown to the
/// client, except `Infrastructure`, whose detail is only logged.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed id, body or query parameter.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Missing row, missing filter reference, or a page past the end.
    #[error("missing resource: {0}")]
    NotFound(String),

    #[error("duplicate key: {0}")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

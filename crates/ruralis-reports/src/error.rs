//! Error types for the collaborator surface.
//!
//! Persistence failures are caught at the call site and surfaced as a
//! generic notice; in-memory calculator state is never touched by a failed
//! save, so the user can simply retry. Nothing here retries automatically.

use ruralis_engine::EngineError;
use thiserror::Error;
use uuid::Uuid;

/// Report storage failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("report {id} not found")]
    NotFound { id: Uuid },

    /// The caller does not own the report it tried to touch.
    #[error("report {id} does not belong to '{owner_id}'")]
    Forbidden { id: Uuid, owner_id: String },

    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// Backend (network, disk) failure from the storage collaborator.
    #[error("storage backend failed during {operation}: {message}")]
    Backend { operation: String, message: String },
}

impl ReportError {
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Forbidden { .. } => "forbidden",
            Self::Serialization { .. } => "serialization",
            Self::Backend { .. } => "backend",
        }
    }

    pub fn backend(operation: &str, message: impl Into<String>) -> Self {
        Self::Backend { operation: operation.to_string(), message: message.into() }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization { message: message.into() }
    }
}

/// Entitlement collaborator failures. Callers treat any of these as
/// unauthenticated: the gate fails closed, never open.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("session unavailable: {message}")]
pub struct SessionError {
    pub message: String,
}

impl SessionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Failures of the calculator page composition root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("sign in to save reports")]
    NotAuthenticated,

    #[error("free plan is limited to {limit} saved reports")]
    ReportLimitReached { limit: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] ReportError),
}

impl PageError {
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "not_authenticated",
            Self::ReportLimitReached { .. } => "report_limit",
            Self::Engine(e) => e.category(),
            Self::Store(e) => e.category(),
        }
    }
}

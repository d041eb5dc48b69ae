//! Error types for the calculator engine.
//!
//! The computation path itself never fails: parse errors fall back, domain
//! errors are clamped inside the formulas. What can fail is addressing the
//! engine — asking for a calculator it does not know, or registering two
//! under the same slug.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No calculator registered under this slug.
    #[error("unknown calculator '{slug}'")]
    UnknownCalculator { slug: String },

    /// Two calculators registered under the same slug.
    #[error("calculator slug '{slug}' already registered")]
    DuplicateCalculator { slug: String },
}

impl EngineError {
    /// Error category for logging and metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownCalculator { .. } => "unknown_calculator",
            Self::DuplicateCalculator { .. } => "duplicate_calculator",
        }
    }

    pub fn unknown_calculator(slug: impl Into<String>) -> Self {
        Self::UnknownCalculator { slug: slug.into() }
    }

    pub fn duplicate_calculator(slug: impl Into<String>) -> Self {
        Self::DuplicateCalculator { slug: slug.into() }
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

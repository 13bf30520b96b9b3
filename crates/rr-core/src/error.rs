//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown position code {0:?}: expected one of S, B, C, T")]
    UnknownPositionCode(String),

    #[error("scene configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rr-core`.
pub type CoreResult<T> = Result<T, CoreError>;

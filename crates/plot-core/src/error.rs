// File: crates/plot-core/src/error.rs
// Summary: Error type shared by the chart helpers, path parser and canvas backends.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphicsError {
    /// A precondition on the inputs was violated (bad domain, empty canvas, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation exists only as a reserved entry point.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    #[error("invalid path data at offset {offset}: {reason}")]
    InvalidPath { offset: usize, reason: String },
    /// Raised by a `Canvas` implementation.
    #[error("canvas error: {0}")]
    Canvas(String),
}

impl GraphicsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T, E = GraphicsError> = std::result::Result<T, E>;

//! Error type shared by the simulation core

use std::fmt;

/// Convenience alias for results produced by this crate
pub type Result<T> = std::result::Result<T, NbodyError>;

/// Failures raised by the simulation core
///
/// Construction failures (`InvalidArgument`) always happen before a body is
/// registered, so the universe is left untouched. `Domain` errors come from
/// vector operations that are undefined for their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NbodyError {
    /// A mass outside the bounds of the requested kind, or an unknown comet composition
    InvalidArgument(String),
    /// Normalizing a zero vector, or a cross product outside three dimensions
    Domain(String),
}

impl NbodyError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    /// The human-readable message without the variant name
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) | Self::Domain(message) => message,
        }
    }
}

impl fmt::Display for NbodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for NbodyError {}

use thiserror::Error;

/// Canonical reduplan error taxonomy used across crates.
///
/// Classification guidance:
/// - [`RdpError::InvalidConfig`]: step-definition/config/path contract violations
/// - [`RdpError::Planning`]: estimation inputs that are structurally unusable
/// - [`RdpError::Unsupported`]: syntactically valid but intentionally unhandled source shapes
/// - [`RdpError::Io`]: raw filesystem IO failures from std APIs
#[derive(Debug, Error)]
pub enum RdpError {
    /// Invalid or inconsistent configuration/step-definition state.
    ///
    /// Examples:
    /// - malformed step or history JSON
    /// - invalid path pattern syntax
    /// - invalid CLI option values
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Planning-time failures over otherwise valid inputs.
    ///
    /// Examples:
    /// - history store backend cannot serve the step identity
    #[error("planning error: {0}")]
    Planning(String),

    /// Transparent std IO failures.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Valid request for a source shape this subsystem does not size.
    ///
    /// Examples:
    /// - a leaf source whose format is not glob-addressable
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Standard reduplan result alias.
pub type Result<T> = std::result::Result<T, RdpError>;

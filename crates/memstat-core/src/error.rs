//! Shared error type across memstat crates.

use thiserror::Error;

use crate::metric::MetricKind;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Metric type segment is neither `gauge` nor `counter`.
    InvalidKind,
    /// Value segment does not parse for the given kind.
    InvalidValue,
    /// Malformed input / config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidKind => "INVALID_KIND",
            ClientCode::InvalidValue => "INVALID_VALUE",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MemstatError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum MemstatError {
    #[error("invalid metric type: {0}")]
    InvalidKind(String),
    #[error("invalid {kind} value: {value}")]
    InvalidValue { kind: MetricKind, value: String },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MemstatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MemstatError::InvalidKind(_) => ClientCode::InvalidKind,
            MemstatError::InvalidValue { .. } => ClientCode::InvalidValue,
            MemstatError::BadRequest(_) => ClientCode::BadRequest,
            MemstatError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MemstatError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Short message for HTTP error bodies.
    pub fn public_message(&self) -> &'static str {
        match self {
            MemstatError::InvalidKind(_) => "Invalid metric type",
            MemstatError::InvalidValue { .. } => "Invalid metric value",
            MemstatError::BadRequest(_) | MemstatError::UnsupportedVersion => "Bad request",
            MemstatError::Internal(_) => "Internal server error",
        }
    }

    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, MemstatError::Internal(_))
    }
}

use thiserror::Error;

/// Failure reported by an input sink backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct PlatformError {
    pub kind: PlatformErrorKind,
    pub message: String,
}

impl PlatformError {
    pub fn new(kind: PlatformErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlatformErrorKind {
    /// The backend could not be brought up (display missing, permission denied).
    #[error("initialization failed")]
    InitializationFailed,
    /// The backend cannot express the requested event (e.g. gestures on X11).
    #[error("capability unavailable")]
    CapabilityUnavailable,
    /// Posting or querying failed after the backend was initialised.
    #[error("operation failed")]
    OperationFailed,
}

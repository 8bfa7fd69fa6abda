use cursorkit_core::platform::{PlatformError, UnknownVariant};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointerError {
    #[error("no InputSink registered")]
    MissingSink,
    /// Rejected before any event was posted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("input sink failed: {0}")]
    Platform(#[from] PlatformError),
}

impl PointerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PointerError::InvalidArgument(message.into())
    }
}

impl From<UnknownVariant> for PointerError {
    fn from(err: UnknownVariant) -> Self {
        PointerError::InvalidArgument(err.to_string())
    }
}

/// Converts caller supplied seconds into a [`Duration`], rejecting negative
/// and non-finite values.
pub fn duration_from_secs(secs: f64) -> Result<Duration, PointerError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| PointerError::invalid(format!("duration must be non-negative seconds, got {secs}")))
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64, PointerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PointerError::invalid(format!("{name} must be a finite number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursorkit_core::platform::{PlatformErrorKind, SwipeDirection};
    use rstest::rstest;

    #[rstest]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_durations(#[case] secs: f64) {
        assert!(matches!(duration_from_secs(secs), Err(PointerError::InvalidArgument(_))));
    }

    #[rstest]
    fn accepts_zero_duration() {
        assert_eq!(duration_from_secs(0.0).unwrap(), Duration::ZERO);
    }

    #[rstest]
    fn unknown_variants_become_invalid_arguments() {
        let err: PointerError = "diagonal".parse::<SwipeDirection>().unwrap_err().into();
        assert_eq!(err.to_string(), "invalid argument: invalid swipe direction `diagonal'");
    }

    #[rstest]
    fn platform_errors_are_wrapped() {
        let err: PointerError =
            PlatformError::new(PlatformErrorKind::OperationFailed, "tap disabled").into();
        assert_eq!(err.to_string(), "input sink failed: operation failed: tap disabled");
    }
}

//! Standalone error types for the optional container.
//!
//! Self-contained on purpose: one module owns every error this crate can
//! produce, with no central error-crate dependency.

use thiserror::Error;

/// Opaque carried-failure type.
///
/// A failure attached to an absent [`Optional`](crate::Optional) is stored
/// and passed through opaquely: checked for presence, displayed, never
/// interpreted.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for operations returning [`OptionalError`].
pub type OptionalResult<T> = Result<T, OptionalError>;

/// Typed outcome of [`Optional::into_result`](crate::Optional::into_result).
///
/// Keeps "nothing to report" and "something failed" distinguishable even
/// though both manifest as an absent container.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum OptionalError {
    /// The container held no value and carried no failure.
    #[error("optional value is absent")]
    Absent,

    /// The container was absent because a fallible source failed.
    #[error("optional carries a failure: {0}")]
    Failed(BoxedError),
}

impl OptionalError {
    /// Create a carried-failure error from any error type.
    pub fn failed(err: impl Into<BoxedError>) -> Self {
        Self::Failed(err.into())
    }

    /// True for the ordinary-absence case.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_absence_from_failure() {
        assert_eq!(OptionalError::Absent.to_string(), "optional value is absent");
        assert_eq!(
            OptionalError::failed("db timeout").to_string(),
            "optional carries a failure: db timeout"
        );
    }

    #[test]
    fn is_absent_only_for_plain_absence() {
        assert!(OptionalError::Absent.is_absent());
        assert!(!OptionalError::failed("boom").is_absent());
    }
}

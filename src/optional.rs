//! The [`Optional`] container: constructors and accessors.

use tracing::trace;

use crate::error::{BoxedError, OptionalError, OptionalResult};

/// A value of `T` that may be absent, optionally carrying an opaque failure
/// explaining the absence.
///
/// Presence and carried failure are mutually exclusive: a container either
/// holds a value, or is absent (with or without an attached reason). Absence
/// without a reason is an ordinary state, not an error. Instances are
/// immutable; every transformation produces a new container.
#[derive(Debug)]
pub struct Optional<T> {
    value: Option<T>,
    error: Option<BoxedError>,
}

impl<T> Optional<T> {
    // ==================== Constructors ====================

    /// Create a present container wrapping `value`.
    pub const fn of(value: T) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// Create an empty container with no failure attached.
    pub const fn absent() -> Self {
        Self {
            value: None,
            error: None,
        }
    }

    /// Lift a possibly-absent input without an error channel.
    pub const fn from_option(value: Option<T>) -> Self {
        Self { value, error: None }
    }

    /// Create an absent container carrying `error` as the failure reason.
    pub fn failed(error: impl Into<BoxedError>) -> Self {
        let error = error.into();
        trace!(error = %error, "optional captured a failure");
        Self {
            value: None,
            error: Some(error),
        }
    }

    /// Build from a raw value/failure pair.
    ///
    /// Contract: exactly one of `value` / `error` is `Some`. Violating it is
    /// a bug at the call site, not a runtime condition, so this constructor
    /// panics instead of returning a container in an impossible state.
    #[track_caller]
    pub fn from_parts(value: Option<T>, error: Option<BoxedError>) -> Self {
        match (value, error) {
            (Some(value), None) => Self::of(value),
            (None, Some(error)) => Self::failed(error),
            (Some(_), Some(_)) => {
                panic!("Optional::from_parts: exactly one of value and error must be set, got both")
            }
            (None, None) => {
                panic!(
                    "Optional::from_parts: exactly one of value and error must be set, got neither"
                )
            }
        }
    }

    /// Invoke `f` once, synchronously, and build from the pair it returns.
    ///
    /// Panics under the same contract as [`Optional::from_parts`].
    #[track_caller]
    pub fn from_fn(f: impl FnOnce() -> (Option<T>, Option<BoxedError>)) -> Self {
        let (value, error) = f();
        Self::from_parts(value, error)
    }

    /// Build from a `Result`, attaching the error as the carried failure.
    ///
    /// Unlike [`Optional::from_parts`] there is no contract to violate: the
    /// `Result` shape cannot express "both" or "neither".
    pub fn from_result<E: Into<BoxedError>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::of(value),
            Err(error) => Self::failed(error),
        }
    }

    // ==================== Accessors ====================

    /// Borrow the contained value, if any. Never panics.
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Take the contained value, panicking if the container is absent.
    ///
    /// An assertion for call sites that have already established presence.
    /// Absence here is a contract violation, including absence caused by a
    /// carried failure.
    #[track_caller]
    pub fn must_get(self) -> T {
        match (self.value, self.error) {
            (Some(value), _) => value,
            (None, Some(error)) => {
                panic!("called `Optional::must_get()` on an absent value carrying a failure: {error}")
            }
            (None, None) => panic!("called `Optional::must_get()` on an absent value"),
        }
    }

    /// True iff no value is present, whether or not a failure is attached.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// True iff a value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Return the contained value, or `default` when absent. Never panics.
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// The carried failure, or `None` — ordinary absence has none.
    pub fn error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Convert into a typed result, keeping ordinary absence and carried
    /// failure distinguishable.
    pub fn into_result(self) -> OptionalResult<T> {
        match (self.value, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(error)) => Err(OptionalError::Failed(error)),
            (None, None) => Err(OptionalError::Absent),
        }
    }

    /// Decompose into the raw value/failure pair.
    pub(crate) fn into_parts(self) -> (Option<T>, Option<BoxedError>) {
        (self.value, self.error)
    }
}

impl<T> Default for Optional<T> {
    /// The absent container.
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T, E: Into<BoxedError>> From<Result<T, E>> for Optional<T> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

//! Transformation combinators for [`Optional`].
//!
//! Every combinator consumes its operands and produces a new container. User
//! closures are `FnOnce`, invoked exactly once, and only when the operands
//! they need are present — an absent input short-circuits without running
//! the transform.
//!
//! A carried failure on an absent input is forwarded into the output rather
//! than dropped, so a pipeline keeps the reason it went absent. When both
//! operands of a binary combinator carry a failure, the left one wins.

use crate::error::BoxedError;
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Transform the contained value, preserving absence.
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Optional<R> {
        match self.into_parts() {
            (Some(value), _) => Optional::of(f(value)),
            (None, Some(error)) => Optional::failed(error),
            (None, None) => Optional::absent(),
        }
    }

    /// As [`Optional::map`], for transforms that may fail.
    ///
    /// An `Err` from `f` becomes the carried failure of the result.
    pub fn try_map<R>(self, f: impl FnOnce(T) -> Result<R, BoxedError>) -> Optional<R> {
        match self.into_parts() {
            (Some(value), _) => Optional::from_result(f(value)),
            (None, Some(error)) => Optional::failed(error),
            (None, None) => Optional::absent(),
        }
    }

    /// Combine two containers with `op`.
    ///
    /// `op` runs exactly once, only when both operands are present. With any
    /// absent operand the result is absent.
    pub fn zip_with<U, R>(self, other: Optional<U>, op: impl FnOnce(T, U) -> R) -> Optional<R> {
        let (a, a_err) = self.into_parts();
        let (b, b_err) = other.into_parts();
        match (a, b) {
            (Some(a), Some(b)) => Optional::of(op(a, b)),
            _ => match a_err.or(b_err) {
                Some(error) => Optional::failed(error),
                None => Optional::absent(),
            },
        }
    }

    /// As [`Optional::zip_with`], for operations that may fail.
    pub fn try_zip_with<U, R>(
        self,
        other: Optional<U>,
        op: impl FnOnce(T, U) -> Result<R, BoxedError>,
    ) -> Optional<R> {
        let (a, a_err) = self.into_parts();
        let (b, b_err) = other.into_parts();
        match (a, b) {
            (Some(a), Some(b)) => Optional::from_result(op(a, b)),
            _ => match a_err.or(b_err) {
                Some(error) => Optional::failed(error),
                None => Optional::absent(),
            },
        }
    }
}

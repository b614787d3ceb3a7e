//! Error-carrying optional values.
//!
//! [`Optional<T>`] represents either a present value of `T` or its absence,
//! optionally carrying an opaque failure explaining why the value is
//! missing. It keeps "nothing to report" and "something failed"
//! distinguishable while composing possibly-absent values through
//! transformation pipelines without a null check at every step.
//!
//! Two failure classes stay separate throughout:
//!
//! - **Contract violations** — building from an invalid value/error pair, or
//!   calling [`Optional::must_get`] on an absent container — panic loudly.
//!   They are bugs at the call site, never data.
//! - **Carried failures** — attached by a fallible constructor or transform —
//!   are data: stored opaquely, surfaced via [`Optional::error`] or
//!   [`Optional::into_result`], and forwarded through combinators.
//!
//! ```
//! use erropt::Optional;
//!
//! let sum = Optional::of(3).zip_with(Optional::of(4), |a, b| a + b);
//! assert_eq!(sum.get(), Some(&7));
//!
//! let port = Optional::from_option(Some("8080"))
//!     .try_map(|s| s.parse::<u16>().map_err(Into::into));
//! assert_eq!(port.unwrap_or(80), 8080);
//! ```
#![warn(clippy::all)]

pub mod error;
pub mod optional;

mod ops;

pub use error::{BoxedError, OptionalError, OptionalResult};
pub use optional::Optional;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{BoxedError, Optional, OptionalError, OptionalResult};
}

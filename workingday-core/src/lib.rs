//! Core value types for working-day scheduling.
//!
//! The central type is [`Time`], a normalized time of day
//! whose hour part is allowed to run past 23.

use thiserror::Error;

mod clock;
mod macros;
mod parse;
#[cfg(feature = "rand")]
mod rand_time;
#[cfg(feature = "serde")]
mod serde_time;
mod time;

pub use clock::SystemClock;
pub use clock::TimeSource;
#[cfg(feature = "rand")]
pub use rand_time::UniformTime;
pub use time::Time;

/// Error type for [`Time`] construction and conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The input cannot be turned into a valid [`Time`].
    #[error("invalid input: {value}")]
    InvalidInput {
        /// Description of the rejected input
        value: String,
    },
}

impl TimeError {
    pub(crate) fn invalid<S: Into<String>>(value: S) -> Self {
        Self::InvalidInput {
            value: value.into(),
        }
    }
}

#![warn(missing_docs)]

//! Normalized time-of-day values for working-day scheduling.
//!
//! # Overview
//!
//! [`Time`] holds an hour and a minute part. Minute overflow is
//! carried into the hours and the hour part is never wrapped at
//! midnight, so a shift ending at `25:30` stays `25:30`.
//!
//! ```
//! use workingday::Time;
//!
//! let start = Time::from_strict_str("22:00").unwrap();
//! let end = Time::from_integer(start.to_integer() + 210).unwrap();
//! assert_eq!(end.to_string(), "25:30");
//! ```
//!
//! # Where to find examples
//!
//! In the `demos/` directory of the project repository.

pub use workingday_core::*;

/// Get the workingday version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

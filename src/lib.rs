//! stackstats crate
//!
//! This crate is an implementation detail of the `stackstats` tool. This crate's API is fluid and may change without
//! warning and in a semver-incompatible way.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod reports;

#[doc(hidden)]
pub mod stats;

#[doc(hidden)]
pub mod tables;

pub use crate::commands::{Host, run};

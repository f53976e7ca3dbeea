//! Core components of the `tiingo-news-rs` decoder.
//!
//! This module contains the foundational building blocks of the library:
//! - The primary [`NewsError`] type.
//! - Shared domain models like [`Symbol`] and [`SecurityType`].
//! - Timestamp parsing and time-zone conversion helpers.

/// Timestamp parsing and exchange time-zone conversion.
pub mod conversions;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Shared domain models used by the decoder and the resolvers.
pub mod models;

pub use error::NewsError;
pub use models::{DEFAULT_MARKET, SecurityType, Symbol};

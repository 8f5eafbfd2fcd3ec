//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait the services consume
//! - The daily-history and instrument-info models that cross that seam
//! - The Yahoo Finance implementation
//!
//! Providers deal in raw provider symbols; which symbols make up a country
//! is the config module's business, not theirs.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::{DailyClose, InstrumentInfo, QuoteProvider};

//! Market data models
//!
//! This module contains the wire-facing data types for market data operations:
//! - `ticker` - Single-symbol snapshot (TickerRecord)
//! - `country` - Per-country aggregate and its record-or-error union
//!   (CountryMarketRecord, CountryMarketData)
//!
//! Field names are the JSON keys the dashboard consumes, so these structs
//! serialize without rename attributes.

mod country;
mod ticker;

pub use country::{CountryMarketData, CountryMarketRecord};
pub use ticker::TickerRecord;

//! Report sources.
//!
//! Every source answers the same question: "give me the workshift report for
//! this date range" as a raw JSON document. The loader validates the document
//! itself, so a source only fails for transport, I/O or decoding reasons.
//!
//! ## Sources
//!
//! - **AttendanceApi**: the attendance backend over HTTP
//! - **LocalShifts**: shift records exported to a JSON file, totalled locally
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrep::api::{AttendanceApi, ReportApi};
//! use shiftrep::libs::report::DateRange;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = AttendanceApi::new("http://localhost:8000");
//! let body = api.fetch_report(&DateRange::new("2024-01-01", "2024-01-31")).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::report::DateRange;
use serde_json::Value;
use thiserror::Error;

pub mod attendance;
pub mod local;

pub use attendance::{AttendanceApi, AttendanceConfig};
pub use local::LocalShifts;

/// Reasons a report could not be obtained from a source.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// A source of workshift reports.
#[allow(async_fn_in_trait)]
pub trait ReportApi {
    /// Fetches the report document for `range`.
    ///
    /// One call performs at most one request against the underlying source.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request cannot be sent or the connection drops
    /// - The body is not JSON
    /// - A local source cannot be read or the range bounds do not parse
    async fn fetch_report(&self, range: &DateRange) -> Result<Value, ReportError>;
}

//! # shiftrep - Workshift report loader
//!
//! Fetches the workshift (attendance) report for a date range and renders its
//! rows, status badges and totals.
//!
//! ## Features
//!
//! - **Report Loading**: validate, reset, fetch, render, with injectable ports
//! - **Report Sources**: the attendance backend over HTTP, or a local shift file
//! - **Workshift Metrics**: duration, delay and extra time against a standard shift
//! - **Output**: terminal tables, HTML table body markup, CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrep::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<std::process::ExitCode> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

//! Core library modules for shiftrep.
//!
//! - **loader**: the load-report operation and its ports
//! - **report**: report schema and display projection
//! - **workshift**: shift metrics and totalisation
//! - **formatter**: "HH:MM" formatting
//! - **view**: terminal, HTML and CSV render targets
//! - **config** / **data_storage**: persisted settings
//! - **messages**: user-facing text and output macros

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod loader;
pub mod messages;
pub mod report;
pub mod view;
pub mod workshift;

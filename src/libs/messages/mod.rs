//! User-facing text and the macros that print it.
//!
//! All strings shown to the user are variants of [`Message`]; their wording
//! lives in `display.rs`. The `msg_*` macros route output to `tracing` in
//! debug mode and to stdout/stderr otherwise.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

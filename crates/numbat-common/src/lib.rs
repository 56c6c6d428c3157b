//! Shared utilities for the Numbat engine.
//!
//! This crate holds the two pieces both parsers lean on:
//! - [`cursor::TextCursor`], the single-character scanning primitive driving
//!   the markup and stylesheet parsers.
//! - [`warning`], a deduplicated stderr diagnostic channel for non-fatal
//!   leniencies (dropped attribute fragments, unknown keywords).

/// Character-level scanning over an immutable input string.
pub mod cursor;
/// Deduplicated engine warnings with colored terminal output.
pub mod warning;

pub use cursor::TextCursor;
pub use warning::{clear_warnings, warn_once};

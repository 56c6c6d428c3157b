//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used for the non-fatal leniencies in the parsers: dropped malformed
//! attribute fragments and unrecognized display keywords. These never reach
//! the caller as errors.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a tolerated irregularity (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML", "dropped malformed attribute fragment before '>'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!(
            "{} {message}",
            format!("[Numbat {component}] ⚠").yellow()
        );
    }
}

/// Clear all recorded warnings (call when parsing a new document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

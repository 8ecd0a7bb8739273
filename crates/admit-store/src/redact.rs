//! Redaction of document values quoted in error messages.
//!
//! Shape-violation reasons quote the offending value, and those values are
//! patient data. They are withheld by default; callers that genuinely need
//! the raw values (the CLI behind an explicit flag) opt in at startup.

use std::sync::atomic::{AtomicBool, Ordering};

static VALUE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Placeholder for a document value withheld from error messages.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Allow raw document values in error messages.
pub fn set_value_logging(enabled: bool) {
    VALUE_LOGGING.store(enabled, Ordering::Release);
}

/// True when raw document values may appear in error messages.
pub fn value_logging_enabled() -> bool {
    VALUE_LOGGING.load(Ordering::Acquire)
}

/// The value itself when value logging is enabled, otherwise the placeholder.
pub fn redact_value(value: &str) -> &str {
    if value_logging_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

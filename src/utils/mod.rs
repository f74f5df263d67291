//! Utilities module for logging, error handling and text helpers
//!
//! This module provides:
//! - Structured logging with tracing
//! - Error handling types
//! - Helpers for turning dataset label fragments into display text

pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use error::{PlantDoctorError, Result};
pub use logging::init_logging;

/// Turn a raw label fragment into display text
///
/// Underscores become spaces, runs of whitespace collapse, and the ends are
/// trimmed: `"Leaf_curl_virus"` → `"Leaf curl virus"`.
pub fn humanize(fragment: &str) -> String {
    fragment
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a probability as a percentage with two decimals
pub fn format_percent(value: f32) -> String {
    format!("{:.2}%", value * 100.0)
}

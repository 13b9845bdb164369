//! Time formatting utilities for user-friendly display.
//!
//! The API reports coding time as raw seconds; everything the user sees
//! goes through [`format_seconds`], which renders a duration as spoken
//! units ("2 hours, 3 minutes, 4 seconds") rather than a clock face.
//!
//! ## Formatting rules
//!
//! - The hours segment appears only when at least one full hour was coded
//! - The minutes segment appears when there are minutes, or when hours are
//!   shown (so "1 hours, 0 minutes, 5 seconds" never collapses to
//!   "1 hours, 5 seconds")
//! - The seconds segment is always present, which also covers zero:
//!   "0 seconds"
//!
//! ## Examples
//!
//! ```rust
//! use takt::libs::formatter::format_seconds;
//!
//! assert_eq!(format_seconds(0), "0 seconds");
//! assert_eq!(format_seconds(65), "1 minutes, 5 seconds");
//! assert_eq!(format_seconds(3661), "1 hours, 1 minutes, 1 seconds");
//! ```

/// Formats a number of seconds as "H hours, M minutes, S seconds",
/// omitting zero leading units.
pub fn format_seconds(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut formatted = String::new();
    if hours > 0 {
        formatted.push_str(&format!("{} hours, ", hours));
    }
    if minutes > 0 || hours > 0 {
        formatted.push_str(&format!("{} minutes, ", minutes));
    }
    formatted.push_str(&format!("{} seconds", seconds));

    formatted
}

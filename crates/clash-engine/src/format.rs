//! Weekday and time-range rendering.
//!
//! Used both inside conflict messages and by calling UI code to render
//! schedule summaries (duplicate previews, form hints) with the exact same
//! wording the engine produces.

/// 3-letter weekday labels indexed by the 0 = Sunday … 6 = Saturday domain.
const DAY_ABBREV: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full weekday names, same indexing.
const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Render a weekday set as sorted, deduplicated 3-letter abbreviations,
/// joined with `", "` (e.g. `[3, 1]` → `"Mon, Wed"`).
///
/// Out-of-range values render as `"?"` rather than panicking.
pub fn format_days(days: &[u8]) -> String {
    let mut days = days.to_vec();
    days.sort_unstable();
    days.dedup();
    days.iter()
        .map(|&d| DAY_ABBREV.get(d as usize).copied().unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a time range as `"HH:MM - HH:MM"` from already-normalized values.
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// Full weekday name for the 0-6 domain; `"Unknown"` for anything else.
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(day as usize).copied().unwrap_or("Unknown")
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Time normalization, interval intersection, and day-set intersection.
//!
//! These are the three predicates the engine chains to decide whether two
//! schedules collide in time at all, before any resource comparison. All of
//! them are total: input that cannot be interpreted yields "no overlap"
//! rather than an error.

/// Return the `HH:MM` prefix of a time-of-day string.
///
/// `HH:MM:SS` inputs lose their seconds; `HH:MM` inputs pass through.
/// Anything without a second colon (including the empty string) is returned
/// unchanged. Both sides of every comparison go through this, never one.
pub fn normalize_time(time: &str) -> &str {
    match time.match_indices(':').nth(1) {
        Some((idx, _)) => &time[..idx],
        None => time,
    }
}

/// Convert a minute-normalized `HH:MM` string to minutes since midnight.
///
/// Returns `None` when the string does not split into two integers around a
/// colon; callers treat that as "cannot overlap". No range check is applied
/// here — upstream validation owns that.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Half-open intersection of two same-day wall-clock intervals.
///
/// Touching endpoints — one slot ending exactly when the next starts — do
/// not count as an overlap, the standard calendar-booking convention. No
/// wraparound across midnight. Times are normalized to minute granularity
/// before comparison; uninterpretable times report no overlap.
pub fn intervals_overlap(start1: &str, end1: &str, start2: &str, end2: &str) -> bool {
    let (Some(s1), Some(e1), Some(s2), Some(e2)) = (
        time_to_minutes(normalize_time(start1)),
        time_to_minutes(normalize_time(end1)),
        time_to_minutes(normalize_time(start2)),
        time_to_minutes(normalize_time(end2)),
    ) else {
        return false;
    };
    s1 < e2 && e1 > s2
}

/// Whether two weekday sets share at least one day.
///
/// Values are 0 = Sunday … 6 = Saturday; no range validation happens here.
/// Either side being empty means no shared day.
pub fn days_intersect(a: &[u8], b: &[u8]) -> bool {
    a.iter().any(|day| b.contains(day))
}

// ── Tests ───────────────────────────────────────────────────────────────────

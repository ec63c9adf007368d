//! Schedule records and canonical resource identifiers.
//!
//! The surrounding application hands identifiers around as JSON numbers,
//! strings, or null depending on which form or storage path produced them.
//! All of them funnel through [`ResourceId`] once, at the boundary, so that
//! equality inside the engine is plain string equality — parse once,
//! normalize once, compare cheaply everywhere.

use std::fmt;

use chrono::NaiveTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::overlap::{normalize_time, time_to_minutes};

// ── ResourceId ──────────────────────────────────────────────────────────────

/// Canonical resource identifier (room, teacher, section, or schedule id).
///
/// `7` and `"7"` are the same room; a JSON `null` or a missing field is the
/// absent identifier, which never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// The canonical string form. Empty for an absent identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier is absent (normalized from null/missing).
    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        ResourceId(s)
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId(n.to_string())
    }
}

impl From<u64> for ResourceId {
    fn from(n: u64) -> Self {
        ResourceId(n.to_string())
    }
}

impl From<i32> for ResourceId {
    fn from(n: i32) -> Self {
        ResourceId(n.to_string())
    }
}

impl<T: Into<ResourceId>> From<Option<T>> for ResourceId {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = ResourceId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, an integer, or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ResourceId, E> {
                Ok(ResourceId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ResourceId, E> {
                Ok(ResourceId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ResourceId, E> {
                Ok(ResourceId(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ResourceId, E> {
                // Integral floats canonicalize to the integer form so that
                // 7, 7.0, and "7" all compare equal.
                if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Ok(ResourceId((v as i64).to_string()))
                } else {
                    Ok(ResourceId(v.to_string()))
                }
            }

            fn visit_unit<E: de::Error>(self) -> Result<ResourceId, E> {
                Ok(ResourceId::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<ResourceId, E> {
                Ok(ResourceId::default())
            }

            fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<ResourceId, D2::Error> {
                d.deserialize_any(IdVisitor)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

// ── Schedule ────────────────────────────────────────────────────────────────

/// One weekly recurring class slot, existing or proposed.
///
/// Times are wall-clock strings in `HH:MM` or `HH:MM:SS` form; the engine
/// compares them at minute granularity. `days_of_week` uses 0 = Sunday …
/// 6 = Saturday; order and duplicates are insignificant. Two schedules can
/// only conflict when their `school_year` labels match after trimming.
///
/// Plain construction (struct literal, serde) is always allowed — the engine
/// degrades to "no conflict" on anything it cannot interpret. Callers that
/// want malformed input rejected up front use [`Schedule::validated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Persisted identifier; `None` for a candidate not yet saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub room_id: ResourceId,
    #[serde(default)]
    pub teacher_id: ResourceId,
    #[serde(default)]
    pub section_id: ResourceId,
    /// Weekdays the slot recurs on, 0 = Sunday … 6 = Saturday.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
    pub school_year: String,
}

impl Schedule {
    /// Strict constructor: rejects input the permissive engine path would
    /// silently degrade on.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::InvalidTime`] if either time is not a real
    ///   wall-clock time in `HH:MM` or `HH:MM:SS` form
    /// - [`ScheduleError::EmptyRange`] if start is not strictly before end
    ///   at minute granularity
    /// - [`ScheduleError::InvalidWeekday`] for any day outside 0-6
    /// - [`ScheduleError::NoDays`] for an empty day set
    /// - [`ScheduleError::EmptySchoolYear`] if the year label is blank
    #[allow(clippy::too_many_arguments)]
    pub fn validated(
        id: Option<ResourceId>,
        room_id: ResourceId,
        teacher_id: ResourceId,
        section_id: ResourceId,
        days_of_week: Vec<u8>,
        start_time: &str,
        end_time: &str,
        school_year: &str,
    ) -> Result<Self, ScheduleError> {
        parse_wall_clock(start_time)?;
        parse_wall_clock(end_time)?;

        // Minute granularity: "08:00:30" and "08:00:45" form an empty range.
        let start_min = time_to_minutes(normalize_time(start_time))
            .ok_or_else(|| ScheduleError::InvalidTime(start_time.to_string()))?;
        let end_min = time_to_minutes(normalize_time(end_time))
            .ok_or_else(|| ScheduleError::InvalidTime(end_time.to_string()))?;
        if start_min >= end_min {
            return Err(ScheduleError::EmptyRange {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        if days_of_week.is_empty() {
            return Err(ScheduleError::NoDays);
        }
        if let Some(&bad) = days_of_week.iter().find(|&&d| d > 6) {
            return Err(ScheduleError::InvalidWeekday(bad));
        }

        if school_year.trim().is_empty() {
            return Err(ScheduleError::EmptySchoolYear);
        }

        Ok(Schedule {
            id,
            room_id,
            teacher_id,
            section_id,
            days_of_week,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            school_year: school_year.to_string(),
        })
    }
}

/// Parse `HH:MM` or `HH:MM:SS` as a real wall-clock time.
fn parse_wall_clock(s: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Conflict classification: the engine's main entry point.
//!
//! [`detect_conflicts`] walks the caller-supplied snapshot of existing
//! schedules once. A record that shares the candidate's school year, at
//! least one weekday, and an overlapping time window is a genuine collision;
//! it then contributes one [`Conflict`] per resource dimension the two
//! records share — room, teacher, section, in that fixed order. A single
//! record colliding on multiple dimensions yields multiple entries so the
//! caller learns every independent reason for rejection, not just the first.

use serde::Serialize;

use crate::format::{format_days, format_time_range};
use crate::model::{ResourceId, Schedule};
use crate::overlap::{days_intersect, intervals_overlap, normalize_time};

/// Which resource dimension collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Room,
    Teacher,
    Section,
}

/// Fixed dimension-check order: room, teacher, section.
const DIMENSIONS: [ConflictKind; 3] = [
    ConflictKind::Room,
    ConflictKind::Teacher,
    ConflictKind::Section,
];

impl ConflictKind {
    /// Label used at the start of conflict messages.
    fn label(self) -> &'static str {
        match self {
            ConflictKind::Room => "Room",
            ConflictKind::Teacher => "Teacher",
            ConflictKind::Section => "Section",
        }
    }
}

/// One independent reason a candidate slot cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict<'a> {
    /// The resource dimension that collided.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// Human-readable description: resource, colliding days, time range,
    /// school year.
    pub message: String,
    /// The existing record that caused the collision. Borrowed, never
    /// mutated.
    #[serde(rename = "conflictingSchedule")]
    pub schedule: &'a Schedule,
}

/// Check a candidate slot against a snapshot of existing schedules.
///
/// Returns every conflict found, in the iteration order of `existing`, with
/// same-record conflicts grouped and ordered room, teacher, section. An
/// empty snapshot yields an empty result.
///
/// `exclude_id` skips the record with that id — this is how an in-place
/// edit avoids conflicting with itself. The engine performs no other
/// self-exclusion; callers editing a persisted record must pass its id.
///
/// This function never panics or errors: records it cannot interpret
/// (unparseable times, missing day sets) simply contribute no conflicts.
/// That makes a call with malformed input an *unreliable* answer, not a
/// validated one — validate upstream (see [`Schedule::validated`]) before
/// treating an empty result as a go decision.
///
/// # Examples
///
/// ```
/// use clash_engine::{detect_conflicts, ConflictKind, ResourceId, Schedule};
///
/// let existing = vec![Schedule {
///     id: Some(ResourceId::from(1i64)),
///     room_id: ResourceId::from(5i64),
///     teacher_id: ResourceId::from(9i64),
///     section_id: ResourceId::from("G7-A"),
///     days_of_week: vec![3, 5],
///     start_time: "08:30".into(),
///     end_time: "09:30".into(),
///     school_year: "2024-2025".into(),
/// }];
/// let candidate = Schedule {
///     id: None,
///     room_id: ResourceId::from("5"),
///     teacher_id: ResourceId::from(12i64),
///     section_id: ResourceId::from("G7-A"),
///     days_of_week: vec![1, 3],
///     start_time: "08:00".into(),
///     end_time: "09:00".into(),
///     school_year: "2024-2025".into(),
/// };
///
/// let conflicts = detect_conflicts(&candidate, &existing, None);
/// let kinds: Vec<_> = conflicts.iter().map(|c| c.kind).collect();
/// assert_eq!(kinds, vec![ConflictKind::Room, ConflictKind::Section]);
/// ```
pub fn detect_conflicts<'a>(
    candidate: &Schedule,
    existing: &'a [Schedule],
    exclude_id: Option<&ResourceId>,
) -> Vec<Conflict<'a>> {
    let mut conflicts = Vec::new();

    for record in existing {
        if let (Some(skip), Some(id)) = (exclude_id, record.id.as_ref()) {
            if id == skip {
                continue;
            }
        }
        if record.school_year.trim() != candidate.school_year.trim() {
            continue;
        }
        if !days_intersect(&candidate.days_of_week, &record.days_of_week) {
            continue;
        }
        if !intervals_overlap(
            &candidate.start_time,
            &candidate.end_time,
            &record.start_time,
            &record.end_time,
        ) {
            continue;
        }

        // Genuine time/day collision; classify by shared resources.
        let shared = shared_days(&candidate.days_of_week, &record.days_of_week);
        for kind in DIMENSIONS {
            let (ours, theirs) = match kind {
                ConflictKind::Room => (&candidate.room_id, &record.room_id),
                ConflictKind::Teacher => (&candidate.teacher_id, &record.teacher_id),
                ConflictKind::Section => (&candidate.section_id, &record.section_id),
            };
            // Two absent identifiers are unknowns, not a shared resource.
            if !ours.is_absent() && ours == theirs {
                conflicts.push(Conflict {
                    kind,
                    message: conflict_message(kind, theirs, &shared, record),
                    schedule: record,
                });
            }
        }
    }

    conflicts
}

/// Sorted, deduplicated intersection of two day sets — the days on which
/// the collision actually occurs.
fn shared_days(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut days: Vec<u8> = a.iter().copied().filter(|d| b.contains(d)).collect();
    days.sort_unstable();
    days.dedup();
    days
}

fn conflict_message(
    kind: ConflictKind,
    id: &ResourceId,
    shared_days: &[u8],
    existing: &Schedule,
) -> String {
    format!(
        "{} {} is already booked on {} from {} in school year {}",
        kind.label(),
        id,
        format_days(shared_days),
        format_time_range(
            normalize_time(&existing.start_time),
            normalize_time(&existing.end_time),
        ),
        existing.school_year.trim(),
    )
}

// ── Tests ───────────────────────────────────────────────────────────────────

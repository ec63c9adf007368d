//! # clash-engine
//!
//! Deterministic conflict detection for weekly recurring class slots.
//!
//! Given a candidate schedule (a time-of-day window recurring on a set of
//! weekdays, tied to a room, a teacher, and a section within one school
//! year) and a snapshot of existing schedules, the engine reports every
//! independent reason the candidate cannot be booked: each existing record
//! that overlaps it in time and day may contribute up to three conflicts,
//! one per shared resource dimension.
//!
//! ## Modules
//!
//! - [`model`] — `Schedule`, canonical `ResourceId`, strict validation
//! - [`overlap`] — time normalization, interval intersection, day-set intersection
//! - [`conflict`] — the `detect_conflicts` entry point and conflict types
//! - [`format`] — weekday and time-range rendering used in conflict messages
//! - [`error`] — error types (strict-validation boundary only)
//!
//! ## Design Principle
//!
//! The engine is a pure, synchronous decision function: no I/O, no clock, no
//! shared state, linear in the number of existing schedules. Comparison
//! inputs arrive in heterogeneous shapes (times with or without seconds, ids
//! as numbers or strings), so everything is normalized before being compared;
//! anything the engine cannot interpret degrades to "no conflict" rather than
//! an error. Callers that want errors instead of silent degradation construct
//! records through [`Schedule::validated`].
//!
//! ## Advisory, not authoritative
//!
//! The engine evaluates a point-in-time snapshot supplied by the caller. Two
//! concurrent callers can both pass a conflict-free check and then both
//! persist, producing a real double-booking. The storage layer's own
//! constraints are the final arbiter; treat this engine as a pre-check for
//! user feedback, never as a correctness guarantee under concurrent writers.

pub mod conflict;
pub mod error;
pub mod format;
pub mod model;
pub mod overlap;

pub use conflict::{detect_conflicts, Conflict, ConflictKind};
pub use error::ScheduleError;
pub use format::{day_name, format_days, format_time_range};
pub use model::{ResourceId, Schedule};
pub use overlap::{days_intersect, intervals_overlap, normalize_time, time_to_minutes};

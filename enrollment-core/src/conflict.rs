//! Pairwise clash detection between scheduled activities.
//!
//! Two activities clash when they share a weekday and their meeting times
//! overlap, where touching at an endpoint counts as overlapping. Arranged
//! activities meet on no weekday and therefore never clash.

use tracing::trace;

use crate::activity::{ScheduledActivity, TimeInterval};
use crate::error::ConflictError;

/// Whether `a` and `b` meet on a common weekday at overlapping times.
#[must_use]
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    if !a.days().weekdays().intersects(b.days().weekdays()) {
        return false;
    }
    let (a_start, a_end) = (a.start(), a.end());
    let (b_start, b_end) = (b.start(), b.end());
    (a_start < b_end && a_end > b_start)
        || (a_start == b_end && a_end > b_start)
        || (a_end == b_start && a_start < b_end)
}

/// Fails with [`ConflictError::ScheduleConflict`] if `candidate` clashes with
/// `existing`. The result does not depend on argument order.
pub fn check_conflict<A, B>(existing: &A, candidate: &B) -> Result<(), ConflictError>
where
    A: ScheduledActivity + ?Sized,
    B: ScheduledActivity + ?Sized,
{
    if overlaps(existing.interval(), candidate.interval()) {
        trace!(
            existing = existing.title(),
            candidate = candidate.title(),
            "schedule conflict"
        );
        return Err(ConflictError::ScheduleConflict {
            existing: existing.title().to_owned(),
            candidate: candidate.title().to_owned(),
        });
    }
    Ok(())
}

#[must_use]
pub fn conflicts<A, B>(a: &A, b: &B) -> bool
where
    A: ScheduledActivity + ?Sized,
    B: ScheduledActivity + ?Sized,
{
    overlaps(a.interval(), b.interval())
}

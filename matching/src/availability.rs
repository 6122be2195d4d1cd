//! Containment predicate between a requested slot and a published window.
//
//  This module is deliberately pure: no async, no IO.

use roster::types::{AvailabilityWindow, ScheduleError, TimeRange};

/// True iff the requested range lies entirely inside the window,
/// boundary-inclusive on both ends:
///
/// `window.start <= requested.from && requested.to <= window.end`
///
/// Window bounds are parsed from their published string form before
/// comparison; a bound that is not a valid instant is an error, not a
/// non-match.
pub fn is_contained(
    requested: &TimeRange,
    window: &AvailabilityWindow,
) -> Result<bool, ScheduleError> {
    let (start, end) = window.bounds()?;
    Ok(start <= requested.from && requested.to <= end)
}

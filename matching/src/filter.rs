//! Roster-level filter: given the full roster, produce the subset a
//! client may book, preserving the published order.

use super::eligibility::{check_tutor_eligibility, Eligibility};
use super::types::FilterSelection;
use roster::types::{TimeRange, Tutor};

/// Order-preserving subset of `tutors` matching `selection` for `requested`.
///
/// Inputs are never mutated and the pass is idempotent. A tutor whose
/// windows cannot be parsed is skipped (and logged) rather than failing the
/// whole pass, so one bad schedule row cannot blank the list.
pub fn filter_tutors(
    tutors: &[Tutor],
    selection: &FilterSelection,
    requested: &TimeRange,
) -> Vec<Tutor> {
    let mut matched = Vec::new();

    for tutor in tutors {
        match check_tutor_eligibility(tutor, selection, requested) {
            Eligibility::Eligible => matched.push(tutor.clone()),
            Eligibility::MalformedWindow => {
                tracing::warn!(
                    tutor_id = %tutor.id,
                    "skipping tutor with malformed availability window"
                );
            }
            verdict => {
                tracing::debug!(tutor_id = %tutor.id, ?verdict, "tutor rejected");
            }
        }
    }

    matched
}

//! Determines whether a given tutor matches the client's selection
//! for a requested time range.
//
//  This module is deliberately pure: no async, no IO.

use super::availability::is_contained;
use super::types::FilterSelection;
use roster::types::{TimeRange, Tutor};

/// Result of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    GenderMismatch,
    AccentMismatch,
    MajorMismatch,
    NoWindowFits,
    MalformedWindow,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Check whether a tutor matches the selection for the requested range.
///
/// This enforces, in order:
///   - category constraints (gender, accent, major) — a concrete selection
///     field that disagrees with the tutor rejects; "any" never rejects
///   - availability — at least one published window must contain the
///     requested range, first match wins
///
/// A tutor with zero published windows has not listed a schedule and is
/// treated as always available. A window whose bounds fail to parse aborts
/// this tutor's scan with `MalformedWindow`; the caller decides whether to
/// skip the tutor or fail the whole pass.
pub fn check_tutor_eligibility(
    tutor: &Tutor,
    selection: &FilterSelection,
    requested: &TimeRange,
) -> Eligibility {
    if let Some(gender) = selection.gender {
        if tutor.gender != gender {
            return Eligibility::GenderMismatch;
        }
    }

    if let Some(accent) = selection.accent {
        if tutor.accent != accent {
            return Eligibility::AccentMismatch;
        }
    }

    if let Some(major) = selection.major {
        if tutor.major_field != major {
            return Eligibility::MajorMismatch;
        }
    }

    if tutor.available.is_empty() {
        return Eligibility::Eligible;
    }

    for window in &tutor.available {
        match is_contained(requested, window) {
            Ok(true) => return Eligibility::Eligible,
            Ok(false) => {}
            Err(_) => return Eligibility::MalformedWindow,
        }
    }

    Eligibility::NoWindowFits
}

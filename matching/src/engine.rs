//! The matching engine.
//!
//! For each request (selected range + filter selection), it:
//!   1. Snapshots the shared roster.
//!   2. Runs the order-preserving filter over it.
//!   3. Returns the subset for the caller to render.
//!
//! The pass is synchronous compute; callers may show a loading state around
//! it, but nothing here suspends on IO. Results are recomputed on every call
//! so roster, selection, or range changes are always reflected.

use std::time::Instant;

use super::filter::filter_tutors;
use super::types::{FilterSelection, SharedRoster};
use roster::types::{TimeRange, Tutor};

pub struct MatchingEngine {
    roster: SharedRoster,
}

impl MatchingEngine {
    pub fn new(roster: SharedRoster) -> Self {
        Self { roster }
    }

    /// Tutors a client may book for the requested range under the given
    /// selection, in published roster order.
    pub async fn tutors_for(
        &self,
        selection: &FilterSelection,
        requested: &TimeRange,
    ) -> Vec<Tutor> {
        let tutors = self.roster.snapshot().await;

        if tutors.is_empty() {
            tracing::debug!("empty roster, nothing to match");
            return Vec::new();
        }

        let started = Instant::now();
        let matched = filter_tutors(&tutors, selection, requested);

        tracing::debug!(
            total = tutors.len(),
            matched = matched.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "filter pass complete"
        );

        matched
    }
}

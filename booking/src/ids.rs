//! Monotonic reservation-ID allocation.
//!
//! Kept behind a trait so the sequential generator can be swapped for a
//! UUID or a persisted counter without touching booking logic.

use std::sync::atomic::{AtomicU64, Ordering};

use roster::types::{Reservation, ReservationId};

pub trait ReservationIdSource: Send + Sync {
    /// Allocate the next ID and advance the counter.
    fn next_id(&self) -> ReservationId;
}

/// Prefix plus zero-padded counter: "E0001", "E0002", ...
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(start),
        }
    }

    /// Seed the counter past IDs restored from the store, so allocation
    /// resumes after a restart without collisions. IDs that do not carry
    /// this prefix (or a numeric suffix) are ignored.
    pub fn resuming_after(prefix: impl Into<String>, existing: &[Reservation]) -> Self {
        let prefix = prefix.into();
        let max = existing
            .iter()
            .filter_map(|r| r.id.strip_prefix(prefix.as_str()))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max();

        let start = max.map_or(1, |n| n + 1);
        Self {
            prefix,
            next: AtomicU64::new(start),
        }
    }
}

impl ReservationIdSource for SequentialIds {
    fn next_id(&self) -> ReservationId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{:04}", self.prefix, n)
    }
}

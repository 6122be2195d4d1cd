use chrono::{DateTime, Utc};

use roster::types::{LessonKind, Reservation, TutorId};

/// Prepaid lesson units, one independent pool per lesson kind.
///
/// A 20-minute credit can never satisfy a 40-minute booking or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreditBalance {
    pub lessons_20: u32,
    pub lessons_40: u32,
}

impl CreditBalance {
    pub fn new(lessons_20: u32, lessons_40: u32) -> Self {
        Self {
            lessons_20,
            lessons_40,
        }
    }

    pub fn remaining(&self, kind: LessonKind) -> u32 {
        match kind {
            LessonKind::Min20 => self.lessons_20,
            LessonKind::Min40 => self.lessons_40,
        }
    }

    pub fn has_credit(&self, kind: LessonKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Consume exactly one credit from the matching pool. The balance can
    /// never go negative; callers check `has_credit` first.
    pub fn debit(&mut self, kind: LessonKind) {
        debug_assert!(self.has_credit(kind), "debit without remaining credit");

        match kind {
            LessonKind::Min20 => self.lessons_20 = self.lessons_20.saturating_sub(1),
            LessonKind::Min40 => self.lessons_40 = self.lessons_40.saturating_sub(1),
        }
    }
}

/// The booking client: identity, credit balances, and booked slots.
#[derive(Debug, Clone)]
pub struct ClientAccount {
    pub user_id: String,
    pub credits: CreditBalance,
    pub reserved: Vec<Reservation>,
}

impl ClientAccount {
    pub fn new(user_id: impl Into<String>, credits: CreditBalance) -> Self {
        Self {
            user_id: user_id.into(),
            credits,
            reserved: Vec::new(),
        }
    }
}

/// What the tutor-selection collaborator emits when a row is clicked.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub tutor_id: TutorId,
    pub kind: LessonKind,
    pub start: DateTime<Utc>,
}

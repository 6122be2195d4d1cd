use thiserror::Error;

use roster::types::{LessonKind, TutorId};

#[derive(Debug, Error)]
pub enum BookingError {
    /// Recoverable, user-facing: the pool for this lesson kind is empty.
    /// Nothing was mutated and no reservation ID was consumed.
    #[error("no remaining {0}-minute lesson credit")]
    InsufficientCredit(LessonKind),

    /// Booking requested against a tutor not present in the roster. Should
    /// not happen when the caller only acts on rendered rows, but is checked
    /// defensively.
    #[error("unknown tutor '{0}'")]
    UnknownTutor(TutorId),

    #[error("reservation store failure: {0}")]
    Store(#[source] anyhow::Error),
}

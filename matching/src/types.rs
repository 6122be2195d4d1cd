//! Shared types used by the matching subsystem.

use std::sync::Arc;

use roster::manager::RosterManager;
use roster::types::{Accent, Gender, MajorField};

/// The optional category constraints a client applies before viewing the
/// roster. `None` means "any" and never rejects a tutor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub gender: Option<Gender>,
    pub accent: Option<Accent>,
    pub major: Option<MajorField>,
}

impl FilterSelection {
    /// Selection with every field left at "any".
    pub fn any() -> Self {
        Self::default()
    }
}

/// Convenience alias for the shared roster handle the engine reads from.
pub type SharedRoster = Arc<RosterManager>;

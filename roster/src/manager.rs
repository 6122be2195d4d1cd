use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::{Reservation, Tutor};

/// Shared, order-preserving view of the tutor roster.
///
/// The roster is read-mostly: matching takes snapshots, and the only write
/// path is appending a reservation to one tutor after a successful booking.
/// Backed by a `Vec` so the published roster order survives filtering.
pub struct RosterManager {
    tutors: Arc<Mutex<Vec<Tutor>>>,
}

impl RosterManager {
    pub fn new(tutors: Vec<Tutor>) -> Self {
        Self {
            tutors: Arc::new(Mutex::new(tutors)),
        }
    }

    /// Build a roster from the JSON document the roster data collaborator
    /// supplies. Load failures upstream of this call are out of scope.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let tutors: Vec<Tutor> = serde_json::from_str(raw)?;
        Ok(Self::new(tutors))
    }

    /// Clone of the full roster in published order.
    pub async fn snapshot(&self) -> Vec<Tutor> {
        self.tutors.lock().await.clone()
    }

    /// Fetch a single tutor by ID.
    pub async fn get(&self, tutor_id: &str) -> Option<Tutor> {
        let guard = self.tutors.lock().await;
        guard.iter().find(|t| t.id == tutor_id).cloned()
    }

    /// Append a booked slot to the identified tutor's reserved sequence.
    pub async fn append_reserved(
        &self,
        tutor_id: &str,
        reservation: Reservation,
    ) -> anyhow::Result<()> {
        let mut guard = self.tutors.lock().await;
        let tutor = guard
            .iter_mut()
            .find(|t| t.id == tutor_id)
            .ok_or_else(|| anyhow::anyhow!("Tutor not found: {}", tutor_id))?;

        tutor.reserved.push(reservation);
        Ok(())
    }
}

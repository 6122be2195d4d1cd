use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::Instrument;

use common::logger::{root_span, TraceId};
use roster::manager::RosterManager;
use roster::types::Reservation;

use crate::error::BookingError;
use crate::ids::ReservationIdSource;
use crate::model::{BookingRequest, ClientAccount};
use crate::store::BookingStore;

/// Applies the booking transaction over the client account and the shared
/// roster, and persists reservations to a store.
///
/// Credit check, debit, ID allocation, and the dual-list append form one
/// indivisible unit from the caller's perspective: either all of them happen
/// or none do.
pub struct BookingManager<S: BookingStore> {
    account: Arc<Mutex<ClientAccount>>,
    roster: Arc<RosterManager>,
    ids: Arc<dyn ReservationIdSource>,
    store: Arc<S>,
}

impl<S: BookingStore> BookingManager<S> {
    /// Initialize from the store: previously persisted reservations are
    /// restored into the client's list, in ID order.
    pub async fn new(
        account: ClientAccount,
        roster: Arc<RosterManager>,
        ids: Arc<dyn ReservationIdSource>,
        store: Arc<S>,
    ) -> anyhow::Result<Self> {
        let manager = Self {
            account: Arc::new(Mutex::new(account)),
            roster,
            ids,
            store,
        };

        manager.restore_from_store().await?;
        Ok(manager)
    }

    /// Load all previously saved reservations into the client account.
    async fn restore_from_store(&self) -> anyhow::Result<()> {
        let mut restored = self.store.load_all().await?;
        restored.sort_by(|a, b| a.id.cmp(&b.id));

        let mut account = self.account.lock().await;
        account.reserved = restored;

        Ok(())
    }

    /// Book a lesson slot with the identified tutor.
    ///
    /// On success the reservation has been debited from the matching credit
    /// pool, appended by value to both the client's and the tutor's lists,
    /// and persisted; the returned value doubles as the signal for the
    /// caller to close its selection view. On failure nothing was mutated.
    pub async fn book(&self, request: BookingRequest) -> Result<Reservation, BookingError> {
        let trace_id = TraceId::new();
        let span = root_span("book", &trace_id);

        self.book_inner(request).instrument(span).await
    }

    async fn book_inner(&self, request: BookingRequest) -> Result<Reservation, BookingError> {
        let tutor = self
            .roster
            .get(&request.tutor_id)
            .await
            .ok_or_else(|| BookingError::UnknownTutor(request.tutor_id.clone()))?;

        let mut account = self.account.lock().await;

        if !account.credits.has_credit(request.kind) {
            tracing::info!(kind = %request.kind, "booking rejected: no remaining credit");
            return Err(BookingError::InsufficientCredit(request.kind));
        }

        // The counter advances exactly once per booking that passed the
        // credit check.
        let id = self.ids.next_id();
        let reservation = Reservation::new(
            id,
            request.kind,
            account.user_id.clone(),
            &tutor,
            request.start,
        );

        // Persist first; the in-memory mutations below cannot fail, so a
        // store error leaves balance and both reservation lists untouched.
        self.store
            .save(&reservation)
            .await
            .map_err(BookingError::Store)?;

        account.credits.debit(request.kind);
        account.reserved.push(reservation.clone());
        drop(account);

        // Single client session: the tutor resolved above cannot disappear
        // between the lookup and this append.
        self.roster
            .append_reserved(&request.tutor_id, reservation.clone())
            .await
            .map_err(BookingError::Store)?;

        tracing::info!(
            reservation_id = %reservation.id,
            tutor_id = %reservation.tutor_id,
            kind = %reservation.kind,
            "booking confirmed"
        );

        Ok(reservation)
    }

    /// Current view of the client account (credits + reservation list).
    pub async fn account(&self) -> ClientAccount {
        self.account.lock().await.clone()
    }
}

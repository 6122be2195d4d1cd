use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::test;

use booking::error::BookingError;
use booking::ids::{ReservationIdSource, SequentialIds};
use booking::manager::BookingManager;
use booking::model::{BookingRequest, ClientAccount, CreditBalance};
use booking::store::BookingStore;
use common::logger::init_logger;
use roster::manager::RosterManager;
use roster::types::{
    Accent, AvailabilityWindow, Gender, LessonKind, MajorField, Reservation, Tutor,
};

use mock_store::InMemoryReservationStore;

fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn tutor(id: &str, name: &str) -> Tutor {
    Tutor {
        id: id.into(),
        name: name.into(),
        school: "SNU".into(),
        major: "English Literature".into(),
        gender: Gender::Female,
        accent: Accent::American,
        major_field: MajorField::Humanities,
        acceptance_rate: 90.0,
        available: vec![AvailabilityWindow::new(
            "2024-01-10T08:00:00Z",
            "2024-01-10T18:00:00Z",
        )],
        reserved: vec![],
    }
}

fn sample_roster() -> Arc<RosterManager> {
    Arc::new(RosterManager::new(vec![tutor("A", "Ari"), tutor("B", "Bo")]))
}

async fn manager_with(
    credits: CreditBalance,
    store: Arc<InMemoryReservationStore>,
    roster: Arc<RosterManager>,
) -> BookingManager<InMemoryReservationStore> {
    init_logger("booking-tests");

    let ids = Arc::new(SequentialIds::new("E", 1));
    BookingManager::new(ClientAccount::new("U1", credits), roster, ids, store)
        .await
        .unwrap()
}

fn request(tutor_id: &str, kind: LessonKind, start: &str) -> BookingRequest {
    BookingRequest {
        tutor_id: tutor_id.into(),
        kind,
        start: instant(start),
    }
}

#[test]
async fn zero_balance_booking_mutates_nothing() {
    let store = Arc::new(InMemoryReservationStore::default());
    let roster = sample_roster();
    let mgr = manager_with(CreditBalance::new(0, 1), store.clone(), roster.clone()).await;

    let out = mgr
        .book(request("A", LessonKind::Min20, "2024-01-10T10:00:00Z"))
        .await;

    assert!(matches!(
        out,
        Err(BookingError::InsufficientCredit(LessonKind::Min20))
    ));

    let account = mgr.account().await;
    assert_eq!(account.credits, CreditBalance::new(0, 1)); // 40-pool untouched
    assert!(account.reserved.is_empty());
    assert!(roster.get("A").await.unwrap().reserved.is_empty());
    assert!(store.map.lock().await.is_empty());

    // The failed attempt consumed no ID: the next success starts at E0001.
    let confirmed = mgr
        .book(request("A", LessonKind::Min40, "2024-01-10T10:00:00Z"))
        .await
        .unwrap();
    assert_eq!(confirmed.id, "E0001");
}

#[test]
async fn booking_decrements_only_the_matching_pool() {
    let store = Arc::new(InMemoryReservationStore::default());
    let mgr = manager_with(CreditBalance::new(2, 1), store, sample_roster()).await;

    mgr.book(request("A", LessonKind::Min20, "2024-01-10T10:00:00Z"))
        .await
        .unwrap();

    let account = mgr.account().await;
    assert_eq!(account.credits, CreditBalance::new(1, 1));
}

#[test]
async fn forty_minute_booking_lands_in_both_lists() {
    let store = Arc::new(InMemoryReservationStore::default());
    let roster = sample_roster();
    let mgr = manager_with(CreditBalance::new(0, 1), store.clone(), roster.clone()).await;

    let reservation = mgr
        .book(request("B", LessonKind::Min40, "2024-01-10T09:00:00Z"))
        .await
        .unwrap();

    assert_eq!(reservation.start, instant("2024-01-10T09:00:00Z"));
    assert_eq!(reservation.end, instant("2024-01-10T09:40:00Z"));
    assert_eq!(reservation.tutor_name, "Bo");

    let account = mgr.account().await;
    assert_eq!(account.credits.lessons_40, 0);
    assert_eq!(account.reserved, vec![reservation.clone()]);

    // Same value on the tutor side, not a shared reference.
    let tutor_side = roster.get("B").await.unwrap().reserved;
    assert_eq!(tutor_side, vec![reservation.clone()]);

    // And persisted.
    let stored = store.map.lock().await.get(&reservation.id).cloned();
    assert_eq!(stored, Some(reservation));
}

#[test]
async fn reservation_ids_strictly_increase_across_bookings() {
    let store = Arc::new(InMemoryReservationStore::default());
    let mgr = manager_with(CreditBalance::new(3, 0), store, sample_roster()).await;

    let mut previous: Option<String> = None;
    for _ in 0..3 {
        let r = mgr
            .book(request("A", LessonKind::Min20, "2024-01-10T10:00:00Z"))
            .await
            .unwrap();

        if let Some(prev) = previous {
            assert!(r.id > prev);
        }
        previous = Some(r.id);
    }
}

#[test]
async fn unknown_tutor_is_rejected_without_mutation() {
    let store = Arc::new(InMemoryReservationStore::default());
    let mgr = manager_with(CreditBalance::new(1, 1), store.clone(), sample_roster()).await;

    let out = mgr
        .book(request("Z", LessonKind::Min20, "2024-01-10T10:00:00Z"))
        .await;

    assert!(matches!(out, Err(BookingError::UnknownTutor(ref id)) if id == "Z"));

    let account = mgr.account().await;
    assert_eq!(account.credits, CreditBalance::new(1, 1));
    assert!(account.reserved.is_empty());
    assert!(store.map.lock().await.is_empty());
}

#[test]
async fn exhausting_a_pool_blocks_further_bookings_of_that_kind() {
    let store = Arc::new(InMemoryReservationStore::default());
    let mgr = manager_with(CreditBalance::new(1, 0), store, sample_roster()).await;

    mgr.book(request("A", LessonKind::Min20, "2024-01-10T10:00:00Z"))
        .await
        .unwrap();

    let out = mgr
        .book(request("A", LessonKind::Min20, "2024-01-10T11:00:00Z"))
        .await;

    assert!(matches!(
        out,
        Err(BookingError::InsufficientCredit(LessonKind::Min20))
    ));
}

#[test]
async fn restore_from_store_rebuilds_the_reservation_list() {
    let store = Arc::new(InMemoryReservationStore::default());
    let roster = sample_roster();

    let bo = roster.get("B").await.unwrap();
    let older = Reservation::new(
        "E0001".into(),
        LessonKind::Min20,
        "U1",
        &bo,
        instant("2024-01-08T10:00:00Z"),
    );
    let newer = Reservation::new(
        "E0002".into(),
        LessonKind::Min40,
        "U1",
        &bo,
        instant("2024-01-09T10:00:00Z"),
    );
    store.save(&newer).await.unwrap();
    store.save(&older).await.unwrap();

    let mgr = manager_with(CreditBalance::new(1, 1), store.clone(), roster).await;

    let account = mgr.account().await;
    assert_eq!(account.reserved, vec![older, newer]); // sorted by ID

    // Resuming the counter past restored IDs avoids collisions.
    let ids = SequentialIds::resuming_after("E", &account.reserved);
    assert_eq!(ids.next_id(), "E0003");
}

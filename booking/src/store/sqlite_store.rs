//! SQLiteReservationStore
//! ----------------------
//! This module provides a **SQLite-backed implementation** of the
//! `BookingStore` trait used by the booking::manager subsystem. It is
//! responsible for durable local persistence of reservations so that:
//!
//!  - booked lessons survive restarts
//!  - the client's reservation list can be restored on startup
//!  - matching + booking operate purely in-memory, using BookingManager
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use super::BookingStore;
use roster::types::{LessonKind, Reservation};

/// SQLite-based persistence backend for reservations.
///
/// This struct implements the `BookingStore` trait and provides:
///
///   - schema creation on startup
///   - loading persisted reservations (`load_all`)
///   - upsert semantics (`save`) — reservations are immutable, so a
///     conflicting write only re-writes identical fields
pub struct SQLiteReservationStore {
    pool: SqlitePool,
}

impl SQLiteReservationStore {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new SQLite-backed store and ensure schema exists.
    pub async fn new(path: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(path).await?;
        let store = Self::from_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Creates the reservations table if it does not exist.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id TEXT PRIMARY KEY,
                kind_minutes INTEGER NOT NULL,
                user_id TEXT NOT NULL,

                tutor_id TEXT NOT NULL,
                tutor_name TEXT NOT NULL,

                start_at TEXT NOT NULL,
                end_at TEXT NOT NULL
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn parse_instant(column: &str, value: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("Invalid {} instant '{}': {}", column, value, e))
}

#[async_trait]
impl BookingStore for SQLiteReservationStore {
    /// Load all reservations from persistent storage.
    ///
    /// This is called once at startup by BookingManager to reconstruct the
    /// client's reservation list.
    async fn load_all(&self) -> anyhow::Result<Vec<Reservation>> {
        let rows = sqlx::query("SELECT * FROM reservations ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut reservations = Vec::with_capacity(rows.len());

        for row in rows {
            let id: String = row.get("id");

            let kind_minutes: i64 = row.get("kind_minutes");
            let kind = LessonKind::from_minutes(kind_minutes)?;

            let user_id: String = row.get("user_id");
            let tutor_id: String = row.get("tutor_id");
            let tutor_name: String = row.get("tutor_name");

            let start_at: String = row.get("start_at");
            let start = parse_instant("start_at", &start_at)?;

            let end_at: String = row.get("end_at");
            let end = parse_instant("end_at", &end_at)?;

            reservations.push(Reservation {
                id,
                kind,
                user_id,
                tutor_id,
                tutor_name,
                start,
                end,
            });
        }

        Ok(reservations)
    }

    /// Store a reservation.
    async fn save(&self, reservation: &Reservation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reservations (
                id, kind_minutes, user_id,
                tutor_id, tutor_name,
                start_at, end_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                kind_minutes = excluded.kind_minutes,
                user_id = excluded.user_id,
                tutor_id = excluded.tutor_id,
                tutor_name = excluded.tutor_name,
                start_at = excluded.start_at,
                end_at = excluded.end_at;
        "#,
        )
        .bind(&reservation.id)
        .bind(reservation.kind.minutes())
        .bind(&reservation.user_id)
        .bind(&reservation.tutor_id)
        .bind(&reservation.tutor_name)
        .bind(reservation.start.to_rfc3339())
        .bind(reservation.end.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

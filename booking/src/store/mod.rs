pub mod sqlite_store;

#[async_trait::async_trait]
pub trait BookingStore: Send + Sync {
    async fn load_all(&self) -> anyhow::Result<Vec<roster::types::Reservation>>;
    async fn save(&self, reservation: &roster::types::Reservation) -> anyhow::Result<()>;
}

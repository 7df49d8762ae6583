use crate::domain::affordability::AffordabilityRecord;
use crate::domain::reputation::BorrowerReputation;
use anyhow::Result;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

/// Borrower records the risk service reads and writes. Backed by Postgres in
/// the server and by [`memory::InMemoryStore`] in tests.
#[async_trait::async_trait]
pub trait BorrowerDataStore: Send + Sync {
    async fn get_reputation(&self, borrower_id: Uuid) -> Result<Option<BorrowerReputation>>;

    async fn get_affordability(&self, borrower_id: Uuid) -> Result<Option<AffordabilityRecord>>;

    /// Upsert keyed by borrower; the last write wins.
    async fn save_affordability(&self, record: &AffordabilityRecord) -> Result<()>;

    async fn get_active_loan_count(&self, borrower_id: Uuid) -> Result<u32>;
}

use crate::domain::affordability::AffordabilityRecord;
use crate::domain::reputation::BorrowerReputation;
use crate::store::BorrowerDataStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    reputations: HashMap<Uuid, BorrowerReputation>,
    affordability: HashMap<Uuid, AffordabilityRecord>,
    active_loans: HashMap<Uuid, u32>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_reputation(&self, reputation: BorrowerReputation) {
        let mut write = self.inner.write().await;
        write.reputations.insert(reputation.borrower_id, reputation);
    }

    pub async fn set_active_loans(&self, borrower_id: Uuid, count: u32) {
        let mut write = self.inner.write().await;
        write.active_loans.insert(borrower_id, count);
    }

    pub async fn affordability_rows(&self) -> usize {
        self.inner.read().await.affordability.len()
    }
}

#[async_trait::async_trait]
impl BorrowerDataStore for InMemoryStore {
    async fn get_reputation(&self, borrower_id: Uuid) -> Result<Option<BorrowerReputation>> {
        Ok(self.inner.read().await.reputations.get(&borrower_id).cloned())
    }

    async fn get_affordability(&self, borrower_id: Uuid) -> Result<Option<AffordabilityRecord>> {
        Ok(self.inner.read().await.affordability.get(&borrower_id).cloned())
    }

    async fn save_affordability(&self, record: &AffordabilityRecord) -> Result<()> {
        let mut write = self.inner.write().await;
        write.affordability.insert(record.borrower_id, record.clone());
        Ok(())
    }

    async fn get_active_loan_count(&self, borrower_id: Uuid) -> Result<u32> {
        Ok(self
            .inner
            .read()
            .await
            .active_loans
            .get(&borrower_id)
            .copied()
            .unwrap_or(0))
    }
}

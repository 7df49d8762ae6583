use crate::domain::affordability::AffordabilityRecord;
use crate::domain::reputation::BorrowerReputation;
use crate::repo::affordability_repo::AffordabilityRepo;
use crate::repo::loans_repo::LoansRepo;
use crate::repo::reputation_repo::ReputationRepo;
use crate::store::BorrowerDataStore;
use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgBorrowerStore {
    pub reputation_repo: ReputationRepo,
    pub affordability_repo: AffordabilityRepo,
    pub loans_repo: LoansRepo,
}

impl PgBorrowerStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reputation_repo: ReputationRepo { pool: pool.clone() },
            affordability_repo: AffordabilityRepo { pool: pool.clone() },
            loans_repo: LoansRepo { pool },
        }
    }
}

#[async_trait::async_trait]
impl BorrowerDataStore for PgBorrowerStore {
    async fn get_reputation(&self, borrower_id: Uuid) -> Result<Option<BorrowerReputation>> {
        self.reputation_repo.find(borrower_id).await
    }

    async fn get_affordability(&self, borrower_id: Uuid) -> Result<Option<AffordabilityRecord>> {
        self.affordability_repo.find(borrower_id).await
    }

    async fn save_affordability(&self, record: &AffordabilityRecord) -> Result<()> {
        self.affordability_repo.upsert(record).await
    }

    async fn get_active_loan_count(&self, borrower_id: Uuid) -> Result<u32> {
        self.loans_repo.count_active(borrower_id).await
    }
}

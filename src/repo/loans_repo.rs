use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct LoansRepo {
    pub pool: PgPool,
}

/// `COUNT(*)` is an i64; counts beyond `u32::MAX` saturate.
pub fn active_count(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

impl LoansRepo {
    pub async fn count_active(&self, borrower_id: Uuid) -> Result<u32> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS active FROM loan_requests WHERE borrower_id=$1 AND status='active'",
        )
        .bind(borrower_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(active_count(row.get::<i64, _>("active")))
    }
}

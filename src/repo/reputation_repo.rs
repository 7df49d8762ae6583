use crate::domain::reputation::{BorrowerReputation, ReputationCategory};
use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct ReputationRepo {
    pub pool: PgPool,
}

fn count(row: &sqlx::postgres::PgRow, column: &str) -> u32 {
    row.get::<i32, _>(column).max(0) as u32
}

impl ReputationRepo {
    pub async fn find(&self, borrower_id: Uuid) -> Result<Option<BorrowerReputation>> {
        let row = sqlx::query(
            "SELECT borrower_id, total_loans, completed_loans, active_loans, defaulted_loans, on_time_payments, late_payments, very_late_payments, total_borrowed, total_repaid, average_days_late, reputation_score, reputation_category, is_blacklisted, blacklist_count FROM borrower_reputation WHERE borrower_id=$1",
        )
        .bind(borrower_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| BorrowerReputation {
            borrower_id: r.get("borrower_id"),
            total_loans: count(&r, "total_loans"),
            completed_loans: count(&r, "completed_loans"),
            active_loans: count(&r, "active_loans"),
            defaulted_loans: count(&r, "defaulted_loans"),
            on_time_payments: count(&r, "on_time_payments"),
            late_payments: count(&r, "late_payments"),
            very_late_payments: count(&r, "very_late_payments"),
            total_borrowed: r.get("total_borrowed"),
            total_repaid: r.get("total_repaid"),
            average_days_late: r.get("average_days_late"),
            reputation_score: r.get("reputation_score"),
            reputation_category: ReputationCategory::parse(&r.get::<String, _>("reputation_category")),
            is_blacklisted: r.get("is_blacklisted"),
            blacklist_count: count(&r, "blacklist_count"),
        }))
    }
}

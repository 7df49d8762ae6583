use crate::domain::affordability::{AffordabilityInput, AffordabilityRecord, AffordabilityResult};
use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct AffordabilityRepo {
    pub pool: PgPool,
}

impl AffordabilityRepo {
    pub async fn find(&self, borrower_id: Uuid) -> Result<Option<AffordabilityRecord>> {
        let row = sqlx::query(
            "SELECT borrower_id, monthly_salary, side_hustle_income, remittances, other_income, monthly_expenses, existing_loan_payments, total_income, disposable_income, debt_to_income_ratio, risk_score, max_affordable_loan, updated_at FROM affordability_metrics WHERE borrower_id=$1",
        )
        .bind(borrower_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| AffordabilityRecord {
            borrower_id: r.get("borrower_id"),
            input: AffordabilityInput {
                monthly_salary: r.get("monthly_salary"),
                side_hustle_income: r.get("side_hustle_income"),
                remittances: r.get("remittances"),
                other_income: r.get("other_income"),
                monthly_expenses: r.get("monthly_expenses"),
                existing_loan_payments: r.get("existing_loan_payments"),
            },
            result: AffordabilityResult {
                total_income: r.get("total_income"),
                disposable_income: r.get("disposable_income"),
                debt_to_income_ratio: r.get("debt_to_income_ratio"),
                risk_score: r.get::<i16, _>("risk_score").clamp(0, 100) as u8,
                max_affordable_loan: r.get("max_affordable_loan"),
            },
            updated_at: r.get("updated_at"),
        }))
    }

    pub async fn upsert(&self, record: &AffordabilityRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO affordability_metrics (
                borrower_id, monthly_salary, side_hustle_income, remittances, other_income,
                monthly_expenses, existing_loan_payments, total_income, disposable_income,
                debt_to_income_ratio, risk_score, max_affordable_loan, updated_at
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13)
            ON CONFLICT (borrower_id) DO UPDATE SET
                monthly_salary=EXCLUDED.monthly_salary,
                side_hustle_income=EXCLUDED.side_hustle_income,
                remittances=EXCLUDED.remittances,
                other_income=EXCLUDED.other_income,
                monthly_expenses=EXCLUDED.monthly_expenses,
                existing_loan_payments=EXCLUDED.existing_loan_payments,
                total_income=EXCLUDED.total_income,
                disposable_income=EXCLUDED.disposable_income,
                debt_to_income_ratio=EXCLUDED.debt_to_income_ratio,
                risk_score=EXCLUDED.risk_score,
                max_affordable_loan=EXCLUDED.max_affordable_loan,
                updated_at=EXCLUDED.updated_at
            "#,
        )
        .bind(record.borrower_id)
        .bind(record.input.monthly_salary)
        .bind(record.input.side_hustle_income)
        .bind(record.input.remittances)
        .bind(record.input.other_income)
        .bind(record.input.monthly_expenses)
        .bind(record.input.existing_loan_payments)
        .bind(record.result.total_income)
        .bind(record.result.disposable_income)
        .bind(record.result.debt_to_income_ratio)
        .bind(record.result.risk_score as i16)
        .bind(record.result.max_affordable_loan)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

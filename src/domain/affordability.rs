use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monthly figures a borrower declares, all in the borrower's own currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub monthly_salary: f64,
    #[serde(default)]
    pub side_hustle_income: f64,
    #[serde(default)]
    pub remittances: f64,
    #[serde(default)]
    pub other_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub existing_loan_payments: f64,
}

impl AffordabilityInput {
    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("monthly_salary", self.monthly_salary),
            ("side_hustle_income", self.side_hustle_income),
            ("remittances", self.remittances),
            ("other_income", self.other_income),
            ("monthly_expenses", self.monthly_expenses),
            ("existing_loan_payments", self.existing_loan_payments),
        ]
    }

    pub fn total_income(&self) -> f64 {
        self.monthly_salary + self.side_hustle_income + self.remittances + self.other_income
    }

    pub fn total_obligations(&self) -> f64 {
        self.monthly_expenses + self.existing_loan_payments
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub total_income: f64,
    pub disposable_income: f64,
    pub debt_to_income_ratio: f64,
    pub risk_score: u8,
    pub max_affordable_loan: f64,
}

/// One persisted affordability row per borrower; later saves replace earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityRecord {
    pub borrower_id: Uuid,
    pub input: AffordabilityInput,
    pub result: AffordabilityResult,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AffordabilityError {
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl AffordabilityError {
    pub fn field(&self) -> &'static str {
        match self {
            AffordabilityError::Negative { field } | AffordabilityError::NotFinite { field } => field,
        }
    }
}

/// Weights of the affordability risk score. The two weights should sum to 1.0
/// so the blended score stays within 0..=100.
#[derive(Debug, Clone)]
pub struct RiskScoreWeights {
    pub dti_weight: f64,
    pub cushion_weight: f64,
    /// Disposable income at which the cushion component halves.
    pub cushion_reference: f64,
}

impl Default for RiskScoreWeights {
    fn default() -> Self {
        Self {
            dti_weight: 0.7,
            cushion_weight: 0.3,
            cushion_reference: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(risk_score: u8) -> Self {
        if risk_score <= 30 {
            RiskTier::Low
        } else if risk_score <= 60 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DtiTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DtiTier {
    pub fn from_ratio(debt_to_income_ratio: f64) -> Self {
        if debt_to_income_ratio <= 20.0 {
            DtiTier::Excellent
        } else if debt_to_income_ratio <= 35.0 {
            DtiTier::Good
        } else if debt_to_income_ratio <= 50.0 {
            DtiTier::Fair
        } else {
            DtiTier::Poor
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReputationSummary {
    pub total_payments: u32,
    pub on_time_payment_rate: f64,
    pub repayment_rate: f64,
    pub completion_rate: f64,
    pub outstanding_amount: f64,
}

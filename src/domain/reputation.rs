use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReputationCategory {
    Good,
    Moderate,
    Bad,
}

impl ReputationCategory {
    /// Unknown values read back from storage fall back to `Moderate`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "GOOD" => ReputationCategory::Good,
            "BAD" => ReputationCategory::Bad,
            _ => ReputationCategory::Moderate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerReputation {
    pub borrower_id: Uuid,
    pub total_loans: u32,
    pub completed_loans: u32,
    pub active_loans: u32,
    pub defaulted_loans: u32,
    pub on_time_payments: u32,
    pub late_payments: u32,
    pub very_late_payments: u32,
    pub total_borrowed: f64,
    pub total_repaid: f64,
    pub average_days_late: f64,
    pub reputation_score: f64,
    pub reputation_category: ReputationCategory,
    pub is_blacklisted: bool,
    pub blacklist_count: u32,
}

impl BorrowerReputation {
    pub const NEUTRAL_SCORE: f64 = 50.0;

    /// Stand-in for borrowers without a reputation row yet.
    pub fn neutral(borrower_id: Uuid) -> Self {
        Self {
            borrower_id,
            total_loans: 0,
            completed_loans: 0,
            active_loans: 0,
            defaulted_loans: 0,
            on_time_payments: 0,
            late_payments: 0,
            very_late_payments: 0,
            total_borrowed: 0.0,
            total_repaid: 0.0,
            average_days_late: 0.0,
            reputation_score: Self::NEUTRAL_SCORE,
            reputation_category: ReputationCategory::Moderate,
            is_blacklisted: false,
            blacklist_count: 0,
        }
    }

    /// Score clamped to 0..=100; a non-finite stored score reads as neutral.
    pub fn score(&self) -> f64 {
        if self.reputation_score.is_finite() {
            self.reputation_score.clamp(0.0, 100.0)
        } else {
            Self::NEUTRAL_SCORE
        }
    }
}

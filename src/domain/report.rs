use crate::domain::affordability::{AffordabilityRecord, AffordabilityResult};
use crate::domain::assessment::{RiskAssessment, RiskFactor};
use crate::domain::badge::Badge;
use crate::domain::reputation::BorrowerReputation;
use crate::scoring::types::{DtiTier, ReputationSummary, RiskTier};
use serde::Serialize;
use uuid::Uuid;

/// Affordability figures together with their display tiers.
#[derive(Debug, Clone, Serialize)]
pub struct AffordabilityView {
    #[serde(flatten)]
    pub result: AffordabilityResult,
    pub risk_tier: RiskTier,
    pub risk_badge: Badge,
    pub dti_tier: DtiTier,
    pub dti_badge: Badge,
}

impl From<AffordabilityResult> for AffordabilityView {
    fn from(result: AffordabilityResult) -> Self {
        let risk_tier = RiskTier::from_score(result.risk_score);
        let dti_tier = DtiTier::from_ratio(result.debt_to_income_ratio);
        Self {
            result,
            risk_tier,
            risk_badge: risk_tier.badge(),
            dti_tier,
            dti_badge: dti_tier.badge(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorView {
    #[serde(flatten)]
    pub factor: RiskFactor,
    pub badge: Badge,
}

impl From<&RiskFactor> for FactorView {
    fn from(factor: &RiskFactor) -> Self {
        Self {
            badge: factor.impact.badge(),
            factor: factor.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BorrowerRiskReport {
    pub borrower_id: Uuid,
    pub reputation: BorrowerReputation,
    pub reputation_badge: Badge,
    pub reputation_summary: ReputationSummary,
    pub affordability: Option<AffordabilityRecord>,
    pub affordability_view: Option<AffordabilityView>,
    pub active_loan_count: u32,
    pub assessment: RiskAssessment,
    pub factor_views: Vec<FactorView>,
    pub overall_badge: Badge,
}

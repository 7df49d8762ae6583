use crate::domain::affordability::{AffordabilityInput, AffordabilityRecord, AffordabilityResult};
use crate::domain::error::{err, err_with_details, internal, ServiceError};
use crate::domain::reputation::BorrowerReputation;
use crate::domain::report::{AffordabilityView, BorrowerRiskReport, FactorView};
use crate::scoring::affordability::compute_affordability_with;
use crate::scoring::assessor::assess_risk;
use crate::scoring::report::summarize_reputation;
use crate::scoring::types::{AffordabilityError, RiskScoreWeights};
use crate::store::BorrowerDataStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct RiskService {
    pub store: Arc<dyn BorrowerDataStore>,
    pub weights: RiskScoreWeights,
}

impl RiskService {
    pub fn new(store: Arc<dyn BorrowerDataStore>) -> Self {
        Self {
            store,
            weights: RiskScoreWeights::default(),
        }
    }

    pub fn preview_affordability(&self, input: &AffordabilityInput) -> Result<AffordabilityView, ServiceError> {
        let result = self.compute(input)?;
        Ok(AffordabilityView::from(result))
    }

    pub async fn save_affordability(
        &self,
        borrower_id: Uuid,
        input: AffordabilityInput,
    ) -> Result<AffordabilityRecord, ServiceError> {
        let result = self.compute(&input)?;
        let record = AffordabilityRecord {
            borrower_id,
            input,
            result,
            updated_at: chrono::Utc::now(),
        };

        self.store.save_affordability(&record).await.map_err(internal)?;
        tracing::info!(
            "affordability saved borrower={} dti={:.1} risk_score={}",
            borrower_id,
            result.debt_to_income_ratio,
            result.risk_score
        );
        Ok(record)
    }

    pub async fn affordability(&self, borrower_id: Uuid) -> Result<AffordabilityRecord, ServiceError> {
        self.store
            .get_affordability(borrower_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    err("AFFORDABILITY_NOT_FOUND", "no affordability record for borrower"),
                )
            })
    }

    /// Reputation for the borrower, or the neutral record when none exists yet.
    pub async fn load_reputation(&self, borrower_id: Uuid) -> anyhow::Result<BorrowerReputation> {
        match self.store.get_reputation(borrower_id).await? {
            Some(rep) => Ok(rep),
            None => {
                tracing::debug!("no reputation record for borrower={}, using neutral default", borrower_id);
                Ok(BorrowerReputation::neutral(borrower_id))
            }
        }
    }

    pub async fn risk_report(&self, borrower_id: Uuid) -> Result<BorrowerRiskReport, ServiceError> {
        let reputation = self.load_reputation(borrower_id).await.map_err(internal)?;
        let affordability = self.store.get_affordability(borrower_id).await.map_err(internal)?;
        let active_loan_count = self
            .store
            .get_active_loan_count(borrower_id)
            .await
            .map_err(internal)?;

        let assessment = assess_risk(
            &reputation,
            affordability.as_ref().map(|a| &a.result),
            active_loan_count,
        );
        tracing::info!(
            "risk assessed borrower={} overall={:?} factors={}",
            borrower_id,
            assessment.overall_risk,
            assessment.factors.len()
        );

        Ok(BorrowerRiskReport {
            borrower_id,
            reputation_badge: reputation.reputation_category.badge(),
            reputation_summary: summarize_reputation(&reputation),
            reputation,
            affordability_view: affordability.as_ref().map(|a| AffordabilityView::from(a.result)),
            affordability,
            active_loan_count,
            factor_views: assessment.factors.iter().map(FactorView::from).collect(),
            overall_badge: assessment.overall_risk.badge(),
            assessment,
        })
    }

    fn compute(&self, input: &AffordabilityInput) -> Result<AffordabilityResult, ServiceError> {
        compute_affordability_with(input, &self.weights).map_err(validation)
    }
}

fn validation(e: AffordabilityError) -> ServiceError {
    tracing::warn!("affordability input rejected: {}", e);
    (
        axum::http::StatusCode::UNPROCESSABLE_ENTITY,
        err_with_details("VALIDATION_FAILED", &e.to_string(), e.field()),
    )
}

use credlio_risk::domain::affordability::AffordabilityInput;
use credlio_risk::domain::assessment::OverallRisk;
use credlio_risk::domain::badge::Tone;
use credlio_risk::domain::reputation::{BorrowerReputation, ReputationCategory};
use credlio_risk::scoring::types::{DtiTier, RiskTier};
use credlio_risk::service::risk_service::RiskService;
use credlio_risk::store::memory::InMemoryStore;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn report_uses_neutral_reputation_when_missing() {
    let store = InMemoryStore::new();
    let service = RiskService::new(Arc::new(store.clone()));
    let borrower = Uuid::new_v4();

    let report = service.risk_report(borrower).await.unwrap();

    assert_eq!(report.reputation.reputation_score, 50.0);
    assert_eq!(report.reputation.reputation_category, ReputationCategory::Moderate);
    assert_eq!(report.reputation_badge.label, "Moderate");
    assert!(report.affordability.is_none());
    assert!(report.affordability_view.is_none());
    assert_eq!(report.assessment.overall_risk, OverallRisk::Medium);
    assert_eq!(report.overall_badge.tone, Tone::Warning);
}

#[tokio::test]
async fn save_then_read_affordability() {
    let store = InMemoryStore::new();
    let service = RiskService::new(Arc::new(store.clone()));
    let borrower = Uuid::new_v4();

    let saved = service.save_affordability(borrower, salary(1000.0, 200.0, 100.0)).await.unwrap();
    assert_eq!(saved.result.disposable_income, 700.0);

    let loaded = service.affordability(borrower).await.unwrap();
    assert_eq!(loaded, saved);
}

#[tokio::test]
async fn later_save_overwrites_earlier() {
    let store = InMemoryStore::new();
    let service = RiskService::new(Arc::new(store.clone()));
    let borrower = Uuid::new_v4();

    service.save_affordability(borrower, salary(1000.0, 200.0, 100.0)).await.unwrap();
    service.save_affordability(borrower, salary(3000.0, 300.0, 0.0)).await.unwrap();

    let loaded = service.affordability(borrower).await.unwrap();
    assert_eq!(loaded.input.monthly_salary, 3000.0);
    assert_eq!(loaded.result.debt_to_income_ratio, 10.0);
    assert_eq!(store.affordability_rows().await, 1);
}

#[tokio::test]
async fn invalid_input_is_rejected_and_not_stored() {
    let store = InMemoryStore::new();
    let service = RiskService::new(Arc::new(store.clone()));

    let (status, body) = service
        .save_affordability(Uuid::new_v4(), salary(1000.0, -1.0, 0.0))
        .await
        .unwrap_err();

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error.code, "VALIDATION_FAILED");
    assert_eq!(body.error.details.as_deref(), Some("monthly_expenses"));
    assert_eq!(store.affordability_rows().await, 0);
}

#[tokio::test]
async fn missing_affordability_is_not_found() {
    let service = RiskService::new(Arc::new(InMemoryStore::new()));
    let (status, body) = service.affordability(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(body.error.code, "AFFORDABILITY_NOT_FOUND");
}

#[tokio::test]
async fn report_combines_stored_records() {
    let store = InMemoryStore::new();
    let service = RiskService::new(Arc::new(store.clone()));
    let borrower = Uuid::new_v4();

    let mut rep = BorrowerReputation::neutral(borrower);
    rep.reputation_score = 35.0;
    rep.reputation_category = ReputationCategory::Bad;
    rep.is_blacklisted = true;
    rep.defaulted_loans = 2;
    rep.total_loans = 4;
    rep.completed_loans = 2;
    store.put_reputation(rep).await;
    store.set_active_loans(borrower, 4).await;
    service.save_affordability(borrower, salary(2000.0, 900.0, 200.0)).await.unwrap();

    let report = service.risk_report(borrower).await.unwrap();

    assert_eq!(report.active_loan_count, 4);
    assert_eq!(report.assessment.factors.len(), 5);
    assert_eq!(report.assessment.overall_risk, OverallRisk::High);
    assert_eq!(report.assessment.recommendations.len(), 3);
    assert_eq!(report.reputation_summary.completion_rate, 50.0);
    assert_eq!(report.reputation_badge.tone, Tone::Danger);
    assert_eq!(report.factor_views.len(), 5);
    assert!(report
        .factor_views
        .iter()
        .all(|v| v.badge.label == "Negative" && v.badge.tone == Tone::Danger));
    assert_eq!(report.factor_views[1].factor.factor, "Blacklisted");

    let view = report.affordability_view.unwrap();
    assert_eq!(view.dti_tier, DtiTier::Poor);
    assert!((view.result.debt_to_income_ratio - 55.0).abs() < 1e-9);
    assert_eq!(view.risk_tier, RiskTier::from_score(view.result.risk_score));
}

#[tokio::test]
async fn positive_factor_carries_success_badge() {
    let store = InMemoryStore::new();
    let service = RiskService::new(Arc::new(store.clone()));
    let borrower = Uuid::new_v4();

    let mut rep = BorrowerReputation::neutral(borrower);
    rep.reputation_score = 82.0;
    store.put_reputation(rep).await;

    let report = service.risk_report(borrower).await.unwrap();
    assert_eq!(report.factor_views.len(), 1);
    assert_eq!(report.factor_views[0].badge.label, "Positive");
    assert_eq!(report.factor_views[0].badge.tone, Tone::Success);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["factor_views"][0]["factor"], "High reputation score");
    assert_eq!(json["factor_views"][0]["impact"], "POSITIVE");
    assert_eq!(json["factor_views"][0]["badge"]["tone"], "success");
}

#[test]
fn preview_does_not_need_a_store_round_trip() {
    let service = RiskService::new(Arc::new(InMemoryStore::new()));
    let view = service.preview_affordability(&salary(1000.0, 200.0, 100.0)).unwrap();
    assert_eq!(view.dti_tier, DtiTier::Good);
    assert_eq!(view.risk_tier, RiskTier::Medium);
    assert_eq!(view.risk_badge.label, "Medium Risk");
}

fn salary(salary: f64, expenses: f64, existing: f64) -> AffordabilityInput {
    AffordabilityInput {
        monthly_salary: salary,
        monthly_expenses: expenses,
        existing_loan_payments: existing,
        ..Default::default()
    }
}

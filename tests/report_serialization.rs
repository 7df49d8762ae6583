use credlio_risk::domain::affordability::AffordabilityInput;
use credlio_risk::domain::assessment::OverallRisk;
use credlio_risk::domain::reputation::BorrowerReputation;
use credlio_risk::domain::report::AffordabilityView;
use credlio_risk::scoring::affordability::compute_affordability;
use credlio_risk::scoring::assessor::assess_risk;

#[test]
fn assessment_serializes_with_screaming_enums() {
    let rep = BorrowerReputation::neutral(uuid::Uuid::new_v4());
    let out = assess_risk(&rep, None, 5);

    let s = serde_json::to_value(&out).unwrap();
    assert_eq!(s["overall_risk"], "MEDIUM");
    assert_eq!(s["factors"][0]["impact"], "NEGATIVE");
    assert_eq!(s["factors"][0]["factor"], "Multiple active loans");
    assert_eq!(out.overall_risk, OverallRisk::Medium);
}

#[test]
fn affordability_view_flattens_result_and_badges() {
    let input: AffordabilityInput = serde_json::from_value(serde_json::json!({
        "monthly_salary": 1000.0,
        "monthly_expenses": 200.0,
        "existing_loan_payments": 100.0
    }))
    .unwrap();
    let view = AffordabilityView::from(compute_affordability(&input).unwrap());

    let s = serde_json::to_value(&view).unwrap();
    assert_eq!(s["disposable_income"], 700.0);
    assert_eq!(s["dti_tier"], "GOOD");
    assert_eq!(s["dti_badge"]["tone"], "info");
    assert_eq!(s["risk_badge"]["label"], "Medium Risk");
}

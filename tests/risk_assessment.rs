use credlio_risk::domain::affordability::AffordabilityResult;
use credlio_risk::domain::assessment::{FactorImpact, OverallRisk};
use credlio_risk::domain::reputation::BorrowerReputation;
use credlio_risk::scoring::assessor::assess_risk;

#[test]
fn strong_borrower_is_low_risk() {
    let rep = reputation(80.0);

    let out = assess_risk(&rep, None, 1);

    assert_eq!(out.factors.len(), 1);
    assert_eq!(out.factors[0].factor, "High reputation score");
    assert_eq!(out.factors[0].impact, FactorImpact::Positive);
    assert_eq!(out.overall_risk, OverallRisk::Low);
    assert_eq!(out.recommendations.len(), 1);
}

#[test]
fn blacklisted_defaulter_is_high_risk() {
    let mut rep = reputation(35.0);
    rep.is_blacklisted = true;
    rep.defaulted_loans = 2;
    let aff = affordability(55.0, 1200.0);

    let out = assess_risk(&rep, Some(&aff), 4);

    let labels: Vec<&str> = out.factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Low reputation score",
            "Blacklisted",
            "Previous defaults",
            "High debt-to-income ratio",
            "Multiple active loans",
        ]
    );
    assert_eq!(out.count(FactorImpact::Negative), 5);
    assert_eq!(out.overall_risk, OverallRisk::High);
    assert_eq!(out.recommendations.len(), 3);
}

#[test]
fn neutral_borrower_without_history_is_medium() {
    let out = assess_risk(&BorrowerReputation::neutral(uuid::Uuid::new_v4()), None, 0);
    assert!(out.factors.is_empty());
    assert_eq!(out.overall_risk, OverallRisk::Medium);
    assert_eq!(out.recommendations.len(), 2);
}

#[test]
fn missing_affordability_skips_income_factors() {
    let rep = reputation(50.0);
    let tight = affordability(60.0, 100.0);

    assert!(assess_risk(&rep, None, 0).factors.is_empty());

    let with = assess_risk(&rep, Some(&tight), 0);
    assert_eq!(with.count(FactorImpact::Negative), 2);
    assert_eq!(with.overall_risk, OverallRisk::Medium);
}

#[test]
fn three_negatives_tip_into_high() {
    let mut rep = reputation(70.0);
    rep.is_blacklisted = true;
    let tight = affordability(60.0, 100.0);

    let out = assess_risk(&rep, Some(&tight), 0);
    assert_eq!(out.count(FactorImpact::Negative), 3);
    assert_eq!(out.overall_risk, OverallRisk::High);
}

#[test]
fn dti_thresholds_are_strict() {
    let rep = reputation(50.0);
    assert!(assess_risk(&rep, Some(&affordability(50.0, 2000.0)), 0).factors.is_empty());
    assert!(assess_risk(&rep, Some(&affordability(20.0, 2000.0)), 0).factors.is_empty());
    assert!(assess_risk(&rep, Some(&affordability(49.0, 500.0)), 0).factors.is_empty());
}

#[test]
fn low_dti_and_high_score_is_low_risk() {
    let out = assess_risk(&reputation(75.0), Some(&affordability(12.0, 3000.0)), 2);
    assert_eq!(out.count(FactorImpact::Positive), 2);
    assert_eq!(out.overall_risk, OverallRisk::Low);
}

#[test]
fn score_of_forty_is_not_low_reputation() {
    let out = assess_risk(&reputation(40.0), None, 0);
    assert!(out.factors.is_empty());
    assert_eq!(out.overall_risk, OverallRisk::Medium);

    let below = assess_risk(&reputation(39.99), None, 0);
    assert_eq!(below.factors[0].factor, "Low reputation score");
    assert_eq!(below.overall_risk, OverallRisk::High);
}

#[test]
fn high_reputation_starts_at_seventy_five() {
    let out = assess_risk(&reputation(74.0), None, 0);
    assert!(out.factors.is_empty());
    assert_eq!(out.overall_risk, OverallRisk::Medium);

    let at = assess_risk(&reputation(75.0), None, 0);
    assert_eq!(at.factors.len(), 1);
    assert_eq!(at.factors[0].factor, "High reputation score");
    assert_eq!(at.overall_risk, OverallRisk::Low);
}

fn reputation(score: f64) -> BorrowerReputation {
    let mut rep = BorrowerReputation::neutral(uuid::Uuid::new_v4());
    rep.reputation_score = score;
    rep
}

fn affordability(dti: f64, disposable: f64) -> AffordabilityResult {
    AffordabilityResult {
        total_income: 4000.0,
        disposable_income: disposable,
        debt_to_income_ratio: dti,
        risk_score: 40,
        max_affordable_loan: disposable.max(0.0) * 0.3 * 12.0,
    }
}

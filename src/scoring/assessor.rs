use crate::domain::affordability::AffordabilityResult;
use crate::domain::assessment::{FactorImpact, OverallRisk, RiskAssessment, RiskFactor};
use crate::domain::reputation::BorrowerReputation;

pub const HIGH_REPUTATION_SCORE: f64 = 75.0;
pub const LOW_REPUTATION_SCORE: f64 = 40.0;
pub const LOW_RISK_MIN_SCORE: f64 = 60.0;
pub const HIGH_DTI: f64 = 50.0;
pub const LOW_DTI: f64 = 20.0;
pub const LOW_DISPOSABLE_INCOME: f64 = 500.0;
pub const MAX_ACTIVE_LOANS: u32 = 3;
pub const HIGH_RISK_NEGATIVE_COUNT: usize = 2;

pub fn collect_factors(
    reputation: &BorrowerReputation,
    affordability: Option<&AffordabilityResult>,
    active_loan_count: u32,
) -> Vec<RiskFactor> {
    let score = reputation.score();
    let mut factors = Vec::new();

    if score >= HIGH_REPUTATION_SCORE {
        factors.push(RiskFactor::positive(
            "High reputation score",
            format!("Reputation score of {score:.0} reflects a strong repayment history"),
        ));
    } else if score < LOW_REPUTATION_SCORE {
        factors.push(RiskFactor::negative(
            "Low reputation score",
            format!("Reputation score of {score:.0} is below {LOW_REPUTATION_SCORE:.0}"),
        ));
    }

    if reputation.is_blacklisted {
        factors.push(RiskFactor::negative(
            "Blacklisted",
            "Borrower has been reported as a defaulter by a lender",
        ));
    }

    if reputation.defaulted_loans > 0 {
        factors.push(RiskFactor::negative(
            "Previous defaults",
            format!("{} defaulted loan(s) on record", reputation.defaulted_loans),
        ));
    }

    if let Some(aff) = affordability {
        if aff.debt_to_income_ratio > HIGH_DTI {
            factors.push(RiskFactor::negative(
                "High debt-to-income ratio",
                format!("{:.1}% of income already committed", aff.debt_to_income_ratio),
            ));
        } else if aff.debt_to_income_ratio < LOW_DTI {
            factors.push(RiskFactor::positive(
                "Low debt-to-income ratio",
                format!("Only {:.1}% of income committed", aff.debt_to_income_ratio),
            ));
        }

        if aff.disposable_income < LOW_DISPOSABLE_INCOME {
            factors.push(RiskFactor::negative(
                "Low disposable income",
                format!("{:.2} left each month after obligations", aff.disposable_income),
            ));
        }
    }

    if active_loan_count > MAX_ACTIVE_LOANS {
        factors.push(RiskFactor::negative(
            "Multiple active loans",
            format!("{active_loan_count} loans currently active"),
        ));
    }

    factors
}

pub fn overall_risk(factors: &[RiskFactor], reputation_score: f64) -> OverallRisk {
    let negative = factors.iter().filter(|f| f.impact == FactorImpact::Negative).count();
    let positive = factors.iter().filter(|f| f.impact == FactorImpact::Positive).count();

    if negative > HIGH_RISK_NEGATIVE_COUNT || reputation_score < LOW_REPUTATION_SCORE {
        OverallRisk::High
    } else if positive > negative && reputation_score >= LOW_RISK_MIN_SCORE {
        OverallRisk::Low
    } else {
        OverallRisk::Medium
    }
}

pub fn recommendations(risk: OverallRisk) -> Vec<String> {
    let items: &[&str] = match risk {
        OverallRisk::High => &[
            "Require collateral or a guarantor before lending",
            "Start with a smaller initial loan amount",
            "Request additional income and identity documentation",
        ],
        OverallRisk::Medium => &[
            "Verify income with recent payslips or bank statements",
            "Prefer shorter repayment terms",
        ],
        OverallRisk::Low => &["Standard lending terms are appropriate"],
    };
    items.iter().map(|s| s.to_string()).collect()
}

pub fn assess_risk(
    reputation: &BorrowerReputation,
    affordability: Option<&AffordabilityResult>,
    active_loan_count: u32,
) -> RiskAssessment {
    let factors = collect_factors(reputation, affordability, active_loan_count);
    let overall_risk = overall_risk(&factors, reputation.score());

    RiskAssessment {
        overall_risk,
        recommendations: recommendations(overall_risk),
        factors,
    }
}

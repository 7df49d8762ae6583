use crate::domain::affordability::{AffordabilityInput, AffordabilityResult};
use crate::scoring::types::{AffordabilityError, RiskScoreWeights};

/// Share of disposable income a borrower can commit to a new loan.
pub const AFFORDABILITY_SHARE: f64 = 0.30;
/// Months the affordable repayment is projected over.
pub const AFFORDABILITY_HORIZON_MONTHS: f64 = 12.0;
/// Ratio reported when there is no income to divide by.
pub const NO_INCOME_DTI: f64 = 100.0;

pub fn clamp_pct(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

pub fn validate(input: &AffordabilityInput) -> Result<(), AffordabilityError> {
    for (field, value) in input.fields() {
        if !value.is_finite() {
            return Err(AffordabilityError::NotFinite { field });
        }
        if value < 0.0 {
            return Err(AffordabilityError::Negative { field });
        }
    }
    if !input.total_income().is_finite() {
        return Err(AffordabilityError::NotFinite { field: "total_income" });
    }
    if !input.total_obligations().is_finite() {
        return Err(AffordabilityError::NotFinite { field: "total_obligations" });
    }
    Ok(())
}

pub fn debt_to_income_ratio(total_income: f64, obligations: f64) -> f64 {
    if total_income <= 0.0 {
        return NO_INCOME_DTI;
    }
    clamp_pct(obligations * 100.0 / total_income)
}

pub fn max_affordable_loan(disposable_income: f64) -> f64 {
    disposable_income.max(0.0) * AFFORDABILITY_SHARE * AFFORDABILITY_HORIZON_MONTHS
}

/// Blend of the debt-to-income ratio and a cushion term that shrinks as
/// disposable income grows. Non-decreasing in DTI, non-increasing in
/// disposable income.
pub fn risk_score(debt_to_income_ratio: f64, disposable_income: f64, weights: &RiskScoreWeights) -> u8 {
    let dti_component = clamp_pct(debt_to_income_ratio);
    let reference = weights.cushion_reference.max(f64::EPSILON);
    let cushion_component = 100.0 * reference / (reference + disposable_income.max(0.0));

    let raw = weights.dti_weight * dti_component + weights.cushion_weight * clamp_pct(cushion_component);
    clamp_pct(raw).round() as u8
}

pub fn compute_affordability(input: &AffordabilityInput) -> Result<AffordabilityResult, AffordabilityError> {
    compute_affordability_with(input, &RiskScoreWeights::default())
}

pub fn compute_affordability_with(
    input: &AffordabilityInput,
    weights: &RiskScoreWeights,
) -> Result<AffordabilityResult, AffordabilityError> {
    validate(input)?;

    let total_income = input.total_income();
    let disposable_income = total_income - input.total_obligations();
    let dti = debt_to_income_ratio(total_income, input.total_obligations());
    let max_loan = max_affordable_loan(disposable_income);
    if !max_loan.is_finite() {
        return Err(AffordabilityError::NotFinite { field: "max_affordable_loan" });
    }

    Ok(AffordabilityResult {
        total_income,
        disposable_income,
        debt_to_income_ratio: dti,
        risk_score: risk_score(dti, disposable_income, weights),
        max_affordable_loan: max_loan,
    })
}

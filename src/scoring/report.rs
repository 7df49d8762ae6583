use crate::domain::reputation::BorrowerReputation;
use crate::scoring::affordability::clamp_pct;
use crate::scoring::types::ReputationSummary;

fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        0.0
    } else {
        clamp_pct(numerator / denominator * 100.0)
    }
}

pub fn summarize_reputation(reputation: &BorrowerReputation) -> ReputationSummary {
    let total_payments = reputation
        .on_time_payments
        .saturating_add(reputation.late_payments)
        .saturating_add(reputation.very_late_payments);

    let outstanding = reputation.total_borrowed - reputation.total_repaid;

    ReputationSummary {
        total_payments,
        on_time_payment_rate: ratio_pct(reputation.on_time_payments as f64, total_payments as f64),
        repayment_rate: ratio_pct(reputation.total_repaid, reputation.total_borrowed),
        completion_rate: ratio_pct(reputation.completed_loans as f64, reputation.total_loans as f64),
        outstanding_amount: if outstanding.is_finite() { outstanding.max(0.0) } else { 0.0 },
    }
}

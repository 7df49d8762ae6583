use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorImpact {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    pub factor: String,
    pub impact: FactorImpact,
    pub description: String,
}

impl RiskFactor {
    pub fn positive(factor: &str, description: impl Into<String>) -> Self {
        Self {
            factor: factor.to_string(),
            impact: FactorImpact::Positive,
            description: description.into(),
        }
    }

    pub fn negative(factor: &str, description: impl Into<String>) -> Self {
        Self {
            factor: factor.to_string(),
            impact: FactorImpact::Negative,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub overall_risk: OverallRisk,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    pub fn count(&self, impact: FactorImpact) -> usize {
        self.factors.iter().filter(|f| f.impact == impact).count()
    }
}

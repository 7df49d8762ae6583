use crate::domain::assessment::{FactorImpact, OverallRisk};
use crate::domain::reputation::ReputationCategory;
use crate::scoring::types::{DtiTier, RiskTier};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

const fn badge(label: &'static str, tone: Tone) -> Badge {
    Badge { label, tone }
}

impl ReputationCategory {
    pub fn badge(&self) -> Badge {
        match self {
            ReputationCategory::Good => badge("Good", Tone::Success),
            ReputationCategory::Moderate => badge("Moderate", Tone::Warning),
            ReputationCategory::Bad => badge("Bad", Tone::Danger),
        }
    }
}

impl OverallRisk {
    pub fn badge(&self) -> Badge {
        match self {
            OverallRisk::Low => badge("Low Risk", Tone::Success),
            OverallRisk::Medium => badge("Medium Risk", Tone::Warning),
            OverallRisk::High => badge("High Risk", Tone::Danger),
        }
    }
}

impl RiskTier {
    pub fn badge(&self) -> Badge {
        match self {
            RiskTier::Low => badge("Low Risk", Tone::Success),
            RiskTier::Medium => badge("Medium Risk", Tone::Warning),
            RiskTier::High => badge("High Risk", Tone::Danger),
        }
    }

    pub fn label(&self) -> &'static str {
        self.badge().label
    }
}

impl DtiTier {
    pub fn badge(&self) -> Badge {
        match self {
            DtiTier::Excellent => badge("Excellent", Tone::Success),
            DtiTier::Good => badge("Good", Tone::Info),
            DtiTier::Fair => badge("Fair", Tone::Warning),
            DtiTier::Poor => badge("Poor", Tone::Danger),
        }
    }

    pub fn label(&self) -> &'static str {
        self.badge().label
    }
}

impl FactorImpact {
    pub fn badge(&self) -> Badge {
        match self {
            FactorImpact::Positive => badge("Positive", Tone::Success),
            FactorImpact::Negative => badge("Negative", Tone::Danger),
        }
    }
}

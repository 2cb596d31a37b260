use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Severity classification. Variant order is severity order, so the
/// derived `Ord` ranks `NeedsFurtherCheck` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    LowRisk,
    MediumRisk,
    HighRisk,
    NeedsFurtherCheck,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [
        RiskTier::LowRisk,
        RiskTier::MediumRisk,
        RiskTier::HighRisk,
        RiskTier::NeedsFurtherCheck,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::LowRisk => "Low Risk",
            RiskTier::MediumRisk => "Medium Risk",
            RiskTier::HighRisk => "High Risk",
            RiskTier::NeedsFurtherCheck => "Needs Further Check",
        }
    }

    /// Explanation shown alongside the overall tier.
    pub fn summary(&self) -> &'static str {
        match self {
            RiskTier::LowRisk => {
                "Based on your responses, your risk factors appear to be low. \
                 Continue with regular check-ups and health monitoring."
            }
            RiskTier::MediumRisk => {
                "Your responses indicate some risk factors that should be monitored. \
                 Consider discussing these with a healthcare provider."
            }
            RiskTier::HighRisk => {
                "Your responses indicate several risk factors that should be evaluated \
                 by a healthcare professional soon."
            }
            RiskTier::NeedsFurtherCheck => {
                "Your responses indicate significant risk factors that require prompt \
                 evaluation by a healthcare professional."
            }
        }
    }

    pub fn is_elevated(&self) -> bool {
        *self >= RiskTier::HighRisk
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskTier::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownRiskTier(s.to_string()))
    }
}

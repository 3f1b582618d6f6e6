//! The fixed set of competencies assessed by the survey.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named skill area aggregating one or more assessment questions.
///
/// The serialized form is the display label, so persisted assessments read
/// as `"Risk & Compliance (GOVN)": 2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Competency {
    #[serde(rename = "Agile Mindset (AGIL)")]
    AgileMindset,
    #[serde(rename = "Product Management (PROD)")]
    ProductManagement,
    #[serde(rename = "Requirements (REQM)")]
    Requirements,
    #[serde(rename = "Business Analysis & Decisioning (BUAN/DTAN)")]
    BusinessAnalysis,
    #[serde(rename = "Stakeholdering & Collaboration (RLMT)")]
    Stakeholdering,
    #[serde(rename = "Change & Innovation (CIPM/INOV)")]
    ChangeInnovation,
    #[serde(rename = "Risk & Compliance (GOVN)")]
    RiskCompliance,
}

impl Competency {
    /// Every competency, in competency-map order.
    pub const ALL: [Competency; 7] = [
        Competency::AgileMindset,
        Competency::ProductManagement,
        Competency::Requirements,
        Competency::BusinessAnalysis,
        Competency::Stakeholdering,
        Competency::ChangeInnovation,
        Competency::RiskCompliance,
    ];

    /// Display label including the parenthesised framework code.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AgileMindset => "Agile Mindset (AGIL)",
            Self::ProductManagement => "Product Management (PROD)",
            Self::Requirements => "Requirements (REQM)",
            Self::BusinessAnalysis => "Business Analysis & Decisioning (BUAN/DTAN)",
            Self::Stakeholdering => "Stakeholdering & Collaboration (RLMT)",
            Self::ChangeInnovation => "Change & Innovation (CIPM/INOV)",
            Self::RiskCompliance => "Risk & Compliance (GOVN)",
        }
    }

    /// Label with the code suffix removed: everything before the first `(`, trimmed.
    pub fn short_name(&self) -> &'static str {
        strip_code_suffix(self.label())
    }

    /// The framework code inside the parentheses, e.g. `BUAN/DTAN`.
    pub fn code(&self) -> &'static str {
        let label = self.label();
        label
            .find('(')
            .and_then(|start| {
                label[start + 1..]
                    .find(')')
                    .map(|end| &label[start + 1..start + 1 + end])
            })
            .unwrap_or(label)
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cut a competency label at its first `(` and trim.
pub fn strip_code_suffix(label: &str) -> &str {
    label.split('(').next().unwrap_or(label).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_strips_code() {
        assert_eq!(Competency::RiskCompliance.short_name(), "Risk & Compliance");
        assert_eq!(
            Competency::BusinessAnalysis.short_name(),
            "Business Analysis & Decisioning"
        );
    }

    #[test]
    fn test_code_extraction() {
        assert_eq!(Competency::AgileMindset.code(), "AGIL");
        assert_eq!(Competency::ChangeInnovation.code(), "CIPM/INOV");
    }

    #[test]
    fn test_strip_code_suffix_without_parenthesis() {
        assert_eq!(strip_code_suffix("  Plain Name "), "Plain Name");
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Competency::RiskCompliance).unwrap();
        assert_eq!(json, "\"Risk & Compliance (GOVN)\"");
        let back: Competency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Competency::RiskCompliance);
    }
}

//! Pick a comparison assessment and label changes between two assessments.

use super::policy::RecommendationPolicy;
use serde::Serialize;
use std::fmt;
use teamassess_scoring::Assessment;

/// Choose the assessment `current` should be compared against.
///
/// Only assessments of the same assessee (excluding `current` itself) are
/// considered. The first one tagged as a baseline wins; otherwise the most
/// recent one created strictly before `current`.
pub fn select_comparison<'a>(
    current: &Assessment,
    all: &'a [Assessment],
) -> Option<&'a Assessment> {
    let candidates = all
        .iter()
        .filter(|a| a.id != current.id && a.meta.assessee_name == current.meta.assessee_name);

    if let Some(baseline) = candidates.clone().find(|a| a.meta.is_baseline()) {
        return Some(baseline);
    }

    candidates
        .filter(|a| a.timestamp < current.timestamp)
        .fold(None, |latest: Option<&Assessment>, a| match latest {
            Some(l) if l.timestamp >= a.timestamp => Some(l),
            _ => Some(a),
        })
}

/// Direction of a score change between two assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeDirection {
    #[serde(rename = "Significant Improvement")]
    SignificantImprovement,
    Improved,
    #[serde(rename = "No Change")]
    NoChange,
    Declined,
    #[serde(rename = "Significant Decline")]
    SignificantDecline,
}

impl ChangeDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignificantImprovement => "Significant Improvement",
            Self::Improved => "Improved",
            Self::NoChange => "No Change",
            Self::Declined => "Declined",
            Self::SignificantDecline => "Significant Decline",
        }
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label a competency or overall delta, distinguishing moves beyond the
/// policy's significance threshold.
pub fn change_direction(delta: f64, policy: &RecommendationPolicy) -> ChangeDirection {
    if policy.is_improvement(Some(delta)) {
        ChangeDirection::SignificantImprovement
    } else if delta > 0.0 {
        ChangeDirection::Improved
    } else if policy.is_regression(Some(delta)) {
        ChangeDirection::SignificantDecline
    } else if delta < 0.0 {
        ChangeDirection::Declined
    } else {
        ChangeDirection::NoChange
    }
}

/// Label a per-question delta. Single answers have no significance band.
pub fn question_direction(delta: i32) -> ChangeDirection {
    match delta.signum() {
        1 => ChangeDirection::Improved,
        -1 => ChangeDirection::Declined,
        _ => ChangeDirection::NoChange,
    }
}

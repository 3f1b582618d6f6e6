//! Thresholds that drive level classification, tiers, gaps and sequencing.

use crate::types::{DevelopmentLevel, PriorityTier};
use serde::{Deserialize, Serialize};

/// Minimum absolute change that counts as a real improvement or regression.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.2;
/// Scores below this need priority development.
const PRIORITY_LEVEL_BELOW: f64 = 2.5;
/// Scores below this (and not priority) are still developing.
const DEVELOPING_LEVEL_BELOW: f64 = 3.5;
const HIGH_PRIORITY_BELOW: f64 = 3.0;
const MEDIUM_PRIORITY_BELOW: f64 = 4.0;
/// Scores below this count as a gap.
const GAP_BELOW: f64 = 4.0;
const MAX_GAPS: usize = 3;
const QUICK_WIN_CAP: usize = 5;
const STRATEGIC_CAP: usize = 8;
const INTERVENTIONS_PER_GAP: usize = 2;

/// Tunable recommendation thresholds. `Default` reproduces the stock rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPolicy {
    pub significance_threshold: f64,
    pub priority_level_below: f64,
    pub developing_level_below: f64,
    pub high_priority_below: f64,
    pub medium_priority_below: f64,
    pub gap_below: f64,
    pub max_gaps: usize,
    /// Cap on the 0-2 week bucket.
    pub quick_win_cap: usize,
    /// Cap on the 2-6 week bucket.
    pub strategic_cap: usize,
    pub interventions_per_gap: usize,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            significance_threshold: SIGNIFICANCE_THRESHOLD,
            priority_level_below: PRIORITY_LEVEL_BELOW,
            developing_level_below: DEVELOPING_LEVEL_BELOW,
            high_priority_below: HIGH_PRIORITY_BELOW,
            medium_priority_below: MEDIUM_PRIORITY_BELOW,
            gap_below: GAP_BELOW,
            max_gaps: MAX_GAPS,
            quick_win_cap: QUICK_WIN_CAP,
            strategic_cap: STRATEGIC_CAP,
            interventions_per_gap: INTERVENTIONS_PER_GAP,
        }
    }
}

impl RecommendationPolicy {
    /// Level implied by the score alone, before regression escalation.
    pub fn base_level(&self, score: f64) -> DevelopmentLevel {
        if score < self.priority_level_below {
            DevelopmentLevel::Priority
        } else if score < self.developing_level_below {
            DevelopmentLevel::Developing
        } else {
            DevelopmentLevel::Sustain
        }
    }

    pub fn is_regression(&self, delta: Option<f64>) -> bool {
        delta.is_some_and(|d| d < -self.significance_threshold)
    }

    pub fn is_improvement(&self, delta: Option<f64>) -> bool {
        delta.is_some_and(|d| d > self.significance_threshold)
    }

    pub fn tier(&self, score: f64, regressed: bool) -> PriorityTier {
        if score < self.high_priority_below || regressed {
            PriorityTier::High
        } else if score < self.medium_priority_below {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn is_gap(&self, score: f64, regressed: bool) -> bool {
        score < self.gap_below || regressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_level_cutoffs() {
        let policy = RecommendationPolicy::default();
        assert_eq!(policy.base_level(2.49), DevelopmentLevel::Priority);
        assert_eq!(policy.base_level(2.5), DevelopmentLevel::Developing);
        assert_eq!(policy.base_level(3.49), DevelopmentLevel::Developing);
        assert_eq!(policy.base_level(3.5), DevelopmentLevel::Sustain);
    }

    #[test]
    fn test_significance_is_strict() {
        let policy = RecommendationPolicy::default();
        assert!(!policy.is_regression(Some(-0.2)));
        assert!(policy.is_regression(Some(-0.21)));
        assert!(!policy.is_improvement(Some(0.2)));
        assert!(policy.is_improvement(Some(0.5)));
        assert!(!policy.is_regression(None));
    }

    #[test]
    fn test_tiers() {
        let policy = RecommendationPolicy::default();
        assert_eq!(policy.tier(2.9, false), PriorityTier::High);
        assert_eq!(policy.tier(3.0, false), PriorityTier::Medium);
        assert_eq!(policy.tier(4.0, false), PriorityTier::Low);
        assert_eq!(policy.tier(4.8, true), PriorityTier::High);
    }

    #[test]
    fn test_partial_policy_keeps_defaults() {
        let policy: RecommendationPolicy =
            serde_json::from_str(r#"{"high_priority_below": 2.0}"#).unwrap();
        assert_eq!(policy.high_priority_below, 2.0);
        assert_eq!(policy.max_gaps, 3);
    }
}

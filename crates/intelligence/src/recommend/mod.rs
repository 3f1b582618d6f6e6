//! Development recommendations derived from a scored assessment.

pub mod comparative;
mod engine;
mod explainer;
pub mod library;
mod policy;

pub use comparative::{change_direction, question_direction, select_comparison, ChangeDirection};
pub use engine::{generate_recommendations, RecommendationEngine, Recommender};
pub use explainer::compose_narrative;
pub use library::{
    competency_kpis, interventions_for, validate_library, CompetencyInterventions,
    InterventionSet, LibraryError, INTERVENTION_LIBRARY,
};
pub use policy::{RecommendationPolicy, SIGNIFICANCE_THRESHOLD};

use crate::types::{DevelopmentLevel, PriorityTier, SequenceWindow, Timeframe};
use indexmap::IndexMap;
use serde::Serialize;
use teamassess_scoring::{Competency, ScoreBand};

/// Full recommendation output for one assessment. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub overall: OverallRecommendation,
    /// Breakdown for every scored competency, in competency-map order.
    pub competencies: IndexMap<Competency, CompetencyRecommendation>,
}

/// Headline figures, gaps and the intervention plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallRecommendation {
    pub score: f64,
    pub band: ScoreBand,
    pub narrative: String,
    pub top_gaps: Vec<Gap>,
    pub sequence: InterventionSequence,
}

/// A competency singled out for development.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub competency: Competency,
    pub score: f64,
    pub reason: GapReason,
    pub delta: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapReason {
    #[serde(rename = "Performance regression detected")]
    Regression,
    #[serde(rename = "Below target performance")]
    BelowTarget,
}

impl GapReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Regression => "Performance regression detected",
            Self::BelowTarget => "Below target performance",
        }
    }
}

/// Two-phase plan: quick wins first, then strategic initiatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterventionSequence {
    #[serde(rename = "weeks0to2")]
    pub weeks_0_to_2: Vec<SequencedIntervention>,
    #[serde(rename = "weeks2to6")]
    pub weeks_2_to_6: Vec<SequencedIntervention>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencedIntervention {
    pub competency: Competency,
    pub intervention: &'static str,
    pub timeframe: SequenceWindow,
}

/// Recommendation for a single competency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetencyRecommendation {
    pub score: f64,
    pub band: ScoreBand,
    pub level: DevelopmentLevel,
    /// Change against the comparison assessment, when it scored this competency.
    pub delta: Option<f64>,
    pub interventions: &'static [&'static str],
    pub kpis: &'static [&'static str],
    pub priority: PriorityTier,
    pub timeframe: Timeframe,
}

/// Items for a quick view: every 0-2 week item, then the first three 2-6 week items.
pub fn priority_recommendations(report: &RecommendationReport) -> Vec<&SequencedIntervention> {
    let sequence = &report.overall.sequence;
    sequence
        .weeks_0_to_2
        .iter()
        .chain(sequence.weeks_2_to_6.iter().take(3))
        .collect()
}

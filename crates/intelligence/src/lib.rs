//! Rule-based development recommendations for competency assessments.
//!
//! This crate provides:
//! - The static intervention library with a startup self-check
//! - The recommendation engine (levels, deltas, gap ranking, sequencing)
//! - The report narrative
//! - Comparison-assessment selection and change labels

pub mod recommend;
pub mod types;

pub use recommend::{
    change_direction, competency_kpis, compose_narrative, generate_recommendations,
    interventions_for, priority_recommendations, question_direction, select_comparison,
    validate_library, ChangeDirection, CompetencyInterventions, CompetencyRecommendation, Gap,
    GapReason, InterventionSequence, InterventionSet, LibraryError, OverallRecommendation,
    RecommendationEngine, RecommendationPolicy, RecommendationReport, Recommender,
    SequencedIntervention, INTERVENTION_LIBRARY, SIGNIFICANCE_THRESHOLD,
};
pub use types::{DevelopmentLevel, PriorityTier, SequenceWindow, Timeframe};

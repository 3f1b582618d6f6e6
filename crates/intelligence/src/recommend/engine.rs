//! Rule-based recommendation engine.

use super::explainer::compose_narrative;
use super::library::interventions_for;
use super::policy::RecommendationPolicy;
use super::{
    CompetencyRecommendation, Gap, GapReason, InterventionSequence, OverallRecommendation,
    RecommendationReport, SequencedIntervention,
};
use crate::types::{DevelopmentLevel, PriorityTier, SequenceWindow};
use indexmap::IndexMap;
use teamassess_scoring::{Assessment, Competency, ScoreBand};

/// Trait for producing a report from a current and an optional prior assessment.
pub trait Recommender {
    /// `None` when there is no current assessment.
    fn recommend(
        &self,
        current: Option<&Assessment>,
        prior: Option<&Assessment>,
    ) -> Option<RecommendationReport>;
}

/// Per-competency classification, before packaging.
#[derive(Debug, Clone, Copy)]
struct CompetencyAnalysis {
    competency: Competency,
    score: f64,
    level: DevelopmentLevel,
    delta: Option<f64>,
    regressed: bool,
    tier: PriorityTier,
}

/// Recommendation engine driven by a [`RecommendationPolicy`].
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    policy: RecommendationPolicy,
}

impl RecommendationEngine {
    /// Create an engine with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: RecommendationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Build the full report for `current`, comparing against `prior` when given.
    pub fn analyze(&self, current: &Assessment, prior: Option<&Assessment>) -> RecommendationReport {
        let analyses: Vec<CompetencyAnalysis> = current
            .competency_scores
            .iter()
            .map(|(competency, score)| self.classify(*competency, *score, prior))
            .collect();

        let competencies: IndexMap<Competency, CompetencyRecommendation> = analyses
            .iter()
            .map(|a| {
                let set = interventions_for(a.competency, a.level);
                let rec = CompetencyRecommendation {
                    score: a.score,
                    band: ScoreBand::for_score(a.score),
                    level: a.level,
                    delta: a.delta,
                    interventions: set.interventions,
                    kpis: set.kpis,
                    priority: a.tier,
                    timeframe: a.level.timeframe(),
                };
                (a.competency, rec)
            })
            .collect();

        let gaps = self.rank_gaps(&analyses);
        let sequence = self.sequence(&gaps);

        let overall_delta = prior.map(|p| current.overall_score - p.overall_score);
        let gap_competencies: Vec<Competency> = gaps.iter().map(|g| g.competency).collect();
        let narrative = compose_narrative(
            &current.meta.assessee_name,
            current.overall_score,
            overall_delta,
            &gap_competencies,
            &sequence,
            self.policy.significance_threshold,
        );

        tracing::debug!(
            id = %current.id,
            competencies = competencies.len(),
            gaps = gaps.len(),
            quick_wins = sequence.weeks_0_to_2.len(),
            strategic = sequence.weeks_2_to_6.len(),
            compared = prior.is_some(),
            "recommendations generated"
        );

        RecommendationReport {
            overall: OverallRecommendation {
                score: current.overall_score,
                band: current.overall_band(),
                narrative,
                top_gaps: gaps
                    .iter()
                    .map(|g| Gap {
                        competency: g.competency,
                        score: g.score,
                        reason: if g.regressed {
                            GapReason::Regression
                        } else {
                            GapReason::BelowTarget
                        },
                        delta: g.delta,
                    })
                    .collect(),
                sequence,
            },
            competencies,
        }
    }

    fn classify(
        &self,
        competency: Competency,
        score: f64,
        prior: Option<&Assessment>,
    ) -> CompetencyAnalysis {
        let delta = prior
            .and_then(|p| p.competency_score(competency))
            .map(|before| score - before);
        let regressed = self.policy.is_regression(delta);

        let mut level = self.policy.base_level(score);
        if regressed && level == DevelopmentLevel::Sustain {
            level = DevelopmentLevel::Developing;
        }

        CompetencyAnalysis {
            competency,
            score,
            level,
            delta,
            regressed,
            tier: self.policy.tier(score, regressed),
        }
    }

    /// Regressions first, then ascending score. The sort is stable so equal
    /// scores keep competency-map order.
    fn rank_gaps(&self, analyses: &[CompetencyAnalysis]) -> Vec<CompetencyAnalysis> {
        let mut gaps: Vec<CompetencyAnalysis> = analyses
            .iter()
            .filter(|a| self.policy.is_gap(a.score, a.regressed))
            .copied()
            .collect();
        gaps.sort_by(|a, b| {
            b.regressed
                .cmp(&a.regressed)
                .then_with(|| a.score.total_cmp(&b.score))
        });
        gaps.truncate(self.policy.max_gaps);
        gaps
    }

    fn sequence(&self, gaps: &[CompetencyAnalysis]) -> InterventionSequence {
        let per_gap = self.policy.interventions_per_gap;
        let mut sequence = InterventionSequence::default();

        for gap in gaps {
            let interventions = interventions_for(gap.competency, gap.level).interventions;
            let item = |intervention: &&'static str, timeframe| SequencedIntervention {
                competency: gap.competency,
                intervention: *intervention,
                timeframe,
            };
            if gap.level == DevelopmentLevel::Priority {
                sequence.weeks_0_to_2.extend(
                    interventions
                        .iter()
                        .take(per_gap)
                        .map(|i| item(i, SequenceWindow::Weeks0To2)),
                );
                sequence.weeks_2_to_6.extend(
                    interventions
                        .iter()
                        .skip(per_gap)
                        .map(|i| item(i, SequenceWindow::Weeks2To6)),
                );
            } else {
                sequence.weeks_2_to_6.extend(
                    interventions
                        .iter()
                        .take(per_gap)
                        .map(|i| item(i, SequenceWindow::Weeks2To6)),
                );
            }
        }

        sequence.weeks_0_to_2.truncate(self.policy.quick_win_cap);
        sequence.weeks_2_to_6.truncate(self.policy.strategic_cap);
        sequence
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(
        &self,
        current: Option<&Assessment>,
        prior: Option<&Assessment>,
    ) -> Option<RecommendationReport> {
        current.map(|a| self.analyze(a, prior))
    }
}

/// Generate recommendations with the default policy.
///
/// Returns `None` when `current` is absent. A prior assessment that lacks a
/// competency simply yields no delta for it.
pub fn generate_recommendations(
    current: Option<&Assessment>,
    prior: Option<&Assessment>,
) -> Option<RecommendationReport> {
    RecommendationEngine::new().recommend(current, prior)
}

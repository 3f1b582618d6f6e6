//! Immutable assessment records and the factory that builds them.

use crate::band::ScoreBand;
use crate::calculator::{competency_scores, overall_score, CompetencyScores};
use crate::competency::Competency;
use crate::responses::{missing_questions, Responses};
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// Role options offered by the intake form.
pub const ROLES: &[&str] = &["Product Owner", "Business Expert", "Other"];

/// Assessment type tags offered by the intake form.
pub const ASSESSMENT_TYPES: &[&str] = &["Baseline", "Week 6", "Custom"];

/// Type tag preferred when picking a comparison assessment.
pub const BASELINE_TYPE: &str = "Baseline";

/// Unique, generation-time-ordered assessment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub String);

impl AssessmentId {
    /// Generate a fresh time-ordered id (UUIDv7).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssessmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AssessmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Who was assessed, and in which context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentMeta {
    pub assessee_name: String,
    pub role: String,
    pub squad: String,
    pub tribe: String,
    pub assessment_type: String,
    /// Calendar date of the assessment (`YYYY-MM-DD`).
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

impl AssessmentMeta {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.assessee_name.trim().is_empty() {
            missing.push("assessee name");
        }
        if self.role.trim().is_empty() {
            missing.push("role");
        }
        if self.squad.trim().is_empty() {
            missing.push("squad");
        }
        if self.tribe.trim().is_empty() {
            missing.push("tribe");
        }
        if self.assessment_type.trim().is_empty() {
            missing.push("assessment type");
        }
        missing
    }

    pub fn is_baseline(&self) -> bool {
        self.assessment_type == BASELINE_TYPE
    }
}

/// A submitted assessment with its derived scores.
///
/// Never mutated after creation; corrections produce a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: AssessmentId,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub meta: AssessmentMeta,
    pub responses: Responses,
    pub competency_scores: CompetencyScores,
    pub overall_score: f64,
}

impl Assessment {
    /// Build an assessment with an explicit identity.
    pub fn with_identity(
        id: AssessmentId,
        timestamp: OffsetDateTime,
        meta: AssessmentMeta,
        responses: Responses,
    ) -> Self {
        let competency_scores = competency_scores(&responses);
        let overall_score = overall_score(&responses);
        Self {
            id,
            timestamp,
            meta,
            responses,
            competency_scores,
            overall_score,
        }
    }

    /// Band of the overall score.
    pub fn overall_band(&self) -> ScoreBand {
        ScoreBand::for_score(self.overall_score)
    }

    /// Score of one competency, if any of its questions were answered.
    pub fn competency_score(&self, competency: Competency) -> Option<f64> {
        self.competency_scores.get(&competency).copied()
    }
}

/// Create an assessment from metadata and responses.
///
/// Completeness is the caller's precondition; derived scores are computed
/// over whatever responses are given.
pub fn create_assessment(meta: AssessmentMeta, responses: Responses) -> Assessment {
    let assessment = Assessment::with_identity(
        AssessmentId::generate(),
        OffsetDateTime::now_utc(),
        meta,
        responses,
    );
    tracing::debug!(
        id = %assessment.id,
        overall = assessment.overall_score,
        competencies = assessment.competency_scores.len(),
        "assessment created"
    );
    assessment
}

/// Today's date in `YYYY-MM-DD` form (UTC).
pub fn today() -> String {
    OffsetDateTime::now_utc().date().to_string()
}

/// Why a draft cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("draft is incomplete: {}", describe_gaps(.missing_fields, .missing_questions))]
pub struct IncompleteDraft {
    pub missing_fields: Vec<&'static str>,
    pub missing_questions: Vec<&'static str>,
}

fn describe_gaps(fields: &[&'static str], questions: &[&'static str]) -> String {
    let mut parts = Vec::new();
    if !fields.is_empty() {
        parts.push(format!("missing {}", fields.join(", ")));
    }
    if !questions.is_empty() {
        parts.push(format!("unanswered {}", questions.join(", ")));
    }
    parts.join("; ")
}

/// In-progress metadata and partial responses. Has no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub meta: AssessmentMeta,
    #[serde(default)]
    pub responses: Responses,
}

impl Draft {
    /// Empty draft dated today.
    pub fn new() -> Self {
        Self {
            meta: AssessmentMeta {
                date: today(),
                ..Default::default()
            },
            responses: Responses::new(),
        }
    }

    /// Overlay answered questions on top of the existing ones.
    pub fn merge_responses(&mut self, responses: &Responses) {
        for (id, value) in responses {
            self.responses.insert(id.clone(), *value);
        }
    }

    /// Check required metadata and that every question is answered.
    pub fn validate(&self) -> Result<(), IncompleteDraft> {
        let missing_fields = self.meta.missing_fields();
        let missing_questions = missing_questions(&self.responses);
        if missing_fields.is_empty() && missing_questions.is_empty() {
            Ok(())
        } else {
            Err(IncompleteDraft {
                missing_fields,
                missing_questions,
            })
        }
    }

    /// Validate and convert into a new assessment.
    pub fn submit(self) -> Result<Assessment, IncompleteDraft> {
        self.validate()?;
        Ok(create_assessment(self.meta, self.responses))
    }
}

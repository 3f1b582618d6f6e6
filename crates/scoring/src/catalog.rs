//! Static question catalog and competency map.
//!
//! Both tables are fixed at compile time. [`validate_catalog`] checks the
//! cross-table invariants once at startup instead of trusting the literals.

use crate::competency::Competency;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A single Likert-scale survey question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier (`Q1`..`Q15`).
    pub id: &'static str,
    /// Competency this question contributes to.
    pub competency: Competency,
    /// Statement shown to the assessor.
    pub text: &'static str,
    /// "Good looks like" guidance.
    pub help: &'static str,
}

/// The survey, in display order.
pub static QUESTIONS: &[Question] = &[
    Question {
        id: "Q1",
        competency: Competency::AgileMindset,
        text: "The individual demonstrates an understanding of agile principles and shows openness to adapting their ways of working.",
        help: "Good looks like: Actively participates in retrospectives, suggests process improvements, adapts to changing priorities",
    },
    Question {
        id: "Q2",
        competency: Competency::ProductManagement,
        text: "The individual understands how to manage and prioritise a backlog, and is beginning to link work items to business value.",
        help: "Good looks like: Uses prioritization frameworks (MoSCoW, WSJF), connects stories to business outcomes",
    },
    Question {
        id: "Q3",
        competency: Competency::Requirements,
        text: "The individual can define user stories or requirements with enough clarity to be actionable.",
        help: "Good looks like: Writes clear acceptance criteria, follows INVEST principles, includes edge cases",
    },
    Question {
        id: "Q4",
        competency: Competency::BusinessAnalysis,
        text: "The individual can analyse data, processes, or stakeholder inputs to inform decisions.",
        help: "Good looks like: Uses data to support recommendations, maps current vs future state, gathers stakeholder input",
    },
    Question {
        id: "Q5",
        competency: Competency::Stakeholdering,
        text: "The individual shows the ability to engage stakeholders and communicate priorities clearly.",
        help: "Good looks like: Maintains stakeholder maps, runs effective meetings, communicates trade-offs clearly",
    },
    Question {
        id: "Q6",
        competency: Competency::ProductManagement,
        text: "The individual seeks to connect work items to customer or business outcomes.",
        help: "Good looks like: Regularly references customer feedback, measures business impact, challenges feature requests",
    },
    Question {
        id: "Q7",
        competency: Competency::Requirements,
        text: "The individual brings the customer perspective into backlog discussions and decision-making.",
        help: "Good looks like: Advocates for user experience, references customer research, challenges internal assumptions",
    },
    Question {
        id: "Q8",
        competency: Competency::ProductManagement,
        text: "The individual is able to consider trade-offs between risk, compliance, value, and effort when discussing priorities.",
        help: "Good looks like: Balances competing priorities, considers technical debt, evaluates regulatory impact",
    },
    Question {
        id: "Q9",
        competency: Competency::BusinessAnalysis,
        text: "The individual is able to make timely, informed decisions with available data and input.",
        help: "Good looks like: Sets decision deadlines, documents rationale, escalates when appropriate",
    },
    Question {
        id: "Q10",
        competency: Competency::ChangeInnovation,
        text: "The individual is supportive of adopting new tools, processes, or ways of working.",
        help: "Good looks like: Embraces new technologies, supports team experiments, shares learnings",
    },
    Question {
        id: "Q11",
        competency: Competency::ChangeInnovation,
        text: "The individual shows curiosity and willingness to suggest or test new ideas.",
        help: "Good looks like: Proposes improvements, runs small experiments, learns from failures",
    },
    Question {
        id: "Q12",
        competency: Competency::RiskCompliance,
        text: "The individual demonstrates awareness of risk, compliance, and regulatory factors when discussing work.",
        help: "Good looks like: Identifies compliance requirements early, escalates risks appropriately, documents decisions",
    },
    Question {
        id: "Q13",
        competency: Competency::Stakeholdering,
        text: "The individual actively collaborates with team members and contributes to shared goals.",
        help: "Good looks like: Participates in ceremonies, helps team members, shares knowledge openly",
    },
    Question {
        id: "Q14",
        competency: Competency::ProductManagement,
        text: "The individual is developing capability in using Agile delivery tools (e.g., Jira, Confluence, Miro) to manage and share work.",
        help: "Good looks like: Maintains up-to-date Jira tickets, creates clear documentation, uses collaboration tools effectively",
    },
    Question {
        id: "Q15",
        competency: Competency::ProductManagement,
        text: "The individual contributes to achieving sprint goals and demonstrates awareness of progress and outcomes.",
        help: "Good looks like: Tracks sprint progress, identifies blockers early, celebrates team achievements",
    },
];

/// Competency → ordered question ids used for scoring.
pub static COMPETENCY_MAP: &[(Competency, &[&str])] = &[
    (Competency::AgileMindset, &["Q1"]),
    (
        Competency::ProductManagement,
        &["Q2", "Q6", "Q8", "Q14", "Q15"],
    ),
    (Competency::Requirements, &["Q3", "Q7"]),
    (Competency::BusinessAnalysis, &["Q4", "Q9"]),
    (Competency::Stakeholdering, &["Q5", "Q13"]),
    (Competency::ChangeInnovation, &["Q10", "Q11"]),
    (Competency::RiskCompliance, &["Q12"]),
];

/// Look up a question by id.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Question ids mapped to a competency, in map order.
pub fn questions_for(competency: Competency) -> &'static [&'static str] {
    COMPETENCY_MAP
        .iter()
        .find(|(c, _)| *c == competency)
        .map(|(_, ids)| *ids)
        .unwrap_or(&[])
}

/// A violated cross-table invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("question id '{0}' is defined more than once")]
    DuplicateQuestion(String),
    #[error("question '{0}' is not mapped to any competency")]
    UnmappedQuestion(String),
    #[error("question '{question}' is mapped to more than one competency")]
    MultiplyMapped { question: String },
    #[error("question '{question}' is tagged {tagged} but mapped under {mapped}")]
    TagMismatch {
        question: String,
        tagged: Competency,
        mapped: Competency,
    },
    #[error("competency map references unknown question '{question}' under {competency}")]
    UnknownQuestion {
        competency: Competency,
        question: String,
    },
    #[error("competency {0} has no questions")]
    EmptyCompetency(Competency),
    #[error("competency {0} is missing from the competency map")]
    MissingCompetency(Competency),
}

/// Check the static catalog and competency map against each other.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_tables(QUESTIONS, COMPETENCY_MAP)
}

/// Check an arbitrary question table against a competency map.
///
/// Every question must belong to exactly one group, agree with its own tag,
/// every competency must have a non-empty group, and the union of all groups
/// must equal the question table.
pub fn validate_tables(
    questions: &[Question],
    map: &[(Competency, &[&str])],
) -> Result<(), CatalogError> {
    let mut by_id: HashMap<&str, &Question> = HashMap::new();
    for q in questions {
        if by_id.insert(q.id, q).is_some() {
            return Err(CatalogError::DuplicateQuestion(q.id.to_string()));
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (competency, ids) in map {
        if ids.is_empty() {
            return Err(CatalogError::EmptyCompetency(*competency));
        }
        for id in ids.iter() {
            let Some(q) = by_id.get(id) else {
                return Err(CatalogError::UnknownQuestion {
                    competency: *competency,
                    question: id.to_string(),
                });
            };
            if !seen.insert(*id) {
                return Err(CatalogError::MultiplyMapped {
                    question: id.to_string(),
                });
            }
            if q.competency != *competency {
                return Err(CatalogError::TagMismatch {
                    question: id.to_string(),
                    tagged: q.competency,
                    mapped: *competency,
                });
            }
        }
    }

    for competency in Competency::ALL {
        if !map.iter().any(|(c, _)| *c == competency) {
            return Err(CatalogError::MissingCompetency(competency));
        }
    }

    if let Some(q) = questions.iter().find(|q| !seen.contains(q.id)) {
        return Err(CatalogError::UnmappedQuestion(q.id.to_string()));
    }

    tracing::debug!(
        questions = questions.len(),
        competencies = map.len(),
        "catalog self-check passed"
    );
    Ok(())
}

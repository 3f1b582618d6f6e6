//! Question catalog, competency map, score bands and assessment scoring.
//!
//! This crate provides:
//! - The static question catalog and competency map, with a self-check
//! - The score calculator (competency averages and overall average)
//! - The band classifier used wherever a score is labelled
//! - The assessment factory and in-progress drafts
//!
//! # Example
//!
//! ```rust
//! use teamassess_scoring::{create_assessment, parse_responses, AssessmentMeta, ScoreBand};
//!
//! let responses = parse_responses("Q1=4,Q2=3,Q12=2").unwrap();
//! let assessment = create_assessment(AssessmentMeta::default(), responses);
//! assert_eq!(assessment.overall_score, 3.0);
//! assert_eq!(assessment.overall_band(), ScoreBand::Competent);
//! ```

pub mod assessment;
pub mod band;
pub mod calculator;
pub mod catalog;
pub mod competency;
pub mod responses;
pub mod samples;

pub use assessment::{
    create_assessment, today, Assessment, AssessmentId, AssessmentMeta, Draft, IncompleteDraft,
    ASSESSMENT_TYPES, BASELINE_TYPE, ROLES,
};
pub use band::ScoreBand;
pub use calculator::{competency_scores, format_score, overall_score, CompetencyScores};
pub use catalog::{
    question, questions_for, validate_catalog, validate_tables, CatalogError, Question,
    COMPETENCY_MAP, QUESTIONS,
};
pub use competency::{strip_code_suffix, Competency};
pub use responses::{
    check_responses, in_catalog_order, is_complete, missing_questions, parse_response_value,
    parse_responses, ResponseError, Responses, MAX_RESPONSE, MIN_RESPONSE,
};
pub use samples::{sample_assessments, SAMPLE_BASELINE_ID, SAMPLE_WEEK6_ID};

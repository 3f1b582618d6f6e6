//! Demonstration assessments seeded into an empty store.

use crate::assessment::{Assessment, AssessmentMeta};
use crate::responses::Responses;
use time::macros::datetime;

/// Baseline responses for the demo assessee.
pub const BASELINE_RESPONSES: [(&str, u8); 15] = [
    ("Q1", 3),
    ("Q2", 2),
    ("Q3", 3),
    ("Q4", 2),
    ("Q5", 3),
    ("Q6", 2),
    ("Q7", 3),
    ("Q8", 2),
    ("Q9", 3),
    ("Q10", 4),
    ("Q11", 3),
    ("Q12", 2),
    ("Q13", 4),
    ("Q14", 2),
    ("Q15", 3),
];

/// Week-6 follow-up responses for the demo assessee.
pub const WEEK6_RESPONSES: [(&str, u8); 15] = [
    ("Q1", 4),
    ("Q2", 3),
    ("Q3", 4),
    ("Q4", 3),
    ("Q5", 4),
    ("Q6", 3),
    ("Q7", 4),
    ("Q8", 3),
    ("Q9", 4),
    ("Q10", 4),
    ("Q11", 4),
    ("Q12", 3),
    ("Q13", 4),
    ("Q14", 3),
    ("Q15", 4),
];

pub const SAMPLE_BASELINE_ID: &str = "sample-baseline";
pub const SAMPLE_WEEK6_ID: &str = "sample-week6";

fn responses(pairs: &[(&str, u8)]) -> Responses {
    pairs.iter().map(|(id, v)| (id.to_string(), *v)).collect()
}

fn demo_meta(assessment_type: &str, date: &str) -> AssessmentMeta {
    AssessmentMeta {
        assessee_name: "Jane Doe".into(),
        role: "Product Owner".into(),
        squad: "Squad Alpha".into(),
        tribe: "Digital Banking".into(),
        assessment_type: assessment_type.into(),
        date: date.into(),
        notes: String::new(),
    }
}

/// The baseline and week-6 demo assessments, oldest first.
pub fn sample_assessments() -> Vec<Assessment> {
    vec![
        Assessment::with_identity(
            SAMPLE_BASELINE_ID.into(),
            datetime!(2025-01-15 10:00 UTC),
            demo_meta("Baseline", "2025-01-15"),
            responses(&BASELINE_RESPONSES),
        ),
        Assessment::with_identity(
            SAMPLE_WEEK6_ID.into(),
            datetime!(2025-03-01 10:00 UTC),
            demo_meta("Week 6", "2025-03-01"),
            responses(&WEEK6_RESPONSES),
        ),
    ]
}

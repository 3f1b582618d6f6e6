//! Generate the human-readable narrative for a recommendation report.

use super::InterventionSequence;
use teamassess_scoring::{format_score, Competency, ScoreBand};

/// Compose the report narrative.
///
/// `overall_delta` is present only when a comparison assessment was used.
/// Gap names are the competency labels without their code suffix.
pub fn compose_narrative(
    assessee_name: &str,
    overall_score: f64,
    overall_delta: Option<f64>,
    gaps: &[Competency],
    sequence: &InterventionSequence,
    significance_threshold: f64,
) -> String {
    let band = ScoreBand::for_score(overall_score);
    let mut narrative = format!(
        "Based on the assessment results, {} demonstrates {} performance with an overall score of {}/5.0. ",
        assessee_name,
        band.label().to_lowercase(),
        format_score(overall_score)
    );

    if let Some(delta) = overall_delta {
        narrative.push_str(&describe_change(delta, significance_threshold));
    }

    if gaps.is_empty() {
        narrative.push_str(
            "All competency areas are performing well. Focus should be on sustaining current performance and coaching others.",
        );
    } else {
        let names: Vec<&str> = gaps.iter().map(|c| c.short_name()).collect();
        narrative.push_str(&format!(
            "Priority development areas include {}. ",
            names.join(", ")
        ));
        narrative.push_str(&format!(
            "Immediate focus should be on {} quick-win interventions over the next 2 weeks, followed by {} strategic initiatives over the following 4 weeks.",
            sequence.weeks_0_to_2.len(),
            sequence.weeks_2_to_6.len()
        ));
    }

    narrative
}

fn describe_change(delta: f64, threshold: f64) -> String {
    if delta > threshold {
        format!(
            "This represents a significant improvement of +{} points from the previous assessment. ",
            format_score(delta)
        )
    } else if delta < -threshold {
        format!(
            "This shows a concerning decline of {} points from the previous assessment. ",
            format_score(delta)
        )
    } else {
        "Performance has remained relatively stable since the previous assessment. ".to_string()
    }
}

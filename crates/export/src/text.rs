//! Plain-text rendering of recommendation reports for the terminal.

use teamassess_intelligence::{priority_recommendations, RecommendationReport};
use teamassess_scoring::format_score;

fn signed_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{}", format_score(delta))
    } else {
        format_score(delta)
    }
}

/// Render a report as a human-readable summary.
pub fn recommendation_text(report: &RecommendationReport) -> String {
    let overall = &report.overall;
    let mut out = String::new();

    out.push_str(&format!(
        "Overall: {}/5.0 ({})\n\n",
        format_score(overall.score),
        overall.band
    ));
    out.push_str(&overall.narrative);
    out.push_str("\n\n");

    if overall.top_gaps.is_empty() {
        out.push_str("No development gaps identified.\n");
    } else {
        out.push_str("Top gaps:\n");
        for (i, gap) in overall.top_gaps.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} - {} ({})",
                i + 1,
                gap.competency,
                format_score(gap.score),
                gap.reason.label()
            ));
            if let Some(delta) = gap.delta {
                out.push_str(&format!(", change {}", signed_delta(delta)));
            }
            out.push('\n');
        }
    }

    let sequence = &overall.sequence;
    for (title, items) in [
        ("Quick wins (0-2 weeks)", &sequence.weeks_0_to_2),
        ("Strategic initiatives (2-6 weeks)", &sequence.weeks_2_to_6),
    ] {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}:\n", title));
        for item in items {
            out.push_str(&format!(
                "  - [{}] {}\n",
                item.competency.code(),
                item.intervention
            ));
        }
    }

    out.push_str("\nCompetencies:\n");
    for (competency, rec) in &report.competencies {
        out.push_str(&format!(
            "  {:<45} {} {:<10} {:<10} {:<6} {}",
            competency.label(),
            format_score(rec.score),
            rec.band.label(),
            rec.level.as_str(),
            rec.priority.as_str(),
            rec.timeframe
        ));
        if let Some(delta) = rec.delta {
            out.push_str(&format!(" ({})", signed_delta(delta)));
        }
        out.push('\n');
        if let Some(kpi) = rec.kpis.first() {
            out.push_str(&format!("      KPI: {}\n", kpi));
        }
    }

    let quick_view = priority_recommendations(report);
    if !quick_view.is_empty() {
        out.push_str("\nStart here:\n");
        for item in quick_view {
            out.push_str(&format!("  - {} ({})\n", item.intervention, item.timeframe));
        }
    }
    out
}

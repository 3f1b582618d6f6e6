//! Self-contained printable HTML report.

use html_escape::encode_text;
use teamassess_scoring::{format_score, Assessment, ScoreBand, QUESTIONS};

const UP_COLOR: &str = "#16a34a";
const DOWN_COLOR: &str = "#dc2626";
const FLAT_COLOR: &str = "#6b7280";
const CELL: &str = "padding: 8px; border: 1px solid #ddd;";

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin: 20px; color: #333; line-height: 1.4; }
    .header { text-align: center; margin-bottom: 30px; border-bottom: 2px solid #e5e7eb; padding-bottom: 20px; }
    .summary { background-color: #f9fafb; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
    .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin-top: 15px; }
    .summary-item { text-align: center; padding: 15px; background: white; border-radius: 6px; border: 1px solid #e5e7eb; }
    .summary-value { font-size: 24px; font-weight: bold; margin-bottom: 5px; }
    .summary-label { font-size: 14px; color: #6b7280; }
    table { width: 100%; border-collapse: collapse; margin-bottom: 30px; font-size: 12px; }
    th { background-color: #f3f4f6; padding: 12px 8px; border: 1px solid #ddd; font-weight: bold; text-align: left; }
    .section-title { font-size: 18px; font-weight: bold; margin: 30px 0 15px 0; color: #1f2937; border-bottom: 1px solid #e5e7eb; padding-bottom: 5px; }
    @media print {
      body { margin: 0; }
      .header { page-break-after: avoid; }
      table { page-break-inside: avoid; }
    }
"#;

fn change_color(delta: f64) -> &'static str {
    if delta > 0.0 {
        UP_COLOR
    } else if delta < 0.0 {
        DOWN_COLOR
    } else {
        FLAT_COLOR
    }
}

fn signed(delta: f64, text: String) -> String {
    if delta > 0.0 {
        format!("+{text}")
    } else {
        text
    }
}

fn band_badge(band: ScoreBand, font_size: u8) -> String {
    format!(
        r#"<span style="background-color: {}; color: {}; padding: 2px 8px; border-radius: 4px; font-size: {}px;">{}</span>"#,
        band.bg_color(),
        band.color(),
        font_size,
        band.label()
    )
}

fn summary_item(value: &str, label: &str, color: Option<&str>) -> String {
    let style = color
        .map(|c| format!(r#" style="color: {c};""#))
        .unwrap_or_default();
    format!(
        "      <div class=\"summary-item\">\n        <div class=\"summary-value\"{style}>{value}</div>\n        <div class=\"summary-label\">{label}</div>\n      </div>\n"
    )
}

fn change_cells(now: f64, before: Option<f64>, render: impl Fn(f64) -> String) -> String {
    match before {
        Some(before) => {
            let delta = now - before;
            format!(
                "<td style=\"{CELL} text-align: center;\">{}</td><td style=\"{CELL} text-align: center; font-weight: bold; color: {};\">{}</td>",
                render(before),
                change_color(delta),
                signed(delta, render(delta))
            )
        }
        None => String::new(),
    }
}

/// Render the printable report.
///
/// `generated_on` is shown verbatim in the header. Previous/change columns
/// appear only when `comparison` is given; rows whose competency or question
/// the comparison lacks leave those cells out.
pub fn print_html(
    assessment: &Assessment,
    comparison: Option<&Assessment>,
    generated_on: &str,
) -> String {
    let meta = &assessment.meta;
    let name = encode_text(&meta.assessee_name);
    let overall_band = assessment.overall_band();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!(
        "  <title>Team Assessment Report - {name}</title>\n  <style>{STYLE}  </style>\n</head>\n<body>\n"
    ));

    out.push_str("  <div class=\"header\">\n    <h1>Team Assessment Report</h1>\n");
    out.push_str(&format!(
        "    <h2>{} - {}</h2>\n    <p>Generated on {} | Assessment Date: {}</p>\n  </div>\n",
        name,
        encode_text(&meta.assessment_type),
        encode_text(generated_on),
        encode_text(&meta.date)
    ));

    out.push_str("  <div class=\"summary\">\n    <h3>Assessment Overview</h3>\n    <div class=\"summary-grid\">\n");
    out.push_str(&summary_item(
        &format_score(assessment.overall_score),
        "Overall Score",
        Some(overall_band.color()),
    ));
    out.push_str(&summary_item(
        overall_band.label(),
        "Performance Band",
        Some(overall_band.color()),
    ));
    out.push_str(&summary_item(&encode_text(&meta.role), "Role", None));
    out.push_str(&summary_item(&encode_text(&meta.squad), "Squad", None));
    if let Some(previous) = comparison {
        let delta = assessment.overall_score - previous.overall_score;
        out.push_str(&summary_item(
            &signed(delta, format_score(delta)),
            "Change from Previous",
            Some(change_color(delta)),
        ));
    }
    out.push_str("    </div>\n  </div>\n");

    let comparison_headers = |before: &str, change: &str| {
        if comparison.is_some() {
            format!(
                "<th style=\"text-align: center;\">{before}</th><th style=\"text-align: center;\">{change}</th>"
            )
        } else {
            String::new()
        }
    };

    out.push_str("  <div class=\"section-title\">Competency Breakdown</div>\n  <table>\n    <thead>\n");
    out.push_str(&format!(
        "      <tr><th>Competency</th><th style=\"text-align: center;\">Score</th><th style=\"text-align: center;\">Band</th>{}</tr>\n",
        comparison_headers("Previous Score", "Change")
    ));
    out.push_str("    </thead>\n    <tbody>\n");
    for (competency, score) in &assessment.competency_scores {
        let band = ScoreBand::for_score(*score);
        let before = comparison.and_then(|c| c.competency_score(*competency));
        out.push_str(&format!(
            "      <tr><td style=\"{CELL}\">{}</td><td style=\"{CELL} text-align: center; font-weight: bold; color: {};\">{}</td><td style=\"{CELL} text-align: center;\">{}</td>{}</tr>\n",
            encode_text(competency.label()),
            band.color(),
            format_score(*score),
            band_badge(band, 12),
            change_cells(*score, before, format_score)
        ));
    }
    out.push_str("    </tbody>\n  </table>\n");

    out.push_str("  <div class=\"section-title\">Individual Question Responses</div>\n  <table>\n    <thead>\n");
    out.push_str(&format!(
        "      <tr><th>Q#</th><th>Question</th><th>Competency</th><th style=\"text-align: center;\">Score</th><th style=\"text-align: center;\">Band</th>{}</tr>\n",
        comparison_headers("Previous", "Change")
    ));
    out.push_str("    </thead>\n    <tbody>\n");
    for question in QUESTIONS {
        let score = assessment.responses.get(question.id).copied();
        let (score_text, badge, changes) = match score {
            Some(value) => {
                let now = f64::from(value);
                let before = comparison
                    .and_then(|c| c.responses.get(question.id))
                    .map(|v| f64::from(*v));
                (
                    value.to_string(),
                    band_badge(ScoreBand::for_score(now), 11),
                    change_cells(now, before, |v| format!("{v}")),
                )
            }
            None => (String::new(), String::new(), String::new()),
        };
        out.push_str(&format!(
            "      <tr><td style=\"{CELL}\">{}</td><td style=\"{CELL}\">{}</td><td style=\"{CELL}\">{}</td><td style=\"{CELL} text-align: center; font-weight: bold;\">{}</td><td style=\"{CELL} text-align: center;\">{}</td>{}</tr>\n",
            question.id,
            encode_text(question.text),
            encode_text(question.competency.label()),
            score_text,
            badge,
            changes
        ));
    }
    out.push_str("    </tbody>\n  </table>\n");

    out.push_str("  <div style=\"margin-top: 40px; padding-top: 20px; border-top: 1px solid #e5e7eb; font-size: 12px; color: #6b7280;\">\n");
    out.push_str("    <p><strong>SFIA-Aligned Competency Framework:</strong> This assessment uses the Skills Framework for the Information Age (SFIA) competency model adapted for agile product development roles.</p>\n");
    out.push_str("    <p><strong>Scoring:</strong> 1 = Needs Development, 2 = Developing, 3 = Competent, 4 = Strong, 5 = Expert</p>\n");
    if let Some(previous) = comparison {
        out.push_str(&format!(
            "    <p><strong>Comparison:</strong> Changes are calculated against {} assessment from {}</p>\n",
            encode_text(&previous.meta.assessment_type),
            encode_text(&previous.meta.date)
        ));
    }
    out.push_str("  </div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamassess_scoring::sample_assessments;

    #[test]
    fn test_report_without_comparison() {
        let samples = sample_assessments();
        let html = print_html(&samples[0], None, "2025-02-01");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Team Assessment Report - Jane Doe</title>"));
        assert!(html.contains("<h2>Jane Doe - Baseline</h2>"));
        assert!(html.contains("Generated on 2025-02-01 | Assessment Date: 2025-01-15"));
        assert!(html.contains(">2.73</div>"));
        assert!(!html.contains("Previous Score"));
        assert!(!html.contains("Change from Previous"));
        assert!(html.contains("Risk &amp; Compliance (GOVN)"));
        assert_eq!(html.matches("<tr><td").count(), 7 + 15);
    }

    #[test]
    fn test_report_with_comparison() {
        let samples = sample_assessments();
        let html = print_html(&samples[1], Some(&samples[0]), "2025-03-02");

        assert!(html.contains("Previous Score"));
        assert!(html.contains(">+0.87</div>"));
        assert!(html.contains("Change from Previous"));
        assert!(html.contains(">+1.00</td>"));
        assert!(html.contains(
            "Changes are calculated against Baseline assessment from 2025-01-15"
        ));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut a = sample_assessments().remove(0);
        a.meta.assessee_name = "<script>alert(1)</script>".into();
        a.meta.squad = "R&D".into();
        let html = print_html(&a, None, "today");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("R&amp;D"));
    }
}

//! Spreadsheet exports of a single assessment or a pair of assessments.

use teamassess_intelligence::{change_direction, question_direction, RecommendationPolicy};
use teamassess_scoring::{format_score, Assessment, Competency, ScoreBand, QUESTIONS};

const METADATA_HEADERS: [&str; 6] = [
    "Assessee Name",
    "Role",
    "Squad",
    "Tribe",
    "Assessment Type",
    "Date",
];

/// Always-quoted cell with embedded quotes doubled.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Quote a free-text cell only when it would otherwise break the row.
fn cell(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        quote(text)
    } else {
        text.to_string()
    }
}

fn join(rows: Vec<Vec<String>>) -> String {
    rows.into_iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Per-question CSV with competency and overall summaries.
///
/// Unanswered questions leave their score and band cells empty.
pub fn assessment_csv(assessment: &Assessment, include_metadata: bool) -> String {
    let meta = &assessment.meta;
    let metadata: Vec<String> = [
        &meta.assessee_name,
        &meta.role,
        &meta.squad,
        &meta.tribe,
        &meta.assessment_type,
        &meta.date,
    ]
    .iter()
    .map(|v| cell(v))
    .collect();

    let mut rows = Vec::new();
    let mut header = Vec::new();
    if include_metadata {
        header.extend(METADATA_HEADERS.iter().map(|h| h.to_string()));
    }
    header.extend(
        ["Question ID", "Question Text", "Competency", "Response Score", "Score Band"]
            .iter()
            .map(|h| h.to_string()),
    );
    rows.push(header);

    for question in QUESTIONS {
        let mut line = Vec::new();
        if include_metadata {
            line.extend(metadata.iter().cloned());
        }
        let score = assessment.responses.get(question.id).copied();
        line.push(question.id.to_string());
        line.push(quote(question.text));
        line.push(question.competency.label().to_string());
        line.push(score.map(|s| s.to_string()).unwrap_or_default());
        line.push(
            score
                .map(|s| ScoreBand::for_score(f64::from(s)).label().to_string())
                .unwrap_or_default(),
        );
        rows.push(line);
    }

    rows.push(Vec::new());
    rows.push(row(["COMPETENCY SUMMARY"]));
    rows.push(row(["Competency", "Average Score", "Score Band"]));
    for (competency, score) in &assessment.competency_scores {
        rows.push(vec![
            competency.label().to_string(),
            format_score(*score),
            ScoreBand::for_score(*score).label().to_string(),
        ]);
    }

    rows.push(Vec::new());
    rows.push(row(["OVERALL SUMMARY"]));
    rows.push(vec![
        "Overall Score".to_string(),
        format_score(assessment.overall_score),
        assessment.overall_band().label().to_string(),
    ]);

    join(rows)
}

/// Side-by-side CSV of `current` against `previous`.
///
/// Cells that need a score missing from either assessment are left empty.
pub fn comparison_csv(
    current: &Assessment,
    previous: &Assessment,
    policy: &RecommendationPolicy,
) -> String {
    let mut rows = Vec::new();
    rows.push(vec![
        "Question ID".to_string(),
        "Question Text".to_string(),
        "Competency".to_string(),
        cell(&format!(
            "{} ({})",
            current.meta.assessee_name, current.meta.assessment_type
        )),
        cell(&format!(
            "{} ({})",
            previous.meta.assessee_name, previous.meta.assessment_type
        )),
        "Delta".to_string(),
        "Change Direction".to_string(),
    ]);

    for question in QUESTIONS {
        let now = current.responses.get(question.id).copied();
        let before = previous.responses.get(question.id).copied();
        let (delta, direction) = match (now, before) {
            (Some(n), Some(b)) => {
                let delta = i32::from(n) - i32::from(b);
                (
                    format_score(f64::from(delta)),
                    question_direction(delta).label().to_string(),
                )
            }
            _ => (String::new(), String::new()),
        };
        rows.push(vec![
            question.id.to_string(),
            quote(question.text),
            question.competency.label().to_string(),
            now.map(|v| v.to_string()).unwrap_or_default(),
            before.map(|v| v.to_string()).unwrap_or_default(),
            delta,
            direction,
        ]);
    }

    rows.push(Vec::new());
    rows.push(row(["COMPETENCY COMPARISON"]));
    rows.push(vec![
        "Competency".to_string(),
        cell(&format!("{} Score", current.meta.assessee_name)),
        cell(&format!("{} Score", previous.meta.assessee_name)),
        "Delta".to_string(),
        "Change Direction".to_string(),
    ]);
    for competency in Competency::ALL {
        let now = current.competency_score(competency);
        let before = previous.competency_score(competency);
        rows.push(comparison_row(competency.label(), now, before, policy));
    }

    rows.push(Vec::new());
    rows.push(row(["OVERALL COMPARISON"]));
    rows.push(comparison_row(
        "Overall Score",
        Some(current.overall_score),
        Some(previous.overall_score),
        policy,
    ));

    join(rows)
}

fn comparison_row(
    label: &str,
    now: Option<f64>,
    before: Option<f64>,
    policy: &RecommendationPolicy,
) -> Vec<String> {
    let fmt = |v: Option<f64>| v.map(format_score).unwrap_or_default();
    let (delta, direction) = match (now, before) {
        (Some(n), Some(b)) => {
            let delta = n - b;
            (
                format_score(delta),
                change_direction(delta, policy).label().to_string(),
            )
        }
        _ => (String::new(), String::new()),
    };
    vec![label.to_string(), fmt(now), fmt(before), delta, direction]
}

//! Handlers for `questions` and `check`.

use super::input::write_json;
use crate::app::self_check;
use crate::cli::OutputFormat;
use anyhow::Result;
use serde_json::json;
use std::io::Write;
use teamassess_intelligence::{DevelopmentLevel, INTERVENTION_LIBRARY};
use teamassess_scoring::{question, COMPETENCY_MAP, QUESTIONS};

/// Handle the `questions` command.
pub(crate) fn handle_questions_command(format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    if format == OutputFormat::Json {
        let questions: Vec<_> = QUESTIONS
            .iter()
            .map(|q| {
                json!({
                    "id": q.id,
                    "competency": q.competency,
                    "text": q.text,
                    "help": q.help,
                })
            })
            .collect();
        return write_json(out, &questions);
    }

    for (i, (competency, ids)) in COMPETENCY_MAP.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", competency.label())?;
        for q in ids.iter().filter_map(|id| question(id)) {
            writeln!(out, "  {:<4} {}", q.id, q.text)?;
            writeln!(out, "       {}", q.help)?;
        }
    }
    Ok(())
}

/// Handle the `check` command.
pub(crate) fn handle_check_command(out: &mut dyn Write) -> Result<()> {
    self_check()?;
    writeln!(
        out,
        "Question catalog OK: {} questions across {} competencies",
        QUESTIONS.len(),
        COMPETENCY_MAP.len()
    )?;
    writeln!(
        out,
        "Intervention library OK: {} competencies x {} levels",
        INTERVENTION_LIBRARY.len(),
        DevelopmentLevel::ALL.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::text;

    #[test]
    fn questions_are_grouped_by_competency() {
        let mut out = Vec::new();
        handle_questions_command(OutputFormat::Text, &mut out).unwrap();
        let text = text(out);
        assert!(text.starts_with("Agile Mindset (AGIL)\n  Q1   "));
        let prod = text.find("Product Management (PROD)").unwrap();
        let q14 = text.find("  Q14  ").unwrap();
        let reqm = text.find("Requirements (REQM)").unwrap();
        assert!(prod < q14 && q14 < reqm);
        assert_eq!(text.matches("Good looks like:").count(), 15);
    }

    #[test]
    fn questions_as_json_use_label_competencies() {
        let mut out = Vec::new();
        handle_questions_command(OutputFormat::Json, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(15));
        assert_eq!(parsed[11]["id"], "Q12");
        assert_eq!(parsed[11]["competency"], "Risk & Compliance (GOVN)");
    }

    #[test]
    fn check_reports_both_tables() {
        let mut out = Vec::new();
        handle_check_command(&mut out).unwrap();
        let text = text(out);
        assert!(text.contains("Question catalog OK: 15 questions across 7 competencies"));
        assert!(text.contains("Intervention library OK: 7 competencies x 3 levels"));
    }
}

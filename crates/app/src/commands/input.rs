//! Shared argument handling and text rendering for command handlers.

use crate::cli::{MetaArgs, ResponseArgs};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::Write;
use teamassess_scoring::{
    format_score, parse_response_value, parse_responses, Assessment, AssessmentMeta, Responses,
    ScoreBand,
};

/// Responses from `--responses` or `--responses-file`; empty when neither is given.
pub(crate) fn load_responses(args: &ResponseArgs) -> Result<Responses> {
    if let Some(list) = &args.responses {
        return Ok(parse_responses(list)?);
    }
    let Some(path) = &args.responses_file else {
        return Ok(Responses::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses file {}", path.display()))?;
    let entries: serde_json::Map<String, Value> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON object of responses", path.display()))?;

    let mut responses = Responses::new();
    for (id, value) in entries {
        let id = id.trim().to_ascii_uppercase();
        let raw = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            other => bail!("response for {id} must be a number, got {other}"),
        };
        let score = parse_response_value(&id, &raw)?;
        responses.insert(id, score);
    }
    Ok(responses)
}

/// Overwrite the metadata fields that were given on the command line.
pub(crate) fn apply_meta(meta: &mut AssessmentMeta, args: &MetaArgs) {
    let fields = [
        (&mut meta.assessee_name, &args.name),
        (&mut meta.role, &args.role),
        (&mut meta.squad, &args.squad),
        (&mut meta.tribe, &args.tribe),
        (&mut meta.assessment_type, &args.assessment_type),
        (&mut meta.date, &args.date),
        (&mut meta.notes, &args.notes),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            *field = value.trim().to_string();
        }
    }
}

/// Pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Header, overall score and the per-competency table.
pub(crate) fn write_scores(out: &mut dyn Write, assessment: &Assessment) -> Result<()> {
    let meta = &assessment.meta;
    writeln!(
        out,
        "{} - {} ({})",
        meta.assessee_name, meta.assessment_type, meta.date
    )?;
    writeln!(
        out,
        "Role: {} | Squad: {} | Tribe: {}",
        meta.role, meta.squad, meta.tribe
    )?;
    writeln!(
        out,
        "Overall: {} ({})",
        format_score(assessment.overall_score),
        assessment.overall_band().label()
    )?;
    writeln!(out)?;
    writeln!(out, "{:<46} {:>5}  Band", "Competency", "Score")?;
    for (competency, score) in &assessment.competency_scores {
        writeln!(
            out,
            "{:<46} {:>5}  {}",
            competency.label(),
            format_score(*score),
            ScoreBand::for_score(*score).label()
        )?;
    }
    if !meta.notes.is_empty() {
        writeln!(out)?;
        writeln!(out, "Notes: {}", meta.notes)?;
    }
    Ok(())
}

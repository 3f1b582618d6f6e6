//! Handlers that create, list, show and remove stored assessments.

use super::input::{apply_meta, load_responses, write_json, write_scores};
use crate::app::Session;
use crate::cli::{MetaArgs, OutputFormat, ResponseArgs};
use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use teamassess_scoring::{format_score, in_catalog_order, sample_assessments, AssessmentId, Draft};
use teamassess_state::{AssessmentStore, DraftStore};

/// Handle the `submit` command.
pub(crate) fn handle_submit_command(
    session: &Session,
    meta: &MetaArgs,
    responses: &ResponseArgs,
    from_draft: bool,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let store = session.store();
    let mut draft = if from_draft {
        store
            .get_draft()?
            .ok_or_else(|| anyhow!("no saved draft; run `teamassess draft save` first"))?
    } else {
        Draft::new()
    };
    apply_meta(&mut draft.meta, meta);
    draft.merge_responses(&load_responses(responses)?);
    draft.responses = in_catalog_order(&draft.responses);

    let assessment = draft.submit().context("cannot submit assessment")?;
    store.append(assessment.clone())?;
    if from_draft {
        store.clear_draft()?;
    }
    tracing::info!(id = %assessment.id, "assessment submitted");

    match format {
        OutputFormat::Json => write_json(out, &assessment),
        OutputFormat::Text => {
            writeln!(out, "Saved assessment {}", assessment.id)?;
            writeln!(out)?;
            write_scores(out, &assessment)
        }
    }
}

/// Handle the `list` command.
pub(crate) fn handle_list_command(
    session: &Session,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let assessments = session.store().list()?;
    if format == OutputFormat::Json {
        return write_json(out, &assessments);
    }
    if assessments.is_empty() {
        writeln!(out, "No assessments stored.")?;
        return Ok(());
    }

    let id_width = assessments
        .iter()
        .map(|a| a.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);
    writeln!(
        out,
        "{:<id_width$}  {:<20} {:<10} {:<10} {:>7}  Band",
        "ID", "Name", "Type", "Date", "Overall"
    )?;
    for a in &assessments {
        writeln!(
            out,
            "{:<id_width$}  {:<20} {:<10} {:<10} {:>7}  {}",
            a.id.as_str(),
            a.meta.assessee_name,
            a.meta.assessment_type,
            a.meta.date,
            format_score(a.overall_score),
            a.overall_band().label()
        )?;
    }
    Ok(())
}

/// Handle the `show` command.
pub(crate) fn handle_show_command(
    session: &Session,
    id: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let assessment = session.find(id)?;
    match format {
        OutputFormat::Json => write_json(out, &assessment),
        OutputFormat::Text => write_scores(out, &assessment),
    }
}

/// Handle the `delete` command.
pub(crate) fn handle_delete_command(session: &Session, id: &str, out: &mut dyn Write) -> Result<()> {
    if !session.store().delete(&AssessmentId::from(id))? {
        bail!("assessment '{id}' not found");
    }
    writeln!(out, "Deleted assessment {id}")?;
    Ok(())
}

/// Handle the `samples` command.
pub(crate) fn handle_samples_command(session: &Session, out: &mut dyn Write) -> Result<()> {
    let added = session.store().load_samples(&sample_assessments())?;
    writeln!(out, "Loaded {added} sample assessment(s)")?;
    Ok(())
}

/// Handle the `reset` command.
pub(crate) fn handle_reset_command(session: &Session, out: &mut dyn Write) -> Result<()> {
    session.store().clear()?;
    writeln!(out, "All assessments and the draft were deleted.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{empty_session, sample_session, text};
    use teamassess_scoring::{Assessment, SAMPLE_BASELINE_ID};
    use teamassess_test_utils::{baseline_responses, responses_arg};

    fn full_meta() -> MetaArgs {
        MetaArgs {
            name: Some("Sam Lee".into()),
            role: Some("Business Expert".into()),
            squad: Some("Squad Beta".into()),
            tribe: Some("Payments".into()),
            assessment_type: Some("Baseline".into()),
            date: Some("2025-04-01".into()),
            notes: None,
        }
    }

    #[test]
    fn submit_stores_scored_assessment() {
        let session = empty_session();
        let responses = ResponseArgs {
            responses: Some(responses_arg(&baseline_responses())),
            responses_file: None,
        };
        let mut out = Vec::new();
        handle_submit_command(
            &session,
            &full_meta(),
            &responses,
            false,
            OutputFormat::Text,
            &mut out,
        )
        .unwrap();

        let text = text(out);
        assert!(text.starts_with("Saved assessment "));
        assert!(text.contains("Overall: 2.73 (Developing)"));
        let stored = session.store().list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].meta.assessee_name, "Sam Lee");
        assert_eq!(stored[0].responses.get_index(0).map(|(k, _)| k.as_str()), Some("Q1"));
    }

    #[test]
    fn submit_rejects_incomplete_input() {
        let session = empty_session();
        let responses = ResponseArgs {
            responses: Some("Q1=3".into()),
            responses_file: None,
        };
        let err = handle_submit_command(
            &session,
            &full_meta(),
            &responses,
            false,
            OutputFormat::Text,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unanswered Q2"));
        assert!(session.store().list().unwrap().is_empty());
    }

    #[test]
    fn submit_from_draft_clears_it() {
        let session = empty_session();
        let mut draft = Draft::new();
        draft.merge_responses(&baseline_responses());
        session.store().set_draft(&draft).unwrap();

        let mut out = Vec::new();
        handle_submit_command(
            &session,
            &full_meta(),
            &ResponseArgs::default(),
            true,
            OutputFormat::Json,
            &mut out,
        )
        .unwrap();

        let saved: Assessment = serde_json::from_slice(&out).unwrap();
        assert_eq!(saved.meta.tribe, "Payments");
        assert!(session.store().get_draft().unwrap().is_none());
    }

    #[test]
    fn submit_from_missing_draft_fails() {
        let session = empty_session();
        let err = handle_submit_command(
            &session,
            &full_meta(),
            &ResponseArgs::default(),
            true,
            OutputFormat::Text,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no saved draft"));
    }

    #[test]
    fn list_and_show_samples() {
        let session = sample_session();
        let mut out = Vec::new();
        handle_list_command(&session, OutputFormat::Text, &mut out).unwrap();
        let listing = text(out);
        assert_eq!(listing.lines().count(), 3);
        assert!(listing.contains("sample-baseline"));
        assert!(listing.contains("2.73  Developing"));

        let mut out = Vec::new();
        handle_show_command(&session, SAMPLE_BASELINE_ID, OutputFormat::Text, &mut out).unwrap();
        let shown = text(out);
        assert!(shown.starts_with("Jane Doe - Baseline (2025-01-15)\n"));
        assert!(shown.contains("Risk & Compliance (GOVN)"));
        assert!(shown.contains(" 2.00  Developing"));
    }

    #[test]
    fn empty_list_says_so() {
        let mut out = Vec::new();
        handle_list_command(&empty_session(), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(text(out), "No assessments stored.\n");
    }

    #[test]
    fn delete_samples_and_reset() {
        let session = sample_session();
        let mut out = Vec::new();
        handle_delete_command(&session, SAMPLE_BASELINE_ID, &mut out).unwrap();
        assert!(handle_delete_command(&session, SAMPLE_BASELINE_ID, &mut out).is_err());

        handle_samples_command(&session, &mut out).unwrap();
        assert_eq!(session.store().list().unwrap().len(), 2);

        handle_reset_command(&session, &mut out).unwrap();
        assert!(session.store().list().unwrap().is_empty());
        let text = text(out);
        assert!(text.contains("Loaded 1 sample assessment(s)"));
    }
}

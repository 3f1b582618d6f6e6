//! Handlers for `draft save|show|clear`.

use super::input::{apply_meta, load_responses, write_json};
use crate::app::Session;
use crate::cli::{MetaArgs, OutputFormat, ResponseArgs};
use anyhow::Result;
use std::io::Write;
use teamassess_scoring::{in_catalog_order, Draft, QUESTIONS};
use teamassess_state::DraftStore;

fn write_progress(out: &mut dyn Write, draft: &Draft) -> Result<()> {
    writeln!(
        out,
        "{}/{} questions answered",
        draft.responses.len(),
        QUESTIONS.len()
    )?;
    if let Err(gaps) = draft.validate() {
        if !gaps.missing_fields.is_empty() {
            writeln!(out, "Missing fields: {}", gaps.missing_fields.join(", "))?;
        }
        if !gaps.missing_questions.is_empty() {
            writeln!(out, "Unanswered: {}", gaps.missing_questions.join(", "))?;
        }
    } else {
        writeln!(out, "Ready to submit with `teamassess submit --from-draft`")?;
    }
    Ok(())
}

/// Handle the `draft save` command.
pub(crate) fn handle_draft_save_command(
    session: &Session,
    meta: &MetaArgs,
    responses: &ResponseArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let store = session.store();
    let mut draft = store.get_draft()?.unwrap_or_else(Draft::new);
    apply_meta(&mut draft.meta, meta);
    draft.merge_responses(&load_responses(responses)?);
    draft.responses = in_catalog_order(&draft.responses);
    store.set_draft(&draft)?;

    writeln!(out, "Draft saved")?;
    write_progress(out, &draft)
}

/// Handle the `draft show` command.
pub(crate) fn handle_draft_show_command(
    session: &Session,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let draft = session.store().get_draft()?;
    if format == OutputFormat::Json {
        return write_json(out, &draft);
    }
    let Some(draft) = draft else {
        writeln!(out, "No draft saved.")?;
        return Ok(());
    };

    let meta = &draft.meta;
    for (label, value) in [
        ("Name", &meta.assessee_name),
        ("Role", &meta.role),
        ("Squad", &meta.squad),
        ("Tribe", &meta.tribe),
        ("Type", &meta.assessment_type),
        ("Date", &meta.date),
        ("Notes", &meta.notes),
    ] {
        if !value.is_empty() {
            writeln!(out, "{label}: {value}")?;
        }
    }
    if !draft.responses.is_empty() {
        let answered: Vec<String> = draft
            .responses
            .iter()
            .map(|(id, score)| format!("{id}={score}"))
            .collect();
        writeln!(out, "Responses: {}", answered.join(","))?;
    }
    write_progress(out, &draft)
}

/// Handle the `draft clear` command.
pub(crate) fn handle_draft_clear_command(session: &Session, out: &mut dyn Write) -> Result<()> {
    if session.store().clear_draft()? {
        writeln!(out, "Draft cleared.")?;
    } else {
        writeln!(out, "No draft to clear.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{empty_session, text};

    fn respond(list: &str) -> ResponseArgs {
        ResponseArgs {
            responses: Some(list.into()),
            responses_file: None,
        }
    }

    #[test]
    fn saves_merge_into_existing_draft() {
        let session = empty_session();
        let name = MetaArgs {
            name: Some("Sam".into()),
            ..Default::default()
        };
        let mut out = Vec::new();
        handle_draft_save_command(&session, &name, &respond("Q3=4,Q1=2"), &mut out).unwrap();
        handle_draft_save_command(&session, &MetaArgs::default(), &respond("Q1=5"), &mut out)
            .unwrap();

        let draft = session.store().get_draft().unwrap().unwrap();
        assert_eq!(draft.meta.assessee_name, "Sam");
        let keys: Vec<_> = draft.responses.keys().cloned().collect();
        assert_eq!(keys, vec!["Q1", "Q3"]);
        assert_eq!(draft.responses.get("Q1"), Some(&5));

        let text = text(out);
        assert!(text.contains("2/15 questions answered"));
        assert!(text.contains("Missing fields: role, squad, tribe, assessment type"));
    }

    #[test]
    fn show_and_clear() {
        let session = empty_session();
        let mut out = Vec::new();
        handle_draft_show_command(&session, OutputFormat::Text, &mut out).unwrap();
        handle_draft_clear_command(&session, &mut out).unwrap();
        assert_eq!(text(out), "No draft saved.\nNo draft to clear.\n");

        let name = MetaArgs {
            name: Some("Sam".into()),
            ..Default::default()
        };
        handle_draft_save_command(&session, &name, &respond("Q2=3"), &mut Vec::new()).unwrap();

        let mut out = Vec::new();
        handle_draft_show_command(&session, OutputFormat::Text, &mut out).unwrap();
        let shown = text(out);
        assert!(shown.starts_with("Name: Sam\n"));
        assert!(shown.contains("Responses: Q2=3\n"));
        assert!(shown.contains("Unanswered: Q1, Q3,"));

        let mut out = Vec::new();
        handle_draft_clear_command(&session, &mut out).unwrap();
        assert_eq!(text(out), "Draft cleared.\n");
        assert!(session.store().get_draft().unwrap().is_none());
    }

    #[test]
    fn show_json_is_null_without_draft() {
        let mut out = Vec::new();
        handle_draft_show_command(&empty_session(), OutputFormat::Json, &mut out).unwrap();
        assert_eq!(text(out), "null\n");
    }
}

//! Handlers for `export csv|html|json` and `import`.

use crate::app::Session;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use teamassess_export::{assessment_csv, comparison_csv, export_filename, print_html};
use teamassess_scoring::{check_responses, today, Assessment};
use teamassess_state::AssessmentStore;

/// Write `body` to stdout, to a file, or into a directory under `default_name`.
fn write_output(
    body: &str,
    output: Option<&Path>,
    default_name: Option<String>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(target) = output else {
        writeln!(out, "{body}")?;
        return Ok(());
    };
    let path: PathBuf = if target.is_dir() {
        match default_name {
            Some(name) => target.join(name),
            None => bail!("{} is a directory; pass a file path", target.display()),
        }
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = body.len(), "export written");
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

fn find_pair(
    session: &Session,
    id: &str,
    compare: Option<&str>,
) -> Result<(Assessment, Option<Assessment>)> {
    let current = session.find(id)?;
    let previous = compare.map(|other| session.find(other)).transpose()?;
    Ok((current, previous))
}

/// Handle the `export csv` command.
pub(crate) fn handle_export_csv_command(
    session: &Session,
    id: &str,
    compare: Option<&str>,
    include_metadata: bool,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let (current, previous) = find_pair(session, id, compare)?;
    let body = match &previous {
        Some(previous) => comparison_csv(&current, previous, &session.policy()),
        None => assessment_csv(&current, include_metadata),
    };
    let name = export_filename(&current, previous.as_ref(), &today());
    write_output(&body, output, Some(name), out)
}

/// Handle the `export html` command.
pub(crate) fn handle_export_html_command(
    session: &Session,
    id: &str,
    compare: Option<&str>,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let (current, previous) = find_pair(session, id, compare)?;
    let body = print_html(&current, previous.as_ref(), &today());
    write_output(&body, output, None, out)
}

/// Handle the `export json` command.
pub(crate) fn handle_export_json_command(
    session: &Session,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let body = session.store().export_json()?;
    write_output(&body, output, None, out)
}

/// Handle the `import` command.
///
/// The file must hold a JSON array of assessments with valid responses; it
/// replaces the whole collection.
pub(crate) fn handle_import_command(session: &Session, file: &Path, out: &mut dyn Write) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let assessments: Vec<Assessment> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of assessments", file.display()))?;
    for a in &assessments {
        check_responses(&a.responses)
            .with_context(|| format!("assessment '{}' has invalid responses", a.id))?;
    }
    let count = assessments.len();
    session.store().replace_all(assessments)?;
    writeln!(out, "Imported {count} assessment(s)")?;
    Ok(())
}

//! CLI handler for the `recommend` command.

use super::input::write_json;
use crate::app::Session;
use crate::cli::OutputFormat;
use anyhow::{anyhow, Result};
use std::io::Write;
use teamassess_export::recommendation_text;
use teamassess_intelligence::{select_comparison, RecommendationEngine, Recommender};
use teamassess_state::AssessmentStore;

/// Handle the `recommend` command.
///
/// Without an id the most recent assessment is used. The comparison is the
/// explicit `--compare` id, nothing with `--no-compare`, and otherwise the
/// automatic choice for the same assessee.
pub(crate) fn handle_recommend_command(
    session: &Session,
    id: Option<&str>,
    compare: Option<&str>,
    no_compare: bool,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let all = session.store().list()?;
    let current = match id {
        Some(id) => session.find(id)?,
        None => all
            .iter()
            .max_by_key(|a| a.timestamp)
            .cloned()
            .ok_or_else(|| anyhow!("no assessments stored; submit one or run `teamassess samples`"))?,
    };
    let prior = match (no_compare, compare) {
        (true, _) => None,
        (false, Some(other)) => Some(session.find(other)?),
        (false, None) => select_comparison(&current, &all).cloned(),
    };

    tracing::debug!(
        id = %current.id,
        compared_with = prior.as_ref().map(|p| p.id.as_str()),
        "recommend command resolved comparison"
    );
    let engine = RecommendationEngine::new().with_policy(session.policy());
    let report = engine
        .recommend(Some(&current), prior.as_ref())
        .ok_or_else(|| anyhow!("no recommendation produced for '{}'", current.id))?;

    if format == OutputFormat::Json {
        return write_json(out, &report);
    }

    let meta = &current.meta;
    writeln!(
        out,
        "Recommendations for {} ({}, {})",
        meta.assessee_name, meta.assessment_type, meta.date
    )?;
    match &prior {
        Some(p) => writeln!(
            out,
            "Compared with {} from {}",
            p.meta.assessment_type, p.meta.date
        )?,
        None => writeln!(out, "No comparison assessment")?,
    }
    writeln!(out)?;
    write!(out, "{}", recommendation_text(&report))?;
    Ok(())
}

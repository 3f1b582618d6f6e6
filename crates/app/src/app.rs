use crate::cli::{Cli, Commands, DraftCommand, ExportCommand};
use crate::commands::{
    handle_check_command, handle_delete_command, handle_draft_clear_command,
    handle_draft_save_command, handle_draft_show_command, handle_export_csv_command,
    handle_export_html_command, handle_export_json_command, handle_import_command,
    handle_list_command, handle_questions_command, handle_recommend_command,
    handle_reset_command, handle_samples_command, handle_show_command, handle_submit_command,
};
use crate::config::{load_config, resolve_settings, Settings};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::Write;
use teamassess_intelligence::{validate_library, RecommendationPolicy};
use teamassess_scoring::{sample_assessments, validate_catalog, Assessment, AssessmentId};
use teamassess_state::{AssessmentStore, DraftStore, JsonFileStore};

/// Anything that can hold both assessments and the draft.
pub trait Store: AssessmentStore + DraftStore {}

impl<T: AssessmentStore + DraftStore> Store for T {}

/// An open store plus the recommendation policy in effect.
pub struct Session {
    store: Box<dyn Store>,
    policy: RecommendationPolicy,
}

impl Session {
    pub fn new(store: Box<dyn Store>, policy: RecommendationPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn policy(&self) -> RecommendationPolicy {
        self.policy
    }

    /// Look up an assessment, failing with a readable message when absent.
    pub(crate) fn find(&self, id: &str) -> Result<Assessment> {
        self.store
            .get(&AssessmentId::from(id))?
            .ok_or_else(|| anyhow!("assessment '{id}' not found"))
    }
}

/// Verify the static question catalog and intervention library.
pub fn self_check() -> Result<()> {
    validate_catalog().context("question catalog self-check failed")?;
    validate_library().context("intervention library self-check failed")?;
    Ok(())
}

fn open_session(settings: &Settings) -> Result<Session> {
    let store = JsonFileStore::open(&settings.data_dir).with_context(|| {
        format!(
            "failed to open assessment store at {}",
            settings.data_dir.display()
        )
    })?;
    if settings.seed_samples && store.is_fresh() {
        let added = store
            .load_samples(&sample_assessments())
            .context("failed to seed sample assessments")?;
        tracing::info!(added, "seeded sample assessments into a fresh store");
    }
    Ok(Session::new(Box::new(store), settings.policy))
}

/// Dispatch one parsed command against an open session.
pub fn execute(command: Commands, session: &Session, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Questions { format } => handle_questions_command(format, out),
        Commands::Check => handle_check_command(out),
        Commands::Submit {
            meta,
            responses,
            from_draft,
            format,
        } => handle_submit_command(session, &meta, &responses, from_draft, format, out),
        Commands::List { format } => handle_list_command(session, format, out),
        Commands::Show { id, format } => handle_show_command(session, &id, format, out),
        Commands::Recommend {
            id,
            compare,
            no_compare,
            format,
        } => handle_recommend_command(
            session,
            id.as_deref(),
            compare.as_deref(),
            no_compare,
            format,
            out,
        ),
        Commands::Export { target } => match target {
            ExportCommand::Csv {
                id,
                compare,
                no_metadata,
                output,
            } => handle_export_csv_command(
                session,
                &id,
                compare.as_deref(),
                !no_metadata,
                output.as_deref(),
                out,
            ),
            ExportCommand::Html {
                id,
                compare,
                output,
            } => handle_export_html_command(
                session,
                &id,
                compare.as_deref(),
                output.as_deref(),
                out,
            ),
            ExportCommand::Json { output } => {
                handle_export_json_command(session, output.as_deref(), out)
            }
        },
        Commands::Import { file } => handle_import_command(session, &file, out),
        Commands::Delete { id } => handle_delete_command(session, &id, out),
        Commands::Draft { action } => match action {
            DraftCommand::Save { meta, responses } => {
                handle_draft_save_command(session, &meta, &responses, out)
            }
            DraftCommand::Show { format } => handle_draft_show_command(session, format, out),
            DraftCommand::Clear => handle_draft_clear_command(session, out),
        },
        Commands::Samples => handle_samples_command(session, out),
        Commands::Reset => handle_reset_command(session, out),
    }
}

/// Parse arguments, open the store and run the requested command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    self_check()?;

    let config = load_config()?;
    let settings = resolve_settings(cli.data_dir, cli.no_seed, config.as_ref())?;
    tracing::debug!(
        data_dir = %settings.data_dir.display(),
        seed_samples = settings.seed_samples,
        "resolved settings"
    );
    let session = open_session(&settings)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &session, &mut out)?;
    out.flush()?;
    Ok(())
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `teamassess` application.
#[derive(Debug, Parser)]
#[command(
    name = "teamassess",
    version,
    about = "Competency assessments with scored bands and development recommendations"
)]
pub struct Cli {
    /// Store directory (overrides `TEAMASSESS_DATA_DIR` and the config file).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Never load the sample assessments into a fresh store.
    #[arg(long, global = true, default_value_t = false)]
    pub no_seed: bool,
    #[command(subcommand)]
    pub command: Commands,
}

/// Assessment metadata flags shared by `submit` and `draft save`.
#[derive(Debug, Clone, Default, Args)]
pub struct MetaArgs {
    /// Name of the person assessed.
    #[arg(long)]
    pub name: Option<String>,
    /// Role, e.g. "Product Owner", "Business Expert" or "Other".
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub squad: Option<String>,
    #[arg(long)]
    pub tribe: Option<String>,
    /// Assessment type, e.g. "Baseline", "Week 6" or "Custom".
    #[arg(long = "type", value_name = "TYPE")]
    pub assessment_type: Option<String>,
    /// Assessment date (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub date: Option<String>,
    /// Free-text notes.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Where responses come from.
#[derive(Debug, Clone, Default, Args)]
pub struct ResponseArgs {
    /// Comma-separated `QID=SCORE` pairs, e.g. `Q1=3,Q2=4`.
    #[arg(long, value_name = "LIST", conflicts_with = "responses_file")]
    pub responses: Option<String>,
    /// JSON object mapping question ids to scores.
    #[arg(long, value_name = "FILE")]
    pub responses_file: Option<PathBuf>,
}

/// Available `teamassess` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prints the question catalog grouped by competency.
    Questions {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Runs the catalog and intervention library self-checks.
    Check,
    /// Scores and stores a complete assessment.
    Submit {
        #[command(flatten)]
        meta: MetaArgs,
        #[command(flatten)]
        responses: ResponseArgs,
        /// Start from the saved draft; flags override its values.
        #[arg(long, default_value_t = false)]
        from_draft: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Lists stored assessments.
    List {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Shows competency scores for one assessment.
    Show {
        id: String,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generates development recommendations.
    Recommend {
        /// Assessment id (default: the most recent assessment).
        id: Option<String>,
        /// Compare against this assessment instead of the automatic choice.
        #[arg(long, value_name = "ID", conflicts_with = "no_compare")]
        compare: Option<String>,
        /// Skip the comparison entirely.
        #[arg(long, default_value_t = false)]
        no_compare: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Exports assessments as CSV, printable HTML or JSON.
    Export {
        #[command(subcommand)]
        target: ExportCommand,
    },
    /// Replaces every stored assessment with the contents of a JSON export.
    Import {
        file: PathBuf,
    },
    /// Deletes one assessment.
    Delete {
        id: String,
    },
    /// Manages the in-progress draft.
    Draft {
        #[command(subcommand)]
        action: DraftCommand,
    },
    /// Loads the sample assessments (skips ids already present).
    Samples,
    /// Deletes every assessment and the draft.
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Per-question CSV, or a side-by-side comparison with `--compare`.
    Csv {
        id: String,
        #[arg(long, value_name = "ID")]
        compare: Option<String>,
        /// Leave out the assessee metadata columns.
        #[arg(long, default_value_t = false)]
        no_metadata: bool,
        /// Output file, or a directory to write a generated file name into
        /// (default: stdout).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Self-contained printable HTML report.
    Html {
        id: String,
        #[arg(long, value_name = "ID")]
        compare: Option<String>,
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Every stored assessment as a JSON array.
    Json {
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Merges metadata and responses into the saved draft.
    Save {
        #[command(flatten)]
        meta: MetaArgs,
        #[command(flatten)]
        responses: ResponseArgs,
    },
    /// Shows the saved draft and what is still missing.
    Show {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Discards the saved draft.
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_submit_flags() {
        let cli = Cli::try_parse_from([
            "teamassess",
            "submit",
            "--name",
            "Jane Doe",
            "--type",
            "Week 6",
            "--responses",
            "Q1=3",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit {
                meta,
                responses,
                from_draft,
                format,
            } => {
                assert_eq!(meta.name.as_deref(), Some("Jane Doe"));
                assert_eq!(meta.assessment_type.as_deref(), Some("Week 6"));
                assert_eq!(responses.responses.as_deref(), Some("Q1=3"));
                assert!(!from_draft);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn compare_conflicts_with_no_compare() {
        let err = Cli::try_parse_from([
            "teamassess",
            "recommend",
            "--compare",
            "a",
            "--no-compare",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli =
            Cli::try_parse_from(["teamassess", "list", "--data-dir", "/tmp/x", "--no-seed"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.no_seed);
    }
}

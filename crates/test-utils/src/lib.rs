//! Shared test utilities for teamassess crates.
//!
//! Env guards for tests that touch process-global state, a temp-home
//! fixture laid out like a real `~/.teamassess`, and ready-made response
//! sets and assessments.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use teamassess_scoring::samples::{BASELINE_RESPONSES, WEEK6_RESPONSES};
use teamassess_scoring::{
    Assessment, AssessmentId, AssessmentMeta, Competency, CompetencyScores, Responses, QUESTIONS,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = teamassess_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is restored when _guard drops
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Temporary home directory with the `~/.teamassess` layout.
///
/// The tempdir is removed when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// `$HOME/.teamassess/data`
    pub data_dir: PathBuf,
    /// `$HOME/.teamassess/config.toml` (not created)
    pub config_path: PathBuf,
}

impl TestFixture {
    /// Create the fixture. Does NOT set HOME; use [`TestFixture::home_guard`].
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let root = tempdir.path().join(".teamassess");
        let data_dir = root.join("data");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self {
            config_path: root.join("config.toml"),
            tempdir,
            data_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(&self.home_path().to_string_lossy()))
    }

    /// Write `~/.teamassess/config.toml`.
    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        std::fs::write(&self.config_path, content)?;
        Ok(self.config_path.clone())
    }

    /// Write an arbitrary file under the temp home and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.home_path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

fn to_responses(pairs: &[(&str, u8)]) -> Responses {
    pairs.iter().map(|(id, v)| (id.to_string(), *v)).collect()
}

/// Responses of the baseline sample assessment.
pub fn baseline_responses() -> Responses {
    to_responses(&BASELINE_RESPONSES)
}

/// Responses of the week-6 sample assessment.
pub fn week6_responses() -> Responses {
    to_responses(&WEEK6_RESPONSES)
}

/// Every catalog question answered with `value`.
pub fn uniform_responses(value: u8) -> Responses {
    QUESTIONS.iter().map(|q| (q.id.to_string(), value)).collect()
}

/// `Q1=..,Q2=..` form of a response set, as accepted on the command line.
pub fn responses_arg(responses: &Responses) -> String {
    responses
        .iter()
        .map(|(id, v)| format!("{id}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Complete metadata for a named assessee.
pub fn meta(name: &str, assessment_type: &str) -> AssessmentMeta {
    AssessmentMeta {
        assessee_name: name.to_string(),
        role: "Product Owner".into(),
        squad: "Squad Alpha".into(),
        tribe: "Digital Banking".into(),
        assessment_type: assessment_type.to_string(),
        date: "2025-01-15".into(),
        notes: String::new(),
    }
}

/// Fixed reference instant; `day` offsets it for ordering tests.
pub fn at_day(day: i64) -> OffsetDateTime {
    datetime!(2025-01-01 09:00 UTC) + Duration::days(day)
}

/// An assessment with a deterministic identity built from real responses.
pub fn assessment(
    id: &str,
    name: &str,
    assessment_type: &str,
    day: i64,
    responses: Responses,
) -> Assessment {
    Assessment::with_identity(
        AssessmentId::from(id),
        at_day(day),
        meta(name, assessment_type),
        responses,
    )
}

/// An assessment whose derived scores are set directly.
///
/// Lets recommendation tests use fractional scores no response set can
/// produce. Responses are left empty.
pub fn scored_assessment(id: &str, scores: &[(Competency, f64)], overall: f64) -> Assessment {
    let mut a = assessment(id, "Jane Doe", "Custom", 0, Responses::new());
    a.competency_scores = scores.iter().copied().collect::<CompetencyScores>();
    a.overall_score = overall;
    a
}

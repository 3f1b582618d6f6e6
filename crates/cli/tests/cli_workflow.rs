//! CLI integration tests driving the built `teamassess` binary.
//!
//! Every test points HOME at its own temp directory so the store and config
//! live under an isolated `~/.teamassess`.

use std::env;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use scopeguard::guard;
use teamassess_test_utils::{baseline_responses, responses_arg, week6_responses, TestFixture};

fn teamassess(home: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_teamassess"))
        .env("HOME", home)
        .env_remove("TEAMASSESS_DATA_DIR")
        .env_remove("TEAMASSESS_CONFIG")
        .env_remove("TEAMASSESS_SEED_SAMPLES")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .with_context(|| format!("failed to execute teamassess {}", args.join(" ")))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command should succeed\n\
         Status: {:?}\n\
         STDOUT:\n{}\n\
         STDERR:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

const META: [&str; 10] = [
    "--name",
    "Sam Lee",
    "--role",
    "Business Expert",
    "--squad",
    "Squad Beta",
    "--tribe",
    "Payments",
    "--type",
    "Baseline",
];

#[test]
fn given_fresh_home_when_listing_then_samples_are_seeded() -> Result<()> {
    // GIVEN an empty HOME
    let original_home = env::var("HOME").ok();
    let tmp = tempfile::tempdir()?;
    let _home_guard = guard(original_home, |original_home| match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    });
    env::set_var("HOME", tmp.path());

    // WHEN the user runs `teamassess list`
    let output = Command::new(env!("CARGO_BIN_EXE_teamassess"))
        .env_remove("TEAMASSESS_DATA_DIR")
        .env_remove("TEAMASSESS_CONFIG")
        .env_remove("TEAMASSESS_SEED_SAMPLES")
        .arg("list")
        .output()
        .context("Failed to execute list command")?;
    assert_success(&output);

    // THEN both sample assessments are listed and persisted
    let stdout = stdout_of(&output);
    assert!(stdout.contains("sample-baseline"));
    assert!(stdout.contains("sample-week6"));
    assert!(tmp
        .path()
        .join(".teamassess/data/assessments.json")
        .exists());
    Ok(())
}

#[test]
fn given_complete_responses_when_submitting_then_assessment_is_listed_and_recommended() -> Result<()>
{
    let fixture = TestFixture::new()?;
    let home = fixture.home_path();

    // GIVEN a store without samples and a complete response set
    let responses = responses_arg(&baseline_responses());
    let mut args = vec!["--no-seed", "submit"];
    args.extend(META);
    args.extend(["--responses", responses.as_str(), "--format", "json"]);

    // WHEN the user submits
    let output = teamassess(home, &args)?;
    assert_success(&output);
    let saved: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let id = saved["id"].as_str().context("id missing")?.to_string();
    assert_eq!(saved["meta"]["assesseeName"], "Sam Lee");

    // THEN it is listed, shown and recommended
    let list = teamassess(home, &["--no-seed", "list"])?;
    assert_success(&list);
    assert!(stdout_of(&list).contains(&id));

    let show = teamassess(home, &["--no-seed", "show", id.as_str()])?;
    assert_success(&show);
    assert!(stdout_of(&show).contains("Overall: 2.73 (Developing)"));

    let recommend = teamassess(home, &["--no-seed", "recommend", "--format", "json"])?;
    assert_success(&recommend);
    let report: serde_json::Value = serde_json::from_slice(&recommend.stdout)?;
    assert_eq!(report["overall"]["band"], "Developing");
    assert_eq!(report["overall"]["topGaps"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn given_out_of_range_score_when_submitting_then_command_fails() -> Result<()> {
    let fixture = TestFixture::new()?;
    let mut args = vec!["--no-seed", "submit"];
    args.extend(META);
    args.extend(["--responses", "Q1=6"]);

    let output = teamassess(fixture.home_path(), &args)?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be between 1 and 5"), "stderr: {stderr}");

    let list = teamassess(fixture.home_path(), &["--no-seed", "list"])?;
    assert_eq!(stdout_of(&list), "No assessments stored.\n");
    Ok(())
}

#[test]
fn given_saved_draft_when_submitting_from_draft_then_draft_is_consumed() -> Result<()> {
    let fixture = TestFixture::new()?;
    let home = fixture.home_path();

    // GIVEN a draft built over two saves
    let mut first = vec!["--no-seed", "draft", "save"];
    first.extend(META);
    first.extend(["--responses", "Q1=4,Q2=4"]);
    assert_success(&teamassess(home, &first)?);

    let rest = responses_arg(&week6_responses());
    let second = teamassess(home, &["--no-seed", "draft", "save", "--responses", rest.as_str()])?;
    assert_success(&second);
    assert!(stdout_of(&second).contains("Ready to submit"));

    // WHEN submitting from the draft
    let submit = teamassess(home, &["--no-seed", "submit", "--from-draft"])?;
    assert_success(&submit);
    assert!(stdout_of(&submit).contains("Overall: 3.60 (Competent)"));

    // THEN the draft is gone
    let show = teamassess(home, &["--no-seed", "draft", "show"])?;
    assert_success(&show);
    assert_eq!(stdout_of(&show), "No draft saved.\n");
    Ok(())
}

#[test]
fn given_samples_when_exporting_then_files_are_written_and_reimportable() -> Result<()> {
    let fixture = TestFixture::new()?;
    let home = fixture.home_path();
    let exports = home.join("exports");
    std::fs::create_dir_all(&exports)?;
    let exports_arg = exports.to_string_lossy().into_owned();

    // GIVEN the seeded samples
    assert_success(&teamassess(home, &["samples"])?);

    // WHEN exporting a comparison CSV into a directory and HTML into a file
    let csv = teamassess(
        home,
        &[
            "export",
            "csv",
            "sample-week6",
            "--compare",
            "sample-baseline",
            "--output",
            exports_arg.as_str(),
        ],
    )?;
    assert_success(&csv);
    let html_path = exports.join("report.html");
    let html_arg = html_path.to_string_lossy().into_owned();
    let html = teamassess(
        home,
        &[
            "export",
            "html",
            "sample-baseline",
            "--output",
            html_arg.as_str(),
        ],
    )?;
    assert_success(&html);

    // THEN both files exist with the expected content
    let written: Vec<_> = std::fs::read_dir(&exports)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(written
        .iter()
        .any(|name| name.starts_with("assessment-comparison-Jane Doe-") && name.ends_with(".csv")));
    assert!(std::fs::read_to_string(&html_path)?.contains("Team Assessment Report - Jane Doe"));

    // AND a JSON export restores the collection after a reset
    let backup = home.join("backup.json");
    let backup_arg = backup.to_string_lossy().into_owned();
    assert_success(&teamassess(home, &["export", "json", "--output", backup_arg.as_str()])?);
    assert_success(&teamassess(home, &["reset"])?);
    let empty = teamassess(home, &["list"])?;
    assert_eq!(stdout_of(&empty), "No assessments stored.\n");

    let import = teamassess(home, &["import", backup_arg.as_str()])?;
    assert_success(&import);
    assert_eq!(stdout_of(&import), "Imported 2 assessment(s)\n");
    Ok(())
}

#[test]
fn given_config_file_when_running_then_store_settings_apply() -> Result<()> {
    let fixture = TestFixture::new()?;
    let home = fixture.home_path();
    let custom = home.join("custom-data");
    fixture.write_config(&format!(
        "[store]\ndata_dir = {:?}\nseed_samples = false\n",
        custom.to_string_lossy()
    ))?;

    let list = teamassess(home, &["list"])?;
    assert_success(&list);
    assert_eq!(stdout_of(&list), "No assessments stored.\n");
    assert!(custom.is_dir());

    fixture.write_config("[store\n")?;
    let broken = teamassess(home, &["list"])?;
    assert!(!broken.status.success());
    assert!(String::from_utf8_lossy(&broken.stderr).contains("failed to parse config file"));
    Ok(())
}

#[test]
fn given_static_tables_when_checking_then_both_pass() -> Result<()> {
    let fixture = TestFixture::new()?;
    let output = teamassess(fixture.home_path(), &["--no-seed", "check"])?;
    assert_success(&output);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Question catalog OK"));
    assert!(stdout.contains("Intervention library OK"));
    Ok(())
}

#![cfg(unix)]

use anyhow::Result;
use example_runner::domain::model::{BatchStatus, Outcome};
use example_runner::domain::policy::FailurePolicy;
use example_runner::{BatchRunner, ProcessLauncher, RunnerSettings, StopSignal};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn sh_settings(dir: &Path, policy: FailurePolicy) -> RunnerSettings {
    RunnerSettings {
        dir: dir.to_path_buf(),
        extension: "sh".to_string(),
        command: "sh".to_string(),
        policy,
    }
}

/// Each script leaves a marker next to itself, then exits with `code`.
fn write_script(dir: &Path, name: &str, code: i32) -> Result<()> {
    let body = format!(
        "touch \"$(dirname \"$0\")/ran-$(basename \"$0\" .sh)\"\nexit {}\n",
        code
    );
    fs::write(dir.join(name), body)?;
    Ok(())
}

#[tokio::test]
async fn test_every_file_runs_even_when_one_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_script(temp_dir.path(), "one.sh", 3)?;
    write_script(temp_dir.path(), "two.sh", 0)?;
    fs::write(temp_dir.path().join("notes.txt"), "not a script")?;

    let runner = BatchRunner::new(
        sh_settings(temp_dir.path(), FailurePolicy::Continue),
        ProcessLauncher::new(),
        StopSignal::new(),
    );
    let mut out = Vec::new();
    let report = runner.run(&mut out).await?;

    let expected = format!(
        "sh {}\nsh {}\n",
        temp_dir.path().join("one.sh").display(),
        temp_dir.path().join("two.sh").display()
    );
    assert_eq!(String::from_utf8(out)?, expected);
    assert_eq!(report.status, BatchStatus::Completed);
    assert_eq!(report.records[0].outcome, Outcome::Failed { code: Some(3) });
    assert_eq!(report.records[1].outcome, Outcome::Succeeded);
    assert!(temp_dir.path().join("ran-one").exists());
    assert!(temp_dir.path().join("ran-two").exists());
    Ok(())
}

#[tokio::test]
async fn test_fail_fast_leaves_remaining_files_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_script(temp_dir.path(), "a.sh", 1)?;
    write_script(temp_dir.path(), "b.sh", 0)?;

    let runner = BatchRunner::new(
        sh_settings(temp_dir.path(), FailurePolicy::FailFast),
        ProcessLauncher::new(),
        StopSignal::new(),
    );
    let report = runner.run(&mut Vec::new()).await?;

    assert_eq!(report.status, BatchStatus::StoppedByPolicy);
    assert_eq!(report.records.len(), 1);
    assert!(temp_dir.path().join("ran-a").exists());
    assert!(!temp_dir.path().join("ran-b").exists());
    Ok(())
}

#[tokio::test]
async fn test_stop_signal_kills_running_child_and_skips_the_rest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("a_slow.sh"), "sleep 30\n")?;
    write_script(temp_dir.path(), "b_next.sh", 0)?;

    let stop = StopSignal::new();
    let trigger = stop.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.trigger();
    });

    let runner = BatchRunner::new(
        sh_settings(temp_dir.path(), FailurePolicy::Continue),
        ProcessLauncher::new(),
        stop,
    );
    let started = Instant::now();
    let report = runner.run(&mut Vec::new()).await?;

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(report.status, BatchStatus::Interrupted);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].outcome, Outcome::Interrupted);
    assert!(!temp_dir.path().join("ran-b_next").exists());
    Ok(())
}

#[tokio::test]
async fn test_unknown_command_is_recorded_not_raised() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("main.go"), "package main\n")?;

    let settings = RunnerSettings {
        dir: temp_dir.path().to_path_buf(),
        command: "example-runner-missing-toolchain run".to_string(),
        ..RunnerSettings::default()
    };
    let runner = BatchRunner::new(settings, ProcessLauncher::new(), StopSignal::new());
    let report = runner.run(&mut Vec::new()).await?;

    assert_eq!(report.status, BatchStatus::Completed);
    assert!(matches!(report.records[0].outcome, Outcome::SpawnFailed { .. }));
    Ok(())
}

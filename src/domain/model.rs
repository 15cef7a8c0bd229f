use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 掃描目錄第一層中符合副檔名的檔案
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// 一次 `<command> <path>` 執行。不做任何引號處理，含空白的路徑會被拆成多個參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    command_line: String,
}

impl Invocation {
    pub fn new(command: &str, entry: &FileEntry) -> Self {
        Self {
            command_line: format!("{} {}", command, entry.path.display()),
        }
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn argv(&self) -> Vec<&str> {
        self.command_line.split_whitespace().collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    /// 非零退出；被信號終止時 `code` 為 `None`
    Failed { code: Option<i32> },
    SpawnFailed { reason: String },
    Interrupted,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRecord {
    pub invocation: Invocation,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Completed,
    Interrupted,
    StoppedByPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub status: BatchStatus,
    pub discovered: usize,
    pub records: Vec<InvocationRecord>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. } | Outcome::SpawnFailed { .. }))
            .count()
    }

    pub fn first_failure(&self) -> Option<&InvocationRecord> {
        self.records
            .iter()
            .find(|r| !r.outcome.is_success() && r.outcome != Outcome::Interrupted)
    }
}

pub mod toml_config;

use crate::domain::policy::FailurePolicy;
use crate::domain::ports::RunnerConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_DIR: &str = "_example";
pub const DEFAULT_EXTENSION: &str = "go";
pub const DEFAULT_COMMAND: &str = "go run";

/// 合併後實際使用的設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerSettings {
    pub dir: PathBuf,
    pub extension: String,
    pub command: String,
    pub policy: FailurePolicy,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            policy: FailurePolicy::default(),
        }
    }
}

impl RunnerSettings {
    /// 套用 TOML 檔中有設定的欄位
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        let runner = &file.runner;
        if let Some(dir) = &runner.dir {
            self.dir = dir.clone();
        }
        if let Some(extension) = &runner.extension {
            self.extension = normalize_extension(extension);
        }
        if let Some(command) = &runner.command {
            self.command = command.clone();
        }
        if let Some(policy) = runner.policy {
            self.policy = policy;
        }
        self
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.strip_prefix('.').unwrap_or(extension).to_string()
}

impl RunnerConfig for RunnerSettings {
    fn dir(&self) -> &Path {
        &self.dir
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn command(&self) -> &str {
        &self.command
    }

    fn policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl Validate for RunnerSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_dir("dir", &self.dir)?;
        validation::validate_extension("extension", &self.extension)?;
        validation::validate_non_empty_string("command", &self.command)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "example-runner")]
#[command(about = "Runs a command on every source file of a directory, one at a time")]
pub struct CliConfig {
    /// Directory scanned for source files (top level only) [default: _example]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// File extension to match, without the dot [default: go]
    #[arg(long)]
    pub extension: Option<String>,

    /// Command prefixed to each file path [default: "go run"]
    #[arg(long)]
    pub command: Option<String>,

    /// What to do when a file fails: continue or fail-fast [default: continue]
    #[arg(long)]
    pub policy: Option<FailurePolicy>,

    /// TOML configuration file; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report of the batch; `{timestamp}` is expanded
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 預設值 → TOML 檔 → 命令列參數，後者覆蓋前者
    pub fn settings(&self) -> Result<RunnerSettings> {
        let mut settings = RunnerSettings::default();

        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from {}", path.display());
            settings = settings.merge_file(&TomlConfig::from_file(path)?);
        }

        if let Some(dir) = &self.dir {
            settings.dir = dir.clone();
        }
        if let Some(extension) = &self.extension {
            settings.extension = normalize_extension(extension);
        }
        if let Some(command) = &self.command {
            settings.command = command.clone();
        }
        if let Some(policy) = self.policy {
            settings.policy = policy;
        }

        Ok(settings)
    }
}

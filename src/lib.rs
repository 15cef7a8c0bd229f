pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::process::ProcessLauncher;
pub use config::RunnerSettings;
pub use crate::core::{cancel::StopSignal, runner::BatchRunner};
pub use utils::error::RunnerError;

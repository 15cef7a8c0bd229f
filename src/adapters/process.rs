use crate::domain::model::{Invocation, Outcome};
use crate::domain::ports::Launcher;
use async_trait::async_trait;
use tokio::process::Command;

/// 以子程序執行，繼承 stdio 與工作目錄
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&self, invocation: &Invocation) -> Outcome {
        let argv = invocation.argv();
        let Some((program, args)) = argv.split_first() else {
            return Outcome::SpawnFailed {
                reason: "empty command line".to_string(),
            };
        };

        // 批次中斷時 future 被 drop，子程序隨之終止
        let mut child = match Command::new(program).args(args).kill_on_drop(true).spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("Could not start '{}': {}", program, e);
                return Outcome::SpawnFailed {
                    reason: e.to_string(),
                };
            }
        };

        match child.wait().await {
            Ok(status) if status.success() => Outcome::Succeeded,
            Ok(status) => Outcome::Failed {
                code: status.code(),
            },
            Err(e) => {
                tracing::debug!("Waiting on '{}' failed: {}", invocation, e);
                Outcome::Failed { code: None }
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::model::FileEntry;

    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let invocation = Invocation::new("true", &FileEntry::new("ignored.go"));
        assert_eq!(ProcessLauncher::new().launch(&invocation).await, Outcome::Succeeded);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let invocation = Invocation::new("false", &FileEntry::new("ignored.go"));
        assert_eq!(
            ProcessLauncher::new().launch(&invocation).await,
            Outcome::Failed { code: Some(1) }
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_failure() {
        let invocation = Invocation::new(
            "example-runner-no-such-program",
            &FileEntry::new("a.go"),
        );
        let outcome = ProcessLauncher::new().launch(&invocation).await;
        assert!(matches!(outcome, Outcome::SpawnFailed { .. }));
    }
}

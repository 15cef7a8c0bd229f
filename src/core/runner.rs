use crate::core::cancel::StopSignal;
use crate::core::discovery::discover;
use crate::domain::model::{BatchReport, BatchStatus, Invocation, InvocationRecord, Outcome};
use crate::domain::ports::{Launcher, RunnerConfig};
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;

/// 對每個檔案依序執行一次設定的命令
pub struct BatchRunner<C: RunnerConfig, L: Launcher> {
    config: C,
    launcher: L,
    stop: StopSignal,
    dry_run: bool,
}

impl<C: RunnerConfig, L: Launcher> BatchRunner<C, L> {
    pub fn new(config: C, launcher: L, stop: StopSignal) -> Self {
        Self {
            config,
            launcher,
            stop,
            dry_run: false,
        }
    }

    /// 只輸出命令列，不執行。
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 每個命令列在子程序啟動前寫入 `out` 並 flush。
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<BatchReport> {
        let started_at = Utc::now();
        let entries = discover(self.config.dir(), self.config.extension())?;
        let policy = self.config.policy();

        tracing::debug!(
            "Running '{}' on {} file(s) from {} (policy: {})",
            self.config.command(),
            entries.len(),
            self.config.dir().display(),
            policy
        );

        let mut records = Vec::with_capacity(entries.len());
        let mut status = BatchStatus::Completed;

        for entry in &entries {
            if self.stop.is_triggered() {
                status = BatchStatus::Interrupted;
                break;
            }

            let invocation = Invocation::new(self.config.command(), entry);
            writeln!(out, "{}", invocation)?;
            out.flush()?;

            if self.dry_run {
                continue;
            }

            let outcome = tokio::select! {
                biased;
                _ = self.stop.cancelled() => Outcome::Interrupted,
                outcome = self.launcher.launch(&invocation) => outcome,
            };
            tracing::debug!("{} -> {:?}", invocation, outcome);

            let keep_going = policy.should_continue(&outcome);
            let interrupted = outcome == Outcome::Interrupted;
            records.push(InvocationRecord {
                invocation,
                outcome,
            });

            if !keep_going {
                status = if interrupted {
                    BatchStatus::Interrupted
                } else {
                    BatchStatus::StoppedByPolicy
                };
                break;
            }
        }

        let report = BatchReport {
            status,
            discovered: entries.len(),
            records,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::debug!(
            "Batch finished: {:?}, {} succeeded, {} failed",
            report.status,
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }
}

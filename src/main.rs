use clap::Parser;
use example_runner::adapters::report::write_report;
use example_runner::core::cancel::listen_for_interrupt;
use example_runner::domain::model::BatchStatus;
use example_runner::utils::{logger, validation::Validate};
use example_runner::{BatchRunner, CliConfig, ProcessLauncher, RunnerError, StopSignal};

fn fail(e: RunnerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    if let Err(e) = settings.validate() {
        fail(e);
    }

    // 註冊 Ctrl-C 監聽
    let stop = StopSignal::new();
    listen_for_interrupt(stop.clone());

    let runner = BatchRunner::new(settings, ProcessLauncher::new(), stop).with_dry_run(cli.dry_run);
    if cli.dry_run {
        tracing::info!("🔍 Dry run, commands are printed but not executed");
    }

    let report = match runner.run(&mut std::io::stdout()).await {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    if let Some(template) = &cli.report {
        match write_report(template, &report) {
            Ok(path) => tracing::info!("📁 Report saved to: {}", path.display()),
            Err(e) => fail(e),
        }
    }

    match report.status {
        // 中斷：安靜結束，退出碼 0
        BatchStatus::Interrupted => {}
        BatchStatus::StoppedByPolicy => {
            let command = report
                .first_failure()
                .map(|record| record.invocation.to_string())
                .unwrap_or_default();
            fail(RunnerError::BatchAborted { command });
        }
        BatchStatus::Completed => {
            tracing::debug!(
                "✅ {} invocation(s), {} succeeded, {} failed",
                report.records.len(),
                report.succeeded(),
                report.failed()
            );
        }
    }
}

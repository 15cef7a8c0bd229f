use crate::domain::model::BatchReport;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// 將路徑中的 `{timestamp}` 替換為批次開始時間
pub fn resolve_report_path(template: &Path, report: &BatchReport) -> PathBuf {
    let template = template.to_string_lossy();
    if !template.contains("{timestamp}") {
        return PathBuf::from(template.as_ref());
    }

    let stamp = report.started_at.format("%Y%m%d_%H%M%S").to_string();
    PathBuf::from(template.replace("{timestamp}", &stamp))
}

/// 以 JSON 寫出報告，必要時建立上層目錄
pub fn write_report(template: &Path, report: &BatchReport) -> Result<PathBuf> {
    let path = resolve_report_path(template, report);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)?;
    tracing::debug!("Batch report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BatchStatus, FileEntry, Invocation, InvocationRecord, Outcome};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_report() -> BatchReport {
        let started_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        BatchReport {
            status: BatchStatus::Completed,
            discovered: 1,
            records: vec![InvocationRecord {
                invocation: Invocation::new("go run", &FileEntry::new("_example/gauge.go")),
                outcome: Outcome::Failed { code: Some(2) },
            }],
            started_at,
            finished_at: started_at,
        }
    }

    #[test]
    fn test_timestamp_placeholder_is_replaced() {
        let path = resolve_report_path(Path::new("out/run-{timestamp}.json"), &sample_report());
        assert_eq!(path, PathBuf::from("out/run-20240501_123000.json"));
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("reports").join("batch.json");

        let written = write_report(&target, &sample_report()).unwrap();

        assert_eq!(written, target);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(
            json["records"][0]["invocation"]["command_line"],
            "go run _example/gauge.go"
        );
        assert_eq!(json["records"][0]["outcome"]["status"], "failed");
    }
}

use crate::domain::model::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 執行失敗後批次的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// 忽略結果，繼續下一個檔案
    #[default]
    Continue,
    /// 第一次失敗或無法啟動即停止
    FailFast,
}

impl FailurePolicy {
    pub fn should_continue(&self, outcome: &Outcome) -> bool {
        match (self, outcome) {
            (_, Outcome::Interrupted) => false,
            (FailurePolicy::Continue, _) => true,
            (FailurePolicy::FailFast, outcome) => outcome.is_success(),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Continue => f.write_str("continue"),
            FailurePolicy::FailFast => f.write_str("fail-fast"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(FailurePolicy::Continue),
            "fail-fast" | "fail_fast" | "failfast" => Ok(FailurePolicy::FailFast),
            other => Err(format!(
                "unknown failure policy '{}', expected 'continue' or 'fail-fast'",
                other
            )),
        }
    }
}

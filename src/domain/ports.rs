use crate::domain::model::{Invocation, Outcome};
use crate::domain::policy::FailurePolicy;
use async_trait::async_trait;
use std::path::Path;

pub trait RunnerConfig: Send + Sync {
    fn dir(&self) -> &Path;
    /// 不含前導 `.` 的副檔名
    fn extension(&self) -> &str;
    fn command(&self) -> &str;
    fn policy(&self) -> FailurePolicy;
}

/// 執行一次命令直到結束；future 被 drop 時必須終止子程序
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(&self, invocation: &Invocation) -> Outcome;
}

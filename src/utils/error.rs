use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Batch stopped after failure of '{command}'")]
    BatchAborted { command: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Execution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RunnerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RunnerError::IoError(_) | RunnerError::SerializationError(_) => ErrorCategory::Io,
            RunnerError::ConfigValidationError { .. }
            | RunnerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RunnerError::BatchAborted { .. } => ErrorCategory::Execution,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RunnerError::ConfigValidationError { .. }
            | RunnerError::InvalidConfigValueError { .. }
            | RunnerError::BatchAborted { .. } => ErrorSeverity::High,
            RunnerError::SerializationError(_) => ErrorSeverity::Medium,
            RunnerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RunnerError::IoError(e) => format!("File system error: {}", e),
            RunnerError::SerializationError(e) => format!("Could not write the batch report: {}", e),
            RunnerError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            RunnerError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            RunnerError::BatchAborted { command } => {
                format!("Stopped the batch because '{}' failed", command)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the directory and report path are readable and writable",
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file"
            }
            ErrorCategory::Execution => {
                "Fix the failing file or rerun with --policy continue to run the whole batch"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;

use crate::utils::error::{Result, RunnerError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 路徑不可為空，也不可含 NUL 字元
pub fn validate_dir(field_name: &str, dir: &Path) -> Result<()> {
    let reason = if dir.as_os_str().is_empty() {
        "Directory cannot be empty"
    } else if dir.to_string_lossy().contains('\0') {
        "Directory contains null bytes"
    } else {
        return Ok(());
    };

    Err(RunnerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: dir.display().to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RunnerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 副檔名為單一後綴（如 `go`），允許一個前導 `.`
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    if bare.is_empty() {
        return Err(RunnerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension cannot be empty".to_string(),
        });
    }

    if bare.contains(['.', '/', '\\']) || bare.chars().any(char::is_whitespace) {
        return Err(RunnerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be a single suffix without dots, separators or spaces"
                .to_string(),
        });
    }

    Ok(())
}

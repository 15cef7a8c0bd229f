use crate::domain::model::FileEntry;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 列出 `dir` 第一層中副檔名為 `extension` 的一般檔案。
///
/// 目錄不存在、不是目錄或無權限讀取時視為空批次；結果依路徑排序。
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<FileEntry>> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);

    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) if is_nothing_to_run(e.kind()) => {
            tracing::debug!("Cannot list {} ({}), nothing to run", dir.display(), e);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    for item in listing {
        let path = item?.path();
        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            entries.push(FileEntry::new(path));
        }
    }

    entries.sort();
    tracing::debug!(
        "Found {} '.{}' file(s) in {}",
        entries.len(),
        extension,
        dir.display()
    );
    Ok(entries)
}

fn is_nothing_to_run(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::PermissionDenied
    )
}

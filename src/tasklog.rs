//! Reading the failed task's log

use crate::error::{Error, Result};
use std::path::Path;

/// Read the whole log file as UTF-8 text
pub async fn read_task_log(path: &Path) -> Result<String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::LogRead {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "read task log");
    Ok(content)
}

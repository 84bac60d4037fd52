//! Report file output

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `content` to `directory/filename`
///
/// The directory (and any missing parents) is created first; an existing
/// directory is fine. An existing file with the same name is overwritten.
/// The content is written as-is, UTF-8, with no newline added.
///
/// Returns the absolute path of the written file.
///
/// # Errors
/// Returns [`Error::Io`] with the offending path if the directory cannot be
/// created or the file cannot be written.
pub async fn write_report(content: &str, directory: &Path, filename: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|e| io_error(directory, e))?;

    // Nothing has been written yet if this fails
    let path = tokio::fs::canonicalize(directory)
        .await
        .map_err(|e| io_error(directory, e))?
        .join(filename);

    tokio::fs::write(&path, content.as_bytes())
        .await
        .map_err(|e| io_error(&path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "Wrote report file");
    Ok(path)
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

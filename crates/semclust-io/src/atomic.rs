//! Temp-file-then-rename CSV writes.

use std::path::Path;

use semclust_core::errors::IoError;
use tracing::debug;

/// Write a CSV file through `fill`, replacing `path` only if every row was
/// written. On failure the previous file (if any) is left as it was.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<(), IoError>
where
    F: FnOnce(&mut csv::Writer<&mut tempfile::NamedTempFile>) -> Result<(), csv::Error>,
{
    let shown = path.display().to_string();
    let write_err = |reason: String| IoError::Write {
        path: shown.clone(),
        reason,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    {
        let mut writer = csv::Writer::from_writer(&mut tmp);
        fill(&mut writer).map_err(|e| write_err(e.to_string()))?;
        writer.flush().map_err(|e| write_err(e.to_string()))?;
    }
    tmp.persist(path).map_err(|e| write_err(e.error.to_string()))?;
    debug!(path = %shown, "csv written");
    Ok(())
}

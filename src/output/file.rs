use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::path::Path;

use crate::scoring::EvaluationResult;

/// Save an evaluation result as pretty JSON, atomically
///
/// The file is never left half-written: content goes to a temporary file that
/// replaces the target on commit.
pub fn save_result(path: &Path, result: &EvaluationResult) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, result).context("Failed to serialize result")?;

    file.commit()
        .with_context(|| format!("Failed to save result to {}", path.display()))?;

    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::constants::{ERROR_FAILED_TO_WRITE_ARTIFACT, RESULT_VALUE};
use crate::models::{ArtifactInfo, ResultRow};
use crate::utils::hash::calculate_sha256;

/// The fixed result set produced by the job.
pub fn job_results() -> Vec<ResultRow> {
    vec![ResultRow { result: RESULT_VALUE }]
}

/// Write `rows` as CSV to `path`, overwriting any existing file.
///
/// The header row comes from the `ResultRow` field names; no index column is
/// written.
pub fn write_results_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("{}: {}", ERROR_FAILED_TO_WRITE_ARTIFACT, path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("{}: {}", ERROR_FAILED_TO_WRITE_ARTIFACT, path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("{}: {}", ERROR_FAILED_TO_WRITE_ARTIFACT, path.display()))?;
    Ok(())
}

/// Produce the result artifact at `path` and describe what was written.
pub fn write_result_artifact(path: &Path) -> Result<ArtifactInfo> {
    write_results_csv(path, &job_results())?;

    let size_bytes = fs::metadata(path)
        .with_context(|| format!("Failed to stat artifact: {}", path.display()))?
        .len();
    let sha256 = calculate_sha256(path)
        .with_context(|| format!("Failed to hash artifact: {}", path.display()))?;

    info!("Result artifact written to {}", path.display());
    debug!("Artifact size: {} bytes, SHA-256: {}", size_bytes, sha256);

    Ok(ArtifactInfo {
        path: path.to_path_buf(),
        size_bytes,
        sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_result_artifact_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query_result.csv");

        let info = write_result_artifact(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "result\n80\n");
        assert_eq!(info.path, path);
        assert_eq!(info.size_bytes, 10);
        assert_eq!(info.sha256.len(), 64);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query_result.csv");
        fs::write(&path, "stale,data\n1,2\n3,4\n").unwrap();

        write_result_artifact(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "result\n80\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("query_result.csv");

        let err = write_result_artifact(&path).unwrap_err();
        assert!(err.to_string().contains(ERROR_FAILED_TO_WRITE_ARTIFACT));
    }

    #[test]
    fn test_write_multiple_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.csv");

        write_results_csv(&path, &[ResultRow { result: 1 }, ResultRow { result: -2 }]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "result\n1\n-2\n");
    }
}

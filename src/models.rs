use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Job status values understood by the trusted output service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum JobStatus {
    JobPackaging,
    JobProvisioning,
    JobReady,
    #[default]
    JobRunning,
    JobErrored,
    RunComplete,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobStatus::JobPackaging => "JOB-PACKAGING",
            JobStatus::JobProvisioning => "JOB-PROVISIONING",
            JobStatus::JobReady => "JOB-READY",
            JobStatus::JobRunning => "JOB-RUNNING",
            JobStatus::JobErrored => "JOB-ERRORED",
            JobStatus::RunComplete => "RUN-COMPLETE",
        };
        write!(f, "{}", label)
    }
}

/// JSON body of the status PUT.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: JobStatus,
}

impl StatusUpdate {
    pub fn new(status: JobStatus) -> Self {
        Self { status }
    }
}

/// The single row written to the result artifact.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub result: i64,
}

/// Details of the artifact on disk, captured right after it is written.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub sha256: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_update_wire_format() {
        let body = serde_json::to_value(StatusUpdate::new(JobStatus::JobRunning)).unwrap();
        assert_eq!(body, json!({"status": "JOB-RUNNING"}));

        let body = serde_json::to_value(StatusUpdate::new(JobStatus::RunComplete)).unwrap();
        assert_eq!(body, json!({"status": "RUN-COMPLETE"}));
    }

    #[test]
    fn test_display_matches_serde() {
        for status in JobStatus::value_variants() {
            let serialized = serde_json::to_value(status).unwrap();
            assert_eq!(serialized, json!(status.to_string()));
        }
    }

    #[test]
    fn test_default_status_is_running() {
        assert_eq!(JobStatus::default(), JobStatus::JobRunning);
    }
}

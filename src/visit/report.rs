// src/visit/report.rs
// =============================================================================
// What a download run did, for the summary line and for --json output.
// =============================================================================

use serde::Serialize;

/// A file that could not be fetched or written while errors were ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    /// Path relative to the output directory
    pub path: String,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownloadReport {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_written: usize,
    pub bytes_written: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedFile>,
}

impl DownloadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} file(s) written ({} bytes), {} dir(s) created, {} already present, {} failed",
            self.files_written,
            self.bytes_written,
            self.directories_created,
            self.directories_existing,
            self.failures.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report_omits_failures_in_json() {
        let report = DownloadReport { files_written: 2, bytes_written: 10, ..Default::default() };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["files_written"], 2);
        assert!(json.get("failures").is_none());
        assert!(report.is_clean());
    }

    #[test]
    fn test_failures_are_serialized() {
        let report = DownloadReport {
            failures: vec![FailedFile {
                path: "a/broken.bin".to_string(),
                url: "http://h/x/a/broken.bin".to_string(),
                error: "status code error: 404 Not Found".to_string(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["failures"][0]["path"], "a/broken.bin");
        assert!(!report.is_clean());
        assert!(report.summary().ends_with("1 failed"));
    }
}

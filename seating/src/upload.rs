//! Timetable and student-list uploads.

use std::time::Duration;

use shared_http::api::UploadResponse;
use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::ports::SeatingBackend;

/// Uploads are aborted client-side after this long.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(180);

pub const TIMEOUT_MESSAGE: &str = "Upload timed out. Try uploading fewer files at once.";
pub const FAILURE_MESSAGE: &str = "Upload failed. Check if the backend server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
pub enum UploadKind {
    #[strum(serialize = "timetable")]
    Timetable,
    #[strum(serialize = "students")]
    Students,
}

impl UploadKind {
    pub fn title(&self) -> &'static str {
        match self {
            UploadKind::Timetable => "Exam Timetable PDFs",
            UploadKind::Students => "Student List PDFs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

pub fn progress_message(files: &[UploadFile]) -> String {
    let total: usize = files.iter().map(|f| f.bytes.len()).sum();
    format!(
        "Uploading {} file(s) ({:.2} MB)... This may take a moment.",
        files.len(),
        total as f64 / 1024.0 / 1024.0
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Parsed {
        kind: UploadKind,
        parsed: u64,
        saved: u64,
    },
    Rejected(Option<String>),
    TimedOut,
    Failed,
}

impl UploadOutcome {
    pub fn from_result(kind: UploadKind, result: ApiResult<UploadResponse>) -> Self {
        match result {
            Ok(report) if report.status == "error" => UploadOutcome::Rejected(report.message),
            Ok(report) => UploadOutcome::Parsed {
                kind,
                parsed: report.parsed_count,
                saved: report.saved_count,
            },
            Err(ApiError::Timeout) => UploadOutcome::TimedOut,
            // A proxy in front of the backend gave up first.
            Err(ApiError::Status { status: 504, .. }) => UploadOutcome::TimedOut,
            Err(ApiError::Status { message, .. }) => UploadOutcome::Rejected(message),
            Err(_) => UploadOutcome::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Parsed { .. })
    }

    pub fn message(&self) -> String {
        match self {
            UploadOutcome::Parsed {
                kind,
                parsed,
                saved,
            } => format!(
                "Successfully parsed {kind}: {parsed} records found, {saved} new saved."
            ),
            UploadOutcome::Rejected(message) => format!(
                "Error: {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            UploadOutcome::TimedOut => TIMEOUT_MESSAGE.to_string(),
            UploadOutcome::Failed => FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Sends the files, or does nothing when none were picked.
pub async fn upload<B>(backend: &B, kind: UploadKind, files: Vec<UploadFile>) -> Option<UploadOutcome>
where
    B: SeatingBackend + ?Sized,
{
    if files.is_empty() {
        return None;
    }
    info!(%kind, files = files.len(), "uploading");
    let outcome = UploadOutcome::from_result(kind, backend.upload(kind, files).await);
    if !outcome.is_success() {
        warn!(%kind, ?outcome, "upload did not succeed");
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    fn report(status: &str, parsed: u64, saved: u64, message: Option<&str>) -> UploadResponse {
        UploadResponse {
            status: status.into(),
            parsed_count: parsed,
            saved_count: saved,
            message: message.map(String::from),
        }
    }

    #[test]
    fn test_success_message() {
        let outcome = UploadOutcome::from_result(
            UploadKind::Timetable,
            Ok(report("success", 120, 15, None)),
        );
        assert_eq!(
            outcome.message(),
            "Successfully parsed timetable: 120 records found, 15 new saved."
        );
    }

    #[test]
    fn test_timeout_is_distinct_from_failure() {
        let timed_out = UploadOutcome::from_result(UploadKind::Students, Err(ApiError::Timeout));
        let failed = UploadOutcome::from_result(
            UploadKind::Students,
            Err(ApiError::Network("refused".into())),
        );
        assert_eq!(timed_out.message(), TIMEOUT_MESSAGE);
        assert_eq!(failed.message(), FAILURE_MESSAGE);
    }

    #[test]
    fn test_gateway_timeout_reads_as_timeout() {
        let outcome = UploadOutcome::from_result(
            UploadKind::Timetable,
            Err(ApiError::status(504, Some("backend timed out".into()))),
        );
        assert_eq!(outcome, UploadOutcome::TimedOut);
        assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_backend_rejection_messages() {
        let with_detail = UploadOutcome::from_result(
            UploadKind::Students,
            Err(ApiError::status(400, Some("No files uploaded".into()))),
        );
        assert_eq!(with_detail.message(), "Error: No files uploaded");

        let without = UploadOutcome::from_result(
            UploadKind::Students,
            Ok(report("error", 0, 0, None)),
        );
        assert_eq!(without.message(), "Error: Unknown error");
    }

    #[test]
    fn test_progress_message() {
        let files = vec![
            UploadFile::new("a.pdf", vec![0; 1024 * 1024]),
            UploadFile::new("b.pdf", vec![0; 512 * 1024]),
        ];
        assert_eq!(
            progress_message(&files),
            "Uploading 2 file(s) (1.50 MB)... This may take a moment."
        );
    }

    #[tokio::test]
    async fn test_no_files_is_a_no_op() {
        let backend = FakeBackend::default();
        assert!(upload(&backend, UploadKind::Timetable, vec![]).await.is_none());
        assert_eq!(backend.upload_calls(), 0);
    }

    #[tokio::test]
    async fn test_upload_goes_through_backend() {
        let backend = FakeBackend::default();
        let outcome = upload(
            &backend,
            UploadKind::Students,
            vec![UploadFile::new("list.pdf", b"%PDF".to_vec())],
        )
        .await
        .unwrap();
        assert!(outcome.is_success());
        assert_eq!(backend.upload_calls(), 1);
    }
}

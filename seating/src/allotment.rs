use shared_http::api::{AllotResponse, AllotmentRecord};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::ports::SeatingBackend;

pub const NETWORK_FAILURE_LINE: &str = "Network Error - Check if backend is running";

/// Log lines shown after `POST /api/allot`.
pub fn log_lines(result: ApiResult<AllotResponse>) -> Vec<String> {
    match result {
        Ok(report) if report.status == "success" && !report.log.is_empty() => report.log,
        Ok(report) => vec![failure_line(report.message.as_deref())],
        Err(ApiError::Status { message, .. }) => vec![failure_line(message.as_deref())],
        Err(_) => vec![NETWORK_FAILURE_LINE.to_string()],
    }
}

fn failure_line(message: Option<&str>) -> String {
    format!("Failed: {}", message.unwrap_or("Unknown error"))
}

#[derive(Debug, Clone, Default)]
pub struct AllotmentRun {
    log: Vec<String>,
    running: bool,
}

impl AllotmentRun {
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clears the previous log and starts a run.
    pub fn begin(&mut self) {
        self.log.clear();
        self.running = true;
    }

    pub fn finish(&mut self, result: ApiResult<AllotResponse>) {
        self.running = false;
        if let Err(e) = &result {
            warn!("allotment run failed: {}", e);
        }
        self.log = log_lines(result);
        info!(lines = self.log.len(), "allotment run finished");
    }

    pub async fn run<B>(&mut self, backend: &B)
    where
        B: SeatingBackend + ?Sized,
    {
        self.begin();
        let result = backend.run_allotment().await;
        self.finish(result);
    }
}

/// Rows for the results table; empty on failure.
pub async fn load_results<B>(backend: &B) -> Vec<AllotmentRecord>
where
    B: SeatingBackend + ?Sized,
{
    backend.list_allotments().await.unwrap_or_else(|e| {
        warn!("failed to load allotments: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn test_successful_run_shows_backend_log() {
        let backend = FakeBackend::default();
        let mut run = AllotmentRun::default();
        run.run(&backend).await;
        assert!(!run.is_running());
        assert_eq!(run.log()[0], "Processing Slot: 2024-11-20 FN");
    }

    #[tokio::test]
    async fn test_offline_run() {
        let backend = FakeBackend::default().offline();
        let mut run = AllotmentRun::default();
        run.run(&backend).await;
        assert_eq!(run.log(), [NETWORK_FAILURE_LINE.to_string()]);
    }

    #[test]
    fn test_error_status_lines() {
        let rejected = AllotResponse {
            status: "error".into(),
            log: vec![],
            message: Some("No exams found".into()),
        };
        assert_eq!(log_lines(Ok(rejected)), ["Failed: No exams found"]);
        assert_eq!(
            log_lines(Err(ApiError::status(500, None))),
            ["Failed: Unknown error"]
        );
    }

    #[tokio::test]
    async fn test_results_empty_when_offline() {
        let backend = FakeBackend::default().offline();
        assert!(load_results(&backend).await.is_empty());
    }
}

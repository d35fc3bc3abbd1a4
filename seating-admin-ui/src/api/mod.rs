use dioxus::prelude::info;
use seating::{ApiResult, BackendHealth, HttpBackend, ReportKind};

use crate::config::Config;

/// Shared through context; wraps the typed backend client.
#[derive(Clone)]
pub struct ApiClient {
    backend: HttpBackend,
    config: Config,
}

impl ApiClient {
    pub fn new() -> ApiResult<Self> {
        let config = Config::from_env();
        let backend = HttpBackend::new(&config.gateway_url)?;
        Ok(Self { backend, config })
    }

    pub fn backend(&self) -> &HttpBackend {
        &self.backend
    }

    pub fn gateway_url(&self) -> &str {
        &self.config.gateway_url
    }

    pub fn report_url(&self, kind: ReportKind) -> String {
        self.backend.report_url(kind)
    }

    pub async fn check_health(&self) -> BackendHealth {
        info!("Checking backend health via {}", self.gateway_url());
        BackendHealth::check(&self.backend).await
    }
}

// Props need equality; two clients are the same if they talk to the same gateway.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config.gateway_url == other.config.gateway_url
    }
}

use std::sync::Arc;

use shared::Error;
use shared::config::Config;
use tracing::info;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> shared::Result<Self> {
        // One client for every upstream call; its timeout bounds the whole exchange.
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build upstream client: {e}")))?;

        info!(
            backend = %config.backend_url,
            timeout = ?config.proxy_timeout,
            "Proxying /api to backend"
        );

        Ok(Self {
            client,
            backend_url: Arc::from(config.backend_url.as_str()),
        })
    }
}

use dioxus::prelude::info;

#[derive(Clone, Debug)]
pub struct Config {
    pub gateway_url: String,
}

const DEFAULT_GATEWAY_URL: &str = "http://localhost:8090";

impl Config {
    /// Runtime env first (desktop), then the value baked in at build time (web).
    pub fn from_env() -> Self {
        let gateway_url = std::env::var("SEATING_GATEWAY_URL")
            .ok()
            .or_else(|| option_env!("SEATING_GATEWAY_URL").map(String::from))
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        info!("Using gateway at {}", gateway_url);

        Self { gateway_url }
    }
}

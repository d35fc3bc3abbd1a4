use std::fmt;

use tracing::warn;

use crate::ports::SeatingBackend;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendHealth {
    #[default]
    Checking,
    /// Carries the backend's own status word.
    Online(String),
    Offline,
}

impl BackendHealth {
    pub async fn check<B>(backend: &B) -> Self
    where
        B: SeatingBackend + ?Sized,
    {
        match backend.health().await {
            Ok(health) => {
                let word = health.status.unwrap_or(health.message);
                if word.trim().is_empty() {
                    Self::Online("ok".to_string())
                } else {
                    Self::Online(word)
                }
            }
            Err(e) => {
                warn!("health check failed: {}", e);
                Self::Offline
            }
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline)
    }

    /// CSS modifier for the indicator light.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Online(_) => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for BackendHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => f.write_str("Connecting to seating server"),
            Self::Online(word) => write!(f, "Seating server {word}"),
            Self::Offline => f.write_str("Seating server unreachable"),
        }
    }
}

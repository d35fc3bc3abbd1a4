use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("request timed out")]
    Timeout,
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend answered, but not with a 2xx.
    pub fn is_http_error(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout)
    }

    /// Backend-supplied detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text suitable for showing to the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error".to_string(),
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            ApiError::Status { status: 404, .. } => "Not found".to_string(),
            ApiError::Status { status, .. } => format!("Request failed ({status})"),
            ApiError::Timeout => "Request timed out".to_string(),
            ApiError::Decode(_) => "Unexpected response from server".to_string(),
            ApiError::InvalidInput(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::status(status.as_u16(), None)
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

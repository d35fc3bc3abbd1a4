use shared_http::api::{CreateHallRequest, Hall};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::layout::DEFAULT_HALL_CAPACITY;
use crate::ports::SeatingBackend;

pub const CREATE_FAILED_MESSAGE: &str = "Failed to create hall";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete hall";

/// Raw text of the "add hall" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallForm {
    pub name: String,
    pub capacity: String,
    pub block_key: String,
}

impl Default for HallForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            capacity: DEFAULT_HALL_CAPACITY.to_string(),
            block_key: String::new(),
        }
    }
}

impl HallForm {
    pub fn validate(&self) -> ApiResult<CreateHallRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("Hall name is required".into()));
        }
        let capacity = self
            .capacity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| ApiError::InvalidInput("Capacity must be a whole number of at least 1".into()))?;
        let block_key = self.block_key.trim();

        Ok(CreateHallRequest {
            name: name.to_string(),
            capacity,
            block_key: (!block_key.is_empty()).then(|| block_key.to_string()),
        })
    }
}

/// Hall management table plus its form.
#[derive(Debug, Clone, Default)]
pub struct HallAdmin {
    pub form: HallForm,
    halls: Vec<Hall>,
    message: Option<String>,
}

impl HallAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub async fn refresh<B>(&mut self, backend: &B)
    where
        B: SeatingBackend + ?Sized,
    {
        match backend.list_halls(None).await {
            Ok(halls) => self.halls = halls,
            Err(e) => {
                warn!("failed to load halls: {}", e);
                self.halls.clear();
            }
        }
    }

    /// Submits the form; on success clears it and reloads the table.
    pub async fn create<B>(&mut self, backend: &B) -> bool
    where
        B: SeatingBackend + ?Sized,
    {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.message = Some(e.user_message());
                return false;
            }
        };

        match backend.create_hall(&request).await {
            Ok(hall) => {
                info!(hall = %hall.name, capacity = hall.capacity, "hall created");
                self.form = HallForm::default();
                self.message = None;
                self.refresh(backend).await;
                true
            }
            Err(e) => {
                warn!("failed to create hall: {}", e);
                self.message = Some(CREATE_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    /// Deletes and reloads regardless of the outcome.
    pub async fn delete<B>(&mut self, backend: &B, id: i64) -> bool
    where
        B: SeatingBackend + ?Sized,
    {
        let deleted = match backend.delete_hall(id).await {
            Ok(()) => {
                info!(id, "hall deleted");
                self.message = None;
                true
            }
            Err(e) => {
                warn!(id, "failed to delete hall: {}", e);
                self.message = Some(DELETE_FAILED_MESSAGE.to_string());
                false
            }
        };
        self.refresh(backend).await;
        deleted
    }
}

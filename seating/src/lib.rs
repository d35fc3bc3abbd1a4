#![deny(clippy::all)]

pub mod allocation;
pub mod allotment;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod exam_pass;
pub mod grid;
pub mod halls;
pub mod health;
pub mod layout;
pub mod navigation;
pub mod pagination;
pub mod palette;
pub mod ports;
pub mod search;
pub mod ticket;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpBackend, ReportKind};
pub use error::{ApiError, ApiResult};
pub use grid::{GridCell, SeatGrid, SeatSelection};
pub use health::BackendHealth;
pub use layout::{GridLayout, SeatPosition};
pub use navigation::{Load, Navigator};
pub use ports::SeatingBackend;
pub use search::{FocusTarget, SearchOutcome, StudentSearch};

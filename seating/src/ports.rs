use async_trait::async_trait;
use shared_http::api::{
    AllocationStatsQuery, AllocationStatsResponse, AllotResponse, AllotmentRecord, Block,
    CreateHallRequest, Exam, ExamDate, ExamQuery, Hall, HallAllocationResponse, HallSeatsResponse,
    HallTicketResponse, HealthResponse, RunAllocationRequest, RunAllocationResponse, StatsResponse,
    StudentQuery, StudentRef, StudentRow, UploadResponse,
};

use crate::error::ApiResult;
use crate::upload::{UploadFile, UploadKind};

// The REST backend, as seen from the portal. `HttpBackend` is the real one;
// tests plug in fakes.

/// Port for every backend call the portal makes.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SeatingBackend {
    async fn health(&self) -> ApiResult<HealthResponse>;
    async fn stats(&self) -> ApiResult<StatsResponse>;

    // Halls and blocks
    async fn list_blocks(&self) -> ApiResult<Vec<Block>>;
    async fn list_halls(&self, block: Option<&str>) -> ApiResult<Vec<Hall>>;
    async fn create_hall(&self, request: &CreateHallRequest) -> ApiResult<Hall>;
    async fn delete_hall(&self, id: i64) -> ApiResult<()>;
    async fn hall_seats(&self, hall: &str) -> ApiResult<HallSeatsResponse>;

    // Students and exams
    async fn find_student(&self, query: &str) -> ApiResult<StudentRef>;
    async fn list_students(&self, query: &StudentQuery) -> ApiResult<Vec<StudentRow>>;
    async fn list_exams(&self, query: &ExamQuery) -> ApiResult<Vec<Exam>>;
    async fn exam_dates(&self, year: u8) -> ApiResult<Vec<ExamDate>>;

    // Allotment
    async fn list_allotments(&self) -> ApiResult<Vec<AllotmentRecord>>;
    async fn run_allotment(&self) -> ApiResult<AllotResponse>;
    async fn hall_ticket(&self, reg_no: &str) -> ApiResult<HallTicketResponse>;

    // Allocation console
    async fn allocation_stats(&self, query: &AllocationStatsQuery)
    -> ApiResult<AllocationStatsResponse>;
    async fn hall_allocation(&self, hall: &str, year: u8) -> ApiResult<HallAllocationResponse>;
    async fn run_allocation(&self, request: &RunAllocationRequest)
    -> ApiResult<RunAllocationResponse>;

    async fn upload(&self, kind: UploadKind, files: Vec<UploadFile>) -> ApiResult<UploadResponse>;
}

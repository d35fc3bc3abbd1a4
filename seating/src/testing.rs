use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use shared_http::api::{
    AllocationStatsQuery, AllocationStatsResponse, AllotResponse, AllotmentRecord, Block,
    CreateHallRequest, Exam, ExamDate, ExamQuery, Hall, HallAllocationResponse, HallSeatsResponse,
    HallTicketResponse, HealthResponse, RunAllocationRequest, RunAllocationResponse, StatsResponse,
    StudentQuery, StudentRef, StudentRow, UploadResponse,
};

use crate::error::{ApiError, ApiResult};
use crate::ports::SeatingBackend;
use crate::upload::{UploadFile, UploadKind};

pub fn student(reg_no: &str, department: &str) -> StudentRef {
    StudentRef {
        reg_no: reg_no.into(),
        roll_no: format!("24{department}01"),
        name: format!("Student {reg_no}"),
        department: Some(department.into()),
        color: Some(department.to_lowercase()),
        year_of_study: Some(2),
        hall: None,
        block: None,
        block_key: None,
        seat: None,
        seat_label: None,
        seat_code: None,
        row: None,
        col: None,
    }
}

pub fn seated(reg_no: &str, department: &str, block_key: &str, hall: &str, seat: usize) -> StudentRef {
    StudentRef {
        hall: Some(hall.into()),
        block_key: Some(block_key.into()),
        seat: Some(seat),
        ..student(reg_no, department)
    }
}

pub fn hall(id: i64, name: &str, block_key: &str) -> Hall {
    Hall {
        id,
        name: name.into(),
        capacity: 25,
        block: None,
        block_key: Some(block_key.into()),
        filled: None,
        departments: vec![],
    }
}

pub fn block(key: &str, name: &str, halls: &[&str]) -> Block {
    Block {
        key: key.into(),
        name: name.into(),
        icon: String::new(),
        color: "cyan".into(),
        halls: halls.iter().map(|h| h.to_string()).collect(),
        filled: None,
        total: None,
    }
}

#[derive(Default)]
struct State {
    blocks: Vec<Block>,
    halls: Vec<Hall>,
    seats: HashMap<String, Vec<Option<StudentRef>>>,
    students: HashMap<String, StudentRef>,
    student_rows: Vec<StudentRow>,
    exams: Vec<Exam>,
    exam_dates: Vec<ExamDate>,
    allocation: AllocationStatsResponse,
    hall_allocations: HashMap<String, HallAllocationResponse>,
    offline: bool,
    upload_calls: usize,
    run_allocation_calls: usize,
}

/// In-memory backend for unit tests.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn with_blocks(self, blocks: Vec<Block>) -> Self {
        self.state.lock().unwrap().blocks = blocks;
        self
    }

    pub fn with_halls(self, halls: Vec<Hall>) -> Self {
        self.state.lock().unwrap().halls = halls;
        self
    }

    pub fn with_seats(self, hall: &str, seats: Vec<Option<StudentRef>>) -> Self {
        self.state.lock().unwrap().seats.insert(hall.into(), seats);
        self
    }

    pub fn with_student(self, student: StudentRef) -> Self {
        self.state
            .lock()
            .unwrap()
            .students
            .insert(student.reg_no.clone(), student);
        self
    }

    pub fn with_student_rows(self, rows: Vec<StudentRow>) -> Self {
        self.state.lock().unwrap().student_rows = rows;
        self
    }

    pub fn with_exams(self, exams: Vec<Exam>) -> Self {
        self.state.lock().unwrap().exams = exams;
        self
    }

    pub fn with_exam_dates(self, dates: Vec<ExamDate>) -> Self {
        self.state.lock().unwrap().exam_dates = dates;
        self
    }

    pub fn with_allocation(self, stats: AllocationStatsResponse) -> Self {
        self.state.lock().unwrap().allocation = stats;
        self
    }

    pub fn with_hall_allocation(self, hall: &str, response: HallAllocationResponse) -> Self {
        self.state
            .lock()
            .unwrap()
            .hall_allocations
            .insert(hall.into(), response);
        self
    }

    pub fn offline(self) -> Self {
        self.state.lock().unwrap().offline = true;
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.state.lock().unwrap().upload_calls
    }

    pub fn run_allocation_calls(&self) -> usize {
        self.state.lock().unwrap().run_allocation_calls
    }

    pub fn hall_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .halls
            .iter()
            .map(|h| h.name.clone())
            .collect()
    }

    fn online(&self) -> ApiResult<std::sync::MutexGuard<'_, State>> {
        let state = self.state.lock().unwrap();
        if state.offline {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(state)
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::status(404, Some(format!("{what} not found")))
}

#[async_trait]
impl SeatingBackend for FakeBackend {
    async fn health(&self) -> ApiResult<HealthResponse> {
        self.online()?;
        Ok(HealthResponse {
            message: "ok".into(),
            status: Some("ok".into()),
        })
    }

    async fn stats(&self) -> ApiResult<StatsResponse> {
        let state = self.online()?;
        Ok(StatsResponse {
            total_students: state.student_rows.len() as u64,
            total_exams: state.exams.len() as u64,
            total_halls: state.halls.len() as u64,
            allocated_students: state.students.values().filter(|s| s.hall.is_some()).count() as u64,
            ..Default::default()
        })
    }

    async fn list_blocks(&self) -> ApiResult<Vec<Block>> {
        Ok(self.online()?.blocks.clone())
    }

    async fn list_halls(&self, block: Option<&str>) -> ApiResult<Vec<Hall>> {
        let state = self.online()?;
        Ok(state
            .halls
            .iter()
            .filter(|h| block.is_none() || h.block_key.as_deref() == block)
            .cloned()
            .collect())
    }

    async fn create_hall(&self, request: &CreateHallRequest) -> ApiResult<Hall> {
        let mut state = self.online()?;
        if state.halls.iter().any(|h| h.name == request.name) {
            return Err(ApiError::status(400, Some("Hall already exists".into())));
        }
        let id = state.halls.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        let mut created = hall(id, &request.name, request.block_key.as_deref().unwrap_or("T"));
        created.capacity = request.capacity;
        state.halls.push(created.clone());
        Ok(created)
    }

    async fn delete_hall(&self, id: i64) -> ApiResult<()> {
        let mut state = self.online()?;
        let before = state.halls.len();
        state.halls.retain(|h| h.id != id);
        if state.halls.len() == before {
            return Err(not_found("Hall"));
        }
        Ok(())
    }

    async fn hall_seats(&self, hall_name: &str) -> ApiResult<HallSeatsResponse> {
        let state = self.online()?;
        let hall = state
            .halls
            .iter()
            .find(|h| h.name == hall_name)
            .cloned()
            .ok_or_else(|| not_found("Hall"))?;
        let seats = state
            .seats
            .get(hall_name)
            .cloned()
            .unwrap_or_else(|| vec![None; hall.capacity as usize]);
        Ok(HallSeatsResponse { hall, seats })
    }

    async fn find_student(&self, query: &str) -> ApiResult<StudentRef> {
        let state = self.online()?;
        state
            .students
            .get(query)
            .or_else(|| {
                state
                    .students
                    .values()
                    .find(|s| s.roll_no.eq_ignore_ascii_case(query))
            })
            .cloned()
            .ok_or_else(|| not_found("Student"))
    }

    async fn list_students(&self, query: &StudentQuery) -> ApiResult<Vec<StudentRow>> {
        let state = self.online()?;
        Ok(state
            .student_rows
            .iter()
            .filter(|s| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|q| s.reg_no.contains(q) || s.name.contains(q))
            })
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn list_exams(&self, query: &ExamQuery) -> ApiResult<Vec<Exam>> {
        let state = self.online()?;
        Ok(state
            .exams
            .iter()
            .filter(|e| query.session.is_none_or(|s| e.session == s))
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn exam_dates(&self, _year: u8) -> ApiResult<Vec<ExamDate>> {
        Ok(self.online()?.exam_dates.clone())
    }

    async fn list_allotments(&self) -> ApiResult<Vec<AllotmentRecord>> {
        self.online()?;
        Ok(vec![])
    }

    async fn run_allotment(&self) -> ApiResult<AllotResponse> {
        self.online()?;
        Ok(AllotResponse {
            status: "success".into(),
            log: vec!["Processing Slot: 2024-11-20 FN".into(), "Done".into()],
            message: None,
        })
    }

    async fn hall_ticket(&self, reg_no: &str) -> ApiResult<HallTicketResponse> {
        self.online()?;
        Err(not_found(&format!("Student {reg_no}")))
    }

    async fn allocation_stats(
        &self,
        _query: &AllocationStatsQuery,
    ) -> ApiResult<AllocationStatsResponse> {
        Ok(self.online()?.allocation.clone())
    }

    async fn hall_allocation(&self, hall: &str, _year: u8) -> ApiResult<HallAllocationResponse> {
        self.online()?
            .hall_allocations
            .get(hall)
            .cloned()
            .ok_or_else(|| not_found("Hall"))
    }

    async fn run_allocation(
        &self,
        _request: &RunAllocationRequest,
    ) -> ApiResult<RunAllocationResponse> {
        let mut state = self.online()?;
        state.run_allocation_calls += 1;
        Ok(RunAllocationResponse {
            status: "success".into(),
            message: "Allocated 25 students to 1 halls".into(),
            allocated: 25,
            halls_used: 1,
        })
    }

    async fn upload(&self, _kind: UploadKind, files: Vec<UploadFile>) -> ApiResult<UploadResponse> {
        let mut state = self.online()?;
        state.upload_calls += 1;
        Ok(UploadResponse {
            status: "success".into(),
            parsed_count: files.len() as u64,
            saved_count: files.len() as u64,
            message: None,
        })
    }
}

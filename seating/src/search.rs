use std::time::Duration;

use shared_http::api::{Block, HallTicketResponse, StudentRef};
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::exam_pass::{ExamPass, seat_index_of};
use crate::layout::GridLayout;
use crate::navigation::resolve_block;
use crate::ports::SeatingBackend;
use crate::ticket::{Sequencer, Ticket};

/// Pause between switching to the student's hall and loading its seats,
/// so the hall list has rendered first.
pub const SEAT_SETTLE_DELAY: Duration = Duration::from_millis(100);

pub const NOT_FOUND_MESSAGE: &str = "Student not found";
pub const UNALLOCATED_MESSAGE: &str =
    "Seat not assigned yet. Allocation has not been run for this student.";
pub const NO_EXAMS_MESSAGE: &str = "No exams scheduled yet.";

/// Trimmed query, or `None` if nothing was typed.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Where the navigator should go to show a located student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTarget {
    pub block_key: Option<String>,
    pub hall: String,
    pub seat_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Located { pass: ExamPass, target: FocusTarget },
    Unallocated { pass: ExamPass },
    NotFound,
    Failed(String),
}

impl SearchOutcome {
    pub fn from_lookup(result: ApiResult<StudentRef>, blocks: &[Block]) -> Self {
        let student = match result {
            Ok(student) => student,
            Err(ApiError::Status { .. }) => return SearchOutcome::NotFound,
            Err(e) => return SearchOutcome::Failed(e.user_message()),
        };

        let layout = GridLayout::default();
        let pass = ExamPass::from_student(&student, &layout);
        let Some(hall) = student.hall.clone() else {
            return SearchOutcome::Unallocated { pass };
        };

        let block_key = resolve_block(
            blocks,
            student.block_key.as_deref(),
            student.block.as_deref(),
        )
        .map(|b| b.key.clone())
        .or_else(|| student.block_key.clone());

        SearchOutcome::Located {
            target: FocusTarget {
                block_key,
                hall,
                seat_index: seat_index_of(&student, &layout),
            },
            pass,
        }
    }

    pub fn pass(&self) -> Option<&ExamPass> {
        match self {
            SearchOutcome::Located { pass, .. } | SearchOutcome::Unallocated { pass } => Some(pass),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&FocusTarget> {
        match self {
            SearchOutcome::Located { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Status line under the search box; `None` when the seat is shown.
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Located { .. } => None,
            SearchOutcome::Unallocated { .. } => Some(UNALLOCATED_MESSAGE.to_string()),
            SearchOutcome::NotFound => Some(NOT_FOUND_MESSAGE.to_string()),
            SearchOutcome::Failed(message) => Some(message.clone()),
        }
    }
}

/// Search box state. Only the latest submission's response is applied.
#[derive(Debug, Default)]
pub struct StudentSearch {
    query: String,
    sequencer: Sequencer,
    current: Option<Ticket>,
    outcome: Option<SearchOutcome>,
}

impl StudentSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_loading(&self) -> bool {
        self.current.is_some()
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn selected_student(&self) -> Option<&ExamPass> {
        self.outcome.as_ref().and_then(SearchOutcome::pass)
    }

    pub fn message(&self) -> Option<String> {
        self.outcome.as_ref().and_then(SearchOutcome::message)
    }

    /// Starts a lookup for the current query, or returns `None` for a blank box.
    pub fn begin(&mut self) -> Option<(Ticket, String)> {
        let query = normalize_query(&self.query)?;
        let ticket = self.sequencer.issue();
        self.current = Some(ticket);
        self.outcome = None;
        Some((ticket, query))
    }

    /// Applies a lookup result. Returns the outcome when it is still current.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: ApiResult<StudentRef>,
        blocks: &[Block],
    ) -> Option<&SearchOutcome> {
        if self.current != Some(ticket) {
            debug!("dropping stale search result");
            return None;
        }
        self.current = None;

        let outcome = SearchOutcome::from_lookup(result, blocks);
        match &outcome {
            SearchOutcome::Located { target, .. } => info!(hall = %target.hall, "student located"),
            SearchOutcome::Failed(message) => warn!("student search failed: {}", message),
            _ => {}
        }
        self.outcome = Some(outcome);
        self.outcome.as_ref()
    }

    pub async fn submit<B>(&mut self, backend: &B, blocks: &[Block]) -> Option<&SearchOutcome>
    where
        B: SeatingBackend + ?Sized,
    {
        let (ticket, query) = self.begin()?;
        let result = backend.find_student(&query).await;
        self.finish(ticket, result, blocks)
    }
}

/// Result of the portal's registration-number lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum HallTicketOutcome {
    Found(HallTicketResponse),
    Missing(String),
    Failed(String),
}

impl HallTicketOutcome {
    pub fn from_result(result: ApiResult<HallTicketResponse>) -> Self {
        match result {
            Ok(ticket) => HallTicketOutcome::Found(ticket),
            Err(ApiError::Status {
                status: 404,
                message,
            }) => HallTicketOutcome::Missing(message.unwrap_or_else(|| NOT_FOUND_MESSAGE.into())),
            Err(e) => HallTicketOutcome::Failed(e.user_message()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            HallTicketOutcome::Found(ticket) if ticket.allotments.is_empty() => Some(NO_EXAMS_MESSAGE),
            HallTicketOutcome::Found(_) => None,
            HallTicketOutcome::Missing(message) | HallTicketOutcome::Failed(message) => Some(message),
        }
    }
}

pub async fn lookup_hall_ticket<B>(backend: &B, raw: &str) -> Option<HallTicketOutcome>
where
    B: SeatingBackend + ?Sized,
{
    let reg_no = normalize_query(raw)?;
    Some(HallTicketOutcome::from_result(backend.hall_ticket(&reg_no).await))
}

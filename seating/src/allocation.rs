//! Admin allocation console: pick a year and exam slot, inspect hall fill, run allocation.

use chrono::NaiveDate;
use shared_http::api::{
    AllocationStatsQuery, AllocationStatsResponse, AllocationSummary, ExamDate,
    HallAllocationResponse, HallStats, RunAllocationRequest, Session,
};
use strum_macros::{AsRefStr, Display};
use tracing::{info, warn};

use crate::grid::SeatGrid;
use crate::ports::SeatingBackend;

pub const HALL_CARD_LIMIT: usize = 20;
pub const YEARS: [u8; 2] = [1, 2];
pub const DEFAULT_YEAR: u8 = 2;
pub const RUN_FAILED_MESSAGE: &str = "Allocation failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FillTier {
    Full,
    Half,
    Low,
    Empty,
}

impl FillTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 80 => FillTier::Full,
            p if p >= 50 => FillTier::Half,
            p if p > 0 => FillTier::Low,
            _ => FillTier::Empty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AllocationConsole {
    year: u8,
    exam_dates: Vec<ExamDate>,
    date: Option<NaiveDate>,
    session: Session,
    stats: AllocationStatsResponse,
    open_hall: Option<HallAllocationResponse>,
    message: Option<String>,
}

impl Default for AllocationConsole {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            exam_dates: Vec::new(),
            date: None,
            session: Session::default(),
            stats: AllocationStatsResponse::default(),
            open_hall: None,
            message: None,
        }
    }
}

impl AllocationConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn exam_dates(&self) -> &[ExamDate] {
        &self.exam_dates
    }

    /// Distinct dates in the order the backend listed them.
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for exam in &self.exam_dates {
            if !dates.contains(&exam.date) {
                dates.push(exam.date);
            }
        }
        dates
    }

    /// Sessions scheduled on the selected date.
    pub fn sessions(&self) -> Vec<Session> {
        self.exam_dates
            .iter()
            .filter(|e| Some(e.date) == self.date)
            .map(|e| e.session)
            .collect()
    }

    pub fn set_year(&mut self, year: u8) {
        if self.year != year {
            self.year = year;
            self.exam_dates.clear();
            self.date = None;
            self.open_hall = None;
        }
    }

    /// Selects a date and the first session scheduled on it.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        if let Some(first) = self.exam_dates.iter().find(|e| e.date == date) {
            self.session = first.session;
        }
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    pub fn summary(&self) -> Option<&AllocationSummary> {
        self.stats.summary.as_ref()
    }

    /// Halls with anyone seated, capped at [`HALL_CARD_LIMIT`].
    pub fn hall_cards(&self) -> Vec<&HallStats> {
        self.stats
            .halls
            .iter()
            .filter(|h| h.filled > 0 || h.percentage > 0)
            .take(HALL_CARD_LIMIT)
            .collect()
    }

    pub fn open_hall(&self) -> Option<&HallAllocationResponse> {
        self.open_hall.as_ref()
    }

    pub fn open_grid(&self) -> Option<SeatGrid> {
        self.open_hall
            .as_ref()
            .map(|h| SeatGrid::from_allocation(&h.grid, h.hall.capacity as usize))
    }

    pub fn close_hall(&mut self) {
        self.open_hall = None;
    }

    pub fn stats_query(&self) -> AllocationStatsQuery {
        AllocationStatsQuery {
            year: self.year,
            date: self.date,
            session: self.date.map(|_| self.session),
        }
    }

    pub async fn load_dates<B>(&mut self, backend: &B)
    where
        B: SeatingBackend + ?Sized,
    {
        match backend.exam_dates(self.year).await {
            Ok(dates) => self.exam_dates = dates,
            Err(e) => {
                warn!(year = self.year, "failed to load exam dates: {}", e);
                self.exam_dates.clear();
            }
        }
        let selected_still_listed = self
            .date
            .is_some_and(|d| self.exam_dates.iter().any(|e| e.date == d));
        if !selected_still_listed {
            self.date = None;
            if let Some(first) = self.exam_dates.first().map(|e| e.date) {
                self.select_date(first);
            }
        }
    }

    pub async fn load_stats<B>(&mut self, backend: &B)
    where
        B: SeatingBackend + ?Sized,
    {
        match backend.allocation_stats(&self.stats_query()).await {
            Ok(stats) => self.stats = stats,
            Err(e) => {
                warn!("failed to load allocation stats: {}", e);
                self.stats = AllocationStatsResponse::default();
            }
        }
    }

    pub async fn show_hall<B>(&mut self, backend: &B, name: &str)
    where
        B: SeatingBackend + ?Sized,
    {
        match backend.hall_allocation(name, self.year).await {
            Ok(hall) => self.open_hall = Some(hall),
            Err(e) => {
                warn!(hall = name, "failed to load hall allocation: {}", e);
                self.open_hall = None;
            }
        }
    }

    /// Runs allocation for the selected slot and refreshes the stats.
    pub async fn run<B>(&mut self, backend: &B)
    where
        B: SeatingBackend + ?Sized,
    {
        let request = RunAllocationRequest {
            date: self.date,
            session: self.session,
            year: self.year,
        };
        let message = match backend.run_allocation(&request).await {
            Ok(report) => {
                info!(allocated = report.allocated, halls = report.halls_used, "allocation finished");
                Some(report.message).filter(|m| !m.is_empty())
            }
            Err(e) => {
                warn!("allocation run failed: {}", e);
                e.detail().map(String::from)
            }
        };
        self.message = Some(message.unwrap_or_else(|| RUN_FAILED_MESSAGE.to_string()));
        self.load_stats(backend).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use shared_http::api::{AllocatedSeat, AllocationHall};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
    }

    fn slot(day: u32, session: Session) -> ExamDate {
        ExamDate {
            date: date(day),
            session,
            display: format!("{day} Nov"),
        }
    }

    fn stats(name: &str, filled: u32, percentage: u32) -> HallStats {
        HallStats {
            hall_id: 1,
            hall_name: name.into(),
            block: "Tech Block".into(),
            capacity: 25,
            filled,
            percentage,
        }
    }

    #[test]
    fn test_fill_tiers() {
        assert_eq!(FillTier::from_percentage(100), FillTier::Full);
        assert_eq!(FillTier::from_percentage(80), FillTier::Full);
        assert_eq!(FillTier::from_percentage(79), FillTier::Half);
        assert_eq!(FillTier::from_percentage(50), FillTier::Half);
        assert_eq!(FillTier::from_percentage(1), FillTier::Low);
        assert_eq!(FillTier::from_percentage(0), FillTier::Empty);
        assert_eq!(FillTier::Half.as_ref(), "half");
    }

    #[tokio::test]
    async fn test_first_date_and_its_session_selected() {
        let backend = FakeBackend::default().with_exam_dates(vec![
            slot(20, Session::Forenoon),
            slot(20, Session::Afternoon),
            slot(22, Session::Afternoon),
        ]);
        let mut console = AllocationConsole::new();
        console.load_dates(&backend).await;

        assert_eq!(console.unique_dates(), vec![date(20), date(22)]);
        assert_eq!(console.date(), Some(date(20)));
        assert_eq!(console.session(), Session::Forenoon);
        assert_eq!(console.sessions().len(), 2);

        console.select_date(date(22));
        assert_eq!(console.session(), Session::Afternoon);
    }

    #[tokio::test]
    async fn test_hall_cards_skip_empty_and_cap() {
        let mut halls: Vec<HallStats> = (0..30).map(|i| stats(&format!("T {i}"), 5, 20)).collect();
        halls.insert(0, stats("Empty", 0, 0));
        let backend = FakeBackend::default().with_allocation(AllocationStatsResponse {
            halls,
            summary: None,
        });
        let mut console = AllocationConsole::new();
        console.load_stats(&backend).await;

        let cards = console.hall_cards();
        assert_eq!(cards.len(), HALL_CARD_LIMIT);
        assert_eq!(cards[0].hall_name, "T 0");
    }

    #[tokio::test]
    async fn test_run_sets_message_and_reloads() {
        let backend = FakeBackend::default();
        let mut console = AllocationConsole::new();
        console.run(&backend).await;
        assert_eq!(console.message(), Some("Allocated 25 students to 1 halls"));
        assert_eq!(backend.run_allocation_calls(), 1);
    }

    #[tokio::test]
    async fn test_run_failure_message() {
        let backend = FakeBackend::default().offline();
        let mut console = AllocationConsole::new();
        console.run(&backend).await;
        assert_eq!(console.message(), Some(RUN_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_open_hall_grid() {
        let mut row = vec![None; 5];
        row[1] = Some(AllocatedSeat {
            id: 3,
            roll_no: "24CS01".into(),
            name: "A".into(),
            department: "CSE".into(),
            seat_label: Some("A2".into()),
            color: "cse".into(),
        });
        let mut grid = vec![vec![None; 5]; 5];
        grid[0] = row;
        let backend = FakeBackend::default().with_hall_allocation(
            "T 1",
            HallAllocationResponse {
                hall: AllocationHall {
                    id: 1,
                    name: "T 1".into(),
                    block: "Tech Block".into(),
                    capacity: 25,
                },
                grid,
                filled: 1,
                percentage: 4,
            },
        );
        let mut console = AllocationConsole::new();
        console.show_hall(&backend, "T 1").await;

        let seats = console.open_grid().unwrap();
        assert_eq!(seats.cells().len(), 25);
        assert_eq!(seats.occupied().next().unwrap().code, "R1C2");

        console.close_hall();
        assert!(console.open_grid().is_none());
    }

    #[test]
    fn test_stats_query_without_date_omits_session() {
        let console = AllocationConsole::new();
        let query = console.stats_query();
        assert_eq!(query.year, DEFAULT_YEAR);
        assert_eq!(query.session, None);
    }
}

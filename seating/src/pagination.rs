use chrono::NaiveDate;
use shared_http::api::{ExamQuery, Session, StudentQuery};

pub const PAGE_SIZES: [u32; 5] = [25, 50, 100, 200, 500];
pub const STUDENT_PAGE_SIZE: u32 = 50;
pub const EXAM_PAGE_SIZE: u32 = 100;

/// Zero-based page over a server-side list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: u32,
    pub size: u32,
}

impl Page {
    pub fn new(size: u32) -> Self {
        Self {
            index: 0,
            size: size.max(1),
        }
    }

    pub fn skip(&self) -> u32 {
        self.index * self.size
    }

    pub fn limit(&self) -> u32 {
        self.size
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// A short page means the end was reached.
    pub fn has_next(&self, returned: usize) -> bool {
        returned >= self.size as usize
    }

    pub fn next(&mut self) {
        self.index += 1;
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Changing the size goes back to the first page.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.index = 0;
    }

    pub fn showing(&self, returned: usize) -> String {
        let first = if returned > 0 { self.skip() as usize + 1 } else { 0 };
        format!("Showing {} - {}", first, self.skip() as usize + returned)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub search: String,
    pub department: String,
    pub subject_code: String,
}

impl StudentFilter {
    pub fn query(&self, page: &Page) -> StudentQuery {
        StudentQuery {
            search: non_empty(&self.search),
            department: non_empty(&self.department),
            subject_code: non_empty(&self.subject_code),
            skip: page.skip(),
            limit: page.limit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamFilter {
    pub subject_code: String,
    pub date: Option<NaiveDate>,
    pub session: Option<Session>,
}

impl ExamFilter {
    pub fn query(&self, page: &Page) -> ExamQuery {
        ExamQuery {
            subject_code: non_empty(&self.subject_code),
            date: self.date,
            session: self.session,
            skip: page.skip(),
            limit: page.limit(),
        }
    }
}

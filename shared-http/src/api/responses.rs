use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Exam time slot
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Session {
    /// Forenoon
    #[serde(rename = "FN")]
    #[strum(serialize = "FN")]
    Forenoon,
    /// Afternoon
    #[default]
    #[serde(rename = "AN")]
    #[strum(serialize = "AN")]
    Afternoon,
}

/// Some list endpoints return a bare array, others wrap it as `{count, <items>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Plain(Vec<T>),
    Wrapped(Wrapped<T>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wrapped<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(alias = "halls", alias = "blocks", alias = "students")]
    pub items: Vec<T>,
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) => items,
            Listing::Wrapped(wrapped) => wrapped.items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "detail", alias = "message")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// === Halls and blocks ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hall {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub block_key: Option<String>,
    #[serde(default)]
    pub filled: Option<u32>,
    #[serde(default)]
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub halls: Vec<String>,
    #[serde(default)]
    pub filled: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Student as returned by `/api/students/{query}` and inside hall seat lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub reg_no: String,
    pub roll_no: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<u8>,
    #[serde(default)]
    pub hall: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub block_key: Option<String>,
    #[serde(default)]
    pub seat: Option<usize>,
    #[serde(default)]
    pub seat_label: Option<String>,
    #[serde(default)]
    pub seat_code: Option<String>,
    #[serde(default)]
    pub row: Option<u32>,
    #[serde(default)]
    pub col: Option<u32>,
}

/// `GET /api/halls/{name}/seats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallSeatsResponse {
    pub hall: Hall,
    #[serde(default)]
    pub seats: Vec<Option<StudentRef>>,
}

// === Exams and students ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamDate {
    pub date: NaiveDate,
    pub session: Session,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub date: NaiveDate,
    pub session: Session,
    pub subject_code: String,
    pub subject_name: String,
}

/// Row of the admin student list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: i64,
    pub reg_no: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub subjects_registered: Vec<String>,
}

// === Allotments ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllotmentRecord {
    pub id: i64,
    pub student_reg: String,
    pub student_name: String,
    pub exam_subject: String,
    pub exam_date: String,
    pub hall_name: String,
    pub seat_number: u32,
}

/// `POST /api/allot`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllotResponse {
    pub status: String,
    #[serde(default)]
    pub log: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// === Allocation console ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallStats {
    pub hall_id: i64,
    pub hall_name: String,
    #[serde(default)]
    pub block: String,
    pub capacity: u32,
    pub filled: u32,
    pub percentage: u32,
}

/// `GET /api/stats`: table-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub total_exams: u64,
    #[serde(default)]
    pub total_halls: u64,
    #[serde(default)]
    pub allocated_students: u64,
    #[serde(default)]
    pub used_halls: u64,
    #[serde(default)]
    pub utilization: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub total_halls: u32,
    pub total_capacity: u32,
    pub total_filled: u32,
    pub overall_percentage: u32,
}

/// `GET /api/allocation/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationStatsResponse {
    #[serde(default)]
    pub halls: Vec<HallStats>,
    #[serde(default)]
    pub summary: Option<AllocationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedSeat {
    pub id: i64,
    pub roll_no: String,
    pub name: String,
    pub department: String,
    #[serde(default)]
    pub seat_label: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationHall {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub block: String,
    pub capacity: u32,
}

/// `GET /api/allocation/hall/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallAllocationResponse {
    pub hall: AllocationHall,
    #[serde(default)]
    pub grid: Vec<Vec<Option<AllocatedSeat>>>,
    #[serde(default)]
    pub filled: u32,
    #[serde(default)]
    pub percentage: u32,
}

/// `POST /api/allocation/run`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunAllocationResponse {
    #[serde(default)]
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub allocated: u32,
    #[serde(default)]
    pub halls_used: u32,
}

// === Student portal ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalStudent {
    pub name: String,
    pub reg_no: String,
    #[serde(default)]
    pub dept: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledExam {
    pub subject_code: String,
    pub subject_name: String,
    pub date: String,
    pub session: Session,
    pub hall_name: String,
    pub seat_number: u32,
}

/// `GET /api/search?reg_no=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallTicketResponse {
    pub student: PortalStudent,
    #[serde(default)]
    pub allotments: Vec<ScheduledExam>,
}

// === Uploads ===

/// `POST /api/upload/{timetable|students}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub parsed_count: u64,
    #[serde(default)]
    pub saved_count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_accepts_both_shapes() {
        let plain: Listing<Hall> =
            serde_json::from_value(json!([{"id": 1, "name": "T 1", "capacity": 25}])).unwrap();
        assert_eq!(plain.into_vec().len(), 1);

        let wrapped: Listing<Hall> = serde_json::from_value(json!({
            "count": 2,
            "halls": [
                {"id": 1, "name": "T 1", "capacity": 25, "blockKey": "T"},
                {"id": 2, "name": "T 2", "capacity": 25}
            ]
        }))
        .unwrap();
        let halls = wrapped.into_vec();
        assert_eq!(halls.len(), 2);
        assert_eq!(halls[0].block_key.as_deref(), Some("T"));
    }

    #[test]
    fn test_student_ref_uses_camel_case() {
        let student: StudentRef = serde_json::from_value(json!({
            "regNo": "731124106001",
            "rollNo": "24ECE01",
            "name": "Asha",
            "department": "ECE",
            "color": "ece",
            "hall": "T 1",
            "blockKey": "T",
            "seat": 12,
            "seatCode": "R3C3",
            "row": 3,
            "col": 3
        }))
        .unwrap();
        assert_eq!(student.reg_no, "731124106001");
        assert_eq!(student.block_key.as_deref(), Some("T"));
        assert_eq!(student.seat, Some(12));
    }

    #[test]
    fn test_error_response_aliases() {
        let detail: ErrorResponse =
            serde_json::from_value(json!({"detail": "Student not found"})).unwrap();
        assert_eq!(detail.error, "Student not found");

        let message: ErrorResponse =
            serde_json::from_value(json!({"status": "error", "message": "No files uploaded"}))
                .unwrap();
        assert_eq!(message.error, "No files uploaded");
    }

    #[test]
    fn test_session_wire_names() {
        assert_eq!(serde_json::to_value(Session::Forenoon).unwrap(), json!("FN"));
        assert_eq!(Session::Afternoon.to_string(), "AN");
        assert_eq!("FN".parse::<Session>().unwrap(), Session::Forenoon);
    }
}

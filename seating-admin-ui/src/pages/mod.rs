pub mod allocation;
pub mod allotment;
pub mod dashboard;
pub mod exams;
pub mod hall_ticket;
pub mod halls;
pub mod results;
pub mod student_portal;
pub mod students;
pub mod upload;

pub use allocation::Allocation;
pub use allotment::Allotment;
pub use dashboard::Dashboard;
pub use exams::Exams;
pub use hall_ticket::HallTicket;
pub use halls::Halls;
pub use results::Results;
pub use student_portal::StudentPortal;
pub use students::Students;
pub use upload::Upload;

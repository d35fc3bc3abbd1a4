use shared_http::api::StudentRef;

use crate::grid::SeatSelection;
use crate::layout::{GridLayout, SeatPosition};

/// Read-only projection shown on the student's exam pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamPass {
    pub reg_no: String,
    pub roll_no: String,
    pub name: String,
    pub department: Option<String>,
    pub year_of_study: Option<u8>,
    pub hall: Option<String>,
    pub block: Option<String>,
    pub seat_index: Option<usize>,
    pub seat_code: Option<String>,
    pub row: Option<u32>,
    pub col: Option<u32>,
}

impl ExamPass {
    /// Seat fields come from the record when present, otherwise from the seat index.
    pub fn from_student(student: &StudentRef, layout: &GridLayout) -> Self {
        let seat_index = seat_index_of(student, layout);
        let position = match (student.row, student.col) {
            (Some(row), Some(col)) => Some(SeatPosition { row, col }),
            _ => seat_index.map(|i| layout.position(i)),
        };
        let seat_code = student
            .seat_code
            .clone()
            .or_else(|| position.map(|p| p.code()));

        Self {
            reg_no: student.reg_no.clone(),
            roll_no: student.roll_no.clone(),
            name: student.name.clone(),
            department: student.department.clone(),
            year_of_study: student.year_of_study,
            hall: student.hall.clone(),
            block: student.block.clone(),
            seat_index,
            seat_code: student.hall.as_ref().and(seat_code),
            row: student.hall.as_ref().and(position.map(|p| p.row)),
            col: student.hall.as_ref().and(position.map(|p| p.col)),
        }
    }

    /// A seat clicked on the grid; the grid knows which hall it is showing.
    pub fn from_selection(selection: &SeatSelection, hall: &str, block: Option<&str>) -> Self {
        let student = &selection.student;
        Self {
            reg_no: student.reg_no.clone(),
            roll_no: student.roll_no.clone(),
            name: student.name.clone(),
            department: student.department.clone(),
            year_of_study: student.year_of_study,
            hall: Some(hall.to_string()),
            block: block.map(String::from).or_else(|| student.block.clone()),
            seat_index: Some(selection.index),
            seat_code: Some(selection.seat_code.clone()),
            row: Some(selection.row),
            col: Some(selection.col),
        }
    }

    pub fn is_seated(&self) -> bool {
        self.hall.is_some()
    }

    pub fn seat_line(&self) -> Option<String> {
        match (self.row, self.col) {
            (Some(row), Some(col)) => Some(format!("Row {row}, Column {col}")),
            _ => None,
        }
    }
}

/// Seat index from the record, falling back to its seat code or row/col.
pub fn seat_index_of(student: &StudentRef, layout: &GridLayout) -> Option<usize> {
    student
        .seat
        .or_else(|| {
            student
                .seat_code
                .as_deref()
                .and_then(|code| code.parse::<SeatPosition>().ok())
                .and_then(|p| layout.index_of(p))
        })
        .or_else(|| match (student.row, student.col) {
            (Some(row), Some(col)) => layout.index_of(SeatPosition { row, col }),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seated, student};

    #[test]
    fn test_seated_pass_computes_code() {
        let s = seated("731124106001", "ECE", "T", "T 1", 12);
        let pass = ExamPass::from_student(&s, &GridLayout::default());
        assert!(pass.is_seated());
        assert_eq!(pass.seat_code.as_deref(), Some("R3C3"));
        assert_eq!(pass.seat_line().as_deref(), Some("Row 3, Column 3"));
        assert_eq!(pass.seat_index, Some(12));
    }

    #[test]
    fn test_unseated_pass_has_no_seat() {
        let pass = ExamPass::from_student(&student("1", "CSE"), &GridLayout::default());
        assert!(!pass.is_seated());
        assert!(pass.seat_code.is_none());
        assert!(pass.seat_line().is_none());
    }

    #[test]
    fn test_seat_index_from_code() {
        let mut s = seated("1", "IT", "T", "T 2", 0);
        s.seat = None;
        s.seat_code = Some("R2C1".into());
        assert_eq!(seat_index_of(&s, &GridLayout::default()), Some(5));
    }
}

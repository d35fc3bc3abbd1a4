use shared_http::api::{AllocatedSeat, StudentRef};
use tracing::warn;

use crate::layout::{GridLayout, SeatPosition};
use crate::palette::{self, SeatStyle};

/// Shown in place of a label on an empty seat.
pub const EMPTY_SEAT_GLYPH: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub position: SeatPosition,
    pub code: String,
    pub label: String,
    pub style: SeatStyle,
    pub occupant: Option<StudentRef>,
    pub highlighted: bool,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Raised when an occupied seat is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatSelection {
    pub student: StudentRef,
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub seat_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatGrid {
    layout: GridLayout,
    cells: Vec<GridCell>,
}

impl SeatGrid {
    /// Lays seats out by index; `seats.len()` wins over `layout.capacity()`.
    pub fn build(seats: &[Option<StudentRef>], highlighted: Option<usize>, layout: GridLayout) -> Self {
        if seats.len() != layout.capacity() {
            warn!(
                expected = layout.capacity(),
                actual = seats.len(),
                "seat list length does not match hall capacity"
            );
        }

        let cells = seats
            .iter()
            .enumerate()
            .map(|(index, seat)| make_cell(&layout, index, seat.as_ref(), highlighted == Some(index)))
            .collect();

        Self { layout, cells }
    }

    /// Flattens the allocation console's row-major 2-D grid.
    pub fn from_allocation(grid: &[Vec<Option<AllocatedSeat>>], capacity: usize) -> Self {
        let row_width = grid
            .first()
            .map(|row| row.len())
            .filter(|w| *w > 0)
            .unwrap_or(crate::layout::DEFAULT_ROW_WIDTH);
        let seats: Vec<Option<StudentRef>> = grid
            .iter()
            .flatten()
            .map(|seat| seat.as_ref().map(student_from_allocation))
            .collect();
        Self::build(&seats, None, GridLayout::new(row_width, capacity))
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.layout.row_width())
    }

    pub fn occupied(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|c| !c.is_empty())
    }

    pub fn highlighted(&self) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.highlighted)
    }

    /// `Some((expected, actual))` when the seat list and the hall capacity disagree.
    pub fn capacity_mismatch(&self) -> Option<(usize, usize)> {
        (self.cells.len() != self.layout.capacity())
            .then_some((self.layout.capacity(), self.cells.len()))
    }

    pub fn select(&self, index: usize) -> Option<SeatSelection> {
        let cell = self.cells.get(index)?;
        let student = cell.occupant.clone()?;
        Some(SeatSelection {
            student,
            index,
            row: cell.position.row,
            col: cell.position.col,
            seat_code: cell.code.clone(),
        })
    }

    pub fn set_highlight(&mut self, highlighted: Option<usize>) {
        for cell in &mut self.cells {
            cell.highlighted = highlighted == Some(cell.index);
            cell.style = style_for(cell.occupant.as_ref(), cell.highlighted);
        }
    }

    pub fn legend() -> &'static [palette::Swatch] {
        &palette::DEPARTMENTS
    }
}

fn make_cell(
    layout: &GridLayout,
    index: usize,
    occupant: Option<&StudentRef>,
    highlighted: bool,
) -> GridCell {
    let position = layout.position(index);
    GridCell {
        index,
        position,
        code: position.code(),
        label: occupant.map(label_for).unwrap_or_else(|| EMPTY_SEAT_GLYPH.to_string()),
        style: style_for(occupant, highlighted),
        occupant: occupant.cloned(),
        highlighted,
    }
}

fn style_for(occupant: Option<&StudentRef>, highlighted: bool) -> SeatStyle {
    match (highlighted, occupant) {
        (true, _) => palette::HIGHLIGHT,
        (false, Some(student)) => palette::for_student(student),
        (false, None) => palette::EMPTY,
    }
}

/// Department abbreviation, else the middle of the roll number (`24ECE01` -> `ECE`).
fn label_for(student: &StudentRef) -> String {
    if let Some(dept) = student.department.as_deref().filter(|d| !d.is_empty()) {
        return dept.to_string();
    }
    let fragment: String = student.roll_no.chars().skip(2).take(3).collect();
    if fragment.is_empty() {
        "?".to_string()
    } else {
        fragment
    }
}

fn student_from_allocation(seat: &AllocatedSeat) -> StudentRef {
    StudentRef {
        reg_no: String::new(),
        roll_no: seat.roll_no.clone(),
        name: seat.name.clone(),
        department: Some(seat.department.clone()),
        color: Some(seat.color.clone()),
        year_of_study: None,
        hall: None,
        block: None,
        block_key: None,
        seat: None,
        seat_label: seat.seat_label.clone(),
        seat_code: None,
        row: None,
        col: None,
    }
}

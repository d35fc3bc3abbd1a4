use std::fmt;
use std::str::FromStr;

/// Seats per row in every hall the backend currently lays out.
pub const DEFAULT_ROW_WIDTH: usize = 5;
/// "13 + 12" zigzag halls.
pub const DEFAULT_HALL_CAPACITY: usize = 25;

/// Row-major positional layout of a hall's seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    row_width: usize,
    capacity: usize,
}

impl GridLayout {
    pub fn new(row_width: usize, capacity: usize) -> Self {
        Self {
            row_width: row_width.max(1),
            capacity,
        }
    }

    pub fn for_capacity(capacity: usize) -> Self {
        Self::new(DEFAULT_ROW_WIDTH, capacity)
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn rows(&self) -> usize {
        self.capacity.div_ceil(self.row_width)
    }

    /// 1-based (row, col) for a 0-based seat index. Not bounds checked.
    pub fn position(&self, index: usize) -> SeatPosition {
        SeatPosition {
            row: (index / self.row_width) as u32 + 1,
            col: (index % self.row_width) as u32 + 1,
        }
    }

    /// Inverse of [`GridLayout::position`].
    pub fn index_of(&self, position: SeatPosition) -> Option<usize> {
        if position.row == 0 || position.col == 0 || position.col as usize > self.row_width {
            return None;
        }
        Some((position.row as usize - 1) * self.row_width + (position.col as usize - 1))
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::for_capacity(DEFAULT_HALL_CAPACITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatPosition {
    pub row: u32,
    pub col: u32,
}

impl SeatPosition {
    /// Display code such as `R3C3`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSeatCode(pub String);

impl fmt::Display for InvalidSeatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid seat code '{}'", self.0)
    }
}

impl std::error::Error for InvalidSeatCode {}

impl FromStr for SeatPosition {
    type Err = InvalidSeatCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSeatCode(s.to_string());
        let rest = s
            .trim()
            .strip_prefix(['R', 'r'])
            .ok_or_else(invalid)?;
        let (row, col) = rest.split_once(['C', 'c']).ok_or_else(invalid)?;
        let row = row.parse::<u32>().map_err(|_| invalid())?;
        let col = col.parse::<u32>().map_err(|_| invalid())?;
        if row == 0 || col == 0 {
            return Err(invalid());
        }
        Ok(SeatPosition { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_position_is_unique_and_stable() {
        let layout = GridLayout::default();
        let mut seen = HashSet::new();
        for i in 0..layout.capacity() {
            let position = layout.position(i);
            assert_eq!(position.row as usize, i / 5 + 1);
            assert_eq!(position.col as usize, i % 5 + 1);
            assert_eq!(layout.position(i), position);
            assert!(seen.insert(position), "duplicate position for seat {i}");
            assert_eq!(layout.index_of(position), Some(i));
        }
    }

    #[test]
    fn test_center_seat_code() {
        assert_eq!(GridLayout::default().position(12).code(), "R3C3");
        assert_eq!(GridLayout::default().position(0).code(), "R1C1");
        assert_eq!(GridLayout::default().position(24).code(), "R5C5");
    }

    #[test]
    fn test_rows_round_up() {
        assert_eq!(GridLayout::for_capacity(25).rows(), 5);
        assert_eq!(GridLayout::for_capacity(30).rows(), 6);
        assert_eq!(GridLayout::for_capacity(31).rows(), 7);
        assert_eq!(GridLayout::new(0, 3).row_width(), 1);
    }

    #[test]
    fn test_parse_seat_code() {
        assert_eq!(
            "R2C4".parse::<SeatPosition>().unwrap(),
            SeatPosition { row: 2, col: 4 }
        );
        assert!("R0C1".parse::<SeatPosition>().is_err());
        assert!("2-4".parse::<SeatPosition>().is_err());
    }

    #[test]
    fn test_index_of_rejects_out_of_row() {
        let layout = GridLayout::default();
        assert_eq!(layout.index_of(SeatPosition { row: 1, col: 6 }), None);
    }
}

use serde::{Deserialize, Serialize};

use crate::cursor::CellAddress;

/// A directional cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Compute the next cursor address for a directional move
///
/// The grid is toroidal. Left/Right wrap row-major across the whole grid,
/// so `(0, 0)` follows the last cell and vice versa. Up/Down wrap within
/// the current column only. Callers must ensure `addr` is in bounds for a
/// `rows x columns` grid.
pub fn step(direction: Direction, addr: CellAddress, rows: usize, columns: usize) -> CellAddress {
    let CellAddress { col, row } = addr;
    match direction {
        Direction::Right => {
            if col + 1 < columns {
                CellAddress::new(col + 1, row)
            } else if row + 1 < rows {
                CellAddress::new(0, row + 1)
            } else {
                CellAddress::origin()
            }
        }
        Direction::Left => {
            if col > 0 {
                CellAddress::new(col - 1, row)
            } else if row > 0 {
                CellAddress::new(columns - 1, row - 1)
            } else {
                CellAddress::new(columns - 1, rows - 1)
            }
        }
        Direction::Up => {
            if row > 0 {
                CellAddress::new(col, row - 1)
            } else {
                CellAddress::new(col, rows - 1)
            }
        }
        Direction::Down => {
            if row + 1 < rows {
                CellAddress::new(col, row + 1)
            } else {
                CellAddress::new(col, 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(col: usize, row: usize) -> CellAddress {
        CellAddress::new(col, row)
    }

    #[test]
    fn test_right_within_row() {
        assert_eq!(step(Direction::Right, addr(0, 0), 3, 4), addr(1, 0));
        assert_eq!(step(Direction::Right, addr(2, 1), 3, 4), addr(3, 1));
    }

    #[test]
    fn test_right_wraps_to_next_row() {
        assert_eq!(step(Direction::Right, addr(3, 0), 3, 4), addr(0, 1));
    }

    #[test]
    fn test_right_from_last_cell_wraps_to_origin() {
        assert_eq!(step(Direction::Right, addr(3, 2), 3, 4), addr(0, 0));
    }

    #[test]
    fn test_left_within_row() {
        assert_eq!(step(Direction::Left, addr(2, 1), 3, 4), addr(1, 1));
    }

    #[test]
    fn test_left_wraps_to_previous_row() {
        assert_eq!(step(Direction::Left, addr(0, 2), 3, 4), addr(3, 1));
    }

    #[test]
    fn test_left_from_origin_wraps_to_last_cell() {
        assert_eq!(step(Direction::Left, addr(0, 0), 3, 4), addr(3, 2));
    }

    #[test]
    fn test_up_and_down_stay_in_column() {
        assert_eq!(step(Direction::Up, addr(2, 1), 3, 4), addr(2, 0));
        assert_eq!(step(Direction::Up, addr(2, 0), 3, 4), addr(2, 2));
        assert_eq!(step(Direction::Down, addr(2, 1), 3, 4), addr(2, 2));
        assert_eq!(step(Direction::Down, addr(2, 2), 3, 4), addr(2, 0));
    }

    #[test]
    fn test_right_then_left_is_identity() {
        for row in 0..3 {
            for col in 0..4 {
                let start = addr(col, row);
                let there = step(Direction::Right, start, 3, 4);
                assert_eq!(step(Direction::Left, there, 3, 4), start);
            }
        }
    }

    #[test]
    fn test_down_then_up_is_identity() {
        for row in 0..3 {
            for col in 0..4 {
                let start = addr(col, row);
                let there = step(Direction::Down, start, 3, 4);
                assert_eq!(step(Direction::Up, there, 3, 4), start);
            }
        }
    }

    #[test]
    fn test_right_full_cycle_returns_to_start() {
        let (rows, columns) = (3, 4);
        let start = addr(2, 1);
        let mut current = start;
        for _ in 0..rows * columns {
            current = step(Direction::Right, current, rows, columns);
        }
        assert_eq!(current, start);
    }

    #[test]
    fn test_single_cell_grid_moves_in_place() {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(step(direction, addr(0, 0), 1, 1), addr(0, 0));
        }
    }

    #[test]
    fn test_single_row_horizontal_wrap() {
        assert_eq!(step(Direction::Right, addr(4, 0), 1, 5), addr(0, 0));
        assert_eq!(step(Direction::Left, addr(0, 0), 1, 5), addr(4, 0));
    }

    #[test]
    fn test_single_row_vertical_wrap_is_identity() {
        assert_eq!(step(Direction::Up, addr(2, 0), 1, 5), addr(2, 0));
        assert_eq!(step(Direction::Down, addr(2, 0), 1, 5), addr(2, 0));
    }
}

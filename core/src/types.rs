use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board columns and rows.
pub type Coord = u8;

/// One grid address `(col, row)`; row grows downward.
pub type Cell = (Coord, Coord);

/// The board is a fixed 8x8 square.
pub const GRID_SIZE: Coord = 8;

/// Heading of the laser emitter and of the beam while it travels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta in `(col, row)` terms.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Clockwise cycle used by the rotate command: up, right, down, left.
    pub const fn rotated(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }
}

pub const fn in_bounds(cell: Cell) -> bool {
    cell.0 < GRID_SIZE && cell.1 < GRID_SIZE
}

/// Applies the direction's delta to `cell`, returning a value only while it
/// stays on the board.
pub fn step(cell: Cell, direction: Direction) -> Option<Cell> {
    let (dx, dy) = direction.delta();
    let col = cell.0.checked_add_signed(dx)?;
    let row = cell.1.checked_add_signed(dy)?;
    (col < GRID_SIZE && row < GRID_SIZE).then_some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_up_right_down_left() {
        assert_eq!(Direction::Up.rotated(), Direction::Right);
        assert_eq!(Direction::Right.rotated(), Direction::Down);
        assert_eq!(Direction::Down.rotated(), Direction::Left);
        assert_eq!(Direction::Left.rotated(), Direction::Up);
    }

    #[test]
    fn step_moves_one_cell_with_row_growing_downward() {
        assert_eq!(step((4, 4), Direction::Up), Some((4, 3)));
        assert_eq!(step((4, 4), Direction::Down), Some((4, 5)));
        assert_eq!(step((4, 4), Direction::Left), Some((3, 4)));
        assert_eq!(step((4, 4), Direction::Right), Some((5, 4)));
    }

    #[test]
    fn step_stops_at_every_board_edge() {
        assert_eq!(step((0, 0), Direction::Up), None);
        assert_eq!(step((0, 0), Direction::Left), None);
        assert_eq!(step((7, 7), Direction::Down), None);
        assert_eq!(step((7, 7), Direction::Right), None);
    }
}

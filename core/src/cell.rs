use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// One square of the board, replaced wholesale whenever its state changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
    pub is_mine: bool,
    /// Mined neighbors; always 0 on a mine.
    pub adjacent_mine_count: u8,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    pub const fn hidden((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            adjacent_mine_count: 0,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_safe(&self) -> bool {
        !self.is_mine
    }

    /// A hidden, unflagged cell a direct reveal may act on.
    pub const fn is_revealable(&self) -> bool {
        !self.revealed && !self.flagged
    }
}

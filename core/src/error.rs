use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinate ({row}, {col})")]
    InvalidCoordinate { row: Coord, col: Coord },
    #[error("Invalid configuration: {rows}x{cols} board cannot hold {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Board snapshot does not match its mine layout")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of every cell on a fixed-size grid.
///
/// Boards are never edited in place by the engine: every transition clones
/// the previous snapshot, so two boards compare equal exactly when nothing
/// observable changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    #[serde(skip)]
    size: Coord2,
}

/// Wire form of a [`Board`], checked against its own mine layout before use.
#[derive(Deserialize)]
struct BoardSnapshot {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let mine_mask = snapshot.cells.map(|cell| cell.is_mine);
        let mut board = Self::from_mine_mask(&mine_mask)?;
        board.config().validate()?;

        if snapshot.mine_count != board.mine_count {
            log::warn!(
                "Snapshot declares {} mines but holds {}",
                snapshot.mine_count,
                board.mine_count
            );
            return Err(GameError::InvalidBoardShape);
        }

        let consistent = snapshot.cells.iter().zip(board.cells.iter()).all(|(cell, expected)| {
            cell.coords() == expected.coords()
                && cell.adjacent_mine_count == expected.adjacent_mine_count
        });
        if !consistent {
            return Err(GameError::InvalidBoardShape);
        }

        board.cells = snapshot.cells;
        Ok(board)
    }
}

impl Board {
    /// Builds a hidden board from a mine mask, computing every adjacency count.
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let dim = mine_mask.dim();
        let rows: Coord = dim.0.try_into().map_err(|_| GameError::InvalidBoardShape)?;
        let cols: Coord = dim.1.try_into().map_err(|_| GameError::InvalidBoardShape)?;
        let size = (rows, cols);

        let mut cells = Vec::with_capacity(mine_mask.len());
        let mut mine_count: CellCount = 0;
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let is_mine = mine_mask[coords.to_nd_index()];
                let mut adjacent_mine_count = 0;
                if is_mine {
                    mine_count += 1;
                } else {
                    for pos in NeighborIter::new(coords, size) {
                        if mine_mask[pos.to_nd_index()] {
                            adjacent_mine_count += 1;
                        }
                    }
                }
                cells.push(Cell {
                    is_mine,
                    adjacent_mine_count,
                    ..Cell::hidden(coords)
                });
            }
        }

        let cells = Array2::from_shape_vec(dim, cells).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self {
            cells,
            mine_count,
            size,
        })
    }

    /// Builds a board with mines at exactly the given coordinates.
    ///
    /// Repeated coordinates count once. The resulting layout must leave at
    /// least one safe cell.
    pub fn from_mine_coords(rows: Coord, cols: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(rows, cols, 0).validate()?;

        let mut mine_mask: Array2<bool> = Array2::default((rows, cols).to_nd_index());
        for &(row, col) in mine_coords {
            if row >= rows || col >= cols {
                return Err(GameError::InvalidCoordinate { row, col });
            }
            mine_mask[(row, col).to_nd_index()] = true;
        }

        let board = Self::from_mine_mask(&mine_mask)?;
        board.config().validate()?;
        Ok(board)
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.rows(), self.cols(), self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.revealed && cell.is_safe()).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.flagged).count() as CellCount
    }

    pub fn validate_coords(&self, (row, col): Coord2) -> Result<Coord2> {
        if row < self.rows() && col < self.cols() {
            Ok((row, col))
        } else {
            Err(GameError::InvalidCoordinate { row, col })
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn cell_at(&self, (row, col): Coord2) -> Result<Cell> {
        self.get((row, col))
            .copied()
            .ok_or(GameError::InvalidCoordinate { row, col })
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

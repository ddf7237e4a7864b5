use alloc::collections::VecDeque;

use crate::generator::place_mines;
use crate::*;

/// Creates a fresh hidden board with `config.mines` randomly placed mines.
///
/// The returned board starts a game in [`GameStatus::InProgress`].
pub fn generate(config: GameConfig, picker: &mut impl CellPicker) -> Result<Board> {
    config.validate()?;
    let mine_mask = place_mines(config, picker);
    Board::from_mine_mask(&mine_mask)
}

/// Opens the cell at `coords` and returns the next snapshot and status.
///
/// Finished games and revealed or flagged cells are left untouched.
pub fn reveal(board: &Board, status: GameStatus, coords: Coord2) -> Result<(Board, GameStatus)> {
    let coords = board.validate_coords(coords)?;
    let target = board[coords];

    if status.is_finished() || !target.is_revealable() {
        return Ok((board.clone(), status));
    }

    let mut next = board.clone();
    next.cell_mut(coords).revealed = true;

    if target.is_mine {
        log::debug!("Mine hit at {:?}, revealing all mines", coords);
        for cell in next.cells_mut().filter(|cell| cell.is_mine) {
            cell.revealed = true;
        }
        return Ok((next, GameStatus::Lost));
    }

    log::debug!(
        "Reveal at {:?}, mine count: {}",
        coords,
        target.adjacent_mine_count
    );
    if target.adjacent_mine_count == 0 {
        flood_fill(&mut next, coords);
    }

    if next.revealed_safe_count() == next.safe_cell_count() {
        log::debug!("All {} safe cells revealed, game won", next.safe_cell_count());
        for cell in next.cells_mut() {
            cell.revealed = true;
        }
        return Ok((next, GameStatus::Won));
    }

    Ok((next, GameStatus::InProgress))
}

/// Flips the flag on a hidden cell, leaving every other cell as is.
pub fn toggle_flag(board: &Board, status: GameStatus, coords: Coord2) -> Result<Board> {
    let coords = board.validate_coords(coords)?;
    let mut next = board.clone();

    if status.is_in_progress() && !board[coords].revealed {
        let cell = next.cell_mut(coords);
        cell.flagged = !cell.flagged;
        log::trace!("Flag at {:?} set to {}", coords, cell.flagged);
    }

    Ok(next)
}

/// Reveals the zero region connected to the already revealed zero cell at `origin`.
///
/// A cell is marked revealed when it is queued, so each cell enters the queue
/// at most once.
fn flood_fill(board: &mut Board, origin: Coord2) {
    let mut to_visit = VecDeque::from([origin]);

    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in board.neighbors(visit_coords) {
            let neighbor = board.cell_mut(pos);
            if !neighbor.is_revealable() {
                continue;
            }

            neighbor.revealed = true;
            log::trace!(
                "Flood revealed cell at {:?}, mine count: {}",
                pos,
                neighbor.adjacent_mine_count
            );

            // only zero cells keep the region growing
            if neighbor.adjacent_mine_count == 0 && neighbor.is_safe() {
                to_visit.push_back(pos);
            }
        }
    }
}

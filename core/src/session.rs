use serde::{Deserialize, Serialize};

use crate::engine;
use crate::*;

/// Current board and status, owned by whichever layer forwards player intents.
///
/// Each move goes through the pure engine functions and swaps in the
/// returned snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    pub fn new(config: GameConfig, picker: &mut impl CellPicker) -> Result<Self> {
        let board = generate(config, picker)?;
        Ok(Self::from_board(board))
    }

    /// Starts a game on a prepared board, typically one from [`Board::from_mine_coords`].
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            status: GameStatus::default(),
        }
    }

    /// Replaces the board with a freshly generated one of the same configuration.
    pub fn reset(&mut self, picker: &mut impl CellPicker) -> Result<()> {
        self.board = generate(self.config(), picker)?;
        self.status = GameStatus::default();
        log::debug!("Game reset");
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.board.mine_count() as isize - self.board.flagged_count() as isize
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let (board, status) = engine::reveal(&self.board, self.status, coords)?;

        let outcome = match status {
            _ if board == self.board => RevealOutcome::NoChange,
            GameStatus::Lost => RevealOutcome::HitMine,
            GameStatus::Won => RevealOutcome::Won,
            GameStatus::InProgress => RevealOutcome::Revealed,
        };

        self.board = board;
        self.status = status;
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let board = engine::toggle_flag(&self.board, self.status, coords)?;

        if board == self.board {
            return Ok(MarkOutcome::NoChange);
        }

        self.board = board;
        Ok(MarkOutcome::Changed)
    }
}

use super::board::Board;
use super::types::{GameStatus, Mark, MoveError};

/// One game in progress: the live board plus whose turn it is. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, position: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.apply(position, self.current_mark)?;
        self.last_move = Some(position);
        self.status = self.board.status();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

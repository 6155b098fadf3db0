mod board;
mod bot_controller;
mod engine;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, BotMove, BotType, calculate_minimax_move, calculate_move, calculate_random_move,
};
pub use engine::{DecisionRecord, SearchOptions, WIN_SCORE, find_best_move, search};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, MoveError, WinningLine};
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line};

use crate::games::SessionRng;
use super::board::Board;
use super::engine::{DecisionRecord, SearchOptions, search};
use super::game_state::TicTacToeGameState;
use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    Minimax,
    Random,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
    pub options: SearchOptions,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState, options: SearchOptions) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
            options,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotMove {
    pub position: usize,
    /// Present only for searched moves.
    pub decision: Option<DecisionRecord>,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<BotMove> {
    match bot_type {
        BotType::Random => calculate_random_move(&input.board, rng).map(|position| BotMove {
            position,
            decision: None,
        }),
        BotType::Minimax => {
            let decision = calculate_minimax_move(input);
            decision.position.map(|position| BotMove {
                position,
                decision: Some(decision),
            })
        }
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.legal_moves())
}

pub fn calculate_minimax_move(input: &BotInput) -> DecisionRecord {
    search(&input.board, input.current_mark, input.options)
}

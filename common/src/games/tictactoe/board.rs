use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, MoveError, WinningLine};
use super::win_detector::{check_win, check_win_with_line, has_won};

/// 3x3 board in row-major order.
///
/// `Board` is `Copy`: the search hands every branch its own copy, so a caller's board is
/// never touched by an in-flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    pub fn apply(&mut self, position: usize, mark: Mark) -> Result<(), MoveError> {
        if mark == Mark::Empty {
            return Err(MoveError::EmptyMark);
        }

        let current = self
            .cells
            .get(position)
            .copied()
            .ok_or(MoveError::OutOfRange { position })?;

        if current != Mark::Empty {
            return Err(MoveError::Occupied {
                position,
                by: current,
            });
        }

        self.cells[position] = mark;
        Ok(())
    }

    /// Places `mark` without validation; callers iterate `legal_moves()`.
    pub(crate) fn set(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }

    /// Copy of the board with `mark` placed on `position`.
    pub fn with_move(&self, position: usize, mark: Mark) -> Result<Board, MoveError> {
        let mut next = *self;
        next.apply(position, mark)?;
        Ok(next)
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn has_won(&self, mark: Mark) -> bool {
        has_won(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Empty cell indices in ascending order.
    ///
    /// The search iterates in this order and keeps the first of several equal scores,
    /// so the ordering decides which optimal move gets played.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            let rendered: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => (row_index * BOARD_SIZE + col).to_string(),
                    _ => mark.to_string(),
                })
                .collect();
            writeln!(f, " {} ", rendered.join(" | "))?;
            if row_index + 1 < BOARD_SIZE {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells written as `X`, `O` and `.`/`_`/`-`; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Expected {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, symbol) in symbols.into_iter().enumerate() {
            cells[i] = match symbol.to_ascii_uppercase() {
                'X' => Mark::X,
                'O' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                other => return Err(format!("Unexpected cell symbol '{}'", other)),
            };
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_cell() {
        let mut board = Board::new();
        assert!(board.apply(4, Mark::X).is_ok());
        assert_eq!(board.cell(4), Some(Mark::X));
        assert_eq!(board.count(Mark::X), 1);
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut board = Board::new();
        let result = board.apply(9, Mark::X);
        assert_eq!(result, Err(MoveError::OutOfRange { position: 9 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_occupied() {
        let mut board = Board::new();
        board.apply(0, Mark::O).unwrap();
        let result = board.apply(0, Mark::X);
        assert!(matches!(
            result,
            Err(MoveError::Occupied { position: 0, by: Mark::O })
        ));
        assert_eq!(board.cell(0), Some(Mark::O));
    }

    #[test]
    fn test_apply_empty_mark_rejected() {
        let mut board = Board::new();
        assert_eq!(board.apply(0, Mark::Empty), Err(MoveError::EmptyMark));
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(3, Mark::X).unwrap();
        assert_eq!(board.cell(3), Some(Mark::Empty));
        assert_eq!(next.cell(3), Some(Mark::X));
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board: Board = "X.O.X.O..".parse().unwrap();
        assert_eq!(board.legal_moves(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_is_full_and_status() {
        let draw: Board = "XOXXOOOXX".parse().unwrap();
        assert!(draw.is_full());
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.status(), GameStatus::Draw);
        assert!(draw.legal_moves().is_empty());

        let won: Board = "OOOXX.X..".parse().unwrap();
        assert_eq!(won.status(), GameStatus::OWon);
        assert!(won.is_terminal());

        assert_eq!(Board::new().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_from_cells_matches_parsed_board() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[0] = Mark::X;
        cells[4] = Mark::O;
        let board = Board::from_cells(cells);
        assert_eq!(board, "X...O....".parse().unwrap());
        assert_eq!(board.cells(), &cells);
    }

    #[test]
    fn test_winning_line() {
        let board: Board = "OX.OX.O..".parse().unwrap();
        let line = board.winning_line().unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [0, 3, 6]);

        assert_eq!(Board::new().winning_line(), None);
        assert_eq!("XOXXOOOXX".parse::<Board>().unwrap().winning_line(), None);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board: Board = "XO.......".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XO?......".parse::<Board>().is_err());
        assert!("xo_ ___ ___".parse::<Board>().is_ok());
    }

    #[test]
    fn test_display_shows_indices_for_empty_cells() {
        let board: Board = "X...O....".parse().unwrap();
        let rendered = board.to_string();
        assert!(rendered.starts_with(" X | 1 | 2 "));
        assert!(rendered.contains(" 3 | O | 5 "));
    }
}

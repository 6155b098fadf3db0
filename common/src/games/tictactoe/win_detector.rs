use super::types::{CELL_COUNT, Mark, WinningLine};

pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    WIN_PATTERNS.iter().find_map(|&pattern| {
        let mark = cells[pattern[0]];
        if mark != Mark::Empty && pattern.iter().all(|&i| cells[i] == mark) {
            Some(WinningLine::new(mark, pattern))
        } else {
            None
        }
    })
}

pub fn has_won(cells: &[Mark; CELL_COUNT], mark: Mark) -> bool {
    mark != Mark::Empty
        && WIN_PATTERNS
            .iter()
            .any(|pattern| pattern.iter().all(|&i| cells[i] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Mark; CELL_COUNT] {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, c) in s.chars().enumerate() {
            cells[i] = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        cells
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_win(&[Mark::Empty; CELL_COUNT]), None);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        assert_eq!(check_win(&cells_from("XXX......")), Some(Mark::X));
        assert_eq!(check_win(&cells_from(".O..O..O.")), Some(Mark::O));
        assert_eq!(check_win(&cells_from("X...X...X")), Some(Mark::X));
        assert_eq!(check_win(&cells_from("..O.O.O..")), Some(Mark::O));
    }

    #[test]
    fn test_winning_line_reports_pattern() {
        let line = check_win_with_line(&cells_from("OX.OX.O..")).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [0, 3, 6]);
    }

    #[test]
    fn test_has_won_is_per_mark() {
        let cells = cells_from("XXXOO....");
        assert!(has_won(&cells, Mark::X));
        assert!(!has_won(&cells, Mark::O));
        assert!(!has_won(&cells, Mark::Empty));
    }
}

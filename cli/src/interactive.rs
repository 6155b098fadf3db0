use std::io::{self, BufRead, Write};

use tictactoe_common::games::tictactoe::{CELL_COUNT, TicTacToeGameState};
use tictactoe_common::stats::GameOutcome;

use crate::game_runner::GameRunner;
use crate::stats_display::format_summary;
use crate::stats_recorder::StatsRecorder;

enum HumanInput {
    Quit,
    Position(usize),
    Invalid,
}

fn parse_human_input(line: &str) -> HumanInput {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return HumanInput::Quit;
    }
    match trimmed.parse::<usize>() {
        Ok(position) => HumanInput::Position(position),
        Err(_) => HumanInput::Invalid,
    }
}

/// Reads one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Human vs engine until the human quits, declines a rematch or input ends.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    runner: &GameRunner,
    recorder: &mut StatsRecorder,
) -> io::Result<()> {
    let human_mark = runner
        .engine_mark
        .opponent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "engine mark must be X or O"))?;

    loop {
        let mut state = TicTacToeGameState::new();
        writeln!(output, "New game: you play {}, X moves first.", human_mark)?;

        while !state.is_over() {
            writeln!(output, "\n{}", state.board)?;

            if runner.is_engine_turn(&state) {
                runner
                    .engine_turn(&mut state, recorder)
                    .map_err(|e| io::Error::other(e.to_string()))?;
                continue;
            }

            write!(output, "Enter position (0-{}) or 'q' to quit: ", CELL_COUNT - 1)?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(());
            };

            match parse_human_input(&line) {
                HumanInput::Quit => {
                    writeln!(output, "Shutting down...")?;
                    return Ok(());
                }
                HumanInput::Invalid => writeln!(output, "Invalid input")?,
                HumanInput::Position(position) => {
                    if let Err(e) = state.place_mark(position) {
                        writeln!(output, "Invalid move: {}", e)?;
                    }
                }
            }
        }

        writeln!(output, "\n{}", state.board)?;
        if let Some(outcome) = runner.finish_game(&state, recorder) {
            let message = match outcome {
                GameOutcome::EngineWin => "Engine wins.",
                GameOutcome::OpponentWin => "You win!",
                GameOutcome::Draw => "Draw.",
            };
            writeln!(output, "{}", message)?;
        }
        if let Some(line) = state.board.winning_line() {
            let [a, b, c] = line.cells;
            writeln!(output, "Winning line: {}-{}-{}", a, b, c)?;
        }
        writeln!(output, "\n{}\n", format_summary(recorder.stats()))?;

        write!(output, "Play again? (y/n): ")?;
        output.flush()?;
        match read_line(input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

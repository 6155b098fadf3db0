mod config;
mod game_runner;
mod interactive;
mod stats_display;
mod stats_recorder;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BotType, SearchOptions};
use tictactoe_common::stats::GameOutcome;
use tictactoe_common::{log, logger};

use config::{CliConfig, PlayerMark, get_config_manager};
use game_runner::GameRunner;
use stats_display::format_summary;
use stats_recorder::StatsRecorder;

#[derive(Parser)]
#[command(name = "tictactoe_cli", about = "Tic-tac-toe against an exhaustive minimax engine")]
struct Args {
    /// Settings file (YAML); defaults to tictactoe_cli_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Statistics file (YAML); overrides the settings file
    #[arg(long)]
    stats_file: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the engine in the terminal
    Play {
        #[arg(long)]
        no_pruning: bool,

        #[arg(long, value_enum)]
        engine_mark: Option<PlayerMark>,
    },
    /// Let the engine play unattended games
    SelfPlay {
        #[arg(long, default_value_t = 1)]
        games: u32,

        #[arg(long, value_enum, default_value_t = Opponent::Engine)]
        opponent: Opponent,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        no_pruning: bool,

        #[arg(long, value_enum)]
        engine_mark: Option<PlayerMark>,
    },
    /// Print the stored statistics
    Stats,
    /// Zero the stored statistics
    ResetStats,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Engine,
    Random,
}

impl Opponent {
    fn bot_type(self) -> BotType {
        match self {
            Opponent::Engine => BotType::Minimax,
            Opponent::Random => BotType::Random,
        }
    }
}

fn build_runner(
    config: &CliConfig,
    no_pruning: bool,
    engine_mark: Option<PlayerMark>,
) -> GameRunner {
    let options = SearchOptions {
        pruning: config.pruning_enabled && !no_pruning,
    };
    let mark = engine_mark.unwrap_or(config.engine_mark).to_mark();
    GameRunner::new(mark, options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.clone()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose);

    let stats_path = args
        .stats_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.stats_file));
    let mut recorder = StatsRecorder::open(&stats_path);

    match args.command.unwrap_or(Command::Play {
        no_pruning: false,
        engine_mark: None,
    }) {
        Command::Play {
            no_pruning,
            engine_mark,
        } => {
            let runner = build_runner(&config, no_pruning, engine_mark);
            log!(
                "Engine plays {} (pruning {})",
                runner.engine_mark,
                if runner.options.pruning { "on" } else { "off" }
            );

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            let result =
                interactive::run_interactive(&mut input, &mut output, &runner, &mut recorder);

            if recorder.persist() {
                log!("Statistics saved to {}", stats_path.display());
            }
            result?;
        }
        Command::SelfPlay {
            games,
            opponent,
            seed,
            no_pruning,
            engine_mark,
        } => {
            let runner = build_runner(&config, no_pruning, engine_mark);
            let mut rng = seed.map_or_else(SessionRng::from_random, SessionRng::new);
            log!("Self-play: {} games, seed {}", games, rng.seed());

            let mut engine_losses = 0;
            for game in 1..=games {
                let outcome = runner.play_unattended(opponent.bot_type(), &mut rng, &mut recorder)?;
                if outcome == GameOutcome::OpponentWin {
                    engine_losses += 1;
                }
                log!("Game {}/{} finished: {:?}", game, games, outcome);
            }

            if engine_losses > 0 {
                log!("Engine lost {} games", engine_losses);
            }
            println!("{}", format_summary(recorder.stats()));
        }
        Command::Stats => {
            println!("{}", format_summary(recorder.stats()));
        }
        Command::ResetStats => {
            recorder.reset();
            log!("Statistics reset");
        }
    }

    Ok(())
}

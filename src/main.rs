//! Histodle - CLI
//!
//! Daily history guessing game with TUI and line-based modes.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use histodle::{
    commands::{GuessConfig, run_guess, run_practice, run_simple},
    config::Config,
    game::{DEFAULT_HISTORY_DAYS, Mode},
    output::{print_history, print_statistics},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "histodle",
    about = "Guess the year, or the name, of today's historical event",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Event catalog (JSON array of {date, year, event, clue}); bundled catalog if omitted
    #[arg(short, long, global = true, env = "HISTODLE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Directory holding saved games and statistics
    #[arg(short, long, global = true, env = "HISTODLE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start on a past date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        /// Replay a past date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Submit a single guess and show the game so far
    Guess {
        /// A year (e.g. 1969, -44) or the event's name
        #[arg(allow_negative_numbers = true)]
        input: String,

        /// Play a past date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Guess the year or the name; defaults to the saved game's mode
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Confirm discarding attempts when --mode changes the saved game's mode
        #[arg(short, long)]
        yes: bool,
    },

    /// Replay a random past event
    Practice,

    /// Show statistics
    Stats,

    /// Show recent days and their results
    History {
        /// Number of days to list, ending today
        #[arg(short = 'n', long, default_value_t = DEFAULT_HISTORY_DAYS)]
        days: u64,
    },
}

/// Log to stderr, filtered by `HISTODLE_LOG` (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_env("HISTODLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = Config::new(cli.catalog, cli.data_dir);
    let mut game = config.controller()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { date: None });

    match command {
        Commands::Play { date } => run_play_command(game, date),
        Commands::Simple { date } => run_simple(&mut game, date).map_err(|e| anyhow::anyhow!(e)),
        Commands::Guess {
            input,
            date,
            mode,
            yes,
        } => {
            let guess = GuessConfig {
                input,
                date,
                mode,
                confirm_switch: yes,
            };
            run_guess(&guess, &mut game).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Practice => {
            run_practice(&mut game, &mut rand::rng()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            print_statistics(game.statistics());
            Ok(())
        }
        Commands::History { days } => {
            print_history(&game.history(days)?);
            Ok(())
        }
    }
}

fn run_play_command<S, C>(
    game: histodle::game::Controller<S, C>,
    date: Option<NaiveDate>,
) -> Result<()>
where
    S: histodle::storage::KeyValueStore,
    C: histodle::game::Clock,
{
    use histodle::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app, date)
}

//! Wordle - CLI
//!
//! Play Wordle in the terminal, line by line or full-screen.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_check, run_play},
    config::GameConfig,
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: built-in list)
    #[arg(long, global = true, env = "WORDLE_ANSWERS")]
    answers: Option<PathBuf>,

    /// Allowed-guess list file, one word per line (default: built-in list)
    #[arg(long, global = true, env = "WORDLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Seed for choosing solutions, for repeatable games
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level: error, warn (default), info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one guess per line (default)
    Play,

    /// Full-screen interactive mode
    Tui,

    /// Show the feedback a guess would get against a solution
    Check {
        /// The hidden word
        solution: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = LoggingConfig {
        level: &cli.log_level,
        file: cli.log_file.as_deref(),
    }
    .init()?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = GameConfig {
        answers: cli.answers,
        dictionary: cli.dictionary,
        seed: cli.seed,
    };

    // Default to line mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Tui => run_tui_command(&config),
        Commands::Check { solution, guess } => {
            run_check(&mut io::stdout().lock(), &solution, &guess)?;
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let lists = config.load_word_lists()?;
    let mut rng = config.rng();
    run_play(&mut io::stdin().lock(), &mut io::stdout().lock(), &lists, &mut rng)?;
    Ok(())
}

fn run_tui_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let lists = config.load_word_lists()?;
    let app = App::new(&lists, config.rng())?;
    run_tui(app)
}

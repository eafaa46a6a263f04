//! Wordle - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{evaluate_words, run_simple},
    game::{GameConfig, MAX_ATTEMPTS, StreakStore},
    output::print_evaluation,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game (1-26)
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS as u8,
        value_parser = clap::value_parser!(u8).range(1..=26)
    )]
    max_attempts: u8,

    /// File that keeps the win streak between runs
    #[arg(long, global = true)]
    streak_file: Option<PathBuf>,

    /// Seed for secret word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a secret word
    Evaluate {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Initialise tracing, defaulting to warnings only
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str, seed: Option<u64>) -> Result<WordList> {
    let words = match wordlist {
        "embedded" => WordList::embedded()?,
        path => WordList::from_file(path)
            .with_context(|| format!("failed to load word list {path}"))?,
    };
    tracing::info!(
        answers = words.answer_count(),
        dictionary = words.dictionary_size(),
        "word list loaded"
    );

    Ok(match seed {
        Some(seed) => words.with_seed(seed),
        None => words,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = GameConfig::new().with_max_attempts(usize::from(cli.max_attempts));
    let streak_store = cli.streak_file.map(StreakStore::new);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let words = load_words(&cli.wordlist, cli.seed)?;
            run_play_command(words, &config, streak_store)
        }
        Commands::Simple => {
            let mut words = load_words(&cli.wordlist, cli.seed)?;
            run_simple(&mut words, &config, streak_store.as_ref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Evaluate { secret, guess } => run_evaluate_command(&secret, &guess),
    }
}

fn run_evaluate_command(secret: &str, guess: &str) -> Result<()> {
    let evaluation = evaluate_words(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation(&evaluation.secret, &evaluation.guess, &evaluation.result);
    Ok(())
}

fn run_play_command(
    words: WordList,
    config: &GameConfig,
    streak_store: Option<StreakStore>,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config, streak_store);
    run_tui(app)
}

//! Othello-Rust: play Othello against an alpha-beta engine.
//!
//! ## Usage
//!
//! - `othello-rust` - Play as Black against the engine
//! - `othello-rust play --human white` - Play as White
//! - `othello-rust selfplay --opponent random --seed 42` - Watch the engine play

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use othello_rust::board::Side;
use othello_rust::constants::{DEFAULT_DEPTH, DEFAULT_TIME_BUDGET_MS};
use othello_rust::game::{Game, Player};
use othello_rust::search::{PassRule, SearchConfig};

/// Othello-Rust: Othello with a minimax alpha-beta opponent
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine from the terminal
    Play {
        /// Color you play
        #[arg(long, value_enum, default_value_t = Color::Black)]
        human: Color,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Let the engine play Black against itself or a random mover
    Selfplay {
        #[arg(long, value_enum, default_value_t = Opponent::Engine)]
        opponent: Opponent,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args, Clone)]
struct SearchArgs {
    /// Search depth in plies below each candidate move
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// Time budget per engine move, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_BUDGET_MS)]
    time_ms: u64,
    /// What happens when the side to move has no legal move
    #[arg(long, value_enum, default_value_t = PassRule::Stall)]
    pass_rule: PassRule,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_ms: DEFAULT_TIME_BUDGET_MS,
            pass_rule: PassRule::Stall,
        }
    }
}

impl From<SearchArgs> for SearchConfig {
    fn from(args: SearchArgs) -> Self {
        SearchConfig {
            depth: args.depth,
            time_budget: Duration::from_millis(args.time_ms),
            pass_rule: args.pass_rule,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Color {
    Black,
    White,
}

#[derive(Copy, Clone, ValueEnum)]
enum Opponent {
    Engine,
    Random,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut game = match cli.command {
        Some(Commands::Play { human, search }) => {
            let side = match human {
                Color::Black => Side::Black,
                Color::White => Side::White,
            };
            println!("You play {side}.\n");
            let engine = Player::Engine(search.into());
            match side {
                Side::Black => Game::new(Player::Human, engine),
                Side::White => Game::new(engine, Player::Human),
            }
        }
        Some(Commands::Selfplay {
            opponent,
            seed,
            search,
        }) => {
            let config: SearchConfig = search.into();
            let white = match opponent {
                Opponent::Engine => Player::Engine(config.clone()),
                Opponent::Random => Player::Random(fastrand::Rng::with_seed(seed)),
            };
            Game::new(Player::Engine(config), white).quiet()
        }
        None => Game::new(
            Player::Human,
            Player::Engine(SearchArgs::default().into()),
        ),
    };

    game.run()?;
    Ok(())
}

//! Othello engine command line
//!
//! `othello move` answers a single board snapshot; `othello selfplay` plays a
//! full game between two agents and reports per-turn node counts and the
//! winner.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use othello::config::{self, Preset, SearchConfig};
use othello::rules::{apply_move, turn_state, winner, TurnState};
use othello::{AIEngine, Agent, Board, Stone};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a move for one position
    Move {
        /// 64 integers in x-major order, each -1, 0 or 1
        #[arg(long)]
        board: String,

        /// Side to move: 1 (black) or -1 (white)
        #[arg(long, allow_hyphen_values = true)]
        color: i8,

        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Play one game from the initial position
    Selfplay {
        #[command(flatten)]
        engine: EngineArgs,

        /// Agent playing white (defaults to the black agent's settings)
        #[arg(long)]
        opponent: Option<Preset>,
    },
}

#[derive(clap::Args, Debug)]
struct EngineArgs {
    /// Per-move time budget in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Standard agent: tt, my or ab
    #[arg(long, conflicts_with = "config")]
    agent: Option<Preset>,

    /// TOML config file (defaults to $OTHELLO_CONFIG, then ./othello.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl EngineArgs {
    fn resolve(&self) -> Result<SearchConfig> {
        let mut config = if let Some(path) = &self.config {
            config::try_load_from_path(path).with_context(|| format!("loading config {}", path.display()))?
        } else if let Some(preset) = self.agent {
            config::apply_env_overrides(preset.config())
        } else {
            config::load_config()
        };
        if let Some(ms) = self.time_ms {
            config.time_limit_ms = ms;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    match args.command {
        Command::Move {
            board,
            color,
            engine,
        } => run_move(&board, color, &engine),
        Command::Selfplay { engine, opponent } => run_selfplay(&engine, opponent),
    }
}

fn run_move(payload: &str, color: i8, args: &EngineArgs) -> Result<()> {
    let board = Board::from_payload(payload).context("parsing --board")?;
    let stone = match Stone::from_value(color) {
        Some(s) if s != Stone::Empty => s,
        _ => anyhow::bail!("--color must be 1 or -1, got {color}"),
    };

    let mut engine = AIEngine::with_config(args.resolve()?);
    match engine.choose_move(&board, stone) {
        Some(mov) => println!("PUT {} {}", mov.x, mov.y),
        None => println!("PASS"),
    }
    eprintln!("nodes: {}", engine.last_search_nodes());
    Ok(())
}

fn run_selfplay(args: &EngineArgs, opponent: Option<Preset>) -> Result<()> {
    let black_config = args.resolve()?;
    let white_config = match opponent {
        Some(preset) => SearchConfig {
            time_limit_ms: black_config.time_limit_ms,
            ..preset.config()
        },
        None => black_config,
    };

    let mut black = AIEngine::with_config(black_config);
    let mut white = AIEngine::with_config(white_config);
    println!("black: {}  white: {}", black.nickname(), white.nickname());

    let mut board = Board::initial();
    let mut color = Stone::Black;
    let mut turn = 1;

    loop {
        match turn_state(&board, color) {
            TurnState::GameOver => break,
            TurnState::Pass => println!("{turn:>3} {color:?} PASS"),
            TurnState::Move => {
                let agent: &mut AIEngine = if color == Stone::Black { &mut black } else { &mut white };
                let Some(mov) = agent.choose_move(&board, color) else {
                    anyhow::bail!("{} returned no move in a position with legal moves", agent.nickname());
                };
                board = apply_move(&board, mov, color);
                let stats = agent.last_stats();
                println!(
                    "{turn:>3} {color:?} PUT {} {}  nodes {}  tt_hit {:.1}%",
                    mov.x,
                    mov.y,
                    stats.nodes,
                    stats.tt_hit_rate()
                );
            }
        }
        color = color.opponent();
        turn += 1;
    }

    let (b, w) = (board.count(Stone::Black), board.count(Stone::White));
    println!("{board}");
    match winner(&board) {
        Some(stone) => println!("final: black {b}  white {w}  winner {stone:?}"),
        None => println!("final: black {b}  white {w}  draw"),
    }
    Ok(())
}

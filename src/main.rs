//! minimax-chess: pick a move for a position, or print its evaluation.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use minimax_chess::engine::{to_pawns, Choice, MoveSource};
use minimax_chess::shakmaty::CastlingMode;
use minimax_chess::{Engine, EngineConfig, Evaluation, Game, PositionOracle, Winner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minimax-chess", version)]
#[command(about = "Alpha-beta chess move selection with an opening book")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select a move for the side to move
    Select(SelectArgs),
    /// Print the static evaluation of a position
    Eval(PositionArgs),
}

#[derive(Args)]
struct PositionArgs {
    /// Position in FEN (defaults to the starting position)
    #[arg(long)]
    fen: Option<String>,

    /// Moves in UCI or SAN played from the position first
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,
}

#[derive(Args)]
struct SelectArgs {
    #[command(flatten)]
    position: PositionArgs,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<i32>,

    /// Leaf evaluation: material or piece-square
    #[arg(long)]
    eval: Option<Evaluation>,

    /// Opening book (.pgn or JSON)
    #[arg(long)]
    book: Option<PathBuf>,

    /// Ignore the opening book
    #[arg(long)]
    no_book: bool,

    /// Seed for the book's random pick
    #[arg(long)]
    seed: Option<u64>,

    /// Node budget
    #[arg(long)]
    nodes: Option<u64>,

    /// Time budget in milliseconds
    #[arg(long)]
    movetime: Option<u64>,
}

impl PositionArgs {
    fn game(&self) -> Result<Game> {
        let mut game = match &self.fen {
            Some(fen) => Game::from_fen(fen)?,
            None => Game::new(),
        };
        for mv in &self.moves {
            game.play_notation(mv)
                .with_context(|| format!("cannot play {mv}"))?;
        }
        Ok(game)
    }
}

impl SelectArgs {
    fn config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(evaluation) = self.eval {
            config.evaluation = evaluation;
        }
        if let Some(book) = &self.book {
            config.book_path = Some(book.clone());
        }
        if self.no_book {
            config.own_book = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.nodes.is_some() {
            config.nodes = self.nodes;
        }
        if self.movetime.is_some() {
            config.movetime = self.movetime;
        }
        Ok(config)
    }
}

fn select(args: &SelectArgs) -> Result<()> {
    let config = args.config()?;
    let mut game = args.position.game()?;

    let winner = game.winner();
    if winner != Winner::Undecided {
        bail!("game is already over ({winner:?})");
    }

    let mut engine = Engine::from_config(&config)?;
    let Choice { mv, source } = engine.choose(&mut game)?;
    let uci = mv.to_uci(CastlingMode::Standard);
    match source {
        MoveSource::Book => println!("bestmove {uci} book"),
        MoveSource::Search {
            score,
            depth,
            nodes,
        } => println!(
            "bestmove {uci} score {:+.2} depth {depth} nodes {nodes}",
            to_pawns(score)
        ),
    }
    Ok(())
}

fn eval(args: &PositionArgs) -> Result<()> {
    let game = args.game()?;
    for evaluation in [Evaluation::Material, Evaluation::PieceSquare] {
        println!("{evaluation}: {:+.2}", to_pawns(evaluation.evaluate(&game)));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Select(args) => select(args),
        Command::Eval(args) => eval(args),
    }
}

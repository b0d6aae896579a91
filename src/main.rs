//! Command-line front end for the move-selection engine
//!
//! Reads a JSON stone list from `--board <file>` or stdin and prints the
//! chosen move as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{error, info};
use thiserror::Error;

use gomoku::{AIEngine, Difficulty, EngineConfig, EngineError, Player, Stone};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick the next stone in a five-in-a-row game", long_about = None)]
struct Args {
    /// JSON file with `[{"row":..,"col":..,"owner":"black"}]`; stdin when omitted
    #[arg(long)]
    board: Option<PathBuf>,
    /// easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,
    /// Colour to move: black/a or white/b
    #[arg(long, default_value = "black")]
    player: Player,
    /// JSON engine configuration; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long)]
    max_nodes: Option<u64>,
    /// Print the full result with the stage, score and node count
    #[arg(long)]
    stats: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read {0}: {1}")]
    Read(String, #[source] io::Error),
    #[error("cannot parse {0}: {1}")]
    Json(String, #[source] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let stones = load_stones(args.board.as_deref())?;
    info!(
        "{} stones on a {}x{} grid, {} to move at {}",
        stones.len(),
        config.rows,
        config.cols,
        args.player,
        args.difficulty
    );

    let engine = AIEngine::with_config(config);
    let result = engine.select_move_with_stats(&stones, args.difficulty, args.player)?;

    let output = if args.stats {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result.best_move)
    };
    let output = output.map_err(|e| CliError::Json("result".to_string(), e))?;
    println!("{}", output);
    Ok(())
}

fn load_config(args: &Args) -> Result<EngineConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = read_file(path)?;
            serde_json::from_str(&text).map_err(|e| CliError::Json(path.display().to_string(), e))?
        }
        None => EngineConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(max_nodes) = args.max_nodes {
        config.max_nodes = max_nodes;
    }
    Ok(config)
}

fn load_stones(path: Option<&Path>) -> Result<Vec<Stone>, CliError> {
    let (source, text) = match path {
        Some(path) => (path.display().to_string(), read_file(path)?),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::Read("stdin".to_string(), e))?;
            ("stdin".to_string(), text)
        }
    };

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|e| CliError::Json(source, e))
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Read(path.display().to_string(), e))
}

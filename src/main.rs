//! # Clue Board Entry Point
//!
//! Loads a board from its layout and legend files and prints the cells a
//! token may stop on for one roll of the die.

use clap::Parser;
use clue_board::{config, load_board, BoardConfig, BoardError, BoardResult};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Command line arguments for the board tool.
#[derive(Parser, Debug)]
#[command(name = "clue_board")]
#[command(about = "Lists legal move targets on a deduction game board")]
#[command(version)]
struct Args {
    /// JSON file naming the layout and legend files
    #[arg(short, long, conflicts_with_all = ["layout", "legend"])]
    config: Option<PathBuf>,

    /// Layout file, one board row per line
    #[arg(long, default_value = config::DEFAULT_LAYOUT_FILE)]
    layout: PathBuf,

    /// Legend file, one `symbol, name, kind` entry per line
    #[arg(long, default_value = config::DEFAULT_LEGEND_FILE)]
    legend: PathBuf,

    /// Row of the token's current cell
    #[arg(short, long)]
    row: usize,

    /// Column of the token's current cell
    #[arg(short = 'C', long)]
    column: usize,

    /// Number of steps to move; rolled when omitted
    #[arg(short, long)]
    steps: Option<usize>,

    /// Random seed for the die roll
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

fn run(args: &Args) -> BoardResult<()> {
    info!("Starting clue_board v{}", clue_board::VERSION);

    let board_config = match &args.config {
        Some(path) => BoardConfig::from_json_file(path)?,
        None => BoardConfig::new(&args.layout, &args.legend),
    };
    let board = load_board(&board_config)?;

    let origin = board.cell_at(args.row, args.column).ok_or_else(|| {
        BoardError::InvalidPosition(format!(
            "({}, {}) is outside the {} x {} board",
            args.row,
            args.column,
            board.num_rows(),
            board.num_columns()
        ))
    })?;
    if !origin.is_traversable() {
        info!(
            "({}, {}) is inside {} and has no moves",
            args.row,
            args.column,
            board.legend().room_name(origin.symbol).unwrap_or("a room")
        );
    }

    let steps = match args.steps {
        Some(steps) => steps,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);
            let roll = rng.gen_range(1..=config::DIE_FACES);
            info!("Rolled a {} (seed {})", roll, seed);
            roll
        }
    };

    let mut targets: Vec<_> = board
        .calc_targets(args.row, args.column, steps)
        .into_iter()
        .collect();
    targets.sort();

    println!(
        "{} target(s) for a move of {} from ({}, {}):",
        targets.len(),
        steps,
        args.row,
        args.column
    );
    for position in targets {
        let name = board.grid().room_name_at(position).unwrap_or("?");
        println!("  {} {}", position, name);
    }

    Ok(())
}

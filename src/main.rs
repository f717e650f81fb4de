//! SGF-Board command line.
//!
//! ## Usage
//!
//! - `sgf-board info game.sgf` - Print the game summary as JSON
//! - `sgf-board board game.sgf --move 50` - Print the board after 50 moves
//! - `sgf-board demo` - Play random stones on an empty board
//!
//! A file argument of `-` reads the record from stdin. Set `RUST_LOG` to see
//! diagnostics on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sgf_board::board::{Board, Color};
use sgf_board::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use sgf_board::coord::str_coord;
use sgf_board::tools::{board_snapshot, read_game_record, tool_result};

/// SGF-Board: read Go game records and replay them
#[derive(Parser)]
#[command(name = "sgf-board")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the game summary of the first game in a record as JSON
    Info {
        /// Record file, or `-` for stdin
        file: PathBuf,
        /// Include the full move list
        #[arg(long)]
        all: bool,
    },
    /// Print the board of the first game in a record
    Board {
        /// Record file, or `-` for stdin
        file: PathBuf,
        /// Number of moves to replay (default: all)
        #[arg(short, long = "move")]
        move_number: Option<usize>,
        /// Print the grid as JSON rows instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play random stones to exercise the capture engine
    Demo {
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u64).range(1..=MAX_BOARD_SIZE as u64))]
        size: u64,
        #[arg(long, default_value_t = 60)]
        moves: usize,
        /// Seed for a reproducible demo
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Info { file, all }) => {
            let content = read_input(&file)?;
            let outcome = read_game_record(&content);
            let payload = match &outcome {
                Ok(data) if all => serde_json::to_value(data)?,
                _ => tool_result(&outcome),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Some(Commands::Board {
            file,
            move_number,
            json,
        }) => {
            let content = read_input(&file)?;
            let board = board_snapshot(&content, move_number)
                .with_context(|| format!("failed to read game from {}", file.display()))?;
            if json {
                println!("{}", serde_json::to_string(&board.rows())?);
            } else {
                print!("{board}");
            }
        }
        Some(Commands::Demo { size, moves, seed }) => run_demo(size as usize, moves, seed),
        None => run_demo(DEFAULT_BOARD_SIZE, 60, None),
    }
    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(content);
    }
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn run_demo(size: usize, moves: usize, seed: Option<u64>) {
    println!("SGF-Board: random play on a {size}x{size} board\n");
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut board = Board::new(size);
    let mut color = Color::Black;
    let mut captured = 0;
    if size > 0 {
        for _ in 0..moves {
            let (x, y) = (rng.usize(..size), rng.usize(..size));
            if board.get(x, y).is_some() {
                continue;
            }
            let result = board.play(x, y, color);
            if result.captures > 0 {
                let at = str_coord((x, y)).unwrap_or_else(|| format!("{x},{y}"));
                println!("{color}[{at}] captures {}", result.captures);
                captured += result.captures;
            }
            color = color.opposite();
        }
    }
    println!("{board}");
    println!(
        "Black stones: {}, White stones: {}, captured: {captured}",
        board.stone_count(Color::Black),
        board.stone_count(Color::White)
    );
}

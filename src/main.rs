//! Goban: a Go-board capture engine.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban console` - Drive a board interactively from stdin
//! - `goban demo` - Run the scripted demo
//! - `goban playout` - Fill a board with random moves and print the outcome

use anyhow::Context;
use clap::{Parser, Subcommand};

use goban::board::{Board, Color};
use goban::console::Console;
use goban::constants::DEFAULT_SIZE;
use goban::playout::random_playout;
use goban::render::render;

/// Goban: a Go-board capture engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read board commands from stdin, one per line
    Console {
        /// Starting board width
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        width: usize,
        /// Starting board height
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        height: usize,
    },
    /// Run a scripted walkthrough of captures, suicide, invert and resize
    Demo,
    /// Play random moves on an empty board and report the tallies
    Playout {
        /// Board width
        #[arg(long, default_value_t = 9)]
        width: usize,
        /// Board height
        #[arg(long, default_value_t = 9)]
        height: usize,
        /// Number of stones to place
        #[arg(long, default_value_t = 200)]
        moves: usize,
        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Console { width, height }) => {
            let mut console = Console::with_board(Board::with_size(width, height)?);
            console.run().context("console i/o failed")?;
        }
        Some(Commands::Playout {
            width,
            height,
            moves,
            seed,
        }) => {
            run_playout(width, height, moves, seed)?;
        }
        Some(Commands::Demo) | None => {
            run_demo()?;
        }
    }

    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("Goban: a Go-board capture engine\n");

    println!("=== Capture ===");
    let mut board = Board::with_size(9, 9)?;
    board.play(Color::White, 2, 2)?;
    board.play(Color::Black, 1, 2)?;
    board.play(Color::Black, 3, 2)?;
    board.play(Color::Black, 2, 1)?;
    println!("White c3 is down to one liberty:");
    println!("{}", render(&board));
    let result = board.play(Color::Black, 2, 3)?;
    println!("Black d3: {result:?}\n");
    println!("{}", render(&board));

    println!("=== Suicide ===");
    let mut board = Board::with_size(5, 5)?;
    for &(row, col) in &[(1, 2), (3, 2), (2, 1), (2, 3)] {
        board.play(Color::White, row, col)?;
    }
    println!("A white diamond with a hole at c3:");
    println!("{}", render(&board));
    let result = board.play(Color::Black, 2, 2)?;
    println!("Black c3: {result:?}\n");
    println!("{}", render(&board));

    println!("=== Invert ===");
    board.invert();
    println!("The same board with every color swapped:");
    println!("{}", render(&board));

    println!("=== Resize ===");
    board.resize(3, 3)?;
    println!("A fresh 3x3:");
    println!("{}", render(&board));
    if let Err(e) = board.resize(2, 9) {
        println!("resize to 2x9 is refused: {e}");
    }

    Ok(())
}

fn run_playout(width: usize, height: usize, moves: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    let mut board = Board::with_size(width, height)?;
    let stats = random_playout(&mut board, moves, seed);

    println!("{}", render(&board));
    println!("seed:              {seed}");
    println!("moves played:      {}", stats.moves);
    println!("captured by black: {}", stats.captured_by_black);
    println!("captured by white: {}", stats.captured_by_white);
    println!("black suicides:    {}", stats.suicides_by_black);
    println!("white suicides:    {}", stats.suicides_by_white);
    Ok(())
}

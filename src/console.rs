//! Interactive board console.
//!
//! A line-oriented driver for a single board, in the style of the text
//! protocols Go engines speak: one command per line, responses prefixed
//! with `=` on success and `?` on failure.
//!
//! ## Supported Commands
//!
//! - `play <black|white> <coord>` - Play a stone (e.g. `play b d4`)
//! - `show` - Print the board
//! - `resize <width> <height>` - Replace the board with an empty one
//! - `clear` - Empty the board, keeping its dimensions
//! - `invert` - Swap the colors of every stone
//! - `last` - Report the most recent move
//! - `help` - List the known commands
//! - `quit` - Exit the loop
//!
//! ## Example
//!
//! ```ignore
//! use goban::console::Console;
//! let mut console = Console::new();
//! console.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, MoveResult};
use crate::coords::{format_coord, parse_coord};
use crate::render::render;

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear", "help", "invert", "last", "play", "quit", "resize", "show",
];

/// Console state: a single board driven by text commands.
pub struct Console {
    board: Board,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console holding an empty default-size board.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Create a console around an existing board.
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    ///
    /// Returns when `quit` is received or stdin reaches end of file.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            writeln!(stdout, "{prefix} {message}")?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }

        Ok(())
    }

    /// Execute a single command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "play" => {
                if args.len() < 2 {
                    return (false, "usage: play <black|white> <coord>".to_string());
                }
                let color = match parse_color(args[0]) {
                    Some(c) => c,
                    None => return (false, format!("unknown color: {}", args[0])),
                };
                let (row, col) = match parse_coord(args[1]) {
                    Some(p) => p,
                    None => return (false, format!("bad coordinate: {}", args[1])),
                };
                match self.board.play(color, row, col) {
                    Ok(result) => (true, describe_move(color, &result)),
                    Err(e) => (false, e.to_string()),
                }
            }

            "show" => (true, render(&self.board)),

            "resize" => {
                if args.len() < 2 {
                    return (false, "usage: resize <width> <height>".to_string());
                }
                let (width, height) = match (args[0].parse(), args[1].parse()) {
                    (Ok(w), Ok(h)) => (w, h),
                    _ => return (false, "invalid dimensions".to_string()),
                };
                match self.board.resize(width, height) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "clear" => {
                self.board.clear();
                (true, String::new())
            }

            "invert" => {
                self.board.invert();
                (true, String::new())
            }

            "last" => match self.board.last_move() {
                Some((row, col)) => (true, format_coord(row, col)),
                None => (true, "none".to_string()),
            },

            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// Summarize a completed move for the response line.
fn describe_move(color: Color, result: &MoveResult) -> String {
    let coord = format_coord(result.position.0, result.position.1);
    match result.captured_color {
        None => format!("{color} {coord}"),
        Some(victim) if victim == color => {
            let n = result.captured_stones.len();
            format!("{color} {coord} was suicide, {n} {} removed", noun(n))
        }
        Some(victim) => {
            let n = result.captured_stones.len();
            let list: Vec<String> = result
                .captured_stones
                .iter()
                .map(|&(r, c)| format_coord(r, c))
                .collect();
            format!(
                "{color} {coord} captured {n} {victim} {}: {}",
                noun(n),
                list.join(" ")
            )
        }
    }
}

fn noun(n: usize) -> &'static str {
    if n == 1 {
        "stone"
    } else {
        "stones"
    }
}

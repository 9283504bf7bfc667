//! Goban: a Go-board move-and-capture engine.
//!
//! This crate implements the board half of games built on Go's rules of
//! capture: stone placement on a resizable rectangular grid, group
//! discovery, liberty analysis, and capture resolution, including
//! suicide as a legal self-removing move. Turn order, ko, and scoring
//! are deliberately left to the caller.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimension limits
//! - [`board`] - Board state, move execution, capture resolution
//! - [`coords`] - Text coordinates (`"d4"`) to grid positions and back
//! - [`render`] - Printable board with labels and a last-move marker
//! - [`console`] - Line-oriented interactive driver
//! - [`playout`] - Random self-play for demos and stress tests
//!
//! ## Example
//!
//! ```
//! use goban::board::{Board, Color};
//!
//! // Surround a white stone on an empty board...
//! let mut board = Board::new();
//! board.play(Color::White, 1, 1).unwrap();
//! board.play(Color::Black, 0, 1).unwrap();
//! board.play(Color::Black, 1, 0).unwrap();
//! board.play(Color::Black, 1, 2).unwrap();
//!
//! // ...and take it with the fourth black stone.
//! let result = board.play(Color::Black, 2, 1).unwrap();
//! assert_eq!(result.captured_color, Some(Color::White));
//! assert_eq!(result.captured_stones, vec![(1, 1)]);
//! assert_eq!(board.get(1, 1), None);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod coords;
pub mod playout;
pub mod render;

//! Random playouts.
//!
//! Fills a board with alternating random moves, mostly as a stress
//! exercise for the capture machinery: a few hundred blind moves on a
//! small board produce plenty of captures and the occasional suicide.
//! Backs the `playout` CLI subcommand and the bulk integration tests.

use crate::board::{Board, Color};

/// Tallies collected over one playout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    /// Stones successfully placed.
    pub moves: usize,
    /// White stones removed by black moves.
    pub captured_by_black: usize,
    /// Black stones removed by white moves.
    pub captured_by_white: usize,
    /// Black moves that removed the mover's own group.
    pub suicides_by_black: usize,
    /// White moves that removed the mover's own group.
    pub suicides_by_white: usize,
}

impl PlayoutStats {
    /// Total suicide moves, both colors.
    pub fn suicides(&self) -> usize {
        self.suicides_by_black + self.suicides_by_white
    }
}

/// Play up to `max_moves` random moves, alternating colors starting
/// with black.
///
/// Each turn picks a uniformly random empty cell and plays it; suicide
/// is a legal move here like anywhere else and is simply counted. Stops
/// early only if the board runs out of empty cells. The generator is
/// seeded, so the same (board, max_moves, seed) input replays the same
/// game.
pub fn random_playout(board: &mut Board, max_moves: usize, seed: u64) -> PlayoutStats {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut stats = PlayoutStats::default();
    let mut to_move = Color::Black;

    for _ in 0..max_moves {
        let empties = empty_cells(board);
        if empties.is_empty() {
            break;
        }
        let (row, col) = empties[rng.usize(..empties.len())];

        // The pick is an empty on-board cell, so the move cannot be refused.
        let Ok(result) = board.play(to_move, row, col) else {
            break;
        };

        stats.moves += 1;
        match result.captured_color {
            Some(victim) if victim == to_move => match to_move {
                Color::Black => stats.suicides_by_black += 1,
                Color::White => stats.suicides_by_white += 1,
            },
            Some(_) => match to_move {
                Color::Black => stats.captured_by_black += result.captured_stones.len(),
                Color::White => stats.captured_by_white += result.captured_stones.len(),
            },
            None => {}
        }

        to_move = to_move.opponent();
    }

    stats
}

fn empty_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(board.width() * board.height());
    for row in 0..board.height() {
        for col in 0..board.width() {
            if board.get(row, col).is_none() {
                cells.push((row, col));
            }
        }
    }
    cells
}

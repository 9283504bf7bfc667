//! Board state and move execution.
//!
//! This module provides the capture engine for games played on a goban:
//! - Rectangular grid of cells, each empty or holding a stone
//! - Stone placement with full capture and suicide resolution
//! - Group discovery by 4-connected flood fill with early liberty exit
//! - Board-level mutators (`resize`, `invert`, `clear`)
//!
//! The engine enforces occupancy and bounds only. Ko, scoring and turn
//! order belong to whatever framework drives it; `play` takes the color
//! to place on every call and never asks whose turn it is.

use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};

/// A stone color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Why a board operation was refused. Refused operations never mutate
/// the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the current dimensions.
    OutOfBounds,
    /// Target cell already holds a stone of either color.
    Occupied,
    /// Requested dimensions fall outside `MIN_SIZE..=MAX_SIZE`.
    InvalidSize,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "coordinate is off the board"),
            BoardError::Occupied => write!(f, "cell is already occupied"),
            BoardError::InvalidSize => {
                write!(f, "dimensions must be between {MIN_SIZE} and {MAX_SIZE}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Outcome of an accepted play.
///
/// `captured_color` is `None` when nothing was removed, the opponent's
/// color on a capture, or the mover's own color on a suicide (the placed
/// stone's group had no liberties and no capture created one, so the
/// group itself came off the board). `captured_stones` lists the removed
/// cells in traversal discovery order, one entry per stone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Where the stone was placed.
    pub position: (usize, usize),
    /// Color of the removed group, if any.
    pub captured_color: Option<Color>,
    /// Every cell cleared by this move.
    pub captured_stones: Vec<(usize, usize)>,
}

/// What a group trace found.
enum GroupStatus {
    /// Some stone of the group touches an empty cell; the trace stopped
    /// at the first one.
    HasLiberty,
    /// The complete group, which has no liberties.
    NoLiberty(Vec<(usize, usize)>),
}

/// A goban: `height` rows by `width` columns of cells.
///
/// Cells are addressed as `(row, col)` with `(0, 0)` the top-left corner.
/// The board remembers where the most recent stone landed, for display
/// emphasis only; none of the rules consult it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Create an empty board at the default 19x19 size.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            cells: vec![None; DEFAULT_SIZE * DEFAULT_SIZE],
            last_move: None,
        }
    }

    /// Create an empty board with the given dimensions.
    ///
    /// # Errors
    /// `InvalidSize` if either dimension is outside `MIN_SIZE..=MAX_SIZE`.
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        if !dimension_ok(width) || !dimension_ok(height) {
            return Err(BoardError::InvalidSize);
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
            last_move: None,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Coordinates of the most recently placed stone, if any stone has
    /// been placed since construction, `resize` or `clear`.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// True iff `(row, col)` lies on the board.
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// The stone at `(row, col)`, or `None` when the cell is empty or the
    /// coordinate is off the board. Use [`Board::is_valid`] to tell those
    /// apart.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if !self.is_valid(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// On-board orthogonal neighbors of `(row, col)`, up to four.
    fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 4> {
        let mut v = ArrayVec::new();
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < self.height {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < self.width {
            v.push((row, col + 1));
        }
        v
    }

    /// Place a stone and resolve captures.
    ///
    /// Rejected moves (off-board or occupied target) leave the board
    /// bit-for-bit unchanged. An accepted move writes the stone, records
    /// it as the last move, and removes any adjacent opponent group left
    /// without liberties. When no opponent stones came off and the new
    /// stone's own group is out of liberties, the move is a suicide and
    /// that group is removed instead.
    ///
    /// # Errors
    /// `OutOfBounds` or `Occupied`; see [`BoardError`].
    pub fn play(&mut self, color: Color, row: usize, col: usize) -> Result<MoveResult, BoardError> {
        if !self.is_valid(row, col) {
            return Err(BoardError::OutOfBounds);
        }
        let idx = self.idx(row, col);
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied);
        }

        self.cells[idx] = Some(color);
        self.last_move = Some((row, col));

        let (captured_color, captured_stones) = self.resolve_captures(color, row, col);
        for &(r, c) in &captured_stones {
            let i = self.idx(r, c);
            self.cells[i] = None;
        }

        Ok(MoveResult {
            position: (row, col),
            captured_color,
            captured_stones,
        })
    }

    /// Decide what the stone just placed at `(row, col)` kills.
    ///
    /// Opponent groups are examined before the mover's own: removing a
    /// dead opponent group can hand the new stone a liberty it did not
    /// have, so a move that captures is never a suicide.
    fn resolve_captures(
        &self,
        color: Color,
        row: usize,
        col: usize,
    ) -> (Option<Color>, Vec<(usize, usize)>) {
        let opponent = color.opponent();
        let mut opponent_roots: ArrayVec<(usize, usize), 4> = ArrayVec::new();
        let mut own_liberty = false;
        for (nr, nc) in self.neighbors(row, col) {
            match self.get(nr, nc) {
                Some(c) if c == opponent => opponent_roots.push((nr, nc)),
                None => own_liberty = true,
                _ => {}
            }
        }

        // No opponent contact and an empty cell next door: nothing can die.
        if opponent_roots.is_empty() && own_liberty {
            return (None, Vec::new());
        }

        let mut captured = Vec::new();
        for &root in &opponent_roots {
            // Two neighbors can root the same group; capture it once.
            if captured.contains(&root) {
                continue;
            }
            if let GroupStatus::NoLiberty(members) = self.group_or_liberty(opponent, root) {
                captured.extend(members);
            }
        }
        if !captured.is_empty() {
            return (Some(opponent), captured);
        }

        // No opponent group died, so the played stone's own group may have.
        match self.group_or_liberty(color, (row, col)) {
            GroupStatus::NoLiberty(members) => (Some(color), members),
            GroupStatus::HasLiberty => (None, Vec::new()),
        }
    }

    /// Trace the group of `color` stones containing `root`.
    ///
    /// Work-list flood fill over 4-connected same-colored stones. The
    /// first empty neighbor encountered proves a liberty and aborts the
    /// trace; otherwise the exhausted trace yields the whole group.
    /// Each call works on a fresh visitation table, so no state leaks
    /// between group checks.
    fn group_or_liberty(&self, color: Color, root: (usize, usize)) -> GroupStatus {
        debug_assert_eq!(self.get(root.0, root.1), Some(color));

        let mut visited = vec![false; self.cells.len()];
        let mut members = Vec::new();
        let mut stack = vec![root];
        visited[self.idx(root.0, root.1)] = true;

        while let Some((r, c)) = stack.pop() {
            members.push((r, c));
            for (nr, nc) in self.neighbors(r, c) {
                match self.get(nr, nc) {
                    None => return GroupStatus::HasLiberty,
                    Some(other) if other == color => {
                        let ni = self.idx(nr, nc);
                        if !visited[ni] {
                            visited[ni] = true;
                            stack.push((nr, nc));
                        }
                    }
                    _ => {}
                }
            }
        }
        GroupStatus::NoLiberty(members)
    }

    /// Replace the board with an empty one of the given dimensions.
    ///
    /// All stones are discarded and the last move is forgotten. On
    /// failure the board, including its dimensions, is untouched.
    ///
    /// # Errors
    /// `InvalidSize` if either dimension is outside `MIN_SIZE..=MAX_SIZE`.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BoardError> {
        if !dimension_ok(width) || !dimension_ok(height) {
            return Err(BoardError::InvalidSize);
        }
        self.width = width;
        self.height = height;
        self.cells = vec![None; width * height];
        self.last_move = None;
        Ok(())
    }

    /// Swap the color of every stone on the board (pie rule).
    ///
    /// The grid is replaced wholesale with the swapped copy.
    pub fn invert(&mut self) {
        let inverted: Vec<Option<Color>> = self
            .cells
            .iter()
            .map(|cell| cell.map(Color::opponent))
            .collect();
        self.cells = inverted;
    }

    /// Remove every stone, keeping the current dimensions.
    pub fn clear(&mut self) {
        self.cells = vec![None; self.width * self.height];
        self.last_move = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn dimension_ok(n: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&n)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let ch = match self.get(row, col) {
                    Some(Color::Black) => 'x',
                    Some(Color::White) => 'o',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

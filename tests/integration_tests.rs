//! Integration tests for the goban engine.
//!
//! These drive the board exclusively through its public API: layouts are
//! set up by playing stones, and liberty bookkeeping is re-derived here
//! from `get` alone so the engine's own analyzer is never trusted to
//! check itself.

use goban::board::{Board, BoardError, Color, MoveResult};
use goban::playout::random_playout;

// =============================================================================
// Helper functions for setting up test boards
// =============================================================================

/// Build a board from rows of `x` (black), `o` (white) and `.` (empty).
///
/// Stones are placed through `play` in row-major order, so a layout must
/// keep a liberty on every group while it is being set up; the helper
/// asserts that no placement captures anything.
fn board_from_layout(rows: &[&str]) -> Board {
    let height = rows.len();
    let width = rows[0].len();
    let mut board = Board::with_size(width, height).unwrap();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), width, "ragged layout");
        for (col, glyph) in line.chars().enumerate() {
            let color = match glyph {
                'x' => Color::Black,
                'o' => Color::White,
                '.' => continue,
                other => panic!("bad layout glyph: {other}"),
            };
            let result = board.play(color, row, col).unwrap();
            assert_eq!(
                result.captured_color, None,
                "layout placement captured at ({row}, {col})"
            );
        }
    }
    board
}

fn sorted(mut cells: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    cells.sort_unstable();
    cells
}

/// Re-derive "this stone's group has a liberty" from the public API.
fn group_has_liberty(board: &Board, row: usize, col: usize) -> bool {
    let color = board.get(row, col).expect("no stone to start from");
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![(row, col)];
    seen.insert((row, col));
    while let Some((r, c)) = stack.pop() {
        for (nr, nc) in adjacent(board, r, c) {
            match board.get(nr, nc) {
                None => return true,
                Some(other) if other == color && seen.insert((nr, nc)) => {
                    stack.push((nr, nc));
                }
                _ => {}
            }
        }
    }
    false
}

fn adjacent(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    if row > 0 {
        cells.push((row - 1, col));
    }
    if row + 1 < board.height() {
        cells.push((row + 1, col));
    }
    if col > 0 {
        cells.push((row, col - 1));
    }
    if col + 1 < board.width() {
        cells.push((row, col + 1));
    }
    cells
}

// =============================================================================
// Rejected moves and atomicity
// =============================================================================

#[test]
fn test_off_board_moves_change_nothing() {
    let mut board = board_from_layout(&["x....", ".o...", ".....", ".....", "....."]);
    let before = board.clone();

    for &(row, col) in &[(5, 0), (0, 5), (5, 5), (100, 3), (2, 77)] {
        let err = board.play(Color::Black, row, col).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds, "at ({row}, {col})");
    }

    assert_eq!(board, before, "rejected moves must not disturb the board");
}

#[test]
fn test_occupied_cells_are_rejected_unchanged() {
    let mut board = board_from_layout(&["x....", ".o...", ".....", ".....", "....."]);
    let before = board.clone();

    // Both onto an enemy stone and onto one's own stone.
    assert_eq!(board.play(Color::White, 0, 0), Err(BoardError::Occupied));
    assert_eq!(board.play(Color::Black, 0, 0), Err(BoardError::Occupied));
    assert_eq!(board.play(Color::Black, 1, 1), Err(BoardError::Occupied));

    assert_eq!(board, before, "rejected moves must not disturb the board");
}

#[test]
fn test_last_move_tracks_only_successful_moves() {
    let mut board = Board::with_size(5, 5).unwrap();
    assert_eq!(board.last_move(), None);

    board.play(Color::Black, 2, 2).unwrap();
    assert_eq!(board.last_move(), Some((2, 2)));

    board.play(Color::White, 2, 2).unwrap_err();
    board.play(Color::White, 9, 9).unwrap_err();
    assert_eq!(
        board.last_move(),
        Some((2, 2)),
        "rejected moves leave last_move alone"
    );

    board.play(Color::White, 0, 0).unwrap();
    assert_eq!(board.last_move(), Some((0, 0)));
}

// =============================================================================
// Capture tests
// =============================================================================

#[test]
fn test_single_stone_capture_reports_everything() {
    // White at (1,1) loses its last liberty to the fourth black stone.
    let mut board = Board::new();
    board.play(Color::White, 1, 1).unwrap();
    board.play(Color::Black, 0, 1).unwrap();
    board.play(Color::Black, 1, 0).unwrap();
    board.play(Color::Black, 1, 2).unwrap();

    let result = board.play(Color::Black, 2, 1).unwrap();

    assert_eq!(result.position, (2, 1));
    assert_eq!(result.captured_color, Some(Color::White));
    assert_eq!(result.captured_stones, vec![(1, 1)]);
    assert_eq!(board.get(1, 1), None, "captured stone must leave the board");
    assert_eq!(board.get(2, 1), Some(Color::Black));
}

#[test]
fn test_group_capture_removes_every_member() {
    let mut board = board_from_layout(&[
        ".xx..", //
        "xoo..", //
        ".xx..", //
    ]);

    // Fill the white pair's last liberty.
    let result = board.play(Color::Black, 1, 3).unwrap();

    assert_eq!(result.captured_color, Some(Color::White));
    assert_eq!(sorted(result.captured_stones.clone()), vec![(1, 1), (1, 2)]);
    assert_eq!(board.get(1, 1), None);
    assert_eq!(board.get(1, 2), None);
}

#[test]
fn test_corner_group_is_captured() {
    let mut board = board_from_layout(&[
        "ox.", //
        "o..", //
        "x..", //
    ]);

    let result = board.play(Color::Black, 1, 1).unwrap();

    assert_eq!(result.captured_color, Some(Color::White));
    assert_eq!(sorted(result.captured_stones.clone()), vec![(0, 0), (1, 0)]);
    assert_eq!(board.get(0, 0), None);
    assert_eq!(board.get(1, 0), None);
}

#[test]
fn test_group_touched_on_two_sides_is_counted_once() {
    // The white L-group touches the played cell from above and from the
    // left; both neighbors root the same group, which must be captured
    // (and reported) exactly once.
    let mut board = board_from_layout(&[
        "oox", //
        "o..", //
        "x..", //
    ]);

    let result = board.play(Color::Black, 1, 1).unwrap();

    assert_eq!(result.captured_color, Some(Color::White));
    assert_eq!(
        result.captured_stones.len(),
        3,
        "each stone exactly once: {:?}",
        result.captured_stones
    );
    assert_eq!(
        sorted(result.captured_stones.clone()),
        vec![(0, 0), (0, 1), (1, 0)]
    );
}

#[test]
fn test_capture_on_a_nonsquare_board() {
    let mut board = board_from_layout(&[
        "xo..", //
        ".x..", //
        "....", //
    ]);

    let result = board.play(Color::Black, 0, 2).unwrap();

    assert_eq!(result.captured_color, Some(Color::White));
    assert_eq!(result.captured_stones, vec![(0, 1)]);
    assert_eq!(board.get(0, 1), None);
}

#[test]
fn test_group_with_a_liberty_is_never_captured() {
    let mut board = board_from_layout(&[
        ".oo..", //
        ".xx..", //
        ".....", //
    ]);

    // Black takes one white liberty, but (0,0) is still open.
    let result = board.play(Color::Black, 0, 3).unwrap();

    assert_eq!(result.captured_color, None);
    assert!(result.captured_stones.is_empty());
    assert_eq!(board.get(0, 1), Some(Color::White));
    assert_eq!(board.get(0, 2), Some(Color::White));
}

// =============================================================================
// Suicide tests
// =============================================================================

#[test]
fn test_suicide_is_a_move_not_an_error() {
    // Black fills the hole of a white diamond: every neighbor is white,
    // no white group dies, so the black stone removes itself.
    let mut board = board_from_layout(&[
        "..o..", //
        ".o.o.", //
        "..o..", //
    ]);

    let result = board.play(Color::Black, 1, 2).unwrap();

    assert_eq!(result.position, (1, 2));
    assert_eq!(result.captured_color, Some(Color::Black));
    assert_eq!(result.captured_stones, vec![(1, 2)]);
    assert_eq!(board.get(1, 2), None, "the suicide stone does not stay");
    assert_eq!(
        board.last_move(),
        Some((1, 2)),
        "last move still points at the vacated cell"
    );
}

#[test]
fn test_suicide_removes_the_whole_moving_group() {
    // Black walls himself into a two-cell corridor in the corner.
    let mut board = board_from_layout(&[
        "..o..", //
        "oo...", //
        ".....", //
    ]);

    let first = board.play(Color::Black, 0, 0).unwrap();
    assert_eq!(first.captured_color, None);

    let second = board.play(Color::Black, 0, 1).unwrap();
    assert_eq!(second.captured_color, Some(Color::Black));
    assert_eq!(sorted(second.captured_stones.clone()), vec![(0, 0), (0, 1)]);
    assert_eq!(board.get(0, 0), None);
    assert_eq!(board.get(0, 1), None);

    // The white walls are untouched.
    assert_eq!(board.get(0, 2), Some(Color::White));
    assert_eq!(board.get(1, 0), Some(Color::White));
    assert_eq!(board.get(1, 1), Some(Color::White));
}

#[test]
fn test_capture_wins_over_suicide() {
    // Black plays the corner with zero liberties of its own; the move
    // stands because it takes the white stone above it first.
    let mut board = board_from_layout(&[
        ".ox", //
        "ox.", //
        "...", //
    ]);

    let result = board.play(Color::Black, 0, 0).unwrap();

    assert_eq!(result.captured_color, Some(Color::White));
    assert_eq!(result.captured_stones, vec![(0, 1)]);
    assert_eq!(
        board.get(0, 0),
        Some(Color::Black),
        "the capturing stone stays"
    );
    assert_eq!(
        board.get(1, 0),
        Some(Color::White),
        "the white group that kept a liberty survives"
    );
}

// =============================================================================
// Resize, invert, clear
// =============================================================================

#[test]
fn test_resize_round_trip_resets_everything() {
    let mut board = Board::with_size(9, 9).unwrap();
    board.play(Color::Black, 4, 4).unwrap();

    board.resize(12, 7).unwrap();
    assert_eq!((board.width(), board.height()), (12, 7));
    assert_eq!(board.last_move(), None);

    board.resize(9, 9).unwrap();
    assert_eq!(
        board,
        Board::with_size(9, 9).unwrap(),
        "a resize round trip ends on a fresh board"
    );
}

#[test]
fn test_failed_resize_is_a_no_op() {
    let mut board = board_from_layout(&["x.o", "...", "..."]);
    let before = board.clone();

    for &(width, height) in &[(2, 9), (9, 2), (27, 9), (9, 27), (0, 0)] {
        assert_eq!(
            board.resize(width, height),
            Err(BoardError::InvalidSize),
            "for {width}x{height}"
        );
    }

    assert_eq!(board, before, "a refused resize must not touch the board");
}

#[test]
fn test_invert_swaps_colors_and_is_an_involution() {
    let mut board = board_from_layout(&[
        ".x.o.", //
        "ox...", //
        ".....", //
        "..x..", //
        "....o", //
    ]);
    let before = board.clone();

    board.invert();
    assert_eq!(board.get(0, 1), Some(Color::White));
    assert_eq!(board.get(0, 3), Some(Color::Black));
    assert_eq!(board.get(1, 0), Some(Color::Black));
    assert_eq!(board.get(2, 2), None, "empty cells stay empty");
    assert_eq!(
        board.last_move(),
        Some((4, 4)),
        "inversion keeps the last move"
    );

    board.invert();
    assert_eq!(board, before, "double inversion restores the board");
}

#[test]
fn test_clear_keeps_dimensions() {
    let mut board = board_from_layout(&["xox", "...", "..."]);
    board.clear();

    assert_eq!((board.width(), board.height()), (3, 3));
    assert_eq!(board.last_move(), None);
    assert_eq!(board, Board::with_size(3, 3).unwrap());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_replays_are_identical() {
    fn replay(script: &[(Color, usize, usize)]) -> (Board, Vec<MoveResult>) {
        let mut board = Board::with_size(5, 5).unwrap();
        let results = script
            .iter()
            .map(|&(color, row, col)| board.play(color, row, col).unwrap())
            .collect();
        (board, results)
    }

    let script = [
        (Color::White, 1, 1),
        (Color::Black, 0, 1),
        (Color::Black, 1, 0),
        (Color::Black, 1, 2),
        (Color::Black, 2, 1),
        (Color::White, 1, 1),
    ];

    assert_eq!(replay(&script), replay(&script));
}

// =============================================================================
// Bulk exercise via random playouts
// =============================================================================

#[test]
fn test_playout_leaves_no_breathless_groups() {
    let mut board = Board::with_size(9, 9).unwrap();
    random_playout(&mut board, 400, 2024);

    for row in 0..9 {
        for col in 0..9 {
            if board.get(row, col).is_some() {
                assert!(
                    group_has_liberty(&board, row, col),
                    "breathless group at ({row}, {col})"
                );
            }
        }
    }

    // Liberties are empty cells, so swapping colors cannot create a
    // breathless group either.
    board.invert();
    for row in 0..9 {
        for col in 0..9 {
            if board.get(row, col).is_some() {
                assert!(
                    group_has_liberty(&board, row, col),
                    "breathless group after invert at ({row}, {col})"
                );
            }
        }
    }
}

#[test]
fn test_playout_on_a_nonsquare_board() {
    let mut board = Board::with_size(12, 5).unwrap();
    let stats = random_playout(&mut board, 200, 7);

    // Filling the final empty cell always captures or suicides, so a
    // board in play is never left full and the budget is always spent.
    assert_eq!(stats.moves, 200);
    for row in 0..5 {
        for col in 0..12 {
            if board.get(row, col).is_some() {
                assert!(
                    group_has_liberty(&board, row, col),
                    "breathless group at ({row}, {col})"
                );
            }
        }
    }
}

//! Printable board.
//!
//! Produces the framed text picture shown to players: column letters
//! above and below the grid, mirrored row numbers on both sides, and the
//! most recent move wrapped in parentheses. Black stones render as `x`,
//! white as `o`, empty cells as `.`.

use crate::board::{Board, Color};

/// Render the board as a multi-line string, one trailing newline per line.
///
/// The last-move marker follows `Board::last_move`, so after a suicide it
/// wraps the (now empty) cell the mover just vacated.
pub fn render(board: &Board) -> String {
    let width = board.width();
    let height = board.height();
    let header = column_header(width);
    let rule = "=".repeat(2 * width + 1);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str("   .");
    out.push_str(&rule);
    out.push_str(".\n");

    for row in 0..height {
        // One glyph per cell at the odd offsets, spacers between; the
        // spacers around the last move become its parentheses.
        let mut cells: Vec<char> = vec![' '; 2 * width + 1];
        for col in 0..width {
            cells[2 * col + 1] = match board.get(row, col) {
                Some(Color::Black) => 'x',
                Some(Color::White) => 'o',
                None => '.',
            };
        }
        if let Some((last_row, last_col)) = board.last_move() {
            if last_row == row {
                cells[2 * last_col] = '(';
                cells[2 * last_col + 2] = ')';
            }
        }
        let line: String = cells.into_iter().collect();
        out.push_str(&format!("{:>2} |{}| {}\n", row + 1, line, row + 1));
    }

    out.push_str("   `");
    out.push_str(&rule);
    out.push_str("'\n");
    out.push_str(&header);
    out.push('\n');
    out
}

fn column_header(width: usize) -> String {
    // Four-space prefix: letters must sit over the glyph offsets of the
    // row lines, which open with "NN |" before the first spacer.
    let mut header = String::from("    ");
    for col in 0..width {
        header.push(' ');
        header.push((b'a' + col as u8) as char);
    }
    header
}

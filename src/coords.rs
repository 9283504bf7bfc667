//! Text coordinates.
//!
//! Cells are addressed as a column letter followed by a 1-based row
//! number: `a1` is the top-left corner, `d4` is row 4, column 4. Letters
//! run straight through `a`..`z`: with up to 26 columns there is no room
//! for the Go convention of skipping `i`.

use crate::constants::MAX_SIZE;

/// Parse a coordinate string (e.g. `"d4"`) into `(row, col)`.
///
/// Case-insensitive. Returns `None` for anything malformed or for row
/// numbers outside `1..=26`; whether the cell exists on a given board is
/// the board's own concern.
pub fn parse_coord(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let letter = bytes[0].to_ascii_lowercase();
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let col = (letter - b'a') as usize;

    let mut row = 0usize;
    for &b in &bytes[1..] {
        if !b.is_ascii_digit() {
            return None;
        }
        row = row * 10 + (b - b'0') as usize;
        if row > MAX_SIZE {
            return None;
        }
    }
    if row == 0 {
        return None;
    }

    Some((row - 1, col))
}

/// Format `(row, col)` as a coordinate string (e.g. `"d4"`).
pub fn format_coord(row: usize, col: usize) -> String {
    debug_assert!(col < MAX_SIZE && row < MAX_SIZE);
    let letter = (b'a' + col as u8) as char;
    format!("{letter}{}", row + 1)
}

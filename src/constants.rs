//! Board dimension limits.
//!
//! A goban axis can be anything from a tiny 3x3 teaching grid up to 26
//! cells. The upper bound keeps every column addressable by a single
//! letter in the text surfaces (`a`..`z`).

/// Smallest accepted width or height.
pub const MIN_SIZE: usize = 3;

/// Largest accepted width or height.
pub const MAX_SIZE: usize = 26;

/// Dimensions of a freshly constructed board (a standard goban).
pub const DEFAULT_SIZE: usize = 19;

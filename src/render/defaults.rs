//! Default metrics, in glyph units

/// Width of one consonant cell along a vowel segment.
pub const CHARACTER_WIDTH: f64 = 6.0;
/// Height of one consonant cell across a vowel segment.
pub const CHARACTER_HEIGHT: f64 = 10.0;
/// Side of the square viewport holding one syllable.
pub const CANVAS_SIZE: f64 = 31.0;
/// Longest cluster the bitmap renderer can draw on one side.
pub const RASTER_MAX_CLUSTER: usize = 2;

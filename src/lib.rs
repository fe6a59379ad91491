//! Procedural renderer for a syllabic stroke script.
//!
//! Each syllable is drawn on a vowel stroke: a three-point corner whose two
//! segments carry the onset and coda consonants as small marks. An end
//! character at the open end of a segment fuses into the stroke itself.

pub mod alphabet;
pub mod errors;
pub mod log;
pub mod render;
pub mod segment;
pub mod types;

pub use alphabet::{Consonant, Glyph, GlyphTable, Orientation, Vowel};
pub use errors::{LayoutError, RenderError, SegmentError};
pub use render::{Canvas, LayoutOptions, Renderer};
pub use segment::{SyllableParts, segment};
pub use types::{Anchors, Point, Side};

/// Render a single syllable to SVG with the standard glyph table.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render_syllable(text: &str) -> Result<String, miette::Report> {
    let table = GlyphTable::standard();
    let document = Renderer::new(&table).syllable_document(text)?;
    Ok(document.to_string())
}

/// Render running text to SVG with the standard glyph table.
///
/// Syllables are separated by spaces and lines by newlines.
pub fn render_text(text: &str) -> Result<String, miette::Report> {
    let table = GlyphTable::standard();
    let document = Renderer::new(&table).text_document(text)?;
    Ok(document.to_string())
}

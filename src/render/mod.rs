//! Rendering syllables to SVG
//!
//! This module is organized into submodules:
//! - `defaults`: Default metrics
//! - `geometry`: Point arithmetic, rotation and reflection
//! - `shapes`: The shape model and its transforms
//! - `layout`: Placing consonant marks on a vowel stroke
//! - `svg`: Document assembly and output

pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod shapes;
pub mod svg;

pub use layout::{LayoutOptions, LayoutPlan, SidePlan};
pub use shapes::{Circle, Group, Path, PathArgs, PathCommand, Polyline, Shape, ShapeKind, Style};
pub use self::svg::{Canvas, generate_svg, save};

use ::svg::Document;

use crate::alphabet::GlyphTable;
use crate::errors::{LayoutError, RenderError};
use crate::log::debug;
use crate::segment::{SyllableParts, segment_range};

/// Turns written syllables into glyph geometry using one glyph table
#[derive(Debug, Clone)]
pub struct Renderer<'t> {
    table: &'t GlyphTable,
    pub options: LayoutOptions,
}

impl<'t> Renderer<'t> {
    pub fn new(table: &'t GlyphTable) -> Self {
        Self {
            table,
            options: LayoutOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn table(&self) -> &GlyphTable {
        self.table
    }

    /// Lay out an already segmented syllable.
    ///
    /// Every symbol is looked up before any geometry is touched, so a missing
    /// symbol fails without building anything.
    pub fn compose(&self, parts: &SyllableParts) -> Result<Group, LayoutError> {
        let vowel = self.table.vowel(&parts.nucleus)?;
        let onset = parts
            .onset
            .iter()
            .map(|s| self.table.consonant(s))
            .collect::<Result<Vec<_>, _>>()?;
        let coda = parts
            .coda
            .iter()
            .map(|s| self.table.consonant(s))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(?parts, "compose");
        vowel.add_consonants(onset, coda, &self.options)
    }

    /// Segment and lay out one written syllable.
    pub fn syllable(&self, text: &str) -> Result<Group, miette::Report> {
        let parts = segment_range(text, 0..text.len(), self.table)?;
        Ok(self.compose(&parts)?)
    }

    /// A one-cell document holding a single syllable.
    pub fn syllable_document(&self, text: &str) -> Result<Document, miette::Report> {
        let glyph = self.syllable(text)?;
        Ok(generate_svg(&glyph, &Canvas::default()))
    }

    /// Lay out running text: syllables separated by spaces go left to right
    /// in one cell each, lines separated by newlines stack downward.
    ///
    /// Returns the combined glyph and the canvas that fits it.
    pub fn text(&self, text: &str) -> Result<(Group, Canvas), miette::Report> {
        let cell = defaults::CANVAS_SIZE;
        let mut rows = 0;
        let mut columns = 0;
        let mut glyphs = Vec::new();

        for (row, line) in text.lines().enumerate() {
            rows = row + 1;
            for (column, word) in line.split_whitespace().enumerate() {
                columns = columns.max(column + 1);
                let start = offset_in(text, word);
                let parts = segment_range(text, start..start + word.len(), self.table)?;
                let mut glyph = self.compose(&parts)?;
                glyph.translate(column as f64 * cell, row as f64 * cell);
                glyphs.push(ShapeKind::from(glyph));
            }
        }

        if glyphs.is_empty() {
            return Err(RenderError::EmptyText.into());
        }
        Ok((Group::new(glyphs), Canvas::cells(columns, rows)))
    }

    /// A document holding running text.
    pub fn text_document(&self, text: &str) -> Result<Document, miette::Report> {
        let (glyph, canvas) = self.text(text)?;
        Ok(generate_svg(&glyph, &canvas))
    }
}

/// Byte offset of `part` within `whole`; `part` must be a subslice of it.
fn offset_in(whole: &str, part: &str) -> usize {
    part.as_ptr() as usize - whole.as_ptr() as usize
}

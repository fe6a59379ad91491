//! SVG document assembly

use std::path::Path as FsPath;

use svg::Document;

use super::defaults;
use super::shapes::Shape;
use crate::errors::RenderError;
use crate::log::debug;
use crate::types::fmt_num;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The fixed viewport a document is drawn in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    /// One syllable cell.
    fn default() -> Self {
        Self::cells(1, 1)
    }
}

impl Canvas {
    /// A canvas `columns` syllable cells wide and `rows` cells tall.
    pub fn cells(columns: usize, rows: usize) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: defaults::CANVAS_SIZE * columns as f64,
            height: defaults::CANVAS_SIZE * rows as f64,
        }
    }

    /// The `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

/// Wrap a finished shape in a document root.
pub fn generate_svg(shape: &impl Shape, canvas: &Canvas) -> Document {
    debug!(view_box = %canvas.view_box(), "generate_svg");
    Document::new()
        .set("xmlns", SVG_NS)
        .set("viewBox", canvas.view_box())
        .add(shape.render())
}

/// Write a document to `path`.
pub fn save(path: impl AsRef<FsPath>, document: &Document) -> Result<(), RenderError> {
    let path = path.as_ref();
    svg::save(path, document).map_err(|source| RenderError::Write {
        path: path.display().to_string(),
        source,
    })
}

//! Glyph templates and the symbol table
//!
//! A [`GlyphTable`] is built once and then only read. Layout always works on
//! clones of the templates, never on the table's own shapes.

use std::collections::HashMap;

use crate::errors::LayoutError;
use crate::render::shapes::{Circle, Group, Path, PathCommand, Polyline, Shape, ShapeKind};
use crate::types::{Anchors, Point, Side, pt};

/// A consonant mark: a group of strokes plus placement flags
#[derive(Debug, Clone, PartialEq)]
pub struct Consonant {
    symbol: String,
    group: Group,
    /// Extends below the center line, so needs clearance from an opposing
    /// descender at the vowel's middle point.
    pub descends: bool,
    /// Sits flush at the open end of its segment and fuses into the vowel
    /// outline instead of being a separate mark.
    pub end_char: bool,
}

impl Consonant {
    /// A descending, non-end consonant made of `strokes`.
    pub fn new(symbol: impl Into<String>, strokes: impl IntoIterator<Item = ShapeKind>) -> Self {
        Self {
            symbol: symbol.into(),
            group: Group::new(strokes),
            descends: true,
            end_char: false,
        }
    }

    pub fn with_descends(mut self, descends: bool) -> Self {
        self.descends = descends;
        self
    }

    pub fn with_end_char(mut self, end_char: bool) -> Self {
        self.end_char = end_char;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }

    pub fn into_group(self) -> Group {
        self.group
    }

    /// The points of the first stroke, if that stroke is a polyline.
    pub fn outline_points(&self) -> Option<&[Point]> {
        self.group
            .children()
            .first()
            .and_then(ShapeKind::as_polyline)
            .map(Polyline::points)
    }
}

/// How consonant marks are turned before they are placed on one side
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Mirror vertically about the mark's own center.
    pub flip: bool,
    /// Clockwise rotation in degrees about the mark's own center; 0 for none.
    pub rotate: f64,
}

impl Orientation {
    pub const NONE: Orientation = Orientation { flip: false, rotate: 0.0 };

    pub const fn new(flip: bool, rotate: f64) -> Self {
        Self { flip, rotate }
    }

    pub(crate) fn apply(&self, shape: &mut impl Shape) {
        if self.flip {
            shape.flip_vertical(None);
        }
        if self.rotate != 0.0 {
            shape.rotate(self.rotate, None);
        }
    }
}

/// A vowel stroke: a base outline through three anchors, optional extra
/// strokes, and how consonants are oriented on each side
#[derive(Debug, Clone, PartialEq)]
pub struct Vowel {
    symbol: String,
    pub(crate) anchors: Anchors,
    pub(crate) outline: Polyline,
    pub(crate) extras: Vec<ShapeKind>,
    pub(crate) center: Point,
    pub onset: Orientation,
    pub coda: Orientation,
}

impl Vowel {
    /// A vowel whose outline runs `start -> middle -> end`.
    pub fn new(symbol: impl Into<String>, anchors: Anchors) -> Self {
        let outline = Polyline::new([anchors.start, anchors.middle, anchors.end]);
        let center = outline.center();
        Self {
            symbol: symbol.into(),
            anchors,
            outline,
            extras: Vec::new(),
            center,
            onset: Orientation::NONE,
            coda: Orientation::NONE,
        }
    }

    /// Add a stroke drawn alongside the outline (e.g. a diacritic tail).
    ///
    /// The vowel's center becomes the mean of all stroke centers, as for any
    /// freshly built group.
    pub fn with_extra(mut self, shape: impl Into<ShapeKind>) -> Self {
        self.extras.push(shape.into());
        let count = (self.extras.len() + 1) as f64;
        let sum: Point = self.extras.iter().map(|s| s.center()).sum::<Point>() + self.outline.center();
        self.center = sum / count;
        self
    }

    pub fn with_onset(mut self, orientation: Orientation) -> Self {
        self.onset = orientation;
        self
    }

    pub fn with_coda(mut self, orientation: Orientation) -> Self {
        self.coda = orientation;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn outline(&self) -> &Polyline {
        &self.outline
    }

    pub fn orientation(&self, side: Side) -> Orientation {
        match side {
            Side::Onset => self.onset,
            Side::Coda => self.coda,
        }
    }

    /// The vowel on its own, as a group: outline first, then extras.
    pub fn into_group(self) -> Group {
        Group::new(std::iter::once(ShapeKind::from(self.outline)).chain(self.extras))
            .with_center(self.center)
    }
}

/// A table entry
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Consonant(Consonant),
    Vowel(Vowel),
}

impl Glyph {
    pub fn is_vowel(&self) -> bool {
        matches!(self, Glyph::Vowel(_))
    }
}

/// Immutable mapping from symbol to glyph template
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: HashMap<String, Glyph>,
    /// Non-empty keys sorted longest first, for longest-prefix matching.
    keys_by_length: Vec<String>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consonant(mut self, consonant: Consonant) -> Self {
        let symbol = consonant.symbol().to_string();
        self.insert(symbol, Glyph::Consonant(consonant));
        self
    }

    pub fn with_vowel(mut self, vowel: Vowel) -> Self {
        let symbol = vowel.symbol().to_string();
        self.insert(symbol, Glyph::Vowel(vowel));
        self
    }

    fn insert(&mut self, symbol: String, glyph: Glyph) {
        // an empty key would match everywhere without consuming input
        if self.glyphs.insert(symbol.clone(), glyph).is_none() && !symbol.is_empty() {
            self.keys_by_length.push(symbol);
            self.keys_by_length
                .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Glyph> {
        self.glyphs.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The longest symbol that `text` starts with.
    pub fn longest_prefix(&self, text: &str) -> Option<&str> {
        self.keys_by_length
            .iter()
            .find(|key| text.starts_with(key.as_str()))
            .map(String::as_str)
    }

    /// Symbols longer than one character.
    pub fn digraphs(&self) -> impl Iterator<Item = &str> {
        self.keys_by_length
            .iter()
            .filter(|key| key.chars().count() > 1)
            .map(String::as_str)
    }

    /// A fresh copy of the consonant template for `symbol`.
    pub fn consonant(&self, symbol: &str) -> Result<Consonant, LayoutError> {
        match self.get(symbol) {
            Some(Glyph::Consonant(c)) => Ok(c.clone()),
            Some(Glyph::Vowel(_)) => Err(LayoutError::NotAConsonant {
                symbol: symbol.to_string(),
            }),
            None => Err(LayoutError::UnknownSymbol {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// A fresh copy of the vowel template for `symbol`.
    pub fn vowel(&self, symbol: &str) -> Result<Vowel, LayoutError> {
        match self.get(symbol) {
            Some(Glyph::Vowel(v)) => Ok(v.clone()),
            Some(Glyph::Consonant(_)) => Err(LayoutError::NotAVowel {
                symbol: symbol.to_string(),
            }),
            None => Err(LayoutError::UnknownSymbol {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// The script's standard alphabet: 20 consonants and 5 vowels.
    pub fn standard() -> Self {
        let line = |points: &[Point]| Polyline::new(points.iter().copied());
        let consonant = |symbol: &str, strokes: Vec<ShapeKind>| Consonant::new(symbol, strokes);

        let table = GlyphTable::new()
            .with_consonant(consonant(
                "p",
                vec![line(&[pt(0.0, 10.0), pt(0.0, 0.0), pt(6.0, 0.0), pt(6.0, 10.0)]).into()],
            ))
            .with_consonant(consonant(
                "b",
                vec![line(&[pt(0.0, 0.0), pt(0.0, 10.0), pt(6.0, 10.0), pt(6.0, 0.0)]).into()],
            ))
            .with_consonant(consonant(
                "m",
                vec![
                    Path::new([
                        PathCommand::move_to(0.0, 0.0),
                        PathCommand::line_to(0.0, 6.0),
                        PathCommand::line_to(6.0, 6.0),
                        PathCommand::line_to(6.0, 0.0),
                        PathCommand::close(),
                    ])
                    .into(),
                ],
            ))
            .with_consonant(consonant(
                "f",
                vec![line(&[pt(6.0, 0.0), pt(0.0, 0.0), pt(0.0, 10.0), pt(6.0, 10.0)]).into()],
            ))
            .with_consonant(consonant(
                "v",
                vec![line(&[pt(0.0, 0.0), pt(6.0, 0.0), pt(6.0, 10.0), pt(0.0, 10.0)]).into()],
            ))
            .with_consonant(
                consonant("t", vec![line(&[pt(0.0, 0.0), pt(6.0, 0.0)]).with_center_y(5.0).into()])
                    .with_descends(false),
            )
            .with_consonant(consonant(
                "d",
                vec![line(&[pt(0.0, 10.0), pt(6.0, 10.0)]).with_center_y(5.0).into()],
            ))
            .with_consonant(consonant(
                "n",
                vec![
                    line(&[pt(0.0, 0.0), pt(6.0, 0.0)]).into(),
                    line(&[pt(0.0, 10.0), pt(6.0, 10.0)]).into(),
                ],
            ))
            .with_consonant(consonant("s", vec![line(&[pt(0.0, 10.0), pt(6.0, 0.0)]).into()]))
            .with_consonant(consonant("z", vec![line(&[pt(0.0, 0.0), pt(6.0, 10.0)]).into()]))
            .with_consonant(consonant(
                "l",
                vec![
                    line(&[pt(0.0, 2.0), pt(6.0, 8.0)]).into(),
                    line(&[pt(0.0, 8.0), pt(6.0, 2.0)]).into(),
                ],
            ))
            .with_consonant(
                consonant("k", vec![line(&[pt(0.0, 5.0), pt(6.0, 2.0)]).with_center_y(5.0).into()])
                    .with_end_char(true)
                    .with_descends(false),
            )
            .with_consonant(
                consonant("g", vec![line(&[pt(0.0, 5.0), pt(6.0, 8.0)]).with_center_y(5.0).into()])
                    .with_end_char(true),
            )
            .with_consonant(consonant(
                "x",
                vec![line(&[pt(5.0, 0.0), pt(0.0, 5.0), pt(5.0, 10.0)]).with_center_x(3.0).into()],
            ))
            .with_consonant(consonant(
                "gh",
                vec![line(&[pt(1.0, 0.0), pt(6.0, 5.0), pt(1.0, 10.0)]).with_center_x(3.0).into()],
            ))
            .with_consonant(consonant(
                "'",
                vec![
                    line(&[pt(1.0, 0.0), pt(1.0, 10.0)]).into(),
                    line(&[pt(5.0, 0.0), pt(5.0, 10.0)]).into(),
                ],
            ))
            .with_consonant(consonant(
                "h",
                vec![line(&[pt(0.0, 0.0), pt(6.0, 0.0), pt(0.0, 10.0), pt(6.0, 10.0)]).into()],
            ))
            .with_consonant(consonant("j", vec![line(&[pt(3.0, 0.0), pt(3.0, 10.0)]).into()]))
            .with_consonant(consonant("w", vec![Circle::new(pt(3.0, 5.0), 3.0).into()]))
            .with_consonant(consonant(
                "r",
                vec![
                    Circle::new(pt(3.0, 5.0), 3.0).into(),
                    line(&[pt(0.0, 10.0), pt(6.0, 0.0)]).into(),
                ],
            ));

        let corner = |a: (f64, f64), b: (f64, f64), c: (f64, f64)| {
            Anchors::new(pt(a.0, a.1), pt(b.0, b.1), pt(c.0, c.1))
        };

        table
            .with_vowel(
                Vowel::new("i", corner((6.0, 24.0), (6.0, 6.0), (24.0, 6.0)))
                    .with_onset(Orientation::new(false, 270.0)),
            )
            .with_vowel(
                Vowel::new("u", corner((6.0, 6.0), (24.0, 6.0), (24.0, 24.0)))
                    .with_coda(Orientation::new(false, 90.0)),
            )
            .with_vowel(
                Vowel::new("e", corner((6.0, 6.0), (6.0, 24.0), (24.0, 24.0)))
                    .with_onset(Orientation::new(true, 90.0))
                    .with_coda(Orientation::new(true, 0.0)),
            )
            .with_vowel(
                Vowel::new("o", corner((6.0, 24.0), (24.0, 24.0), (24.0, 6.0)))
                    .with_onset(Orientation::new(true, 0.0))
                    .with_coda(Orientation::new(true, 270.0)),
            )
            .with_vowel(
                Vowel::new("a", corner((6.0, 6.0), (6.0, 24.0), (24.0, 24.0)))
                    .with_extra(
                        line(&[pt(1.0, 24.0), pt(1.0, 29.0), pt(6.0, 29.0)])
                            .with_center_x(15.0)
                            .with_center_y(15.0),
                    )
                    .with_onset(Orientation::new(true, 90.0))
                    .with_coda(Orientation::new(true, 0.0)),
            )
    }
}

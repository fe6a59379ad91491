//! Error types with rich diagnostics using miette
//!
//! Segmentation errors carry source spans pointing at the offending text.
//! Layout errors name the symbol or side that could not be placed.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::Side;

// ============================================================================
// Segmentation Errors
// ============================================================================

/// Errors that occur while splitting a syllable into onset, nucleus and coda
#[derive(Error, Diagnostic, Debug)]
pub enum SegmentError {
    #[error("unknown symbol: {symbol}")]
    #[diagnostic(
        code(syllabary::segment::unknown_symbol),
        help("only symbols present in the glyph table can be written")
    )]
    UnknownSymbol {
        symbol: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not in the glyph table")]
        span: SourceSpan,
    },

    #[error("syllable has no vowel")]
    #[diagnostic(
        code(syllabary::segment::missing_nucleus),
        help("every syllable is written on a vowel stroke")
    )]
    MissingNucleus {
        #[source_code]
        src: NamedSource<String>,
        #[label("no vowel in here")]
        span: SourceSpan,
    },

    #[error("syllable has more than one vowel")]
    #[diagnostic(
        code(syllabary::segment::extra_nucleus),
        help("separate syllables with a space")
    )]
    ExtraNucleus {
        #[source_code]
        src: NamedSource<String>,
        #[label("first vowel")]
        first: SourceSpan,
        #[label("second vowel")]
        second: SourceSpan,
    },
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors that occur while placing consonants on a vowel
#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum LayoutError {
    #[error("unknown symbol: {symbol}")]
    #[diagnostic(code(syllabary::layout::unknown_symbol))]
    UnknownSymbol { symbol: String },

    #[error("{symbol} is a vowel, expected a consonant")]
    #[diagnostic(code(syllabary::layout::not_a_consonant))]
    NotAConsonant { symbol: String },

    #[error("{symbol} is a consonant, expected a vowel")]
    #[diagnostic(code(syllabary::layout::not_a_vowel))]
    NotAVowel { symbol: String },

    #[error("degenerate {side} segment on vowel {vowel}")]
    #[diagnostic(
        code(syllabary::layout::degenerate_geometry),
        help("the glyph table entry has coincident anchor points")
    )]
    DegenerateGeometry { vowel: String, side: Side },

    #[error("{side} cluster of {len} consonants exceeds the limit of {max}")]
    #[diagnostic(code(syllabary::layout::cluster_too_long))]
    ClusterTooLong { side: Side, len: usize, max: usize },

    #[error("end character {symbol} cannot be spliced into the vowel outline")]
    #[diagnostic(
        code(syllabary::layout::not_spliceable),
        help("an end character's first stroke must be a polyline")
    )]
    NotSpliceable { symbol: String },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while assembling or writing a document
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("nothing to render")]
    #[diagnostic(
        code(syllabary::render::empty_text),
        help("write at least one syllable")
    )]
    EmptyText,

    #[error("failed to write {path}")]
    #[diagnostic(code(syllabary::render::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

//! Splitting written syllables into onset, nucleus and coda
//!
//! A single left-to-right scan: at each position the longest glyph-table key
//! that matches is taken as the next symbol, so digraphs win over their first
//! letter. Consonants before the vowel form the onset, consonants after it
//! the coda.

use std::ops::Range;

use miette::{NamedSource, SourceSpan};

use crate::alphabet::{Glyph, GlyphTable};
use crate::errors::SegmentError;

/// Name shown in diagnostics for segmented text.
const SOURCE_NAME: &str = "<input>";

/// A syllable split into its parts, as table symbols
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableParts {
    pub onset: Vec<String>,
    pub nucleus: String,
    pub coda: Vec<String>,
}

/// Segment a single syllable.
pub fn segment(text: &str, table: &GlyphTable) -> Result<SyllableParts, SegmentError> {
    segment_range(text, 0..text.len(), table)
}

/// Segment the syllable at `range` within `source`.
///
/// Spans in any error point into the whole `source`, so a syllable inside a
/// longer text is reported in place.
pub fn segment_range(
    source: &str,
    range: Range<usize>,
    table: &GlyphTable,
) -> Result<SyllableParts, SegmentError> {
    let src = || NamedSource::new(SOURCE_NAME, source.to_string());

    let mut parts = SyllableParts::default();
    let mut nucleus_span: Option<SourceSpan> = None;
    let mut offset = range.start;

    while offset < range.end {
        let rest = &source[offset..range.end];
        let Some(symbol) = table.longest_prefix(rest) else {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            return Err(SegmentError::UnknownSymbol {
                symbol: rest[..len].to_string(),
                src: src(),
                span: (offset, len).into(),
            });
        };
        let span = SourceSpan::from((offset, symbol.len()));

        match table.get(symbol) {
            Some(Glyph::Vowel(_)) => {
                if let Some(first) = nucleus_span {
                    return Err(SegmentError::ExtraNucleus {
                        src: src(),
                        first,
                        second: span,
                    });
                }
                parts.nucleus = symbol.to_string();
                nucleus_span = Some(span);
            }
            _ if nucleus_span.is_some() => parts.coda.push(symbol.to_string()),
            _ => parts.onset.push(symbol.to_string()),
        }
        offset += symbol.len();
    }

    if nucleus_span.is_none() {
        return Err(SegmentError::MissingNucleus {
            src: src(),
            span: (range.start, range.len()).into(),
        });
    }
    Ok(parts)
}

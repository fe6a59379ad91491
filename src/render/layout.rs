//! Syllable layout: distributing consonant marks along a vowel stroke
//!
//! The onset segment runs `start -> middle` and the coda segment
//! `middle -> end`. Both are walked from their open end toward `middle`,
//! one character cell at a time, with the leftover length spread evenly
//! between the cells.

use super::defaults;
use super::geometry::travel_towards;
use super::shapes::{Group, Polyline, Shape, ShapeKind};
use crate::alphabet::{Consonant, Vowel};
use crate::errors::LayoutError;
use crate::log::{debug, trace};
use crate::types::{Anchors, Point, Side};

/// Cell metrics and validation policy for layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub character_width: f64,
    pub character_height: f64,
    /// Longest cluster accepted on either side; `None` for no limit.
    pub max_cluster: Option<usize>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            character_width: defaults::CHARACTER_WIDTH,
            character_height: defaults::CHARACTER_HEIGHT,
            max_cluster: None,
        }
    }
}

impl LayoutOptions {
    /// Default metrics with the bitmap renderer's cluster limit.
    pub fn raster_compatible() -> Self {
        Self {
            max_cluster: Some(defaults::RASTER_MAX_CLUSTER),
            ..Self::default()
        }
    }

    pub fn with_max_cluster(mut self, max: Option<usize>) -> Self {
        self.max_cluster = max;
        self
    }

    fn check_cluster(&self, side: Side, len: usize) -> Result<(), LayoutError> {
        match self.max_cluster {
            Some(max) if len > max => Err(LayoutError::ClusterTooLong { side, len, max }),
            _ => Ok(()),
        }
    }
}

/// Spacing computed for one side of the vowel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePlan {
    pub segment_length: f64,
    pub count: usize,
    /// Segment length not covered by character cells, after any clearance
    /// for opposing descenders.
    pub free_space: f64,
    /// Number of gaps the free space is spread over.
    pub gaps: usize,
    pub padding: f64,
    /// The mark at the open end is an end character and sits flush there.
    pub flush_edge: bool,
}

/// Spacing for both sides of a syllable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    pub onset: SidePlan,
    pub coda: SidePlan,
}

impl LayoutPlan {
    /// Work out free space, gap counts and padding for both sides.
    ///
    /// `onset` and `coda` are in phonetic order: the onset's last mark and the
    /// coda's first mark are the ones next to the vowel's middle point.
    pub fn compute(
        anchors: &Anchors,
        onset: &[Consonant],
        coda: &[Consonant],
        options: &LayoutOptions,
    ) -> Self {
        let width = options.character_width;
        let mut onset_free = anchors.segment_length(Side::Onset) - width * onset.len() as f64;
        let mut coda_free = anchors.segment_length(Side::Coda) - width * coda.len() as f64;

        // descenders on both sides of the middle point would overlap
        let onset_descends = onset.last().is_some_and(|c| c.descends);
        let coda_descends = coda.first().is_some_and(|c| c.descends);
        if onset_descends && coda_descends {
            let clearance = options.character_height / 2.0;
            coda_free -= clearance;
            onset_free -= clearance;
        }

        let onset_flush = onset.first().is_some_and(|c| c.end_char);
        let coda_flush = coda.last().is_some_and(|c| c.end_char);

        Self {
            onset: side_plan(anchors, Side::Onset, onset.len(), onset_free, onset_flush),
            coda: side_plan(anchors, Side::Coda, coda.len(), coda_free, coda_flush),
        }
    }

    pub fn side(&self, side: Side) -> &SidePlan {
        match side {
            Side::Onset => &self.onset,
            Side::Coda => &self.coda,
        }
    }
}

fn side_plan(anchors: &Anchors, side: Side, count: usize, free_space: f64, flush_edge: bool) -> SidePlan {
    let gaps = count + 1 - usize::from(flush_edge);
    SidePlan {
        segment_length: anchors.segment_length(side),
        count,
        free_space,
        gaps,
        padding: free_space / gaps as f64,
        flush_edge,
    }
}

impl Vowel {
    /// Attach `onset` and `coda` consonants to this vowel.
    ///
    /// Consumes the vowel (callers pass a fresh copy of the table template)
    /// and returns the finished syllable: the vowel outline, any extra vowel
    /// strokes, then every placed consonant group. An end character at the
    /// open end of a side is spliced into the outline instead of being added
    /// as a group.
    pub fn add_consonants(
        self,
        mut onset: Vec<Consonant>,
        mut coda: Vec<Consonant>,
        options: &LayoutOptions,
    ) -> Result<Group, LayoutError> {
        options.check_cluster(Side::Onset, onset.len())?;
        options.check_cluster(Side::Coda, coda.len())?;
        for (side, count) in [(Side::Onset, onset.len()), (Side::Coda, coda.len())] {
            if count > 0 && self.anchors.segment_length(side) == 0.0 {
                return Err(self.degenerate(side));
            }
        }

        let onset_orientation = self.orientation(Side::Onset);
        for mark in &mut onset {
            onset_orientation.apply(mark.group_mut());
        }
        let coda_orientation = self.orientation(Side::Coda);
        for mark in &mut coda {
            if mark.end_char {
                // end characters face the other way when closing a coda
                mark.group_mut().flip_horizontal(None);
            }
            coda_orientation.apply(mark.group_mut());
        }

        let plan = LayoutPlan::compute(&self.anchors, &onset, &coda, options);
        debug!(vowel = self.symbol(), ?plan, "layout plan");

        // coda marks are walked from the end point, last sound first
        coda.reverse();
        let mut outline = self.outline.clone();
        let mut placed = Vec::with_capacity(onset.len() + coda.len());
        for (side, marks) in [(Side::Onset, onset), (Side::Coda, coda)] {
            self.place_side(side, marks, plan.side(side), options, &mut outline, &mut placed)?;
        }

        let children = std::iter::once(ShapeKind::from(outline))
            .chain(self.extras)
            .chain(placed);
        Ok(Group::new(children).with_center(self.center))
    }

    /// Walk one segment from its open end toward the middle, attaching each
    /// mark at the center of its cell.
    ///
    /// Every position is measured from the open end along the fixed
    /// `open end -> middle` direction, so a cluster longer than the segment
    /// keeps its even spacing and runs past the middle point.
    fn place_side(
        &self,
        side: Side,
        marks: Vec<Consonant>,
        plan: &SidePlan,
        options: &LayoutOptions,
        outline: &mut Polyline,
        placed: &mut Vec<ShapeKind>,
    ) -> Result<(), LayoutError> {
        let half = options.character_width / 2.0;
        let start: Point = self.anchors.open_end(side);
        let target = self.anchors.middle;

        let mut walked = 0.0;
        for (i, mut mark) in marks.into_iter().enumerate() {
            if i > 0 {
                walked += half;
            }
            let flush = i == 0 && mark.end_char;
            walked += if flush { half } else { plan.padding + half };
            let marker =
                travel_towards(start, target, walked).ok_or_else(|| self.degenerate(side))?;
            mark.group_mut().attach_center(marker.x, marker.y);
            trace!(%side, symbol = mark.symbol(), x = marker.x, y = marker.y, "placed mark");

            if flush {
                splice(side, &mark, outline)?;
            } else {
                placed.push(ShapeKind::from(mark.into_group()));
            }
        }
        Ok(())
    }

    fn degenerate(&self, side: Side) -> LayoutError {
        LayoutError::DegenerateGeometry {
            vowel: self.symbol().to_string(),
            side,
        }
    }
}

/// Fuse an end character's first stroke into the vowel outline. The stroke's
/// first point is the shared corner and is dropped.
fn splice(side: Side, mark: &Consonant, outline: &mut Polyline) -> Result<(), LayoutError> {
    let points = mark.outline_points().ok_or_else(|| LayoutError::NotSpliceable {
        symbol: mark.symbol().to_string(),
    })?;
    let tail = points.get(1..).unwrap_or(&[]);
    match side {
        Side::Onset => outline.prepend_points(tail.iter().rev().copied()),
        Side::Coda => outline.append_points(tail.iter().copied()),
    }
    Ok(())
}

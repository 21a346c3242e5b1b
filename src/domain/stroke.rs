//! Stroke types for freehand drawing
//!
//! A stroke is drawn incrementally, one segment per pointer move, but is
//! committed to history and undone as a unit.

use super::geometry::{Bounds, Point};
use super::pen::Pen;

/// Handle identifying a committed (or in-progress) stroke
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrokeId(pub u64);

/// Handle identifying one rendered segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(pub u64);

/// One straight piece between two consecutive recorded points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub from: Point,
    pub to: Point,
}

/// A sealed stroke: pen captured at gesture start plus its segments
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub id: StrokeId,
    pub pen: Pen,
    segments: Vec<Segment>,
}

impl Stroke {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Ordered points; always one more than the segment count
    pub fn points(&self) -> Vec<Point> {
        points_of(&self.segments)
    }

    /// Bounds of the stroke centerline (excluding pen width)
    pub fn bounds(&self) -> Option<Bounds> {
        bounds_of(&self.segments)
    }
}

/// Accumulator for the gesture in progress
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveStroke {
    pub id: StrokeId,
    pub pen: Pen,
    /// Last recorded pointer position
    pub cursor: Point,
    segments: Vec<Segment>,
}

impl ActiveStroke {
    pub fn new(id: StrokeId, pen: Pen, start: Point) -> Self {
        Self {
            id,
            pen,
            cursor: start,
            segments: Vec::new(),
        }
    }

    /// Append a segment from the cursor to `to` and advance the cursor
    pub fn push(&mut self, id: SegmentId, to: Point) -> Segment {
        let segment = Segment {
            id,
            from: self.cursor,
            to,
        };
        self.segments.push(segment);
        self.cursor = to;
        segment
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn points(&self) -> Vec<Point> {
        points_of(&self.segments)
    }

    /// Seal into a stroke; `None` when no segment was drawn
    pub fn seal(self) -> Option<Stroke> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Stroke {
            id: self.id,
            pen: self.pen,
            segments: self.segments,
        })
    }
}

fn points_of(segments: &[Segment]) -> Vec<Point> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };
    std::iter::once(first.from)
        .chain(segments.iter().map(|s| s.to))
        .collect()
}

fn bounds_of(segments: &[Segment]) -> Option<Bounds> {
    let first = segments.first()?;
    let mut bounds = Bounds::at(first.from);
    for segment in segments {
        bounds.include(segment.to);
    }
    Some(bounds)
}

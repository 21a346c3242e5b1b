//! Geometric types for board coordinates
//!
//! Coordinates are in the board's local pixel space: origin top-left,
//! y increasing downward.

/// A point on the board
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds covering a set of points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounds of a single point
    pub fn at(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow to include `point`
    pub fn include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Smallest bounds containing both
    pub fn union(self, other: Bounds) -> Bounds {
        let mut out = self;
        out.include(other.min);
        out.include(other.max);
        out
    }
}

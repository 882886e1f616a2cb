//! Basic 2D types and the shared tolerance.
//!
//! - `GeomCfg`: the single epsilon every predicate uses.
//! - `Hs2`: closed half‑space `n·x <= c`, one per polygon edge.
//! - `Segment`: closed segment between two points.
//! - `Orientation`: sign of a turn, with an eps-wide collinear band.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point (or vector) in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// The same `eps` is used by `orientation`, `segments_intersect`,
/// `point_in_polygon` and `segment_crosses_interior`, so two predicates never
/// disagree about whether a point sits on a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Closed half‑space `n · x <= c` with unit normal `n`.
#[derive(Clone, Copy, Debug)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }
    /// Signed distance of `p` past the boundary line (negative inside).
    #[inline]
    pub fn excess(&self, p: Point) -> f64 {
        self.n.dot(&p) - self.c
    }
    #[inline]
    pub fn satisfies_eps(&self, p: Point, eps: f64) -> bool {
        self.excess(p) <= eps
    }
}

/// Closed segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.a + (self.b - self.a) * t
    }
}

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

//! Validated convex polygons (V-rep plus derived outward H-rep).
//!
//! Invariants:
//! - At least 3 finite vertices, no vertex repeating its predecessor.
//! - Every strict turn has the same orientation and at least one turn is
//!   strict. Straight-through (collinear) vertices are allowed; a vertex
//!   that doubles back along its incoming edge is not.
//! - Total turning is exactly one revolution, so the boundary is simple.
//! - `hs[i]` is the unit-normal outward half-space of edge `i → i+1`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::predicates::{orientation, point_in_polygon, segment_crosses_interior, segments_intersect};
use super::types::{GeomCfg, Hs2, Orientation, Point, Segment};
use crate::error::GeometryError;

/// Simple convex polygon in either orientation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
    hs: Vec<Hs2>,
    ccw: bool,
}

impl Polygon {
    /// Validate `vertices` as a simple convex boundary.
    pub fn new(vertices: Vec<Point>, cfg: GeomCfg) -> Result<Self, GeometryError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices { count: n });
        }
        if let Some(index) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFinite { index });
        }
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            if (vertices[i] - prev).norm() <= cfg.eps {
                return Err(GeometryError::RepeatedVertex { index: i });
            }
        }
        let mut turn: Option<Orientation> = None;
        let mut winding = 0.0_f64;
        for i in 0..n {
            let a = vertices[(i + n - 1) % n];
            let b = vertices[i];
            let c = vertices[(i + 1) % n];
            let e0 = b - a;
            let e1 = c - b;
            match orientation(a, b, c, cfg.eps) {
                Orientation::Collinear if e0.dot(&e1) <= 0.0 => {
                    return Err(GeometryError::NotConvex { index: i });
                }
                Orientation::Collinear => {}
                o if turn.is_some_and(|t| t != o) => {
                    return Err(GeometryError::NotConvex { index: i });
                }
                o => turn = Some(o),
            }
            winding += (e0.x * e1.y - e0.y * e1.x).atan2(e0.dot(&e1));
        }
        let Some(turn) = turn else {
            return Err(GeometryError::NotConvex { index: 0 });
        };
        let turns = (winding / std::f64::consts::TAU).round() as i64;
        if turns.abs() != 1 {
            return Err(GeometryError::SelfIntersecting { turns });
        }
        let ccw = turn == Orientation::CounterClockwise;
        let hs = (0..n)
            .map(|i| {
                let p = vertices[i];
                let edge = vertices[(i + 1) % n] - p;
                // CCW: interior on the left, outward normal is 90° CW.
                let n_out = if ccw {
                    Vector2::new(edge.y, -edge.x)
                } else {
                    Vector2::new(-edge.y, edge.x)
                };
                let n_unit = n_out / n_out.norm();
                Hs2::new(n_unit, n_unit.dot(&p))
            })
            .collect();
        Ok(Self { vertices, hs, ccw })
    }

    /// Convenience constructor from coordinate pairs with default tolerances.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self, GeometryError> {
        let pts = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Self::new(pts, GeomCfg::default())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn halfspaces(&self) -> &[Hs2] {
        &self.hs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.ccw
    }

    /// Boundary edges `i → i+1` in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Membership with signed slack; `eps < 0` shrinks the polygon (strict interior).
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        self.hs.iter().all(|h| h.satisfies_eps(p, eps))
    }

    /// Vertex average; strictly interior for a convex polygon.
    pub fn centroid(&self) -> Point {
        let sum = self
            .vertices
            .iter()
            .fold(Point::zeros(), |acc, p| acc + p);
        sum / self.vertices.len() as f64
    }

    /// True iff the open interiors of `self` and `other` intersect.
    pub fn overlaps(&self, other: &Polygon, cfg: GeomCfg) -> bool {
        if point_in_polygon(self.centroid(), other, cfg)
            || point_in_polygon(other.centroid(), self, cfg)
        {
            return true;
        }
        self.edges().any(|e| {
            segment_crosses_interior(e, other, cfg)
                || other.edges().any(|f| segments_intersect(e, f, cfg))
        }) || other.edges().any(|f| segment_crosses_interior(f, self, cfg))
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(vertices, GeomCfg::default())
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(p: Polygon) -> Self {
        p.vertices
    }
}

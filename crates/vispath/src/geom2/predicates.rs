//! Visibility predicates.
//!
//! All tests are sign tests on distances (a cross product divided by a base
//! length, or a unit-normal half-space excess), each compared against the
//! same `GeomCfg::eps`. Touching is never blocking:
//! shared endpoints, an endpoint lying on the other segment, collinear
//! overlap, and points on a polygon boundary all resolve to "not
//! intersecting" / "not inside".

use super::polygon::Polygon;
use super::types::{GeomCfg, Orientation, Point, Segment};

/// Cross product `(b - a) × (c - a)`.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Orientation of the triple `(a, b, c)`.
///
/// `c` counts as collinear when its distance from the line through `a` and
/// `b` is at most `eps` (or when `a` and `b` coincide within `eps`).
#[inline]
pub fn orientation(a: Point, b: Point, c: Point, eps: f64) -> Orientation {
    let base = (b - a).norm();
    if base <= eps {
        return Orientation::Collinear;
    }
    let v = cross(a, b, c) / base;
    if v.abs() <= eps {
        Orientation::Collinear
    } else if v > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// True iff `s` and `t` cross at a point interior to both segments.
///
/// Requires strict opposite orientations on both sides, so a crossing through
/// an endpoint (including shared endpoints) or along a common line is not
/// reported.
pub fn segments_intersect(s: Segment, t: Segment, cfg: GeomCfg) -> bool {
    use Orientation::*;
    let o1 = orientation(s.a, s.b, t.a, cfg.eps);
    let o2 = orientation(s.a, s.b, t.b, cfg.eps);
    let o3 = orientation(t.a, t.b, s.a, cfg.eps);
    let o4 = orientation(t.a, t.b, s.b, cfg.eps);
    let straddles = |p: Orientation, q: Orientation| {
        matches!(
            (p, q),
            (CounterClockwise, Clockwise) | (Clockwise, CounterClockwise)
        )
    };
    straddles(o1, o2) && straddles(o3, o4)
}

/// True iff `p` lies strictly inside `polygon` (more than `eps` from every edge line).
#[inline]
pub fn point_in_polygon(p: Point, polygon: &Polygon, cfg: GeomCfg) -> bool {
    polygon.contains_eps(p, -cfg.eps)
}

/// True iff the segment passes through the open interior of the convex `polygon`.
///
/// Cyrus–Beck clip of `seg` against the polygon's half-spaces, each shrunk by
/// `eps`. A non-degenerate surviving parameter interval means some part of the
/// segment is strictly inside. This is the test that catches chords entering
/// and leaving through vertices, which `segments_intersect` cannot see.
pub fn segment_crosses_interior(seg: Segment, polygon: &Polygon, cfg: GeomCfg) -> bool {
    let d = seg.b - seg.a;
    let mut t_lo = 0.0_f64;
    let mut t_hi = 1.0_f64;
    for h in polygon.halfspaces() {
        // Inside strictly: n·(a + t d) <= c - eps  ⇔  t (n·d) <= -(excess(a) + eps)
        let num = -(h.excess(seg.a) + cfg.eps);
        let den = h.n.dot(&d);
        if den.abs() <= f64::EPSILON {
            if num < 0.0 {
                return false;
            }
            continue;
        }
        let t = num / den;
        if den > 0.0 {
            t_hi = t_hi.min(t);
        } else {
            t_lo = t_lo.max(t);
        }
        if t_hi - t_lo <= 0.0 {
            return false;
        }
    }
    // Require a stretch longer than the tolerance, not a tangential sliver.
    (t_hi - t_lo) * d.norm() > cfg.eps
}

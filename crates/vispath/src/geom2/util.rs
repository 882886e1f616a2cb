use super::polygon::Polygon;
use super::predicates::orientation;
use super::types::{GeomCfg, Orientation, Point};
use crate::error::GeometryError;

fn is_left_turn(a: Point, b: Point, c: Point, eps: f64) -> bool {
    orientation(a, b, c, eps) == Orientation::CounterClockwise
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order, collinear points dropped).
fn convex_hull(points: &[Point], eps: f64) -> Vec<Point> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| (*a - *b).norm() <= eps);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && !is_left_turn(lower[lower.len() - 2], lower[lower.len() - 1], *p, eps) {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && !is_left_turn(upper[upper.len() - 2], upper[upper.len() - 1], *p, eps) {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Build a validated CCW polygon from the convex hull of `points`.
pub fn from_points_convex_hull(points: &[Point], cfg: GeomCfg) -> Result<Polygon, GeometryError> {
    Polygon::new(convex_hull(points, cfg.eps), cfg)
}

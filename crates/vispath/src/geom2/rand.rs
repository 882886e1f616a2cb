//! Random convex polygons and obstacle fields (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for convex obstacles used by
//!   property tests and benchmarks. Draws are reproducible from a replay token.
//!
//! Model
//! - Polygon: start from `n` equally spaced angles on [0, 2π), add bounded
//!   angular and radial jitter, take the convex hull.
//! - Field: a `cols × rows` grid of square cells; each cell independently
//!   holds one polygon scaled to fit its inscribed disc, so obstacles never
//!   overlap. Start and goal sit outside opposite grid corners, so a path
//!   around the field always exists.

use super::{polygon::Polygon, types::Point, util::from_points_convex_hull, GeomCfg};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 7 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex polygon centered at `center`.
///
/// Every vertex lies within `base_radius * (1 + radial_jitter)` of `center`.
/// Returns `None` only when jitter collapses the hull below a triangle.
pub fn draw_polygon_radial(cfg: RadialCfg, center: Point, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    draw_with(&mut rng, cfg, center)
}

fn draw_with(rng: &mut StdRng, cfg: RadialCfg, center: Point) -> Option<Polygon> {
    let n = cfg.vertex_count.sample(rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-6);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    let pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            center + Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    from_points_convex_hull(&pts, GeomCfg::default()).ok()
}

/// Obstacle field configuration.
#[derive(Clone, Copy, Debug)]
pub struct FieldCfg {
    pub cols: usize,
    pub rows: usize,
    /// Cell side length.
    pub cell: f64,
    /// Probability that a cell holds an obstacle.
    pub fill: f64,
    pub vertex_count: VertexCount,
}
impl Default for FieldCfg {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 4,
            cell: 2.0,
            fill: 0.7,
            vertex_count: VertexCount::Uniform { min: 3, max: 6 },
        }
    }
}

/// Pairwise disjoint convex obstacles plus free start and goal points.
#[derive(Clone, Debug)]
pub struct ObstacleField {
    pub polygons: Vec<Polygon>,
    pub start: Point,
    pub goal: Point,
}

/// Draw a reproducible obstacle field.
pub fn draw_obstacle_field(cfg: FieldCfg, tok: ReplayToken) -> ObstacleField {
    let mut rng = tok.to_std_rng();
    let fill = cfg.fill.clamp(0.0, 1.0);
    // Outer radius ≤ 0.3·cell·(1 + 0.25) plus 0.05·cell of center jitter stays inside the cell.
    let radial = RadialCfg {
        vertex_count: cfg.vertex_count,
        base_radius: 0.3 * cfg.cell,
        ..RadialCfg::default()
    };
    let mut polygons = Vec::new();
    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            if rng.gen::<f64>() >= fill {
                continue;
            }
            let jitter = Point::new(rng.gen_range(-0.05..0.05), rng.gen_range(-0.05..0.05)) * cfg.cell;
            let center = Point::new(
                (col as f64 + 0.5) * cfg.cell,
                (row as f64 + 0.5) * cfg.cell,
            ) + jitter;
            if let Some(p) = draw_with(&mut rng, radial, center) {
                polygons.push(p);
            }
        }
    }
    let half = 0.5 * cfg.cell;
    ObstacleField {
        polygons,
        start: Point::new(-half, -half),
        goal: Point::new(
            cfg.cols as f64 * cfg.cell + half,
            cfg.rows as f64 * cfg.cell + half,
        ),
    }
}

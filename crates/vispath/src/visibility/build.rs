//! State space construction: labeled vertices, boundary edges, asserted links
//! and pairwise visibility discovery.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::error::GeometryError;
use crate::geom2::{segment_crosses_interior, segments_intersect, GeomCfg, Point, Polygon, Segment};

use super::types::{
    EdgeData, EdgeKind, Obstacle, ObstacleId, StateSpace, Vertex, VertexId, VertexRole,
};

/// Edge discovery configuration.
#[derive(Clone, Copy, Debug)]
pub struct BuildCfg {
    pub geom: GeomCfg,
    /// Run the pairwise visibility test. When off, only boundary edges and
    /// asserted links are present.
    pub visibility: bool,
    /// Skip discovered edges longer than this.
    pub max_edge_len: Option<f64>,
}

impl Default for BuildCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            visibility: true,
            max_edge_len: None,
        }
    }
}

/// Build the visibility graph of `polygons` with start `S` and goal `G`.
///
/// Corner `j` of polygon `i` is labeled `P{i}.{j}`.
pub fn build_state_space(
    polygons: &[Polygon],
    start: Point,
    goal: Point,
) -> Result<StateSpace, GeometryError> {
    let mut b = StateSpaceBuilder::new(BuildCfg::default());
    b.start("S", start)?;
    for (i, p) in polygons.iter().enumerate() {
        b.add_polygon(format!("P{i}"), p.clone())?;
    }
    b.goal("G", goal)?;
    b.build()
}

/// Incremental, labeled state space construction.
///
/// Vertex ids follow call order, so adding the start first and the goal last
/// reproduces the conventional `S … G` numbering.
#[derive(Debug)]
pub struct StateSpaceBuilder {
    cfg: BuildCfg,
    vertices: Vec<Vertex>,
    by_label: HashMap<String, VertexId>,
    obstacles: Vec<Obstacle>,
    links: Vec<(VertexId, VertexId)>,
    start: Option<VertexId>,
    goal: Option<VertexId>,
}

impl StateSpaceBuilder {
    pub fn new(cfg: BuildCfg) -> Self {
        Self {
            cfg,
            vertices: Vec::new(),
            by_label: HashMap::new(),
            obstacles: Vec::new(),
            links: Vec::new(),
            start: None,
            goal: None,
        }
    }

    fn add_vertex(
        &mut self,
        label: String,
        at: Point,
        role: VertexRole,
    ) -> Result<VertexId, GeometryError> {
        if self.by_label.contains_key(&label) {
            return Err(GeometryError::DuplicateLabel(label));
        }
        if !(at.x.is_finite() && at.y.is_finite()) {
            return Err(GeometryError::NonFinite {
                index: self.vertices.len(),
            });
        }
        let id = VertexId(self.vertices.len());
        self.by_label.insert(label.clone(), id);
        self.vertices.push(Vertex { label, at, role });
        Ok(id)
    }

    pub fn start(&mut self, label: impl Into<String>, at: Point) -> Result<&mut Self, GeometryError> {
        if self.start.is_some() {
            return Err(GeometryError::EndpointAlreadySet("start"));
        }
        self.start = Some(self.add_vertex(label.into(), at, VertexRole::Start)?);
        Ok(self)
    }

    pub fn goal(&mut self, label: impl Into<String>, at: Point) -> Result<&mut Self, GeometryError> {
        if self.goal.is_some() {
            return Err(GeometryError::EndpointAlreadySet("goal"));
        }
        self.goal = Some(self.add_vertex(label.into(), at, VertexRole::Goal)?);
        Ok(self)
    }

    /// Add an obstacle from labeled corners in boundary order.
    pub fn obstacle(
        &mut self,
        label: impl Into<String>,
        corners: &[(&str, Point)],
    ) -> Result<ObstacleId, GeometryError> {
        let polygon = Polygon::new(corners.iter().map(|&(_, p)| p).collect(), self.cfg.geom)?;
        let labels = corners.iter().map(|&(name, _)| name.to_string()).collect();
        self.insert_obstacle(label.into(), polygon, labels)
    }

    /// Add an already validated polygon; corner `j` is labeled `{label}.{j}`.
    pub fn add_polygon(
        &mut self,
        label: impl Into<String>,
        polygon: Polygon,
    ) -> Result<ObstacleId, GeometryError> {
        let label = label.into();
        let labels = (0..polygon.len()).map(|j| format!("{label}.{j}")).collect();
        self.insert_obstacle(label, polygon, labels)
    }

    fn insert_obstacle(
        &mut self,
        label: String,
        polygon: Polygon,
        corner_labels: Vec<String>,
    ) -> Result<ObstacleId, GeometryError> {
        if let Some(other) = self
            .obstacles
            .iter()
            .find(|o| o.polygon.overlaps(&polygon, self.cfg.geom))
        {
            return Err(GeometryError::Overlap {
                first: other.label.clone(),
                second: label,
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = corner_labels
            .iter()
            .find(|l| self.by_label.contains_key(*l) || !seen.insert(l.as_str()))
        {
            return Err(GeometryError::DuplicateLabel(dup.clone()));
        }
        let id = ObstacleId(self.obstacles.len());
        let mut corners = Vec::with_capacity(polygon.len());
        for (index, (name, &at)) in corner_labels.into_iter().zip(polygon.vertices()).enumerate() {
            corners.push(self.add_vertex(name, at, VertexRole::Corner { obstacle: id, index })?);
        }
        self.obstacles.push(Obstacle {
            label,
            polygon,
            corners,
        });
        Ok(id)
    }

    /// Assert that `from` reaches every vertex in `to`, without a visibility test.
    pub fn link(&mut self, from: &str, to: &[&str]) -> Result<&mut Self, GeometryError> {
        let a = self.lookup(from)?;
        for name in to {
            let b = self.lookup(name)?;
            self.links.push((a, b));
        }
        Ok(self)
    }

    fn lookup(&self, label: &str) -> Result<VertexId, GeometryError> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| GeometryError::UnknownVertex(label.to_string()))
    }

    /// Finish construction. Pairwise visibility is O(V² · E_poly).
    pub fn build(self) -> Result<StateSpace, GeometryError> {
        let start = self.start.ok_or(GeometryError::MissingEndpoint("start"))?;
        let goal = self.goal.ok_or(GeometryError::MissingEndpoint("goal"))?;
        let mut adj: Vec<IndexMap<VertexId, EdgeData>> = vec![IndexMap::new(); self.vertices.len()];
        for o in &self.obstacles {
            let c = &o.corners;
            for w in c.windows(2) {
                connect(&mut adj, &self.vertices, w[0], w[1], EdgeKind::Boundary);
            }
            connect(&mut adj, &self.vertices, c[0], c[c.len() - 1], EdgeKind::Boundary);
        }
        for &(a, b) in &self.links {
            connect(&mut adj, &self.vertices, a, b, EdgeKind::Link);
        }
        let mut discovered = 0usize;
        if self.cfg.visibility {
            let n = self.vertices.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    let (a, b) = (VertexId(i), VertexId(j));
                    if adj[i].contains_key(&b) || same_obstacle(&self.vertices, a, b) {
                        continue;
                    }
                    let seg = Segment::new(self.vertices[i].at, self.vertices[j].at);
                    if self.cfg.max_edge_len.is_some_and(|m| seg.length() > m) {
                        continue;
                    }
                    if is_visible(seg, &self.obstacles, self.cfg.geom) {
                        connect(&mut adj, &self.vertices, a, b, EdgeKind::Visibility);
                        discovered += 1;
                    }
                }
            }
        }
        let space = StateSpace {
            vertices: self.vertices,
            by_label: self.by_label,
            obstacles: self.obstacles,
            adj,
            start,
            goal,
            cfg: self.cfg.geom,
        };
        tracing::debug!(
            vertices = space.vertex_count(),
            edges = space.edge_count(),
            discovered,
            obstacles = space.obstacles.len(),
            "state space built"
        );
        Ok(space)
    }
}

/// Insert edge `a`-`b` unless present; the first insertion fixes kind and position.
fn connect(
    adj: &mut [IndexMap<VertexId, EdgeData>],
    vertices: &[Vertex],
    a: VertexId,
    b: VertexId,
    kind: EdgeKind,
) {
    if a == b {
        return;
    }
    let weight = (vertices[b.0].at - vertices[a.0].at).norm();
    adj[a.0].entry(b).or_insert(EdgeData { weight, kind });
    adj[b.0].entry(a).or_insert(EdgeData { weight, kind });
}

/// Corners of one polygon see each other only along the boundary, which is
/// already connected, so any pair reaching the visibility pass is rejected.
fn same_obstacle(vertices: &[Vertex], a: VertexId, b: VertexId) -> bool {
    match (vertices[a.0].role, vertices[b.0].role) {
        (
            VertexRole::Corner { obstacle: oa, .. },
            VertexRole::Corner { obstacle: ob, .. },
        ) => oa == ob,
        _ => false,
    }
}

/// True iff `seg` stays out of every obstacle's open interior.
pub(crate) fn is_visible(seg: Segment, obstacles: &[Obstacle], cfg: GeomCfg) -> bool {
    obstacles.iter().all(|o| {
        !o.polygon.edges().any(|e| segments_intersect(seg, e, cfg))
            && !segment_crosses_interior(seg, &o.polygon, cfg)
    })
}

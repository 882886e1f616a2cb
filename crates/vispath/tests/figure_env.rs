//! Labeled textbook environment: eight convex obstacles, a start on the left,
//! a goal top right. Only polygon boundaries and hand-asserted sight lines are
//! connected, so every strategy sees exactly the same graph.

use nalgebra::vector;
use vispath::prelude::*;

type Corners = &'static [(&'static str, [f64; 2])];

const OBSTACLES: &[(&str, Corners)] = &[
    ("Rect1", &[("rec1", [0.5, 0.0]), ("rec2", [0.5, 1.4]), ("rec3", [4.6, 1.4]), ("rec4", [4.6, 0.0])]),
    (
        "Pent",
        &[
            ("pent1", [1.7, 2.0]),
            ("pent2", [0.3, 2.3]),
            ("pent3", [0.0, 3.8]),
            ("pent4", [1.5, 5.1]),
            ("pent5", [2.6, 3.7]),
        ],
    ),
    ("Tri1", &[("tri1", [2.5, 1.8]), ("tri2", [3.1, 4.0]), ("tri3", [3.7, 1.8])]),
    ("Quad1", &[("quad1", [3.9, 3.3]), ("quad2", [3.7, 4.9]), ("quad3", [4.8, 5.1]), ("quad4", [5.7, 4.4])]),
    ("Tri2", &[("tri_2_1", [5.4, 0.7]), ("tri_2_2", [4.9, 2.6]), ("tri_2_3", [6.3, 1.5])]),
    (
        "Rect2",
        &[("rec_2_1", [5.8, 2.2]), ("rec_2_2", [5.8, 5.0]), ("rec_2_3", [7.5, 5.0]), ("rec_2_4", [7.5, 2.2])],
    ),
    (
        "Hex",
        &[
            ("hex1", [7.7, 0.0]),
            ("hex2", [6.8, 0.6]),
            ("hex3", [6.8, 1.5]),
            ("hex4", [7.7, 2.2]),
            ("hex5", [8.5, 1.5]),
            ("hex6", [8.5, 0.4]),
        ],
    ),
    (
        "Quad2",
        &[("quad_2_1", [8.7, 1.8]), ("quad_2_2", [7.8, 4.7]), ("quad_2_3", [8.6, 5.0]), ("quad_2_4", [8.9, 4.5])],
    ),
];

const LINKS: &[(&str, &[&str])] = &[
    ("S", &["rec1", "rec2", "pent2", "pent3"]),
    ("rec1", &["pent2", "pent3"]),
    ("rec2", &["pent1", "pent2", "tri1", "tri3"]),
    ("rec3", &["pent1", "tri1", "tri2", "tri3", "quad1", "tri_2_1", "tri_2_2"]),
    ("rec4", &["tri_2_1", "tri_2_2", "tri_2_3", "hex1", "hex2", "hex3", "rec_2_4"]),
    ("pent1", &["tri1", "tri2"]),
    ("pent4", &["tri2", "quad2", "quad3"]),
    ("pent5", &["tri1", "tri2", "quad2"]),
    ("tri2", &["quad1", "quad2", "tri_2_1"]),
    ("tri3", &["quad1", "quad2", "quad4", "tri_2_2"]),
    ("quad1", &["tri_2_1", "tri_2_2", "rec_2_1"]),
    ("quad3", &["rec_2_2", "rec_2_3", "quad_2_3"]),
    ("quad4", &["tri_2_2", "rec_2_1", "rec_2_2"]),
    ("tri_2_1", &["rec_2_4", "hex1", "hex2", "hex3", "hex4"]),
    ("tri_2_2", &["rec_2_1", "hex3"]),
    ("tri_2_3", &["rec_2_1", "rec_2_4", "hex2", "hex3", "hex4"]),
    ("rec_2_1", &["hex3", "hex4"]),
    ("rec_2_2", &["quad_2_3"]),
    ("rec_2_3", &["quad_2_1", "quad_2_2", "quad_2_3", "hex4", "hex5"]),
    ("rec_2_4", &["hex3", "hex4", "quad_2_1", "quad_2_2"]),
    ("hex4", &["quad_2_1", "quad_2_2"]),
    ("hex5", &["quad_2_1", "quad_2_2"]),
    ("hex6", &["quad_2_1", "G"]),
    ("quad_2_1", &["G"]),
    ("quad_2_3", &["G"]),
    ("quad_2_4", &["G"]),
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn figure_env() -> StateSpace {
    let cfg = BuildCfg {
        visibility: false,
        ..BuildCfg::default()
    };
    let mut b = StateSpaceBuilder::new(cfg);
    b.start("S", vector![0.0, 0.7]).unwrap();
    for &(label, corners) in OBSTACLES {
        let corners: Vec<(&str, Point)> = corners
            .iter()
            .map(|&(name, [x, y])| (name, vector![x, y]))
            .collect();
        b.obstacle(label, &corners).unwrap();
    }
    b.goal("G", vector![9.1, 5.0]).unwrap();
    for &(from, to) in LINKS {
        b.link(from, to).unwrap();
    }
    b.build().unwrap()
}

fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

#[test]
fn figure_env_shape() {
    let space = figure_env();
    assert_eq!(space.vertex_count(), 2 + 4 + 5 + 3 + 4 + 3 + 4 + 6 + 4);
    assert_eq!(space.obstacles().len(), 8);
    assert_eq!(space.start(), space.id_of("S").unwrap());
    assert_eq!(space.goal(), space.id_of("G").unwrap());
    for e in space.edges() {
        assert_eq!(space.weight(e.b, e.a), Some(e.weight));
    }
}

#[test]
fn strategies_on_figure_env() {
    init_tracing();
    let space = figure_env();
    let p = make_problem(&space, "S", "G").unwrap();
    let run = |s: Strategy| search(&p, s).unwrap();

    let bfs = run(Strategy::BreadthFirst);
    assert_eq!(p.labels(&bfs.states), ["S", "rec1", "rec4", "hex1", "hex6", "G"]);
    assert_eq!(round4(bfs.cost), 13.5936);
    assert_eq!(bfs.nodes_expanded, 33);

    let dfs = run(Strategy::DepthFirst);
    assert_eq!(p.labels(&dfs.states), ["S", "pent3", "pent4", "quad3", "quad_2_3", "G"]);
    assert_eq!(round4(dfs.cost), 12.6863);
    assert_eq!(dfs.nodes_expanded, 5);

    let optimal = ["S", "rec2", "pent1", "tri2", "quad2", "quad3", "quad_2_3", "G"];
    let ucs = run(Strategy::UniformCost);
    assert_eq!(p.labels(&ucs.states), optimal);
    assert_eq!(round4(ucs.cost), 11.1442);
    assert_eq!(ucs.nodes_expanded, 33);

    let astar = run(Strategy::AStar);
    assert_eq!(p.labels(&astar.states), optimal);
    assert_eq!(round4(astar.cost), 11.1442);
    assert_eq!(astar.nodes_expanded, 17);
}

#[test]
fn actions_replay_to_reported_cost() {
    let space = figure_env();
    let p = make_problem(&space, "S", "G").unwrap();
    for (strategy, out) in search_all(&p, SearchCfg::default()) {
        let sol = out.unwrap();
        let mut state = p.initial_state();
        let mut cost = 0.0;
        for (i, a) in sol.actions.iter().enumerate() {
            let next = p.result(&state, a);
            assert_eq!(next, sol.states[i + 1], "{strategy}");
            cost += p.step_cost(&state, a, &next);
            state = next;
        }
        assert!(p.is_goal(&state));
        assert!((cost - sol.cost).abs() < 1e-9, "{strategy}");
    }
}

#[test]
fn reverse_route_has_the_same_optimum() {
    let space = figure_env();
    let forward = search(&make_problem(&space, "S", "G").unwrap(), Strategy::AStar).unwrap();
    let backward = search(&make_problem(&space, "G", "S").unwrap(), Strategy::AStar).unwrap();
    assert!((forward.cost - backward.cost).abs() < 1e-9);
}

#[test]
fn solution_serializes_to_json() {
    let space = figure_env();
    let p = make_problem(&space, "S", "G").unwrap();
    let sol = search(&p, Strategy::UniformCost).unwrap();
    let json = serde_json::to_string(&sol).unwrap();
    let back: Solution<VertexId, VertexId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.states, sol.states);
    assert_eq!(back.actions, sol.actions);
    assert_eq!(back.nodes_expanded, sol.nodes_expanded);
    assert!((back.cost - sol.cost).abs() < 1e-12);
}

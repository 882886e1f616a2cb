use super::*;
use crate::error::ProblemError;
use crate::visibility::{BuildCfg, StateSpace, StateSpaceBuilder};
use nalgebra::vector;

fn boxed(start: [f64; 2]) -> StateSpace {
    let mut b = StateSpaceBuilder::new(BuildCfg::default());
    b.start("S", vector![start[0], start[1]]).unwrap();
    b.obstacle(
        "Box",
        &[
            ("a", vector![1.0, 1.0]),
            ("b", vector![3.0, 1.0]),
            ("c", vector![3.0, 3.0]),
            ("d", vector![1.0, 3.0]),
        ],
    )
    .unwrap();
    b.goal("G", vector![4.0, 4.0]).unwrap();
    b.build().unwrap()
}

#[test]
fn route_actions_follow_adjacency() {
    let space = boxed([0.0, 0.0]);
    let p = make_problem(&space, "S", "G").unwrap();
    let s = p.initial_state();
    assert_eq!(p.labels(&p.actions(&s)), vec!["a", "b", "d"]);
    let b = space.id_of("b").unwrap();
    assert_eq!(p.result(&s, &b), b);
    assert!((p.step_cost(&s, &b, &b) - 10f64.sqrt()).abs() < 1e-12);
    assert!(p.is_goal(&p.goal()));
    assert!(!p.is_goal(&s));
}

#[test]
fn euclidean_heuristic_is_consistent() {
    let space = boxed([0.0, 0.0]);
    let p = make_problem(&space, "S", "G").unwrap();
    assert_eq!(p.heuristic(&p.goal()), 0.0);
    for e in space.edges() {
        let h_a = p.heuristic(&e.a);
        let h_b = p.heuristic(&e.b);
        assert!(h_a <= e.weight + h_b + 1e-12);
        assert!(h_b <= e.weight + h_a + 1e-12);
    }
    let blind = p.without_heuristic();
    assert_eq!(blind.heuristic(&blind.initial_state()), 0.0);
}

#[test]
fn unknown_labels_are_rejected() {
    let space = boxed([0.0, 0.0]);
    assert_eq!(
        make_problem(&space, "S", "nowhere").unwrap_err(),
        ProblemError::UnknownVertex("nowhere".into())
    );
}

#[test]
fn start_inside_obstacle_is_rejected() {
    let space = boxed([2.0, 2.0]);
    assert_eq!(
        make_problem(&space, "S", "G").unwrap_err(),
        ProblemError::InsideObstacle {
            label: "S".into(),
            obstacle: "Box".into()
        }
    );
    // On the boundary is fine.
    let space = boxed([2.0, 1.0]);
    assert!(make_problem(&space, "S", "G").is_ok());
}

#[test]
fn goal_inside_obstacle_is_rejected() {
    let mut b = StateSpaceBuilder::new(BuildCfg::default());
    b.start("S", vector![0.0, 0.0]).unwrap();
    b.obstacle(
        "Box",
        &[
            ("a", vector![1.0, 1.0]),
            ("b", vector![3.0, 1.0]),
            ("c", vector![3.0, 3.0]),
            ("d", vector![1.0, 3.0]),
        ],
    )
    .unwrap();
    b.goal("G", vector![2.5, 1.5]).unwrap();
    let space = b.build().unwrap();
    assert_eq!(
        make_problem(&space, "S", "G").unwrap_err(),
        ProblemError::InsideObstacle {
            label: "G".into(),
            obstacle: "Box".into()
        }
    );
}

#[test]
fn step_cost_is_the_edge_weight() {
    let space = boxed([0.0, 0.0]);
    let p = make_problem(&space, "S", "G").unwrap();
    let s = p.initial_state();
    for next in p.actions(&s) {
        assert_eq!(Some(p.step_cost(&s, &next, &next)), space.weight(s, next));
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "no edge")]
fn step_cost_without_an_edge_is_a_bug() {
    let space = boxed([0.0, 0.0]);
    let p = make_problem(&space, "S", "G").unwrap();
    // S and G are separated by the box.
    let _ = p.step_cost(&space.start(), &space.goal(), &space.goal());
}

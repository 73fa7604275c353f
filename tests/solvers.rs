use red_scare::graph::{Color, Edge, Graph, MalformedInputError, Vertex};
use red_scare::path::{BoundedRunner, Constraint, PathResult};
use std::time::Duration;
use strum::IntoEnumIterator;

fn solve(graph: &Graph, constraint: Constraint, s: Vertex, t: Vertex) -> PathResult {
    BoundedRunner::unbounded()
        .solve(graph, constraint, s, t)
        .expect("Endpoints should be valid in test")
}

fn build(n: usize, edges: &[(Vertex, Vertex, Color)]) -> Graph {
    Graph::new(n, edges.iter().map(|&(u, v, c)| Edge::new(u, v, c)))
        .expect("Graph should build in test")
}

/// Same topology with every edge blue.
fn all_blue(graph: &Graph) -> Graph {
    Graph::new(
        graph.vertex_count(),
        graph.edges().iter().map(|e| Edge::blue(e.u, e.v)),
    )
    .expect("Recolored graph should build in test")
}

fn fixtures() -> Vec<Graph> {
    use Color::{Blue as B, Red as R};
    vec![
        build(3, &[(0, 1, R), (1, 2, B)]),
        build(3, &[(0, 2, R), (0, 1, B), (1, 2, B)]),
        build(4, &[(0, 1, B), (1, 2, B), (2, 3, B), (1, 3, R)]),
        build(5, &[(0, 1, R), (1, 2, R), (2, 3, B), (3, 4, B), (4, 0, B)]),
        build(4, &[(0, 1, B), (2, 3, R)]),
        build(4, &[(0, 0, R), (0, 1, B), (1, 2, R), (2, 3, R), (3, 1, B)]),
    ]
}

#[test]
fn test_trivial_walk_for_none_and_alternate() {
    let graph = build(2, &[(0, 1, Color::Red)]);
    assert_eq!(solve(&graph, Constraint::None, 0, 0), PathResult::Distance(0));
    assert_eq!(
        solve(&graph, Constraint::Alternate, 1, 1),
        PathResult::Distance(0)
    );
}

#[test]
fn test_empty_walk_never_qualifies_for_counting_constraints() {
    let graph = build(2, &[(0, 1, Color::Red)]);
    assert_eq!(solve(&graph, Constraint::Some, 0, 0), PathResult::Distance(2));
    assert_eq!(solve(&graph, Constraint::Many, 0, 0), PathResult::Distance(2));
    assert_eq!(solve(&graph, Constraint::Few, 0, 0), PathResult::Unreachable);

    let isolated = build(1, &[]);
    for constraint in [Constraint::Some, Constraint::Many, Constraint::Few] {
        assert_eq!(solve(&isolated, constraint, 0, 0), PathResult::Unreachable);
    }
}

#[test]
fn test_some_is_at_least_unconstrained_distance() {
    for graph in fixtures() {
        let plain = all_blue(&graph);
        for s in 0..graph.vertex_count() {
            for t in 0..graph.vertex_count() {
                let unconstrained = solve(&plain, Constraint::None, s, t);
                if let PathResult::Distance(k) = solve(&graph, Constraint::Some, s, t) {
                    let base = unconstrained
                        .distance()
                        .expect("A qualifying walk implies a plain one");
                    assert!(k >= base, "Some shorter than shortest walk for {}->{}", s, t);
                    assert!(k >= 1);
                }
            }
        }
    }
}

#[test]
fn test_blue_edge_never_lengthens_none() {
    let sparse = build(4, &[(0, 1, Color::Blue), (1, 2, Color::Blue), (2, 3, Color::Blue)]);
    let dense = build(
        4,
        &[
            (0, 1, Color::Blue),
            (1, 2, Color::Blue),
            (2, 3, Color::Blue),
            (0, 3, Color::Blue),
        ],
    );

    for s in 0..4 {
        for t in 0..4 {
            let before = solve(&sparse, Constraint::None, s, t).distance();
            let after = solve(&dense, Constraint::None, s, t).distance();
            match (before, after) {
                (Some(b), Some(a)) => assert!(a <= b),
                (Some(_), None) => panic!("Adding a blue edge lost a walk {}->{}", s, t),
                _ => {}
            }
        }
    }
}

#[test]
fn test_alternation() {
    use Color::{Blue as B, Red as R};
    let stuck = build(4, &[(0, 1, R), (1, 2, R), (2, 3, B)]);
    assert_eq!(solve(&stuck, Constraint::Alternate, 0, 3), PathResult::Unreachable);

    let ok = build(3, &[(0, 1, R), (1, 2, B)]);
    assert_eq!(solve(&ok, Constraint::Alternate, 0, 2), PathResult::Distance(2));

    for graph in fixtures() {
        let runner = BoundedRunner::unbounded();
        for t in 0..graph.vertex_count() {
            let outcome = runner
                .solve_with_walk(&graph, Constraint::Alternate, 0, t)
                .expect("Endpoints should be valid in test");
            if let Some(walk) = outcome.walk {
                let colors: Vec<Color> = walk.colors().collect();
                assert!(colors.windows(2).all(|pair| pair[0] != pair[1]));
            }
        }
    }
}

#[test]
fn test_all_red_graph_duality() {
    use Color::Red as R;
    let graph = build(4, &[(0, 1, R), (1, 2, R), (2, 3, R), (3, 0, R)]);
    let plain = all_blue(&graph);

    for t in 1..4 {
        assert_eq!(
            solve(&graph, Constraint::Many, 0, t),
            solve(&plain, Constraint::None, 0, t)
        );
        assert_eq!(solve(&graph, Constraint::Few, 0, t), PathResult::Unreachable);
        assert_eq!(solve(&graph, Constraint::None, 0, t), PathResult::Unreachable);
    }
}

#[test]
fn test_witness_walks_satisfy_their_constraint() {
    let runner = BoundedRunner::unbounded();
    for graph in fixtures() {
        for t in 0..graph.vertex_count() {
            for (constraint, outcome) in runner
                .solve_all(&graph, 0, t)
                .expect("Endpoints should be valid in test")
            {
                let Some(walk) = outcome.walk else { continue };
                assert_eq!(outcome.result, PathResult::Distance(walk.len()));
                assert_eq!(walk.start, 0);
                assert_eq!(walk.end(), t);

                let (red, blue) = (walk.count(Color::Red), walk.count(Color::Blue));
                match constraint {
                    Constraint::None => assert_eq!(red, 0),
                    Constraint::Some => assert!(red >= 1),
                    Constraint::Many => assert!(red > blue),
                    Constraint::Few => assert!(blue > red),
                    Constraint::Alternate => {}
                }
            }
        }
    }
}

#[test]
fn test_zero_budget_is_inconclusive_everywhere() {
    let runner = BoundedRunner::new(Some(Duration::ZERO));
    for graph in fixtures() {
        for constraint in Constraint::iter() {
            assert_eq!(
                runner
                    .solve(&graph, constraint, 0, 1)
                    .expect("Endpoints should be valid in test"),
                PathResult::Inconclusive
            );
        }
    }
}

/// Blue path `0 .. n-2` with one red edge to `n - 1` at the far end.
fn red_tail_path(n: usize) -> Graph {
    Graph::new(
        n,
        (0..n - 1).map(|i| {
            if i == n - 2 {
                Edge::red(i, i + 1)
            } else {
                Edge::blue(i, i + 1)
            }
        }),
    )
    .expect("Graph should build in test")
}

#[test]
fn test_timeout_stops_search_midway() {
    let n = 1000;
    let graph = red_tail_path(n);

    // Every blue edge is crossed at least once, so the red edge is bounced on
    // until red outnumbers blue: n - 2 blue, n - 1 red.
    assert_eq!(
        solve(&graph, Constraint::Many, 0, n - 1),
        PathResult::Distance(2 * n - 3)
    );

    let runner = BoundedRunner::new(Some(Duration::from_millis(1)));
    assert_eq!(
        runner
            .solve(&graph, Constraint::Many, 0, n - 1)
            .expect("Endpoints should be valid in test"),
        PathResult::Inconclusive
    );

    // The aborted search leaves nothing behind; the graph answers again.
    assert_eq!(
        solve(&graph, Constraint::Many, 0, n - 1),
        PathResult::Distance(2 * n - 3)
    );
}

#[test]
fn test_edge_to_missing_vertex_is_rejected() {
    let err = Graph::new(3, [Edge::blue(0, 1), Edge::red(1, 3)])
        .expect_err("Vertex 3 is out of range");
    assert!(matches!(
        err,
        MalformedInputError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3,
            ..
        }
    ));
}

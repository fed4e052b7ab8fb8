use crate::{Edge, Error, Side, classify, edges_clockwise, is_clockwise};

const SQUARE_CW: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
const SQUARE_CCW: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

#[test]
fn classify_reports_side_of_directed_edge() {
    let edge = Edge::new([0.0, 0.0], [1.0, 0.0]);
    assert_eq!(classify(&edge, [0.5, 1.0], 1.0e-6), Side::Left);
    assert_eq!(classify(&edge, [0.5, -1.0], 1.0e-6), Side::Right);
    assert_eq!(classify(&edge, [3.0, 0.0], 1.0e-6), Side::Colinear);
    assert_eq!(classify(&edge, [-2.0, 0.0], 1.0e-6), Side::Colinear);
}

#[test]
fn classify_treats_near_zero_cross_as_colinear() {
    let edge = Edge::new([0.0, 0.0], [1.0, 0.0]);
    assert_eq!(classify(&edge, [2.0, 1.0e-8], 1.0e-6), Side::Colinear);
    assert_eq!(classify(&edge, [2.0, 1.0e-8], 0.0), Side::Left);
}

#[test]
fn classify_is_antisymmetric_under_edge_reversal() {
    let edges = [
        Edge::new([0.0, 0.0], [1.0, 0.0]),
        Edge::new([-3.0, 2.0], [4.0, -1.5]),
        Edge::new([0.25, 0.75], [0.25, -8.0]),
    ];
    let points = [[0.3, 0.9], [-5.0, -5.0], [10.0, 0.1], [1.0, -2.0]];

    for edge in &edges {
        for &p in &points {
            let forward = classify(edge, p, 1.0e-6);
            let backward = classify(&edge.reversed(), p, 1.0e-6);
            assert_ne!(forward, Side::Colinear);
            assert_eq!(forward, backward.opposite(), "edge {edge:?} point {p:?}");
        }
    }
}

#[test]
fn is_clockwise_detects_both_windings() {
    assert_eq!(is_clockwise(&SQUARE_CW, 1.0e-6), Ok(true));
    assert_eq!(is_clockwise(&SQUARE_CCW, 1.0e-6), Ok(false));
}

#[test]
fn is_clockwise_skips_leading_colinear_points() {
    let polygon = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, -1.0]];
    assert_eq!(is_clockwise(&polygon, 1.0e-6), Ok(true));
}

#[test]
fn is_clockwise_rejects_colinear_and_short_input() {
    let line = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [-4.0, -4.0]];
    assert_eq!(is_clockwise(&line, 1.0e-6), Err(Error::DegenerateInput));

    let pair = [[0.0, 0.0], [1.0, 1.0]];
    assert_eq!(
        is_clockwise(&pair, 1.0e-6),
        Err(Error::InvalidInput {
            context: "winding test",
            count: 2
        })
    );
}

#[test]
fn edges_clockwise_keeps_clockwise_input_order() {
    let edges = edges_clockwise(&SQUARE_CW, 1.0e-6).unwrap();
    assert_eq!(
        edges,
        vec![
            Edge::new([0.0, 0.0], [0.0, 1.0]),
            Edge::new([0.0, 1.0], [1.0, 1.0]),
            Edge::new([1.0, 1.0], [1.0, 0.0]),
            Edge::new([1.0, 0.0], [0.0, 0.0]),
        ]
    );
}

#[test]
fn edges_clockwise_reverses_counter_clockwise_input() {
    let edges = edges_clockwise(&SQUARE_CCW, 1.0e-6).unwrap();
    assert_eq!(edges.len(), 4);

    for (i, edge) in edges.iter().enumerate() {
        let next = &edges[(i + 1) % edges.len()];
        assert_eq!(edge.p2, next.p1, "edges must chain");
        for &p in &SQUARE_CCW {
            assert_ne!(classify(edge, p, 1.0e-6), Side::Left, "{p:?} left of {edge:?}");
        }
    }
    assert_eq!(edges[0], Edge::new([0.0, 1.0], [1.0, 1.0]));
}

use crate::Vertex;

pub(crate) fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1.0e-4,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

pub(crate) fn assert_xy(actual: [f32; 2], expected: [f32; 2]) {
    assert_approx(actual[0], expected[0]);
    assert_approx(actual[1], expected[1]);
}

pub(crate) fn vertices(points: &[[f32; 2]]) -> Vec<Vertex> {
    points.iter().map(|p| Vertex::from_xy(p[0], p[1])).collect()
}

/// Shoelace area; positive for counter-clockwise (y up).
pub(crate) fn signed_area(points: &[[f32; 2]]) -> f32 {
    let n = points.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a[0] * b[1] - b[0] * a[1];
    }
    twice * 0.5
}

pub(crate) fn positions(vertices: &[Vertex]) -> Vec<[f32; 2]> {
    vertices.iter().map(Vertex::xy).collect()
}

pub(crate) fn contains_xy(haystack: &[[f32; 2]], needle: [f32; 2]) -> bool {
    haystack
        .iter()
        .any(|p| (p[0] - needle[0]).abs() <= 1.0e-4 && (p[1] - needle[1]).abs() <= 1.0e-4)
}

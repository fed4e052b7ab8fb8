use crate::test_util::{assert_approx, positions, signed_area, vertices};
use crate::{Error, Triangulator, Vertex};
use std::collections::BTreeSet;

fn regular_polygon(n: usize, clockwise: bool) -> Vec<Vertex> {
    let mut points: Vec<[f32; 2]> = (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            [angle.cos() * 2.0, angle.sin() * 2.0]
        })
        .collect();
    if clockwise {
        points.reverse();
    }
    vertices(&points)
}

fn triangle_area(polygon: &[Vertex], t: [u32; 3]) -> f32 {
    let xy = t.map(|i| polygon[i as usize].xy());
    signed_area(&xy)
}

#[test]
fn triangulate_convex_polygons_yields_n_minus_two_triangles() {
    let triangulator = Triangulator;
    for n in 3..=12 {
        for clockwise in [false, true] {
            let polygon = regular_polygon(n, clockwise);
            let triangles = triangulator.triangulate(&polygon).unwrap();

            assert_eq!(triangles.len(), n - 2, "n = {n}");
            let references: Vec<u32> = triangles.iter().flatten().copied().collect();
            assert_eq!(references.len(), 3 * (n - 2));
            let distinct: BTreeSet<u32> = references.iter().copied().collect();
            assert_eq!(distinct.len(), n);

            let polygon_area = signed_area(&positions(&polygon));
            let mut covered = 0.0;
            for &t in &triangles {
                let area = triangle_area(&polygon, t);
                assert_eq!(
                    area > 0.0,
                    polygon_area > 0.0,
                    "triangle {t:?} flips winding"
                );
                covered += area;
            }
            assert_approx(covered, polygon_area);
        }
    }
}

#[test]
fn triangulate_clockwise_pentagon_into_three_triangles() {
    let pentagon = vertices(&[
        [0.0, 1.0],
        [1.0, 1.5],
        [2.0, 1.0],
        [1.5, 0.0],
        [0.5, 0.0],
    ]);
    assert!(signed_area(&positions(&pentagon)) < 0.0);

    let triangles = Triangulator.triangulate(&pentagon).unwrap();
    assert_eq!(triangles, vec![[0, 1, 4], [1, 2, 3], [3, 4, 1]]);

    let total: f32 = triangles
        .iter()
        .map(|&t| triangle_area(&pentagon, t))
        .sum();
    assert_approx(total, signed_area(&positions(&pentagon)));
}

#[test]
fn triangulate_small_inputs() {
    let triangle = vertices(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]);
    assert_eq!(Triangulator.triangulate(&triangle), Ok(vec![[0, 1, 2]]));

    let quad = vertices(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
    assert_eq!(
        Triangulator.triangulate(&quad),
        Ok(vec![[0, 1, 2], [2, 3, 0]])
    );

    assert_eq!(
        Triangulator.triangulate(&triangle[..2]),
        Err(Error::InvalidInput {
            context: "triangulation",
            count: 2
        })
    );
}

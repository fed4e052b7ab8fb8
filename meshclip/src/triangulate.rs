use crate::{Error, Vertex, error::require_polygon};

/// Fan triangulator for the convex polygons the clipper produces.
///
/// Input must be convex. Clipping a convex shape against a convex region always yields a convex
/// polygon, so the pipeline never hands this anything else; concave input produces overlapping
/// triangles rather than an error.
#[derive(Copy, Clone, Debug, Default)]
pub struct Triangulator;

impl Triangulator {
    /// Returns `polygon.len() - 2` triangles indexing into `polygon`, wound like the input.
    pub fn triangulate(&self, polygon: &[Vertex]) -> Result<Vec<[u32; 3]>, Error> {
        require_polygon("triangulation", polygon.len())?;
        Ok(triangulate_convex(polygon.len()))
    }
}

pub(crate) fn triangulate_convex(vertex_count: usize) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(vertex_count.saturating_sub(2));
    if vertex_count == 3 {
        triangles.push([0, 1, 2]);
        return triangles;
    }

    let last = vertex_count as u32 - 1;
    let mut first = 0u32;
    // Ears are cut off the front; the remaining polygon is always [first..=last].
    while last - first + 1 > 4 {
        triangles.push([first, first + 1, last]);
        first += 1;
    }

    let [a, b, c, d] = [first, first + 1, first + 2, first + 3];
    triangles.push([a, b, c]);
    triangles.push([c, d, a]);
    triangles
}

use crate::{Error, Vertex, error::require_polygon};

/// Anything with a planar position the half-plane tests can read.
pub trait Planar {
    fn xy(&self) -> [f32; 2];
}

impl Planar for [f32; 2] {
    fn xy(&self) -> [f32; 2] {
        *self
    }
}

impl Planar for Vertex {
    fn xy(&self) -> [f32; 2] {
        Vertex::xy(self)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
    Colinear,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Colinear => Self::Colinear,
        }
    }
}

/// A directed edge; the half-plane to its right (and the edge itself) is "inside".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub p1: [f32; 2],
    pub p2: [f32; 2],
}

impl Edge {
    pub const fn new(p1: [f32; 2], p2: [f32; 2]) -> Self {
        Self { p1, p2 }
    }

    pub fn from_vertices(a: &Vertex, b: &Vertex) -> Self {
        Self::new(a.xy(), b.xy())
    }

    pub fn reversed(self) -> Self {
        Self::new(self.p2, self.p1)
    }

    pub fn direction(&self) -> [f32; 2] {
        [self.p2[0] - self.p1[0], self.p2[1] - self.p1[1]]
    }
}

pub(crate) fn cross(a: [f32; 2], b: [f32; 2]) -> f32 {
    a[0] * b[1] - a[1] * b[0]
}

pub fn classify(edge: &Edge, point: [f32; 2], epsilon: f32) -> Side {
    let to_point = [point[0] - edge.p2[0], point[1] - edge.p2[1]];
    let c = cross(edge.direction(), to_point);
    if c.abs() <= epsilon {
        Side::Colinear
    } else if c < 0.0 {
        Side::Right
    } else {
        Side::Left
    }
}

/// Resolves winding from the first point that is not colinear with the edge `(p0, p1)`.
///
/// Only meaningful for convex polygons; concave input may report either winding.
pub fn is_clockwise<P: Planar>(points: &[P], epsilon: f32) -> Result<bool, Error> {
    require_polygon("winding test", points.len())?;

    let edge = Edge::new(points[0].xy(), points[1].xy());
    for point in &points[2..] {
        match classify(&edge, point.xy(), epsilon) {
            Side::Left => return Ok(false),
            Side::Right => return Ok(true),
            Side::Colinear => {}
        }
    }
    Err(Error::DegenerateInput)
}

/// Returns the polygon's edges in clockwise order without reordering `points`.
pub fn edges_clockwise<P: Planar>(points: &[P], epsilon: f32) -> Result<Vec<Edge>, Error> {
    let n = points.len();
    let clockwise = is_clockwise(points, epsilon)?;

    let mut edges = Vec::with_capacity(n);
    if clockwise {
        for i in 0..n {
            edges.push(Edge::new(points[i].xy(), points[(i + 1) % n].xy()));
        }
    } else {
        for i in (0..n).rev() {
            let previous = (i + n - 1) % n;
            edges.push(Edge::new(points[previous].xy(), points[i].xy()).reversed());
        }
    }
    Ok(edges)
}

use crate::Vertex;

/// Destination for clipped geometry.
///
/// Indices returned by [`MeshSink::append_vertex`] are 0-based and follow append order; callers
/// that compose several shapes reference them directly.
pub trait MeshSink {
    fn append_vertex(&mut self, vertex: Vertex) -> u32;
    fn append_triangle(&mut self, i0: u32, i1: u32, i2: u32);
    fn vertex_count(&self) -> usize;
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshBuffer {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// The three vertices of every triangle, resolved through the index buffer.
    pub fn triangle_vertices(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.triangles().map(|t| t.map(|i| self.vertices[i as usize]))
    }
}

impl MeshSink for MeshBuffer {
    fn append_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    fn append_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Appends `vertices` and the triangles indexing into them, rebasing the local indices onto
/// whatever the sink already holds. Returns the number of triangles written.
pub fn append_indexed<M: MeshSink + ?Sized>(
    mesh: &mut M,
    vertices: &[Vertex],
    triangles: &[[u32; 3]],
) -> usize {
    if vertices.is_empty() || triangles.is_empty() {
        return 0;
    }

    let base = mesh.append_vertex(vertices[0]);
    for v in &vertices[1..] {
        mesh.append_vertex(*v);
    }

    for t in triangles {
        mesh.append_triangle(base + t[0], base + t[1], base + t[2]);
    }
    triangles.len()
}

use crate::{
    ClipConfig, ClipRegion, DebugColorProvider, Error, MeshSink, NoDebugColor, PolygonClipper,
    Rect, Triangulator, Vertex, append_indexed, clip_rect_uv, error::require_polygon,
};
use std::ops::AddAssign;

/// What a pipeline call contributed to the mesh.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Emitted {
    pub vertices: usize,
    pub triangles: usize,
    /// Shapes whose clip result had 1 or 2 vertices and were dropped.
    pub topology_warnings: usize,
}

impl Emitted {
    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }
}

impl AddAssign for Emitted {
    fn add_assign(&mut self, rhs: Self) {
        self.vertices += rhs.vertices;
        self.triangles += rhs.triangles;
        self.topology_warnings += rhs.topology_warnings;
    }
}

/// A shape that has been classified and clipped but not yet written.
enum Prepared {
    Nothing,
    UnexpectedTopology(usize),
    Mesh {
        vertices: Vec<Vertex>,
        triangles: Vec<[u32; 3]>,
        clipped: bool,
    },
}

/// Clips triangles, quads and convex polygons to a [`ClipRegion`] and writes the visible part
/// into a [`MeshSink`].
///
/// Shapes fully inside the region are copied through untouched. Everything else goes through
/// [`PolygonClipper`]; the result is always convex, which is what lets [`Triangulator`] fan it.
#[derive(Clone, Debug, Default)]
pub struct ClipPipeline<D = NoDebugColor> {
    clipper: PolygonClipper,
    triangulator: Triangulator,
    debug: D,
}

impl ClipPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClipConfig) -> Self {
        Self::with_debug_colors(config, NoDebugColor)
    }
}

impl<D: DebugColorProvider> ClipPipeline<D> {
    pub fn with_debug_colors(config: ClipConfig, debug: D) -> Self {
        Self {
            clipper: PolygonClipper::with_config(config),
            triangulator: Triangulator,
            debug,
        }
    }

    pub fn config(&self) -> &ClipConfig {
        self.clipper.config()
    }

    pub fn debug_colors(&self) -> &D {
        &self.debug
    }

    pub fn add_triangle_clipped<M: MeshSink + ?Sized>(
        &mut self,
        mesh: &mut M,
        triangle: &[Vertex; 3],
        region: &ClipRegion,
    ) -> Result<Emitted, Error> {
        let prepared = self.prepare(triangle, region)?;
        Ok(self.emit(mesh, prepared))
    }

    /// Splits the quad along its `q0`-`q2` diagonal and clips both halves. Both halves are
    /// clipped before anything is written, so an error leaves `mesh` untouched.
    pub fn add_quad_clipped<M: MeshSink + ?Sized>(
        &mut self,
        mesh: &mut M,
        quad: &[Vertex; 4],
        region: &ClipRegion,
    ) -> Result<Emitted, Error> {
        let [q0, q1, q2, q3] = *quad;
        let first = self.prepare(&[q0, q1, q2], region)?;
        let second = self.prepare(&[q2, q3, q0], region)?;

        let mut emitted = self.emit(mesh, first);
        emitted += self.emit(mesh, second);
        Ok(emitted)
    }

    /// Clips a convex polygon. Concave input is outside the contract.
    pub fn add_polygon_clipped<M: MeshSink + ?Sized>(
        &mut self,
        mesh: &mut M,
        polygon: &[Vertex],
        region: &ClipRegion,
    ) -> Result<Emitted, Error> {
        require_polygon("clipped polygon", polygon.len())?;
        let prepared = self.prepare(polygon, region)?;
        Ok(self.emit(mesh, prepared))
    }

    /// Axis-aligned fast path: writes the visible part of `rect` as one quad with `uv` remapped
    /// to match. Attributes other than position and `uv0` come from `template`.
    pub fn add_rect_clipped<M: MeshSink + ?Sized>(
        &mut self,
        mesh: &mut M,
        rect: Rect,
        uv: Rect,
        clip: &Rect,
        template: &Vertex,
    ) -> Emitted {
        let Some(visible) = clip_rect_uv(rect, uv, *clip) else {
            log::trace!("rect {rect:?} lies outside clip rect {clip:?}");
            return Emitted::default();
        };

        let clipped = visible.rect != rect;
        let prepared = Prepared::Mesh {
            vertices: visible.vertices(template).to_vec(),
            triangles: vec![[0, 1, 2], [2, 3, 0]],
            clipped,
        };
        self.emit(mesh, prepared)
    }

    fn prepare(&mut self, subject: &[Vertex], region: &ClipRegion) -> Result<Prepared, Error> {
        // A collapsed rect has no area to show anything in and no winding to clip against.
        if let ClipRegion::Rect(rect) = region {
            if rect.is_empty() {
                log::trace!("clip rect {rect:?} has no area");
                return Ok(Prepared::Nothing);
            }
        }

        if subject.iter().all(|v| region.contains(v.xy())) {
            log::trace!("{}-gon accepted without clipping", subject.len());
            let triangles = self.triangulator.triangulate(subject)?;
            return Ok(Prepared::Mesh {
                vertices: subject.to_vec(),
                triangles,
                clipped: false,
            });
        }

        let vertices = self.clipper.clip(subject, &region.points())?;
        log::trace!(
            "{}-gon clipped to {} vertices",
            subject.len(),
            vertices.len()
        );

        let triangles = match vertices.len() {
            0 => return Ok(Prepared::Nothing),
            n @ (1 | 2) => return Ok(Prepared::UnexpectedTopology(n)),
            3 => vec![[0, 1, 2]],
            4 => vec![[0, 1, 2], [2, 3, 0]],
            _ => self.triangulator.triangulate(&vertices)?,
        };

        Ok(Prepared::Mesh {
            vertices,
            triangles,
            clipped: true,
        })
    }

    fn emit<M: MeshSink + ?Sized>(&self, mesh: &mut M, prepared: Prepared) -> Emitted {
        match prepared {
            Prepared::Nothing => Emitted::default(),
            Prepared::UnexpectedTopology(count) => {
                log::warn!("clip produced {count} vertices, expected 0 or at least 3; dropping shape");
                Emitted {
                    topology_warnings: 1,
                    ..Emitted::default()
                }
            }
            Prepared::Mesh {
                mut vertices,
                triangles,
                clipped,
            } => {
                if clipped {
                    if let Some(color) = self.debug.highlight_color() {
                        for v in &mut vertices {
                            v.color = color;
                        }
                    }
                }
                let triangles = append_indexed(mesh, &vertices, &triangles);
                Emitted {
                    vertices: vertices.len(),
                    triangles,
                    topology_warnings: 0,
                }
            }
        }
    }
}

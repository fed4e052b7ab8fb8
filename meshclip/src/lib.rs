//! Clipping and triangulation of attributed 2D shapes.
//!
//! Triangles, quads and convex polygons carrying positions, two uv channels, colors and normals
//! are clipped against an axis-aligned rect or a convex polygon with Sutherland-Hodgman, every
//! attribute interpolated at the cut, and the visible part is written to a mesh as triangles.
//!
//! This crate does no rendering itself; output goes to any [`MeshSink`].

#![forbid(unsafe_code)]

mod clipper;
mod config;
mod debug;
mod error;
mod interpolate;
mod mesh;
mod orientation;
mod pipeline;
mod rect;
mod triangulate;
mod vertex;

pub use clipper::*;
pub use config::*;
pub use debug::*;
pub use error::*;
pub use interpolate::*;
pub use mesh::*;
pub use orientation::*;
pub use pipeline::*;
pub use rect::*;
pub use triangulate::*;
pub use vertex::*;

#[cfg(test)]
mod test_util;

#[cfg(test)]
mod orientation_tests;



#[cfg(test)]
mod triangulate_tests;

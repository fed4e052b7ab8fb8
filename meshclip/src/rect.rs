use crate::{
    Error, Vertex,
    error::require_polygon,
    orientation::{Edge, Side, classify, is_clockwise},
};
use std::borrow::Cow;

/// Axis-aligned rectangle given by its min and max corners.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const UNIT: Self = Self {
        min: [0.0, 0.0],
        max: [1.0, 1.0],
    };

    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_position_size(position: [f32; 2], size: [f32; 2]) -> Self {
        Self::new(position, [position[0] + size[0], position[1] + size[1]])
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// True when the rect covers no positive area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Inclusive on every side.
    pub fn contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.min[0]
            && point[0] <= self.max[0]
            && point[1] >= self.min[1]
            && point[1] <= self.max[1]
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let out = Rect::new(
            [self.min[0].max(other.min[0]), self.min[1].max(other.min[1])],
            [self.max[0].min(other.max[0]), self.max[1].min(other.max[1])],
        );
        if out.is_empty() {
            return None;
        }
        Some(out)
    }

    /// Corners in the order min-min, min-max, max-max, max-min (clockwise with y up).
    pub fn corners(&self) -> [[f32; 2]; 4] {
        [
            [self.min[0], self.min[1]],
            [self.min[0], self.max[1]],
            [self.max[0], self.max[1]],
            [self.max[0], self.min[1]],
        ]
    }
}

#[cfg(feature = "glam")]
impl Rect {
    pub fn from_glam(min: glam::Vec2, max: glam::Vec2) -> Self {
        Self::new(min.to_array(), max.to_array())
    }
}

/// The area shapes are clipped to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipRegion {
    Rect(Rect),
    /// A convex polygon in either winding; [`ClipRegion::polygon`] validates and stores it
    /// clockwise. Convexity is not checked.
    Polygon(Vec<[f32; 2]>),
}

impl ClipRegion {
    pub fn polygon(points: &[[f32; 2]]) -> Result<Self, Error> {
        require_polygon("clip region", points.len())?;
        let mut points = points.to_vec();
        if !is_clockwise(&points, 0.0)? {
            points.reverse();
        }
        Ok(Self::Polygon(points))
    }

    pub fn points(&self) -> Cow<'_, [[f32; 2]]> {
        match self {
            Self::Rect(rect) => Cow::Owned(rect.corners().to_vec()),
            Self::Polygon(points) => Cow::Borrowed(points.as_slice()),
        }
    }

    /// Inclusive containment; points on the boundary are inside.
    pub fn contains(&self, point: [f32; 2]) -> bool {
        match self {
            Self::Rect(rect) => rect.contains(point),
            Self::Polygon(points) => {
                let n = points.len();
                let sides = (0..n).map(|i| {
                    let edge = Edge::new(points[i], points[(i + 1) % n]);
                    classify(&edge, point, 0.0)
                });
                // Inside means on the same side of every edge, whichever way the points wind.
                let (mut left, mut right) = (false, false);
                for side in sides {
                    match side {
                        Side::Left => left = true,
                        Side::Right => right = true,
                        Side::Colinear => {}
                    }
                }
                !(left && right)
            }
        }
    }
}

impl From<Rect> for ClipRegion {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

/// Result of the rect-vs-rect fast path: the visible rect and its remapped uv rect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectClip {
    pub rect: Rect,
    pub uv: Rect,
}

impl RectClip {
    /// The four corners in [`Rect::corners`] order with matching uvs. Everything except
    /// `position[0..2]` and `uv0` is taken from `template`.
    pub fn vertices(&self, template: &Vertex) -> [Vertex; 4] {
        let positions = self.rect.corners();
        let uvs = self.uv.corners();
        std::array::from_fn(|i| {
            let mut v = *template;
            v.position = [positions[i][0], positions[i][1], template.position[2]];
            v.uv0 = uvs[i];
            v
        })
    }
}

/// Clips `source` to `clip` and shrinks `uv` by the fraction cut from each side.
///
/// Each of the four sides is remapped independently, so a rect clipped only on its left keeps
/// its right uv bound untouched.
pub fn clip_rect_uv(source: Rect, uv: Rect, clip: Rect) -> Option<RectClip> {
    let rect = source.intersect(&clip)?;

    let width = source.width();
    let height = source.height();
    let uv_width = uv.width();
    let uv_height = uv.height();

    let uv = Rect::new(
        [
            uv.min[0] + (rect.min[0] - source.min[0]) / width * uv_width,
            uv.min[1] + (rect.min[1] - source.min[1]) / height * uv_height,
        ],
        [
            uv.max[0] - (source.max[0] - rect.max[0]) / width * uv_width,
            uv.max[1] - (source.max[1] - rect.max[1]) / height * uv_height,
        ],
    );

    Some(RectClip { rect, uv })
}

/// A mesh vertex with every attribute the clipper carries through interpolation.
///
/// Clip decisions only look at `position[0..2]`; `position[2]` is interpolated like any other
/// attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv0: [f32; 2],
    pub uv1: [f32; 2],
    pub color: [f32; 4],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const DEFAULT: Self = Self {
        position: [0.0, 0.0, 0.0],
        uv0: [0.0, 0.0],
        uv1: [0.0, 0.0],
        color: Self::WHITE,
        normal: [0.0, 0.0, -1.0],
    };

    pub const fn new(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::DEFAULT
        }
    }

    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new([x, y, 0.0])
    }

    pub const fn with_uv0(mut self, uv0: [f32; 2]) -> Self {
        self.uv0 = uv0;
        self
    }

    pub const fn with_uv1(mut self, uv1: [f32; 2]) -> Self {
        self.uv1 = uv1;
        self
    }

    pub const fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub const fn with_normal(mut self, normal: [f32; 3]) -> Self {
        self.normal = normal;
        self
    }

    pub fn xy(&self) -> [f32; 2] {
        [self.position[0], self.position[1]]
    }

    /// Interpolates every attribute at the same parameter `t`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: lerp_array(self.position, other.position, t),
            uv0: lerp_array(self.uv0, other.uv0, t),
            uv1: lerp_array(self.uv1, other.uv1, t),
            color: lerp_array(self.color, other.color, t),
            normal: lerp_array(self.normal, other.normal, t),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "glam")]
impl Vertex {
    pub fn from_glam(position: glam::Vec3) -> Self {
        Self::new(position.to_array())
    }

    pub fn position_glam(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.position)
    }
}

pub(crate) fn lerp_array<const N: usize>(a: [f32; N], b: [f32; N], t: f32) -> [f32; N] {
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

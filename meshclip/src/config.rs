/// What the clipper does when a segment crosses a clip edge it is (numerically) parallel to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParallelCrossing {
    /// Abort the clip with [`crate::Error::DegenerateGeometry`].
    #[default]
    Fail,
    /// Treat the crossing as lying on the inside endpoint and skip the intersection vertex.
    KeepInsideEndpoint,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipConfig {
    /// Cross products with a magnitude at or below this are classified as colinear.
    pub orientation_epsilon: f32,
    /// Perp-dot magnitude below which two lines are considered parallel.
    pub parallel_epsilon: f32,
    pub parallel_crossing: ParallelCrossing,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            orientation_epsilon: 1.0e-6,
            parallel_epsilon: 1.0e-6,
            parallel_crossing: ParallelCrossing::Fail,
        }
    }
}

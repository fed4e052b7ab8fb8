use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{context} requires at least 3 points, got {count}")]
    InvalidInput { context: &'static str, count: usize },

    #[error("cannot resolve winding: all polygon points are colinear")]
    DegenerateInput,

    /// A segment that straddles clip edge `edge` is parallel to it. Either the input sits exactly
    /// on the clip boundary within tolerance, or the clip polygon is not convex.
    #[error("segment straddling clip edge {edge} is parallel to it")]
    DegenerateGeometry { edge: usize },
}

pub(crate) fn require_polygon(context: &'static str, count: usize) -> Result<(), Error> {
    if count < 3 {
        return Err(Error::InvalidInput { context, count });
    }
    Ok(())
}

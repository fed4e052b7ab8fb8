use crate::{
    ClipConfig, Error, ParallelCrossing, Vertex,
    error::require_polygon,
    interpolate::intersect,
    orientation::{Edge, Side, classify, edges_clockwise, is_clockwise},
};

/// Sutherland-Hodgman clipper for attributed polygons against a convex clip polygon.
///
/// The two scratch buffers are reused between calls to avoid reallocating the working lists;
/// they are emptied before every call returns.
#[derive(Clone, Debug, Default)]
pub struct PolygonClipper {
    config: ClipConfig,
    scratch: Vec<Vertex>,
    scratch2: Vec<Vertex>,
}

impl PolygonClipper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClipConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Clips `subject` against the convex polygon `clip`.
    ///
    /// The result is wound clockwise and may be empty or hold fewer than 3 vertices; deciding
    /// what to do with such a result is up to the caller. Either winding is accepted for both
    /// inputs.
    pub fn clip(&mut self, subject: &[Vertex], clip: &[[f32; 2]]) -> Result<Vec<Vertex>, Error> {
        require_polygon("clip subject", subject.len())?;
        require_polygon("clip polygon", clip.len())?;

        let result = clip_polygon(
            &self.config,
            subject,
            clip,
            &mut self.scratch,
            &mut self.scratch2,
        );
        self.scratch.clear();
        self.scratch2.clear();
        result
    }
}

fn clip_polygon(
    config: &ClipConfig,
    subject: &[Vertex],
    clip: &[[f32; 2]],
    scratch: &mut Vec<Vertex>,
    scratch2: &mut Vec<Vertex>,
) -> Result<Vec<Vertex>, Error> {
    let epsilon = config.orientation_epsilon;
    let subject_clockwise = is_clockwise(subject, epsilon)?;
    let edges = edges_clockwise(clip, epsilon)?;

    let mut input: &mut Vec<Vertex> = scratch;
    let mut output: &mut Vec<Vertex> = scratch2;
    input.clear();
    output.clear();
    if subject_clockwise {
        input.extend_from_slice(subject);
    } else {
        input.extend(subject.iter().rev().copied());
    }

    for (index, edge) in edges.iter().enumerate() {
        if input.is_empty() {
            break;
        }
        output.clear();
        clip_against_edge(config, input, output, edge, index)?;
        std::mem::swap(&mut input, &mut output);
    }

    Ok(input.clone())
}

fn clip_against_edge(
    config: &ClipConfig,
    input: &[Vertex],
    output: &mut Vec<Vertex>,
    edge: &Edge,
    edge_index: usize,
) -> Result<(), Error> {
    let epsilon = config.orientation_epsilon;
    let inside = |v: &Vertex| classify(edge, v.xy(), epsilon) != Side::Left;

    let Some(mut previous) = input.last() else {
        return Ok(());
    };
    let mut previous_inside = inside(previous);

    for current in input {
        let current_inside = inside(current);
        match (previous_inside, current_inside) {
            (true, true) => output.push(*current),
            (false, true) => {
                if let Some(v) = crossing(config, previous, current, edge, edge_index)? {
                    output.push(v);
                }
                output.push(*current);
            }
            (true, false) => {
                if let Some(v) = crossing(config, previous, current, edge, edge_index)? {
                    output.push(v);
                }
            }
            (false, false) => {}
        }
        previous = current;
        previous_inside = current_inside;
    }

    Ok(())
}

fn crossing(
    config: &ClipConfig,
    previous: &Vertex,
    current: &Vertex,
    edge: &Edge,
    edge_index: usize,
) -> Result<Option<Vertex>, Error> {
    if let Some(v) = intersect(previous, current, edge.p1, edge.p2, config.parallel_epsilon) {
        return Ok(Some(v));
    }

    match config.parallel_crossing {
        ParallelCrossing::Fail => {
            log::debug!(
                "segment {:?} -> {:?} straddles clip edge {edge_index} {:?} but is parallel to it",
                previous.xy(),
                current.xy(),
                edge,
            );
            Err(Error::DegenerateGeometry { edge: edge_index })
        }
        ParallelCrossing::KeepInsideEndpoint => Ok(None),
    }
}

use crate::{Vertex, orientation::cross};

/// Intersects the line through `start`/`end` with the line through `clip_a`/`clip_b`.
///
/// The hit is converted back into a fraction of the subject segment and every attribute,
/// including `position[2]`, is interpolated at that fraction. Returns `None` when the lines are
/// parallel within `epsilon`.
pub fn intersect(
    start: &Vertex,
    end: &Vertex,
    clip_a: [f32; 2],
    clip_b: [f32; 2],
    epsilon: f32,
) -> Option<Vertex> {
    let s = start.xy();
    let e = end.xy();
    let d1 = [e[0] - s[0], e[1] - s[1]];
    let d2 = [clip_b[0] - clip_a[0], clip_b[1] - clip_a[1]];

    let denom = cross(d1, d2);
    if denom.abs() < epsilon {
        return None;
    }

    let t = cross([clip_a[0] - s[0], clip_a[1] - s[1]], d2) / denom;
    let hit = [s[0] + d1[0] * t, s[1] + d1[1] * t];

    let length = d1[0].hypot(d1[1]);
    let pct = if length > 0.0 {
        (hit[0] - s[0]).hypot(hit[1] - s[1]) / length
    } else {
        1.0
    };

    Some(start.lerp(end, pct))
}

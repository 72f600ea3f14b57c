//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, rgba};
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let [tl, tr, br, bl] = rect.corners();
    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tl.x, tl.y, color),
    ]
}

/// Linear alpha ramp for `count` trail samples, oldest first.
/// The oldest sample is the most transparent, the newest reaches `max_alpha`.
pub fn trail_alphas(count: usize, max_alpha: f32) -> impl Iterator<Item = f32> {
    (0..count).map(move |i| max_alpha * (i + 1) as f32 / count as f32)
}

/// Ghost boxes at each recorded position (`samples` oldest first)
pub fn rewind_trail(samples: &[Vec2], size: Vec2, rgb: [u8; 3], max_alpha: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(samples.len() * 6);
    for (pos, alpha) in samples.iter().zip(trail_alphas(samples.len(), max_alpha)) {
        let ghost = Rect { pos: *pos, size };
        vertices.extend_from_slice(&rect(&ghost, rgba(rgb, alpha)));
    }
    vertices
}

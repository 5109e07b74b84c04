//! Primitive shapes built before the merge: domes and the base plate.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::config::{MAX_DOME_RINGS, MAX_DOME_SEGMENTS, MIN_DOME_SEGMENTS};

/// Vertices in a [`cuboid`].
pub const CUBOID_VERTICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Dome,
    Plate,
}

/// A standalone triangle soup awaiting [`super::Mesh::merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// A closed dome: hemisphere of `radius` stretched along +Y to `height`,
/// with a flat base disc centred on `base`.
///
/// Vertex layout: apex, then `rings` rings of `segments` vertices from the
/// apex down to the rim, then the base centre. `segments` and `rings` are
/// clamped to the range [`crate::Config::validate`] accepts.
#[must_use]
pub fn dome(base: Vec3, radius: f32, height: f32, segments: u32, rings: u32) -> Primitive {
    let segments = segments.clamp(MIN_DOME_SEGMENTS, MAX_DOME_SEGMENTS);
    let rings = rings.clamp(1, MAX_DOME_RINGS);
    let ring_vertex = |ring: u32, seg: u32| 1 + (ring - 1) * segments + (seg % segments);
    let base_center = 1 + rings * segments;

    let mut positions = Vec::with_capacity(dome_vertex_count(segments, rings));
    positions.push(base + Vec3::new(0.0, height, 0.0));
    for ring in 1..=rings {
        #[allow(clippy::cast_precision_loss)]
        let polar = ring as f32 / rings as f32 * FRAC_PI_2;
        let (sin_p, cos_p) = polar.sin_cos();
        // Pin the rim to the base plane; cos(pi/2) is not exactly zero in f32.
        let (sin_p, cos_p) = if ring == rings { (1.0, 0.0) } else { (sin_p, cos_p) };
        for seg in 0..segments {
            #[allow(clippy::cast_precision_loss)]
            let azimuth = seg as f32 / segments as f32 * TAU;
            let (sin_a, cos_a) = azimuth.sin_cos();
            positions.push(base + Vec3::new(radius * sin_p * cos_a, height * cos_p, radius * sin_p * sin_a));
        }
    }
    positions.push(base);

    let mut indices = Vec::with_capacity(segments as usize * 6 * rings as usize);
    for seg in 0..segments {
        indices.extend([0, ring_vertex(1, seg + 1), ring_vertex(1, seg)]);
    }
    for ring in 1..rings {
        for seg in 0..segments {
            let a = ring_vertex(ring, seg);
            let b = ring_vertex(ring, seg + 1);
            let c = ring_vertex(ring + 1, seg);
            let d = ring_vertex(ring + 1, seg + 1);
            indices.extend([a, d, c, a, b, d]);
        }
    }
    for seg in 0..segments {
        indices.extend([base_center, ring_vertex(rings, seg), ring_vertex(rings, seg + 1)]);
    }

    Primitive { kind: PrimitiveKind::Dome, positions, indices }
}

/// Vertices [`dome`] produces for a resolution, after clamping.
#[must_use]
pub fn dome_vertex_count(segments: u32, rings: u32) -> usize {
    let segments = segments.clamp(MIN_DOME_SEGMENTS, MAX_DOME_SEGMENTS) as usize;
    let rings = rings.clamp(1, MAX_DOME_RINGS) as usize;
    rings * segments + 2
}

// Corner `i` has x from bit 0, y from bit 1, z from bit 2. Each face is
// listed counter-clockwise as seen from outside.
const BOX_FACES: [[u32; 4]; 6] = [
    [1, 3, 7, 5], // +X
    [0, 4, 6, 2], // -X
    [2, 6, 7, 3], // +Y
    [0, 1, 5, 4], // -Y
    [4, 5, 7, 6], // +Z
    [0, 2, 3, 1], // -Z
];

/// An axis-aligned box spanning `min`..`max`.
#[must_use]
pub fn cuboid(min: Vec3, max: Vec3) -> Primitive {
    let positions = (0..8u32)
        .map(|i| {
            Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        })
        .collect();
    let indices = BOX_FACES
        .iter()
        .flat_map(|[q0, q1, q2, q3]| [*q0, *q1, *q2, *q0, *q2, *q3])
        .collect();

    Primitive { kind: PrimitiveKind::Plate, positions, indices }
}

#[cfg(test)]
#[path = "primitive_test.rs"]
mod tests;

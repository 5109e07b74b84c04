//! Indexed triangle mesh and the merge step that produces it.

use glam::{Quat, Vec3};
use serde::Serialize;

use super::primitive::Primitive;
use crate::error::CompileError;

/// Shared surface material of the whole model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// Linear RGBA.
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self { base_color: [0.93, 0.92, 0.88, 1.0] }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box around `points`, or `None` when there are none.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |acc, p| Self { min: acc.min.min(*p), max: acc.max.max(*p) }))
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Containment with a tolerance `eps` on every side.
    #[must_use]
    pub fn contains(&self, point: Vec3, eps: f32) -> bool {
        point.cmpge(self.min - Vec3::splat(eps)).all() && point.cmple(self.max + Vec3::splat(eps)).all()
    }
}

/// One merged triangle mesh with a single material.
///
/// Triangles are wound counter-clockwise when seen from outside.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    pub name: String,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    material: Material,
}

impl Mesh {
    /// Merge primitives into one mesh. The primitives are consumed and their
    /// buffers released as soon as they have been copied.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::MeshTooLarge`] when the combined vertex count
    /// does not fit a `u32` index.
    pub fn merge(primitives: Vec<Primitive>, material: Material) -> Result<Self, CompileError> {
        let vertex_total: usize = primitives.iter().map(|p| p.positions.len()).sum();
        let index_total = primitives.iter().map(|p| p.indices.len()).sum();
        let too_large = || CompileError::MeshTooLarge { vertices: vertex_total };
        u32::try_from(vertex_total).map_err(|_| too_large())?;

        let mut mesh = Self {
            name: String::new(),
            positions: Vec::with_capacity(vertex_total),
            indices: Vec::with_capacity(index_total),
            material,
        };

        for primitive in primitives {
            let base = u32::try_from(mesh.positions.len()).map_err(|_| too_large())?;
            mesh.indices.extend(primitive.indices.iter().map(|i| i + base));
            mesh.positions.extend(primitive.positions);
        }

        Ok(mesh)
    }

    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Triangles as corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [self.positions[t[0] as usize], self.positions[t[1] as usize], self.positions[t[2] as usize]]
        })
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.positions)
    }

    pub(crate) fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    pub(crate) fn rotate(&mut self, rotation: Quat) {
        for p in &mut self.positions {
            *p = rotation * *p;
        }
    }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod tests;

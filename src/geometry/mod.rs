//! Geometry synthesizer: placed cells to one oriented, centred mesh.
//!
//! Domes and the plate are built as standalone [`Primitive`]s, merged once,
//! then centred on the origin and turned so +Z is up.

pub mod layout;
pub mod mesh;
pub mod primitive;

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

pub use layout::{Footprint, Layout, Plate};
pub use mesh::{Aabb, Material, Mesh};
pub use primitive::{Primitive, PrimitiveKind};

use crate::config::Config;
use crate::emit::PlacedCell;
use crate::error::CompileError;

/// Quarter turn about +X taking the synthesis frame (Y up) to Z up.
#[must_use]
pub fn orientation_fix() -> Quat {
    Quat::from_rotation_x(FRAC_PI_2)
}

/// Result of [`build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Synthesis {
    pub mesh: Mesh,
    /// Dome primitives merged into the mesh.
    pub dot_count: usize,
    /// The plate as sized before centring, `None` for an empty model.
    pub plate: Option<Plate>,
}

/// Build the model for already-placed cells.
///
/// Returns an empty synthesis (no plate, no dots) when no line holds a cell.
/// `config` is assumed valid.
///
/// # Errors
///
/// Returns [`CompileError::MeshTooLarge`] before any dome is built when the
/// dots at this resolution would overflow the mesh index range.
pub fn build(
    cells: &[PlacedCell],
    max_cells_in_line: usize,
    line_count: usize,
    config: &Config,
) -> Result<Synthesis, CompileError> {
    let layout = Layout::new(config.scaled());
    let Some(grid) = layout.footprint(max_cells_in_line, line_count) else {
        return Ok(Synthesis::default());
    };
    let dims = *layout.dims();

    let centers: Vec<Vec3> = cells
        .iter()
        .flat_map(|cell| {
            let origin = layout.cell_origin(cell.column, cell.line);
            cell.pattern.raised_slots().filter_map(move |slot| layout.slot_offset(slot).map(|o| origin + o))
        })
        .collect();

    let vertices = centers
        .len()
        .checked_mul(primitive::dome_vertex_count(dims.dome_segments, dims.dome_rings))
        .and_then(|v| v.checked_add(primitive::CUBOID_VERTICES))
        .unwrap_or(usize::MAX);
    if u32::try_from(vertices).is_err() {
        return Err(CompileError::MeshTooLarge { vertices });
    }

    let footprint = centers.iter().fold(grid, |fp, c| fp.including(*c));
    let plate = Plate::around(&footprint, &dims);

    let mut primitives: Vec<Primitive> = centers
        .iter()
        .map(|c| primitive::dome(*c, dims.dot_radius, dims.dot_height, dims.dome_segments, dims.dome_rings))
        .collect();
    let dot_count = primitives.len();
    primitives.push(primitive::cuboid(plate.min(), plate.max()));

    let mut mesh = Mesh::merge(primitives, Material::default())?;
    if let Some(bounds) = mesh.bounds() {
        mesh.translate(-bounds.center());
    }
    mesh.rotate(orientation_fix());

    tracing::debug!(
        dots = dot_count,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        plate_width = plate.width,
        plate_depth = plate.depth,
        "synthesized braille mesh"
    );

    Ok(Synthesis { mesh, dot_count, plate: Some(plate) })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

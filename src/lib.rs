//! Text to tactile braille plate compiler.
//!
//! Turns a string into a printable mesh: every character becomes a braille
//! cell of raised domes standing on an auto-sized base plate. The compiler
//! is a pure function of `(text, Config)`; it does no I/O, holds no global
//! state, and either returns a complete model or an empty one.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`table`] | Symbol to six-dot pattern table, indicators |
//! | [`cost`] | Cells a word occupies once indicators are counted |
//! | [`wrap`] | Greedy cell-budget line wrapper |
//! | [`emit`] | Places indicator, content and space cells on the grid |
//! | [`geometry`] | Domes, base plate, merge, centring and orientation |
//! | [`marker`] | Line-break marker conversion at the input boundary |
//! | [`config`] | Wrapping budget and plate dimensions |
//! | [`error`] | Configuration errors and non-fatal diagnostics |

pub mod config;
pub mod cost;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod table;
pub mod wrap;

use serde::Serialize;

pub use config::Config;
pub use emit::{Emission, PlacedCell};
pub use error::{CompileError, Diagnostic};
pub use geometry::{Aabb, Mesh, Plate};
pub use marker::{LINE_BREAK, markers_to_newlines, newlines_to_markers};
pub use table::DotPattern;

const MAX_NAME_CHARS: usize = 100;

/// A compiled braille model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Display name derived from the input text.
    pub name: String,
    /// Placed cells, grid size and diagnostics.
    pub emission: Emission,
    pub mesh: Mesh,
    /// Dome primitives merged into the mesh.
    pub dot_count: usize,
    /// Base plate dimensions, `None` for an empty model.
    pub plate: Option<Plate>,
}

impl Model {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.emission.diagnostics
    }

    /// Compact description for logs and command-line output.
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            name: &self.name,
            lines: self.emission.line_count,
            max_cells_in_line: self.emission.max_cells_in_line,
            cells: self.emission.cells.len(),
            dots: self.dot_count,
            plate: self.plate,
            vertices: self.mesh.vertex_count(),
            triangles: self.mesh.triangle_count(),
            bounds: self.mesh.bounds(),
            diagnostics: self.diagnostics(),
        }
    }
}

/// Serializable overview of a [`Model`].
#[derive(Debug, Clone, Serialize)]
pub struct Summary<'a> {
    pub name: &'a str,
    pub lines: usize,
    pub max_cells_in_line: usize,
    pub cells: usize,
    pub dots: usize,
    pub plate: Option<Plate>,
    pub vertices: usize,
    pub triangles: usize,
    pub bounds: Option<Aabb>,
    pub diagnostics: &'a [Diagnostic],
}

/// Compile marked text into a braille model.
///
/// Line breaks must be given as [`LINE_BREAK`] markers; use
/// [`newlines_to_markers`] for raw text.
///
/// # Errors
///
/// Returns [`CompileError::InvalidConfig`] if `config` fails validation and
/// [`CompileError::MeshTooLarge`] if the text has more dots than one mesh can
/// index at the configured dome resolution. Symbols never cause an error:
/// unmapped symbols become blank cells and empty input yields an empty
/// model, both reported as diagnostics.
pub fn compile(text: &str, config: &Config) -> Result<Model, CompileError> {
    config.validate()?;

    let lines = wrap::wrap_text(text, config.max_cells_per_line);
    let mut emission = emit::emit(&lines);
    tracing::debug!(
        lines = emission.line_count,
        cells = emission.cells.len(),
        max_cells_in_line = emission.max_cells_in_line,
        "emitted braille cells"
    );

    let synthesis =
        geometry::build(&emission.cells, emission.max_cells_in_line, emission.line_count, config)?;
    if synthesis.mesh.is_empty() {
        tracing::warn!("no braille cells emitted; returning empty model");
        emission.diagnostics.push(Diagnostic::EmptyModel);
    }

    let name = model_name(text);
    let mut mesh = synthesis.mesh;
    mesh.name.clone_from(&name);

    Ok(Model { name, emission, mesh, dot_count: synthesis.dot_count, plate: synthesis.plate })
}

/// Display name for a model: markers become spaces, trimmed, at most 100 chars.
#[must_use]
pub fn model_name(text: &str) -> String {
    text.replace(LINE_BREAK, " ").trim().chars().take(MAX_NAME_CHARS).collect()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

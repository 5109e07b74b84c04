//! Compiler configuration: wrapping budget and plate geometry.
//!
//! Lengths are in model units (millimetres for printing) before
//! `unit_scale` is applied. Fields named `*_y` run along the reading
//! direction of the finished plate, the world Y axis once the model has
//! been oriented.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

pub const DEFAULT_MAX_CELLS_PER_LINE: usize = 40;
pub const DEFAULT_DOT_RADIUS: f32 = 0.85;
pub const DEFAULT_DOT_HEIGHT: f32 = 0.768_612;
pub const DEFAULT_DOT_SPACING: f32 = 2.5;
pub const DEFAULT_CELL_SPACING_X: f32 = 7.0;
pub const DEFAULT_LINE_SPACING_Y: f32 = 10.0;
pub const DEFAULT_BASE_HEIGHT: f32 = 3.0;
pub const DEFAULT_PADDING: f32 = 3.0;
pub const DEFAULT_DOME_SEGMENTS: u32 = 32;
pub const DEFAULT_DOME_RINGS: u32 = 8;

pub const MIN_DOME_SEGMENTS: u32 = 3;
pub const MAX_DOME_SEGMENTS: u32 = 256;
pub const MAX_DOME_RINGS: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Uniform multiplier applied to every length below.
    pub unit_scale: f32,
    /// Wrapping budget, in cells, including space cells between words.
    pub max_cells_per_line: usize,
    pub dot_radius: f32,
    pub dot_height: f32,
    /// Distance between the two dot columns of a cell.
    pub dot_spacing_x: f32,
    /// Distance between the three dot rows of a cell.
    pub dot_spacing_y: f32,
    /// Distance between the origins of neighbouring cells.
    pub cell_spacing_x: f32,
    /// Distance between the origins of neighbouring lines.
    pub line_spacing_y: f32,
    pub base_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    /// Dome facets around the vertical axis.
    pub dome_segments: u32,
    /// Dome rings from apex to rim.
    pub dome_rings: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_scale: 1.0,
            max_cells_per_line: DEFAULT_MAX_CELLS_PER_LINE,
            dot_radius: DEFAULT_DOT_RADIUS,
            dot_height: DEFAULT_DOT_HEIGHT,
            dot_spacing_x: DEFAULT_DOT_SPACING,
            dot_spacing_y: DEFAULT_DOT_SPACING,
            cell_spacing_x: DEFAULT_CELL_SPACING_X,
            line_spacing_y: DEFAULT_LINE_SPACING_Y,
            base_height: DEFAULT_BASE_HEIGHT,
            padding_x: DEFAULT_PADDING,
            padding_y: DEFAULT_PADDING,
            dome_segments: DEFAULT_DOME_SEGMENTS,
            dome_rings: DEFAULT_DOME_RINGS,
        }
    }
}

/// Lengths after `unit_scale`, ready for geometry synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub dot_radius: f32,
    pub dot_height: f32,
    pub dot_spacing_x: f32,
    pub dot_spacing_y: f32,
    pub cell_spacing_x: f32,
    pub line_spacing_y: f32,
    pub base_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub dome_segments: u32,
    pub dome_rings: u32,
}

impl Dimensions {
    /// Every scaled length with its config field name.
    #[must_use]
    pub fn lengths(&self) -> [(&'static str, f32); 9] {
        [
            ("dot_radius", self.dot_radius),
            ("dot_height", self.dot_height),
            ("dot_spacing_x", self.dot_spacing_x),
            ("dot_spacing_y", self.dot_spacing_y),
            ("cell_spacing_x", self.cell_spacing_x),
            ("line_spacing_y", self.line_spacing_y),
            ("base_height", self.base_height),
            ("padding_x", self.padding_x),
            ("padding_y", self.padding_y),
        ]
    }
}

impl Config {
    /// Parse a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::ConfigParse`] for malformed JSON and
    /// [`CompileError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, CompileError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CompileError> {
        if self.max_cells_per_line == 0 {
            return Err(invalid("max_cells_per_line", "must be at least 1"));
        }
        positive("unit_scale", self.unit_scale)?;
        positive("dot_radius", self.dot_radius)?;
        positive("dot_height", self.dot_height)?;
        positive("dot_spacing_x", self.dot_spacing_x)?;
        positive("dot_spacing_y", self.dot_spacing_y)?;
        positive("cell_spacing_x", self.cell_spacing_x)?;
        positive("line_spacing_y", self.line_spacing_y)?;
        positive("base_height", self.base_height)?;
        non_negative("padding_x", self.padding_x)?;
        non_negative("padding_y", self.padding_y)?;
        if !(MIN_DOME_SEGMENTS..=MAX_DOME_SEGMENTS).contains(&self.dome_segments) {
            return Err(invalid(
                "dome_segments",
                format!("must be between {MIN_DOME_SEGMENTS} and {MAX_DOME_SEGMENTS}, got {}", self.dome_segments),
            ));
        }
        if !(1..=MAX_DOME_RINGS).contains(&self.dome_rings) {
            return Err(invalid(
                "dome_rings",
                format!("must be between 1 and {MAX_DOME_RINGS}, got {}", self.dome_rings),
            ));
        }

        // Scaling can overflow to infinity or underflow to zero.
        for (field, value) in self.scaled().lengths() {
            let (in_range, expected) =
                if field.starts_with("padding") { (value >= 0.0, "non-negative") } else { (value > 0.0, "positive") };
            if !value.is_finite() || !in_range {
                return Err(invalid(
                    field,
                    format!("is {value} after unit_scale {}; must stay finite and {expected}", self.unit_scale),
                ));
            }
        }
        Ok(())
    }

    /// Every length multiplied by `unit_scale`.
    #[must_use]
    pub fn scaled(&self) -> Dimensions {
        let s = self.unit_scale;
        Dimensions {
            dot_radius: self.dot_radius * s,
            dot_height: self.dot_height * s,
            dot_spacing_x: self.dot_spacing_x * s,
            dot_spacing_y: self.dot_spacing_y * s,
            cell_spacing_x: self.cell_spacing_x * s,
            line_spacing_y: self.line_spacing_y * s,
            base_height: self.base_height * s,
            padding_x: self.padding_x * s,
            padding_y: self.padding_y * s,
            dome_segments: self.dome_segments,
            dome_rings: self.dome_rings,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> CompileError {
    CompileError::InvalidConfig { field, reason: reason.into() }
}

fn positive(field: &'static str, value: f32) -> Result<(), CompileError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive finite number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), CompileError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be zero or a positive finite number, got {value}")))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

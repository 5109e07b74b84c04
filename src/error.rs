//! Errors and non-fatal diagnostics produced by the compiler.

use serde::Serialize;

/// Errors returned by [`crate::compile`] and [`crate::Config`].
///
/// Text on its own never fails; configuration can, and so can text too
/// long for the tessellation it asks for.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A configuration value is out of range.
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    /// A JSON configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// The merged mesh would need more vertices than a `u32` index addresses.
    #[error("mesh needs {vertices} vertices, more than {max} are addressable", max = u32::MAX)]
    MeshTooLarge { vertices: usize },
}

/// Recoverable conditions met while compiling. Generation always continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A character had no cell in the table and was emitted blank.
    UnmappedSymbol { symbol: char, line: usize, column: usize },
    /// Nothing was emitted, so no geometry was produced.
    EmptyModel,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedSymbol { symbol, line, column } => {
                write!(f, "unmapped symbol {symbol:?} at line {line}, column {column}; emitted blank cell")
            }
            Self::EmptyModel => f.write_str("no cells emitted; model is empty"),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use std::io::{self, Read};
use std::path::PathBuf;

use brailleplate::emit::preview;
use brailleplate::{CompileError, Config, Model, compile, newlines_to_markers};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {what}: {source}")]
    Read { what: String, source: io::Error },
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "brailleplate", about = "Compile text into a tactile braille plate mesh")]
struct Cli {
    /// Text to compile. Read from stdin when omitted; raw newlines become line breaks.
    text: Option<String>,

    /// JSON config file; flags below override its values.
    #[arg(long, env = "BRAILLE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "BRAILLE_MAX_CELLS")]
    max_cells: Option<usize>,

    #[arg(long, env = "BRAILLE_UNIT_SCALE")]
    unit_scale: Option<f32>,

    #[arg(long, env = "BRAILLE_BASE_HEIGHT")]
    base_height: Option<f32>,

    #[arg(long, env = "BRAILLE_PADDING_X")]
    padding_x: Option<f32>,

    #[arg(long, env = "BRAILLE_PADDING_Y")]
    padding_y: Option<f32>,

    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON overview: counts, plate, bounds, diagnostics.
    Summary,
    /// Unicode braille rendering of the cell grid.
    Preview,
    /// Full mesh as JSON.
    Mesh,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let raw = match &cli.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let model = compile(&newlines_to_markers(raw.trim_end_matches(['\r', '\n'])), &config)?;
    tracing::info!(name = %model.name, dots = model.dot_count, vertices = model.mesh.vertex_count(), "compiled");
    println!("{}", render(&model, cli.format)?);
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|source| CliError::Read { what: path.display().to_string(), source })?;
            Config::from_json(&raw)?
        }
        None => Config::default(),
    };

    if let Some(v) = cli.max_cells {
        config.max_cells_per_line = v;
    }
    if let Some(v) = cli.unit_scale {
        config.unit_scale = v;
    }
    if let Some(v) = cli.base_height {
        config.base_height = v;
    }
    if let Some(v) = cli.padding_x {
        config.padding_x = v;
    }
    if let Some(v) = cli.padding_y {
        config.padding_y = v;
    }

    config.validate()?;
    Ok(config)
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| CliError::Read { what: "stdin".to_owned(), source })?;
    Ok(buf)
}

fn render(model: &Model, format: Format) -> Result<String, CliError> {
    Ok(match format {
        Format::Summary => serde_json::to_string_pretty(&model.summary())?,
        Format::Preview => preview(&model.emission),
        Format::Mesh => serde_json::to_string(&model.mesh)?,
    })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

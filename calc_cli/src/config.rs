//! Input file loading.
//!
//! An input file holds either a single column object or an array of them,
//! in the flat `BoxColumnInput` JSON shape:
//!
//! ```json
//! [
//!   { "label": "C-1", "base_in": 4.0, "depth_in": 10.0, "wall_thickness_in": 0.5,
//!     "material": "ASTM A36", "k_x": 1.0, "k_y": 1.0, "clear_height_m": 3.0,
//!     "elastic_modulus_ksi": 29000.0, "phi": 0.9 }
//! ]
//! ```
//!
//! Loading checks the file shape only. Geometry and member properties are
//! checked per column by the calculation, so one bad column is reported on
//! its own and the rest of the file is still evaluated.

use std::path::{Path, PathBuf};

use calc_core::calculations::BoxColumnInput;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading an input file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read input file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input file: {message}")]
    ValidationError { message: String },
}

/// Loads every column in `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The JSON is malformed or names an unknown material
/// - The file holds an empty array
pub fn load_inputs(path: &Path) -> Result<Vec<BoxColumnInput>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.to_path_buf() });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let inputs = parse_inputs(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if inputs.is_empty() {
        return Err(ConfigError::ValidationError {
            message: "no columns defined".to_string(),
        });
    }
    debug!(path = %path.display(), count = inputs.len(), "Loaded input file");

    Ok(inputs)
}

fn parse_inputs(contents: &str) -> Result<Vec<BoxColumnInput>, serde_json::Error> {
    if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents)
    } else {
        serde_json::from_str::<BoxColumnInput>(contents).map(|input| vec![input])
    }
}

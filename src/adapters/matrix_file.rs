//! File-based Payoff Matrix Adapter
//!
//! Reads payoff matrices written by an editing front end. JSON is the
//! default; files ending in `.yaml` or `.yml` are parsed as YAML.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::analysis::PayoffMatrix;

/// Errors that can occur while reading a matrix file
#[derive(Debug, Error)]
pub enum MatrixFileError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Serialization format of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFileFormat {
    Json,
    Yaml,
}

impl MatrixFileFormat {
    /// Picks the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                MatrixFileFormat::Yaml
            }
            _ => MatrixFileFormat::Json,
        }
    }
}

/// Reads a payoff matrix from `path`.
///
/// The matrix is only deserialized here; shape validation happens when it
/// is evaluated.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<PayoffMatrix, MatrixFileError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| MatrixFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = MatrixFileFormat::from_path(path);
    let parse_error = |reason: String| MatrixFileError::Parse {
        path: path.to_path_buf(),
        reason,
    };
    let matrix: PayoffMatrix = match format {
        MatrixFileFormat::Json => {
            serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        }
        MatrixFileFormat::Yaml => {
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        }
    };

    debug!(
        path = %path.display(),
        ?format,
        alternatives = matrix.alternative_count(),
        states = matrix.state_count(),
        "Loaded payoff matrix"
    );

    Ok(matrix)
}

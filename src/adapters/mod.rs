//! Adapters - Connections between the pure domain and the outside world.
//!
//! - `matrix_file` - Reads payoff matrices from JSON or YAML files
//! - `telemetry` - Installs the tracing subscriber for the binary

pub mod matrix_file;
pub mod telemetry;

pub use matrix_file::{read_matrix, MatrixFileError, MatrixFileFormat};

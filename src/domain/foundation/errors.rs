//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Ways a payoff matrix can fail its structural invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("Matrix must have at least one alternative")]
    NoAlternatives,

    #[error("Matrix must have at least one state")]
    NoStates,

    #[error("Expected {expected} rows of values (one per alternative), got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("Row {row} has {actual} values, expected {expected} (one per state)")]
    JaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Value at [{row}][{column}] is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Outcomes in state column {column} span more than a finite number can represent")]
    UnboundedSpread { column: usize },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

impl ShapeError {
    /// Creates a jagged row error.
    pub fn jagged_row(row: usize, expected: usize, actual: usize) -> Self {
        ShapeError::JaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// Creates a duplicate id error.
    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        ShapeError::DuplicateId {
            kind,
            id: id.into(),
        }
    }
}

/// A scalar argument fell outside its permitted closed interval.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Field '{field}' must be between {min} and {max}, got {actual}")]
pub struct RangeError {
    pub field: String,
    pub min: f64,
    pub max: f64,
    pub actual: f64,
}

impl RangeError {
    /// Creates an out of range error.
    pub fn new(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        Self {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Stable error codes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ShapeError,
    RangeError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::RangeError => "RANGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Failure of an evaluation call. Always fatal; no partial result exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    #[error("[{}] {0}", ErrorCode::ShapeError)]
    Shape(#[from] ShapeError),

    #[error("[{}] {0}", ErrorCode::RangeError)]
    Range(#[from] RangeError),
}

impl DecisionError {
    /// Returns the error category code.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::Shape(_) => ErrorCode::ShapeError,
            DecisionError::Range(_) => ErrorCode::RangeError,
        }
    }
}

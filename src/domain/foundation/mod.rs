//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of decision making under uncertainty.

mod errors;
mod optimism;
mod orientation;

pub use errors::{DecisionError, ErrorCode, RangeError, ShapeError};
pub use optimism::Optimism;
pub use orientation::{Direction, Orientation};

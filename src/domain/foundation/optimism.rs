//! Optimism coefficient value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RangeError;

/// Hurwicz optimism coefficient α, a weight in `[0, 1]`.
///
/// `1.0` trusts the best outcome of each alternative entirely, `0.0` the worst.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Optimism(f64);

impl Optimism {
    /// Pure pessimism (Wald).
    pub const PESSIMIST: Self = Self(0.0);

    /// Pure optimism (Maximax).
    pub const OPTIMIST: Self = Self(1.0);

    /// Creates an Optimism, returning error if outside `[0, 1]` or NaN.
    pub fn try_new(value: f64) -> Result<Self, RangeError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(RangeError::new("alpha", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Creates an Optimism, clamping to the valid range. NaN becomes 0.
    ///
    /// For slider-style inputs that normalise before evaluating; the engine
    /// itself only accepts [`Optimism::try_new`].
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::PESSIMIST;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the weight given to the favourable extreme.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the weight given to the unfavourable extreme, `1 - α`.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for Optimism {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Optimism {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Optimism> for f64 {
    fn from(value: Optimism) -> Self {
        value.0
    }
}

impl fmt::Display for Optimism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "α={}", self.0)
    }
}

//! Payoff orientation and the selection direction it implies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether matrix entries are profits or costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Higher is better.
    #[default]
    Profit,
    /// Lower is better.
    Cost,
}

impl Orientation {
    /// Maps the `isCost` flag of a payoff matrix onto an orientation.
    pub fn from_is_cost(is_cost: bool) -> Self {
        if is_cost {
            Orientation::Cost
        } else {
            Orientation::Profit
        }
    }

    /// The direction in which outcomes improve.
    pub fn direction(&self) -> Direction {
        match self {
            Orientation::Profit => Direction::Maximize,
            Orientation::Cost => Direction::Minimize,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Profit => "Profit",
            Orientation::Cost => "Cost",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A comparator strategy: which end of a set of numbers is preferred.
///
/// Every decision rule is written once against a `Direction` instead of
/// once per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// The other direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Maximize => Direction::Minimize,
            Direction::Minimize => Direction::Maximize,
        }
    }

    /// True if `candidate` is strictly preferred over `incumbent`.
    ///
    /// Strictness is what makes selection keep the first of equal values.
    pub fn prefers(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Maximize => candidate > incumbent,
            Direction::Minimize => candidate < incumbent,
        }
    }

    /// True if `candidate` is at least as good as `other`.
    pub fn at_least_as_good(&self, candidate: f64, other: f64) -> bool {
        !self.prefers(other, candidate)
    }

    /// Index and value of the preferred entry; ties go to the lowest index.
    pub fn select(&self, values: &[f64]) -> Option<(usize, f64)> {
        let mut iter = values.iter().copied().enumerate();
        let first = iter.next()?;
        Some(iter.fold(first, |best, (index, value)| {
            if self.prefers(value, best.1) {
                (index, value)
            } else {
                best
            }
        }))
    }

    /// Non-negative distance from `ideal` down to `value` in this direction.
    pub fn shortfall(&self, ideal: f64, value: f64) -> f64 {
        match self {
            Direction::Maximize => ideal - value,
            Direction::Minimize => value - ideal,
        }
    }

    /// Name of the extreme, as used in derivation strings.
    pub fn extreme_label(&self) -> &'static str {
        match self {
            Direction::Maximize => "max",
            Direction::Minimize => "min",
        }
    }
}

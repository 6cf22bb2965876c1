//! Payoff Matrix - Core data structure for decisions under uncertainty.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Direction, Orientation, ShapeError};

/// A candidate choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An unknown environmental condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
}

impl State {
    /// Creates a new state.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Outcomes indexed by `values[alternative][state]`.
///
/// Fields are public so the editing collaborator can mutate freely; nothing
/// is assumed about shape until [`PayoffMatrix::validate`] succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMatrix {
    pub alternatives: Vec<Alternative>,
    pub states: Vec<State>,
    pub values: Vec<Vec<f64>>,
    #[serde(default)]
    pub is_cost: bool,
}

impl PayoffMatrix {
    /// Creates a builder for constructing a payoff matrix.
    pub fn builder() -> PayoffMatrixBuilder {
        PayoffMatrixBuilder::new()
    }

    /// Profit or cost, from the `is_cost` flag.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_is_cost(self.is_cost)
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Checks every structural invariant and returns a view that relies on them.
    ///
    /// # Errors
    /// - `NoAlternatives` / `NoStates` when either axis is empty
    /// - `RowCountMismatch` when `values` has the wrong number of rows
    /// - `JaggedRow` for the first row whose length differs from the state count
    /// - `NonFiniteValue` for the first NaN or infinite entry
    /// - `UnboundedSpread` for the first state whose best and worst outcomes
    ///   are further apart than an `f64` can hold, since regret would overflow
    /// - `DuplicateId` for the first repeated alternative or state id
    pub fn validate(&self) -> Result<MatrixView<'_>, ShapeError> {
        if self.alternatives.is_empty() {
            return Err(ShapeError::NoAlternatives);
        }
        if self.states.is_empty() {
            return Err(ShapeError::NoStates);
        }
        if self.values.len() != self.alternatives.len() {
            return Err(ShapeError::RowCountMismatch {
                expected: self.alternatives.len(),
                actual: self.values.len(),
            });
        }

        let columns = self.states.len();
        for (row, values) in self.values.iter().enumerate() {
            if values.len() != columns {
                return Err(ShapeError::jagged_row(row, columns, values.len()));
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(ShapeError::NonFiniteValue { row, column });
            }
        }

        for column in 0..columns {
            let outcomes = || self.values.iter().map(|row| row[column]);
            let spread = extreme_of(outcomes(), Direction::Maximize)
                - extreme_of(outcomes(), Direction::Minimize);
            if !spread.is_finite() {
                return Err(ShapeError::UnboundedSpread { column });
            }
        }

        check_unique("alternative", self.alternatives.iter().map(|a| a.id.as_str()))?;
        check_unique("state", self.states.iter().map(|s| s.id.as_str()))?;

        Ok(MatrixView { matrix: self })
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ShapeError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ShapeError::duplicate_id(kind, id));
        }
    }
    Ok(())
}

/// A borrowed payoff matrix whose shape has been checked.
///
/// Only obtainable through [`PayoffMatrix::validate`], so evaluators taking a
/// view never re-check dimensions.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    matrix: &'a PayoffMatrix,
}

impl<'a> MatrixView<'a> {
    /// The underlying matrix.
    pub fn matrix(&self) -> &'a PayoffMatrix {
        self.matrix
    }

    /// The direction in which outcomes improve.
    pub fn direction(&self) -> Direction {
        self.matrix.orientation().direction()
    }

    /// All rows, one per alternative.
    pub fn rows(&self) -> &'a [Vec<f64>] {
        &self.matrix.values
    }

    /// Preferred extreme of row `row` in `direction`.
    pub fn row_extreme(&self, row: usize, direction: Direction) -> f64 {
        extreme_of(self.matrix.values[row].iter().copied(), direction)
    }

    /// Preferred extreme of state `column` in `direction`.
    pub fn column_extreme(&self, column: usize, direction: Direction) -> f64 {
        extreme_of(self.matrix.values.iter().map(|row| row[column]), direction)
    }

    /// Display name of alternative `index`.
    pub fn alternative_name(&self, index: usize) -> &'a str {
        &self.matrix.alternatives[index].name
    }

    /// Display name of state `index`.
    pub fn state_name(&self, index: usize) -> &'a str {
        &self.matrix.states[index].name
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.matrix.alternatives.len()
    }

    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.matrix.states.len()
    }
}

// Validated rows and columns are never empty, so the fold seed is always replaced.
fn extreme_of(values: impl Iterator<Item = f64>, direction: Direction) -> f64 {
    let seed = match direction {
        Direction::Maximize => f64::NEG_INFINITY,
        Direction::Minimize => f64::INFINITY,
    };
    values.fold(seed, |best, value| {
        if direction.prefers(value, best) {
            value
        } else {
            best
        }
    })
}

/// Builder for constructing PayoffMatrix instances.
#[derive(Debug, Default)]
pub struct PayoffMatrixBuilder {
    alternatives: Vec<Alternative>,
    states: Vec<State>,
    values: Vec<Vec<f64>>,
    is_cost: bool,
}

impl PayoffMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alternative.
    pub fn alternative(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.alternatives.push(Alternative::new(id, name));
        self
    }

    /// Adds a state.
    pub fn state(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.states.push(State::new(id, name));
        self
    }

    /// Appends the outcome row of the next alternative.
    pub fn row(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.values.push(values.into());
        self
    }

    /// Marks entries as costs to minimize.
    pub fn cost(mut self) -> Self {
        self.is_cost = true;
        self
    }

    /// Builds and validates the payoff matrix.
    pub fn build(self) -> Result<PayoffMatrix, ShapeError> {
        let matrix = PayoffMatrix {
            alternatives: self.alternatives,
            states: self.states,
            values: self.values,
            is_cost: self.is_cost,
        };
        matrix.validate()?;
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> PayoffMatrixBuilder {
        PayoffMatrix::builder()
            .alternative("a1", "Expand")
            .alternative("a2", "Hold")
            .state("s1", "Boom")
            .state("s2", "Bust")
    }

    #[test]
    fn builder_creates_valid_matrix() {
        let matrix = two_by_two()
            .row([10.0, -5.0])
            .row([2.0, 1.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.state_count(), 2);
        assert_eq!(matrix.orientation(), Orientation::Profit);
    }

    #[test]
    fn builder_cost_sets_orientation() {
        let matrix = two_by_two().row([1.0, 2.0]).row([3.0, 4.0]).cost().build().unwrap();
        assert!(matrix.is_cost);
        assert_eq!(matrix.orientation(), Orientation::Cost);
    }

    #[test]
    fn validate_rejects_no_alternatives() {
        let matrix = PayoffMatrix {
            states: vec![State::new("s1", "Boom")],
            ..Default::default()
        };
        assert_eq!(matrix.validate().unwrap_err(), ShapeError::NoAlternatives);
    }

    #[test]
    fn validate_rejects_no_states() {
        let matrix = PayoffMatrix {
            alternatives: vec![Alternative::new("a1", "Expand")],
            values: vec![vec![]],
            ..Default::default()
        };
        assert_eq!(matrix.validate().unwrap_err(), ShapeError::NoStates);
    }

    #[test]
    fn validate_rejects_missing_rows() {
        let err = two_by_two().row([1.0, 2.0]).build().unwrap_err();
        assert_eq!(
            err,
            ShapeError::RowCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn validate_rejects_jagged_rows() {
        let err = two_by_two()
            .row([1.0, 2.0])
            .row([3.0])
            .build()
            .unwrap_err();
        assert_eq!(err, ShapeError::jagged_row(1, 2, 1));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let err = two_by_two()
            .row([1.0, 2.0])
            .row([3.0, f64::NAN])
            .build()
            .unwrap_err();
        assert_eq!(err, ShapeError::NonFiniteValue { row: 1, column: 1 });

        let err = two_by_two()
            .row([f64::INFINITY, 2.0])
            .row([3.0, 4.0])
            .build()
            .unwrap_err();
        assert_eq!(err, ShapeError::NonFiniteValue { row: 0, column: 0 });
    }

    #[test]
    fn validate_rejects_state_spread_beyond_f64_range() {
        let err = PayoffMatrix::builder()
            .alternative("a1", "Expand")
            .alternative("a2", "Hold")
            .state("s1", "Boom")
            .row([f64::MAX])
            .row([-f64::MAX])
            .build()
            .unwrap_err();
        assert_eq!(err, ShapeError::UnboundedSpread { column: 0 });
    }

    #[test]
    fn validate_accepts_extreme_values_with_finite_spread() {
        let matrix = two_by_two()
            .row([f64::MAX, f64::MAX / 2.0])
            .row([f64::MAX, f64::MAX])
            .build();
        assert!(matrix.is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let err = PayoffMatrix::builder()
            .alternative("a1", "Expand")
            .alternative("a1", "Expand again")
            .state("s1", "Boom")
            .row([1.0])
            .row([2.0])
            .build()
            .unwrap_err();
        assert_eq!(err, ShapeError::duplicate_id("alternative", "a1"));

        let err = PayoffMatrix::builder()
            .alternative("a1", "Expand")
            .state("s1", "Boom")
            .state("s1", "Boom")
            .row([1.0, 2.0])
            .build()
            .unwrap_err();
        assert_eq!(err, ShapeError::duplicate_id("state", "s1"));
    }

    #[test]
    fn view_exposes_rows_and_columns() {
        let matrix = two_by_two().row([10.0, -5.0]).row([2.0, 1.0]).build().unwrap();
        let view = matrix.validate().unwrap();

        assert_eq!(view.rows()[0], vec![10.0, -5.0]);
        assert_eq!(view.row_extreme(0, Direction::Maximize), 10.0);
        assert_eq!(view.row_extreme(0, Direction::Minimize), -5.0);
        assert_eq!(view.column_extreme(1, Direction::Maximize), 1.0);
        assert_eq!(view.column_extreme(1, Direction::Minimize), -5.0);
        assert_eq!(view.alternative_name(1), "Hold");
        assert_eq!(view.state_name(0), "Boom");
        assert_eq!(view.direction(), Direction::Maximize);
    }

    #[test]
    fn matrix_serializes_with_camel_case_fields() {
        let matrix = two_by_two().row([1.0, 2.0]).row([3.0, 4.0]).cost().build().unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("\"isCost\":true"));
        assert!(json.contains("\"alternatives\""));
    }

    #[test]
    fn matrix_deserializes_without_is_cost_as_profit() {
        let json = r#"{
            "alternatives": [{"id": "a1", "name": "Expand"}],
            "states": [{"id": "s1", "name": "Boom"}],
            "values": [[4.5]]
        }"#;

        let matrix: PayoffMatrix = serde_json::from_str(json).unwrap();
        assert!(!matrix.is_cost);
        assert!(matrix.validate().is_ok());
    }
}

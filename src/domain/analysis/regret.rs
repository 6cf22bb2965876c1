//! Regret Matrix Builder - Opportunity loss of each alternative in each state.

use super::{MatrixView, PayoffMatrix};
use crate::domain::foundation::ShapeError;

/// Derives opportunity-loss matrices.
pub struct RegretMatrixBuilder;

impl RegretMatrixBuilder {
    /// Builds the regret matrix for `matrix`, validating its shape first.
    ///
    /// # Errors
    /// Any [`ShapeError`] reported by [`PayoffMatrix::validate`].
    pub fn build(matrix: &PayoffMatrix) -> Result<Vec<Vec<f64>>, ShapeError> {
        Ok(Self::from_view(matrix.validate()?))
    }

    /// Builds the regret matrix for an already validated matrix.
    ///
    /// # Algorithm
    /// For each state column the ideal is the best outcome any alternative
    /// achieves there (column max for profits, column min for costs).
    /// `regret[i][j]` is the distance from `values[i][j]` to that ideal, so it
    /// is never negative and is exactly zero for the ideal alternative.
    /// Validation bounds every column's spread, so each entry is finite.
    pub fn from_view(view: MatrixView<'_>) -> Vec<Vec<f64>> {
        let direction = view.direction();
        let ideals = Self::ideals(view);

        view.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&ideals)
                    .map(|(&value, &ideal)| direction.shortfall(ideal, value))
                    .collect()
            })
            .collect()
    }

    /// Best achievable outcome for each state.
    pub fn ideals(view: MatrixView<'_>) -> Vec<f64> {
        let direction = view.direction();
        (0..view.state_count())
            .map(|column| view.column_extreme(column, direction))
            .collect()
    }
}

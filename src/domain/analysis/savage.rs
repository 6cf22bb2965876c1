//! Savage criterion - minimax regret.

use super::{Criterion, CriterionResult, MatrixView, NumberFormat, RegretMatrixBuilder};
use crate::domain::foundation::Direction;

/// Minimax-regret (Savage) evaluator.
pub struct MinimaxRegret;

impl MinimaxRegret {
    /// Scores each alternative by its largest regret and picks the smallest.
    ///
    /// Regret is already a non-negative loss, so this rule always minimizes
    /// regardless of the matrix orientation.
    pub fn evaluate(view: MatrixView<'_>, format: NumberFormat) -> CriterionResult {
        Self::evaluate_with_regret(view, &RegretMatrixBuilder::from_view(view), format)
    }

    /// Same as [`MinimaxRegret::evaluate`], reusing a regret matrix the caller
    /// already built from `view` with [`RegretMatrixBuilder::from_view`].
    pub(crate) fn evaluate_with_regret(
        view: MatrixView<'_>,
        regret: &[Vec<f64>],
        format: NumberFormat,
    ) -> CriterionResult {
        let mut values = Vec::with_capacity(regret.len());
        let mut calculations = Vec::with_capacity(regret.len());

        for (index, row) in regret.iter().enumerate() {
            let worst_regret = row.iter().copied().fold(0.0_f64, f64::max);
            calculations.push(format!(
                "{}: max regret({}) = {}",
                view.alternative_name(index),
                format.join(row, ", "),
                format.number(worst_regret)
            ));
            values.push(worst_regret);
        }

        CriterionResult::select(
            Criterion::MinimaxRegret,
            values,
            calculations,
            Direction::Minimize,
        )
    }
}

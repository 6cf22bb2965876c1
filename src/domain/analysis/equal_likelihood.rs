//! Laplace criterion - equal weight across states.

use super::{Criterion, CriterionResult, MatrixView, NumberFormat};

/// Equal-likelihood (Laplace) evaluator.
pub struct EqualLikelihood;

impl EqualLikelihood {
    /// Scores each alternative by the arithmetic mean of its row.
    ///
    /// The mean is orientation-independent; only the selection flips
    /// (highest mean for profits, lowest for costs).
    pub fn evaluate(view: MatrixView<'_>, format: NumberFormat) -> CriterionResult {
        let states = view.state_count() as f64;
        let mut values = Vec::with_capacity(view.alternative_count());
        let mut calculations = Vec::with_capacity(view.alternative_count());

        for (index, row) in view.rows().iter().enumerate() {
            // Dividing first keeps the mean finite for any finite row.
            let mean = row.iter().map(|value| value / states).sum::<f64>();
            calculations.push(format!(
                "{}: ({}) / {} = {}",
                view.alternative_name(index),
                format.join(row, " + "),
                row.len(),
                format.number(mean)
            ));
            values.push(mean);
        }

        CriterionResult::select(
            Criterion::EqualLikelihood,
            values,
            calculations,
            view.direction(),
        )
    }
}

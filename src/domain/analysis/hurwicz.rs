//! Hurwicz criterion - optimism-weighted blend of best and worst outcomes.

use super::{Criterion, CriterionResult, MatrixView, NumberFormat};
use crate::domain::foundation::Optimism;

/// Optimism-weighted (Hurwicz) evaluator.
pub struct OptimismWeighted;

impl OptimismWeighted {
    /// Scores each alternative as `α·best + (1−α)·worst`.
    ///
    /// "Best" and "worst" follow the orientation: for profits best is the row
    /// maximum, for costs it is the row minimum. With `α = 1` the scores equal
    /// [`super::BestCase`], with `α = 0` they equal [`super::WorstCase`].
    pub fn evaluate(view: MatrixView<'_>, alpha: Optimism, format: NumberFormat) -> CriterionResult {
        let direction = view.direction();
        let weight = alpha.value();
        let complement = alpha.complement();

        let mut values = Vec::with_capacity(view.alternative_count());
        let mut calculations = Vec::with_capacity(view.alternative_count());

        for index in 0..view.alternative_count() {
            let best = view.row_extreme(index, direction);
            let worst = view.row_extreme(index, direction.opposite());
            // The blend lies between the two extremes; clamping absorbs rounding
            // that would otherwise carry a score near f64::MAX to infinity.
            let (low, high) = if best <= worst { (best, worst) } else { (worst, best) };
            let score = (weight * best + complement * worst).clamp(low, high);

            calculations.push(format!(
                "{}: {} × {} + {} × {} = {}",
                view.alternative_name(index),
                format.number(weight),
                format.number(best),
                format.number(complement),
                format.number(worst),
                format.number(score)
            ));
            values.push(score);
        }

        CriterionResult::select(Criterion::OptimismWeighted, values, calculations, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{BestCase, PayoffMatrix, WorstCase};

    fn plants(cost: bool) -> PayoffMatrix {
        let builder = PayoffMatrix::builder()
            .alternative("a1", "Plant A")
            .alternative("a2", "Plant B")
            .alternative("a3", "Plant C")
            .state("s1", "Low")
            .state("s2", "Medium")
            .state("s3", "High")
            .state("s4", "Very High")
            .row([3.0, 8.0, 2.0, 10.0])
            .row([5.0, 4.0, 6.0, 3.0])
            .row([9.0, 6.0, 4.0, 5.0]);
        let builder = if cost { builder.cost() } else { builder };
        builder.build().unwrap()
    }

    fn alpha(value: f64) -> Optimism {
        Optimism::try_new(value).unwrap()
    }

    #[test]
    fn hurwicz_profit_half_optimism() {
        let matrix = plants(false);
        let result = OptimismWeighted::evaluate(
            matrix.validate().unwrap(),
            alpha(0.5),
            NumberFormat::shortest(),
        );

        assert_eq!(result.values, vec![6.0, 4.5, 6.5]);
        assert_eq!(result.optimal_index, 2);
        assert_eq!(result.calculations[0], "Plant A: 0.5 × 10 + 0.5 × 2 = 6");
    }

    #[test]
    fn hurwicz_cost_weights_low_extreme_by_alpha() {
        let matrix = plants(true);
        let result = OptimismWeighted::evaluate(
            matrix.validate().unwrap(),
            alpha(0.75),
            NumberFormat::shortest(),
        );

        // 0.75 * row_min + 0.25 * row_max
        assert_eq!(result.values, vec![4.0, 3.75, 5.25]);
        assert_eq!(result.optimal_index, 1);
        assert_eq!(result.calculations[1], "Plant B: 0.75 × 3 + 0.25 × 6 = 3.75");
    }

    #[test]
    fn hurwicz_full_optimism_matches_best_case() {
        for cost in [false, true] {
            let matrix = plants(cost);
            let view = matrix.validate().unwrap();
            let hurwicz = OptimismWeighted::evaluate(view, Optimism::OPTIMIST, NumberFormat::shortest());
            let best = BestCase::evaluate(view, NumberFormat::shortest());

            assert_eq!(hurwicz.values, best.values);
            assert_eq!(hurwicz.optimal_index, best.optimal_index);
        }
    }

    #[test]
    fn hurwicz_no_optimism_matches_worst_case() {
        for cost in [false, true] {
            let matrix = plants(cost);
            let view = matrix.validate().unwrap();
            let hurwicz = OptimismWeighted::evaluate(view, Optimism::PESSIMIST, NumberFormat::shortest());
            let worst = WorstCase::evaluate(view, NumberFormat::shortest());

            assert_eq!(hurwicz.values, worst.values);
            assert_eq!(hurwicz.optimal_index, worst.optimal_index);
        }
    }

    #[test]
    fn hurwicz_score_stays_within_row_extremes_near_f64_max() {
        let matrix = PayoffMatrix::builder()
            .alternative("a1", "Flat")
            .state("s1", "Calm")
            .state("s2", "Storm")
            .row([f64::MAX, f64::MAX])
            .build()
            .unwrap();
        let view = matrix.validate().unwrap();

        for value in [0.1, 0.3, 0.7] {
            let result = OptimismWeighted::evaluate(view, alpha(value), NumberFormat::shortest());
            assert_eq!(result.values, vec![f64::MAX]);
        }
    }
}

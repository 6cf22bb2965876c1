//! Decision Engine - runs every criterion over one payoff matrix.

use tracing::{debug, warn};

use super::{
    BestCase, DecisionResults, EqualLikelihood, MatrixView, MinimaxRegret, NumberFormat,
    OptimismWeighted, PayoffMatrix, RegretMatrixBuilder, WorstCase,
};
use crate::domain::foundation::{DecisionError, Optimism};

/// Orchestrates the five criteria and the shared regret matrix.
///
/// Holds only presentation settings; evaluation itself is a pure function of
/// its inputs, so one engine may serve any number of callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionEngine {
    format: NumberFormat,
}

impl DecisionEngine {
    /// Creates an engine rendering derivations with `format`.
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    /// The number format used in derivation strings.
    pub fn format(&self) -> NumberFormat {
        self.format
    }

    /// Evaluates every criterion against `matrix`.
    ///
    /// # Errors
    /// - `DecisionError::Shape` if the matrix breaks a structural invariant
    /// - `DecisionError::Range` if `alpha` is outside `[0, 1]` (never clamped)
    pub fn evaluate(&self, matrix: &PayoffMatrix, alpha: f64) -> Result<DecisionResults, DecisionError> {
        let view = matrix.validate().map_err(|e| {
            warn!(error = %e, "Rejected payoff matrix");
            e
        })?;
        let alpha = Optimism::try_new(alpha).map_err(|e| {
            warn!(error = %e, "Rejected optimism coefficient");
            e
        })?;

        Ok(self.evaluate_view(view, alpha))
    }

    /// Evaluates every criterion against an already validated matrix.
    pub fn evaluate_view(&self, view: MatrixView<'_>, alpha: Optimism) -> DecisionResults {
        let regret_matrix = RegretMatrixBuilder::from_view(view);

        let results = vec![
            EqualLikelihood::evaluate(view, self.format),
            BestCase::evaluate(view, self.format),
            WorstCase::evaluate(view, self.format),
            OptimismWeighted::evaluate(view, alpha, self.format),
            MinimaxRegret::evaluate_with_regret(view, &regret_matrix, self.format),
        ];

        for result in &results {
            debug!(
                criterion = ?result.criterion,
                optimal_index = result.optimal_index,
                optimal_value = result.optimal_value,
                "Criterion evaluated"
            );
        }
        debug!(
            alternatives = view.alternative_count(),
            states = view.state_count(),
            alpha = alpha.value(),
            orientation = %view.matrix().orientation(),
            "Decision evaluated"
        );

        DecisionResults {
            matrix: view.matrix().clone(),
            alpha,
            results,
            regret_matrix,
        }
    }
}

/// Evaluates `matrix` with a default engine.
pub fn evaluate(matrix: &PayoffMatrix, alpha: f64) -> Result<DecisionResults, DecisionError> {
    DecisionEngine::default().evaluate(matrix, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Criterion;
    use crate::domain::foundation::{ErrorCode, RangeError, ShapeError};

    fn plants() -> PayoffMatrix {
        PayoffMatrix::builder()
            .alternative("a1", "Plant A")
            .alternative("a2", "Plant B")
            .alternative("a3", "Plant C")
            .state("s1", "Low")
            .state("s2", "Medium")
            .state("s3", "High")
            .state("s4", "Very High")
            .row([3.0, 8.0, 2.0, 10.0])
            .row([5.0, 4.0, 6.0, 3.0])
            .row([9.0, 6.0, 4.0, 5.0])
            .build()
            .unwrap()
    }

    #[test]
    fn evaluate_returns_results_in_fixed_order() {
        let results = evaluate(&plants(), 0.5).unwrap();
        let order: Vec<Criterion> = results.results.iter().map(|r| r.criterion).collect();
        assert_eq!(order, Criterion::ALL.to_vec());
    }

    #[test]
    fn evaluate_profit_scenario_optimal_indices() {
        let results = evaluate(&plants(), 0.5).unwrap();
        let indices: Vec<usize> = results.results.iter().map(|r| r.optimal_index).collect();
        assert_eq!(indices, vec![2, 0, 2, 2, 2]);
    }

    #[test]
    fn evaluate_bundles_regret_matrix_and_alpha() {
        let results = evaluate(&plants(), 0.25).unwrap();
        assert_eq!(results.regret_matrix[1], vec![4.0, 4.0, 0.0, 7.0]);
        assert_eq!(results.alpha.value(), 0.25);
        assert_eq!(results.matrix, plants());
    }

    #[test]
    fn evaluate_rejects_alpha_above_one() {
        let err = evaluate(&plants(), 1.5).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RangeError);
        assert_eq!(err, DecisionError::Range(RangeError::new("alpha", 0.0, 1.0, 1.5)));
    }

    #[test]
    fn evaluate_rejects_negative_and_nan_alpha() {
        assert!(matches!(evaluate(&plants(), -0.1), Err(DecisionError::Range(_))));
        assert!(matches!(evaluate(&plants(), f64::NAN), Err(DecisionError::Range(_))));
    }

    #[test]
    fn evaluate_checks_shape_before_alpha() {
        let err = evaluate(&PayoffMatrix::default(), 7.0).unwrap_err();
        assert_eq!(err, DecisionError::Shape(ShapeError::NoAlternatives));
    }

    #[test]
    fn evaluate_accepts_alpha_bounds() {
        assert!(evaluate(&plants(), 0.0).is_ok());
        assert!(evaluate(&plants(), 1.0).is_ok());
    }

    #[test]
    fn engine_with_fixed_format_renders_places() {
        let engine = DecisionEngine::new(NumberFormat::fixed(2));
        let results = engine.evaluate(&plants(), 0.5).unwrap();
        assert_eq!(
            results.results[0].calculations[0],
            "Plant A: (3.00 + 8.00 + 2.00 + 10.00) / 4 = 5.75"
        );
    }
}

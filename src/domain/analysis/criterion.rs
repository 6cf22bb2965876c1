//! Criterion identity and per-criterion results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Alternative, PayoffMatrix};
use crate::domain::foundation::Direction;

/// The five classical rules for decisions under uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    EqualLikelihood,
    BestCase,
    WorstCase,
    OptimismWeighted,
    MinimaxRegret,
}

impl Criterion {
    /// Every criterion, in the order results are reported.
    pub const ALL: [Criterion; 5] = [
        Criterion::EqualLikelihood,
        Criterion::BestCase,
        Criterion::WorstCase,
        Criterion::OptimismWeighted,
        Criterion::MinimaxRegret,
    ];

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::EqualLikelihood => "Laplace (Equal Likelihood)",
            Criterion::BestCase => "Maximax (Best Case)",
            Criterion::WorstCase => "Maximin (Worst Case, Wald)",
            Criterion::OptimismWeighted => "Hurwicz (Optimism Weighted)",
            Criterion::MinimaxRegret => "Savage (Minimax Regret)",
        }
    }

    /// Returns a one-sentence explanation of the rule.
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::EqualLikelihood => {
                "Treats every state as equally likely and picks the best average outcome."
            }
            Criterion::BestCase => {
                "Assumes the most favourable state for each alternative and picks the best of those outcomes."
            }
            Criterion::WorstCase => {
                "Assumes the least favourable state for each alternative and picks the best of those outcomes."
            }
            Criterion::OptimismWeighted => {
                "Blends each alternative's best and worst outcomes using the optimism coefficient alpha."
            }
            Criterion::MinimaxRegret => {
                "Picks the alternative whose largest opportunity loss across states is smallest."
            }
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of applying one criterion to a payoff matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub name: String,
    pub description: String,
    /// One derivation per alternative.
    pub calculations: Vec<String>,
    /// One score per alternative.
    pub values: Vec<f64>,
    pub optimal_index: usize,
    pub optimal_value: f64,
}

impl CriterionResult {
    /// Assembles a result, selecting the optimum of `values` in `direction`.
    ///
    /// Ties resolve to the lowest index. `values` must be non-empty, which
    /// holds for every score vector derived from a validated matrix.
    pub(crate) fn select(
        criterion: Criterion,
        values: Vec<f64>,
        calculations: Vec<String>,
        direction: Direction,
    ) -> Self {
        let mut optimal_index = 0;
        for (index, &value) in values.iter().enumerate().skip(1) {
            if direction.prefers(value, values[optimal_index]) {
                optimal_index = index;
            }
        }
        let optimal_value = values[optimal_index];

        Self {
            criterion,
            name: criterion.name().to_string(),
            description: criterion.description().to_string(),
            calculations,
            values,
            optimal_index,
            optimal_value,
        }
    }

    /// The recommended alternative, looked up in the matrix that produced this result.
    pub fn optimal_alternative<'a>(&self, matrix: &'a PayoffMatrix) -> Option<&'a Alternative> {
        matrix.alternatives.get(self.optimal_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_all_is_in_reporting_order() {
        assert_eq!(Criterion::ALL[0], Criterion::EqualLikelihood);
        assert_eq!(Criterion::ALL[3], Criterion::OptimismWeighted);
        assert_eq!(Criterion::ALL[4], Criterion::MinimaxRegret);
    }

    #[test]
    fn criterion_names_are_distinct() {
        let mut names: Vec<_> = Criterion::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn select_maximize_prefers_first_of_ties() {
        let result = CriterionResult::select(
            Criterion::BestCase,
            vec![4.0, 7.0, 7.0],
            vec![String::new(); 3],
            Direction::Maximize,
        );
        assert_eq!(result.optimal_index, 1);
        assert_eq!(result.optimal_value, 7.0);
        assert_eq!(result.name, "Maximax (Best Case)");
    }

    #[test]
    fn select_minimize_prefers_first_of_ties() {
        let result = CriterionResult::select(
            Criterion::MinimaxRegret,
            vec![2.0, 5.0, 2.0],
            vec![String::new(); 3],
            Direction::Minimize,
        );
        assert_eq!(result.optimal_index, 0);
        assert_eq!(result.optimal_value, 2.0);
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = CriterionResult::select(
            Criterion::WorstCase,
            vec![1.0],
            vec!["A: min(1) = 1".to_string()],
            Direction::Maximize,
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"optimalIndex\":0"));
        assert!(json.contains("\"optimalValue\":1.0"));
        assert!(json.contains("\"criterion\":\"worstCase\""));
    }
}

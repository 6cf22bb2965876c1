//! Dominance Analyzer - alternatives that another alternative beats in every state.

use serde::{Deserialize, Serialize};

use super::{MatrixView, PayoffMatrix};
use crate::domain::foundation::ShapeError;

/// An alternative that is dominated by another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominatedAlternative {
    pub alternative_index: usize,
    pub alternative_id: String,
    pub dominated_by_index: usize,
    pub dominated_by_id: String,
    pub explanation: String,
}

/// State-by-state dominance checks.
pub struct DominanceAnalyzer;

impl DominanceAnalyzer {
    /// Finds all dominated alternatives, validating the matrix first.
    pub fn find_dominated(matrix: &PayoffMatrix) -> Result<Vec<DominatedAlternative>, ShapeError> {
        Ok(Self::find_dominated_in(matrix.validate()?))
    }

    /// Finds all dominated alternatives of a validated matrix.
    ///
    /// Alternative A dominates Alternative B if:
    /// 1. A is at least as good as B in ALL states
    /// 2. A is strictly better than B in AT LEAST ONE state
    ///
    /// "Better" follows the orientation (higher profit, lower cost).
    ///
    /// # Edge Cases
    /// - Single alternative: Returns empty Vec (can't dominate self)
    /// - Identical rows: Neither dominates the other
    /// - Several dominators: The lowest-index one is reported
    pub fn find_dominated_in(view: MatrixView<'_>) -> Vec<DominatedAlternative> {
        let mut dominated = Vec::new();
        let count = view.alternative_count();

        if count < 2 {
            return dominated;
        }

        let alternatives = &view.matrix().alternatives;
        for candidate in 0..count {
            let dominator = (0..count)
                .filter(|&other| other != candidate)
                .find(|&other| Self::dominates(view, other, candidate));

            if let Some(dominator) = dominator {
                dominated.push(DominatedAlternative {
                    alternative_index: candidate,
                    alternative_id: alternatives[candidate].id.clone(),
                    dominated_by_index: dominator,
                    dominated_by_id: alternatives[dominator].id.clone(),
                    explanation: Self::explain_dominance(view, dominator, candidate),
                });
            }
        }

        dominated
    }

    /// Checks if alternative `a` dominates alternative `b`.
    fn dominates(view: MatrixView<'_>, a: usize, b: usize) -> bool {
        let direction = view.direction();
        let rows = view.rows();
        let mut strictly_better_on_one = false;

        for (&a_value, &b_value) in rows[a].iter().zip(&rows[b]) {
            if !direction.at_least_as_good(a_value, b_value) {
                return false;
            }
            if direction.prefers(a_value, b_value) {
                strictly_better_on_one = true;
            }
        }

        strictly_better_on_one
    }

    /// Generates explanation for why `a` dominates `b`.
    fn explain_dominance(view: MatrixView<'_>, a: usize, b: usize) -> String {
        let direction = view.direction();
        let rows = view.rows();
        let better_in: Vec<&str> = rows[a]
            .iter()
            .zip(&rows[b])
            .enumerate()
            .filter(|(_, (a_value, b_value))| direction.prefers(**a_value, **b_value))
            .map(|(state, _)| view.state_name(state))
            .collect();

        format!(
            "{} is at least as good in every state and strictly better in: {}",
            view.alternative_name(a),
            better_in.join(", ")
        )
    }
}

//! Decision results bundle and cross-criterion consensus.

use serde::{Deserialize, Serialize};

use super::{Criterion, CriterionResult, PayoffMatrix};
use crate::domain::foundation::Optimism;

/// Everything one evaluation produces, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResults {
    /// The matrix that was evaluated.
    pub matrix: PayoffMatrix,
    /// The optimism coefficient used for the Hurwicz rule.
    pub alpha: Optimism,
    /// One result per criterion, in [`Criterion::ALL`] order.
    pub results: Vec<CriterionResult>,
    /// Opportunity loss, same dimensions as the payoff values.
    pub regret_matrix: Vec<Vec<f64>>,
}

impl DecisionResults {
    /// Looks up the result of a specific criterion.
    pub fn result(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.results.iter().find(|r| r.criterion == criterion)
    }

    /// Tallies how many criteria recommend each alternative.
    pub fn consensus(&self) -> Consensus {
        let mut votes = vec![0usize; self.matrix.alternative_count()];
        for result in &self.results {
            if let Some(count) = votes.get_mut(result.optimal_index) {
                *count += 1;
            }
        }

        let mut leading_index = 0;
        for (index, &count) in votes.iter().enumerate().skip(1) {
            if count > votes[leading_index] {
                leading_index = index;
            }
        }
        let leading_votes = votes.get(leading_index).copied().unwrap_or(0);

        Consensus {
            unanimous: !self.results.is_empty() && leading_votes == self.results.len(),
            votes,
            leading_index,
            leading_votes,
        }
    }
}

/// How strongly the criteria agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consensus {
    /// Number of criteria choosing each alternative, indexed like the matrix.
    pub votes: Vec<usize>,
    /// Alternative with the most votes; lowest index on ties.
    pub leading_index: usize,
    pub leading_votes: usize,
    /// True when every criterion chose the same alternative.
    pub unanimous: bool,
}

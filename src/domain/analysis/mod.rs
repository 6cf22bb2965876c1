//! Analysis Module - Pure domain services for decisions under uncertainty.
//!
//! This module contains stateless functions that operate on a payoff matrix
//! to score and select alternatives when state probabilities are unknown.
//!
//! # Components
//!
//! - `PayoffMatrix` - Outcomes per alternative and state, plus orientation
//! - `RegretMatrixBuilder` - Opportunity loss against the best outcome per state
//! - `EqualLikelihood` / `BestCase` / `WorstCase` / `OptimismWeighted` /
//!   `MinimaxRegret` - Laplace, Maximax, Maximin, Hurwicz and Savage criteria
//! - `DecisionEngine` - Runs all five criteria and bundles the results
//! - `DominanceAnalyzer` - Alternatives beaten in every state
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Every criterion
//! is written once against a selection `Direction`; the matrix orientation
//! only decides which direction is passed in. Ties always resolve to the
//! lowest alternative index.

mod criterion;
mod dominance;
mod engine;
mod equal_likelihood;
mod extremes;
mod hurwicz;
mod number_format;
mod payoff_matrix;
mod regret;
mod results;
mod savage;

// Re-export all public types
pub use criterion::{Criterion, CriterionResult};
pub use dominance::{DominanceAnalyzer, DominatedAlternative};
pub use engine::{evaluate, DecisionEngine};
pub use equal_likelihood::EqualLikelihood;
pub use extremes::{BestCase, WorstCase};
pub use hurwicz::OptimismWeighted;
pub use number_format::NumberFormat;
pub use payoff_matrix::{Alternative, MatrixView, PayoffMatrix, PayoffMatrixBuilder, State};
pub use regret::RegretMatrixBuilder;
pub use results::{Consensus, DecisionResults};
pub use savage::MinimaxRegret;

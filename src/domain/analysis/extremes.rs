//! Maximax and Maximin criteria - judging alternatives by a single extreme outcome.
//!
//! | Rule      | profit                     | cost                       |
//! |-----------|----------------------------|----------------------------|
//! | BestCase  | row max, then pick max     | row min, then pick min     |
//! | WorstCase | row min, then pick max     | row max, then pick min     |

use super::{Criterion, CriterionResult, MatrixView, NumberFormat};
use crate::domain::foundation::Direction;

/// Best-case (Maximax) evaluator.
pub struct BestCase;

impl BestCase {
    /// Scores each alternative by its most favourable outcome.
    pub fn evaluate(view: MatrixView<'_>, format: NumberFormat) -> CriterionResult {
        let direction = view.direction();
        extreme_rule(Criterion::BestCase, view, direction, format)
    }
}

/// Worst-case (Maximin / Wald) evaluator.
pub struct WorstCase;

impl WorstCase {
    /// Scores each alternative by its least favourable outcome.
    pub fn evaluate(view: MatrixView<'_>, format: NumberFormat) -> CriterionResult {
        let direction = view.direction();
        extreme_rule(Criterion::WorstCase, view, direction.opposite(), format)
    }
}

/// Per-row extreme in `row_direction`, then selection in the matrix's own direction.
fn extreme_rule(
    criterion: Criterion,
    view: MatrixView<'_>,
    row_direction: Direction,
    format: NumberFormat,
) -> CriterionResult {
    let mut values = Vec::with_capacity(view.alternative_count());
    let mut calculations = Vec::with_capacity(view.alternative_count());

    for (index, row) in view.rows().iter().enumerate() {
        let extreme = view.row_extreme(index, row_direction);
        calculations.push(format!(
            "{}: {}({}) = {}",
            view.alternative_name(index),
            row_direction.extreme_label(),
            format.join(row, ", "),
            format.number(extreme)
        ));
        values.push(extreme);
    }

    CriterionResult::select(criterion, values, calculations, view.direction())
}

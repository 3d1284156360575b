//! Simplifying constructor for subtraction.

use crate::expr::{Binary, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use log::trace;

/// Subtracts `rhs` from `lhs`.
///
/// `a-0 = a`
///
/// `0-a` is left alone, since there is no negation node to rewrite it into.
pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    sub_with(lhs, rhs, &mut ())
}

/// Subtracts `rhs` from `lhs`, reporting the applied rules to `step_collector`.
pub fn sub_with(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if rhs.is_constant_eq(0.0) {
        trace!("{} - 0 = {}", lhs, lhs);
        step_collector.push(Step::SubtractZero);
        return lhs;
    }

    Expr::Sub(Binary::new(lhs, rhs))
}

//! Simplifying constructor for addition.

use crate::expr::{Binary, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use log::trace;

/// Adds two expressions.
///
/// `0+a = a`
/// `a+0 = a`
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    add_with(lhs, rhs, &mut ())
}

/// Adds two expressions, reporting the applied rules to `step_collector`.
pub fn add_with(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if lhs.is_constant_eq(0.0) {
        trace!("0 + {} = {}", rhs, rhs);
        step_collector.push(Step::AddZero);
        return rhs;
    }

    if rhs.is_constant_eq(0.0) {
        trace!("{} + 0 = {}", lhs, lhs);
        step_collector.push(Step::AddZero);
        return lhs;
    }

    Expr::Add(Binary::new(lhs, rhs))
}

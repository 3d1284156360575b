//! Simplifying constructor for multiplication.

use crate::expr::{Binary, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use log::trace;

/// Multiplies two expressions.
///
/// `0*a = 0`
/// `1*a = a`
/// `a*0 = 0`
/// `a*1 = a`
pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    mul_with(lhs, rhs, &mut ())
}

/// Multiplies two expressions, reporting the applied rules to `step_collector`.
pub fn mul_with(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if let Some(value) = lhs.as_constant() {
        if value == 0.0 {
            trace!("0 * {} = 0", rhs);
            step_collector.push(Step::MultiplyZero);
            return Expr::Constant(0.0);
        }
        if value == 1.0 {
            trace!("1 * {} = {}", rhs, rhs);
            step_collector.push(Step::MultiplyOne);
            return rhs;
        }
    }

    if let Some(value) = rhs.as_constant() {
        if value == 0.0 {
            trace!("{} * 0 = 0", lhs);
            step_collector.push(Step::MultiplyZero);
            return Expr::Constant(0.0);
        }
        if value == 1.0 {
            trace!("{} * 1 = {}", lhs, lhs);
            step_collector.push(Step::MultiplyOne);
            return lhs;
        }
    }

    Expr::Mul(Binary::new(lhs, rhs))
}

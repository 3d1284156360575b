//! Simplifying constructor for exponentiation.

use crate::expr::{Binary, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use log::trace;

/// Raises `base` to the power of `exponent`.
///
/// `a^0 = 1`
/// `a^1 = a`
///
/// Both identities only apply when the base is not a constant, so `3^0` and `3^1` are kept as
/// they are.
pub fn pow(base: Expr, exponent: Expr) -> Expr {
    pow_with(base, exponent, &mut ())
}

/// Raises `base` to the power of `exponent`, reporting the applied rules to `step_collector`.
pub fn pow_with(base: Expr, exponent: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if !base.is_constant() {
        if exponent.is_constant_eq(0.0) {
            trace!("{} ^ 0 = 1", base);
            step_collector.push(Step::PowerZero);
            return Expr::Constant(1.0);
        }
        if exponent.is_constant_eq(1.0) {
            trace!("{} ^ 1 = {}", base, base);
            step_collector.push(Step::PowerOne);
            return base;
        }
    }

    Expr::Pow(Binary::new(base, exponent))
}

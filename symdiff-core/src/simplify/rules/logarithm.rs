//! Simplifying constructor for the natural logarithm.

use crate::error::{kind::DomainError, unary_spans};
use crate::expr::{Expr, Unary};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use log::trace;
use symdiff_error::Error;

/// Takes the natural logarithm of `operand`.
///
/// `ln(e) = 1`, where `e` matches any constant within `1e-10` of Euler's number.
///
/// Returns [`Err`] with a [`DomainError`] if `operand` is the constant `0`.
pub fn ln(operand: Expr) -> Result<Expr, Error> {
    ln_with(operand, &mut ())
}

/// Takes the natural logarithm of `operand`, reporting the applied rules to `step_collector`.
pub fn ln_with(operand: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    if operand.is_constant_eq(0.0) {
        let (src, span) = unary_spans("ln", &operand);
        return Err(Error::new(src, vec![span], DomainError { function: "ln" }));
    }

    if operand.is_constant_e() {
        trace!("ln({}) = 1", operand);
        step_collector.push(Step::LnE);
        return Ok(Expr::Constant(1.0));
    }

    Ok(Expr::Ln(Unary::new(operand)))
}

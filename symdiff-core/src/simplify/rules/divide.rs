//! Simplifying constructor for division.

use crate::error::{binary_spans, kind::DivisionByZero};
use crate::expr::{Binary, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use log::trace;
use symdiff_error::Error;

/// Divides `lhs` by `rhs`.
///
/// `a/1 = a`
/// `0/a = 0`
///
/// Returns [`Err`] with a [`DivisionByZero`] if `rhs` is the constant `0`. The divisor is checked
/// first, so `0/0` is an error too.
pub fn div(lhs: Expr, rhs: Expr) -> Result<Expr, Error> {
    div_with(lhs, rhs, &mut ())
}

/// Divides `lhs` by `rhs`, reporting the applied rules to `step_collector`.
pub fn div_with(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    if let Some(value) = rhs.as_constant() {
        if value == 0.0 {
            let (src, lhs_span, rhs_span) = binary_spans(&lhs, "/", &rhs);
            return Err(Error::new(src, vec![lhs_span, rhs_span], DivisionByZero));
        }
        if value == 1.0 {
            trace!("{} / 1 = {}", lhs, lhs);
            step_collector.push(Step::DivideOne);
            return Ok(lhs);
        }
    }

    if lhs.is_constant_eq(0.0) {
        trace!("0 / {} = 0", rhs);
        step_collector.push(Step::DivideZeroDividend);
        return Ok(Expr::Constant(0.0));
    }

    Ok(Expr::Div(Binary::new(lhs, rhs)))
}

//! Derivatives of powers.

use crate::error::{binary_spans, kind::UnsupportedDerivative};
use crate::expr::{Binary, Expr};
use crate::simplify::{ln_with, mul_with, pow_with, Step};
use crate::step_collector::StepCollector;
use symdiff_error::Error;
use super::derivative_with;

/// Differentiates `base ^ exponent`.
///
/// - `(f ^ n)' = (n * f^(n - 1)) * f'`, where `n` is a constant
/// - `(a ^ f)' = (a^f * ln(a)) * f'`, where `a` is a constant
///
/// Returns [`Err`] with an [`UnsupportedDerivative`] if both or neither of the base and exponent
/// are constants.
pub(super) fn power_rule(
    node: &Binary,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let (base, exponent) = (node.lhs(), node.rhs());

    match (base.is_constant(), exponent.as_constant()) {
        (false, Some(n)) => {
            let base_derivative = derivative_with(base, with, step_collector)?;
            let power = pow_with(base.clone(), Expr::Constant(n - 1.0), step_collector);
            let scaled = mul_with(exponent.clone(), power, step_collector);
            Ok(mul_with(scaled, base_derivative, step_collector))
        },
        (true, None) => {
            let exponent_derivative = derivative_with(exponent, with, step_collector)?;
            let power = pow_with(base.clone(), exponent.clone(), step_collector);
            let log = ln_with(base.clone(), step_collector)?;
            let scaled = mul_with(power, log, step_collector);
            Ok(mul_with(scaled, exponent_derivative, step_collector))
        },
        (both_constant, _) => {
            let (src, base_span, exponent_span) = binary_spans(base, "^", exponent);
            Err(Error::new(
                src,
                vec![base_span, exponent_span],
                UnsupportedDerivative { with: with.to_string(), both_constant },
            ))
        },
    }
}

//! Symbolic differentiation.
//!
//! [`derivative`] applies the rules of differentiation to an expression, one node at a time. The
//! derivative is assembled exclusively through the simplifying constructors in
//! [`simplify`](crate::simplify), so the result is already free of trivially reducible patterns
//! like `0 * a` or `a ^ 1`.
//!
//! Variables other than the one being differentiated against are treated as independent of it,
//! and differentiate to `0`.

mod power;

use crate::expr::{Binary, Expr, Unary};
use crate::simplify::{add_with, div_with, mul_with, pow_with, sub_with, Step};
use crate::step_collector::StepCollector;
use log::debug;
use symdiff_error::Error;

/// `(f + g)' = f' + g'`
///
/// If both derivatives are constants, they are folded into one constant.
fn sum_rule(
    node: &Binary,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let lhs = derivative_with(node.lhs(), with, step_collector)?;
    let rhs = derivative_with(node.rhs(), with, step_collector)?;

    match (lhs.as_constant(), rhs.as_constant()) {
        (Some(lhs), Some(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Ok(Expr::Constant(lhs + rhs))
        },
        _ => Ok(add_with(lhs, rhs, step_collector)),
    }
}

/// `(f - g)' = f' - g'`
///
/// If both derivatives are constants, they are folded into one constant.
fn difference_rule(
    node: &Binary,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let lhs = derivative_with(node.lhs(), with, step_collector)?;
    let rhs = derivative_with(node.rhs(), with, step_collector)?;

    match (lhs.as_constant(), rhs.as_constant()) {
        (Some(lhs), Some(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Ok(Expr::Constant(lhs - rhs))
        },
        _ => Ok(sub_with(lhs, rhs, step_collector)),
    }
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(
    node: &Binary,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let (f, g) = (node.lhs(), node.rhs());
    let df = derivative_with(f, with, step_collector)?;
    let dg = derivative_with(g, with, step_collector)?;

    let lhs = mul_with(f.clone(), dg, step_collector);
    let rhs = mul_with(df, g.clone(), step_collector);
    Ok(add_with(lhs, rhs, step_collector))
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(
    node: &Binary,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let (f, g) = (node.lhs(), node.rhs());
    let df = derivative_with(f, with, step_collector)?;
    let dg = derivative_with(g, with, step_collector)?;

    let lhs = mul_with(df, g.clone(), step_collector);
    let rhs = mul_with(f.clone(), dg, step_collector);
    let numerator = sub_with(lhs, rhs, step_collector);
    let denominator = pow_with(g.clone(), Expr::Constant(2.0), step_collector);
    div_with(numerator, denominator, step_collector)
}

/// `ln(f)' = (1 / f) * f'`
fn log_rule(
    node: &Unary,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let f = node.operand();
    let df = derivative_with(f, with, step_collector)?;

    let recip = div_with(Expr::Constant(1.0), f.clone(), step_collector)?;
    Ok(mul_with(recip, df, step_collector))
}

/// Computes the derivative of `f` with respect to the variable named `with`, reporting every
/// simplification applied along the way to `step_collector`.
pub(crate) fn derivative_with(
    f: &Expr,
    with: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    match f {
        Expr::Constant(_) => Ok(Expr::Constant(0.0)),
        Expr::Variable(name) => {
            if name == with {
                Ok(Expr::Constant(1.0))
            } else {
                Ok(Expr::Constant(0.0))
            }
        },
        Expr::Add(node) => sum_rule(node, with, step_collector),
        Expr::Sub(node) => difference_rule(node, with, step_collector),
        Expr::Mul(node) => product_rule(node, with, step_collector),
        Expr::Div(node) => quotient_rule(node, with, step_collector),
        Expr::Pow(node) => power::power_rule(node, with, step_collector),
        Expr::Ln(node) => log_rule(node, with, step_collector),
    }
}

/// Computes the derivative of the given expression with respect to the variable named `with`.
///
/// Returns [`Err`] if the derivative could not be symbolically computed, either because it
/// contains a power that can't be differentiated
/// ([`UnsupportedDerivative`](crate::error::kind::UnsupportedDerivative)), or because building
/// the derivative required an undefined operation, such as `ln(0)`.
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    debug!("differentiating `{}` ({} nodes) with respect to `{}`", f, f.node_count(), with);
    let result = derivative_with(f, with, &mut ())?;
    debug!("derivative is `{}` ({} nodes)", result, result.node_count());
    Ok(result)
}

/// Computes the derivative of the given expression with respect to the variable named `with`,
/// also returning the simplification steps applied while building it, in order.
pub fn derivative_with_steps(f: &Expr, with: &str) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let result = derivative_with(f, with, &mut steps)?;
    debug!("derivative of `{}` took {} simplification steps", f, steps.len());
    Ok((result, steps))
}

impl Expr {
    /// Computes the derivative of this expression with respect to the variable named `with`.
    ///
    /// See [`derivative`] for more information.
    pub fn derivative(&self, with: &str) -> Result<Expr, Error> {
        derivative(self, with)
    }
}

//! Simplifying constructors for every operator.
//!
//! Each operator has exactly one sanctioned constructor in this module, such as [`add`] or
//! [`div`]. Before allocating a node, the constructor checks its operands against a small set of
//! algebraic identities and returns the simpler, equivalent expression if one applies:
//!
//! | Constructor | Identities                                                    | Fails when          |
//! | ----------- | ------------------------------------------------------------- | ------------------- |
//! | [`add`]     | `0+a = a`, `a+0 = a`                                          |                     |
//! | [`sub`]     | `a-0 = a`                                                     |                     |
//! | [`mul`]     | `0*a = 0`, `1*a = a`, `a*0 = 0`, `a*1 = a`                    |                     |
//! | [`pow`]     | `a^0 = 1`, `a^1 = a` (only if `a` is not a constant)          |                     |
//! | [`div`]     | `a/1 = a`, `0/a = 0`                                          | the divisor is `0`  |
//! | [`ln`]      | `ln(e) = 1`                                                   | the argument is `0` |
//!
//! Identities involving the left operand are checked before those involving the right operand,
//! except for [`div`], which rejects a zero divisor before anything else. Two constant operands
//! are **not** folded into one constant: `add(2, 3)` is the expression `(2 + 3)`.
//!
//! Because every operator node is built by one of these constructors, any expression handed out
//! by this crate is already free of these patterns at every level, and re-applying the
//! constructor of a node to its own operands gives back the same node.
//!
//! ```
//! use symdiff_core::{simplify::{add, mul, pow}, Expr};
//!
//! let x = Expr::variable("x");
//! let expr = add(mul(Expr::constant(1.0), pow(x.clone(), Expr::constant(1.0))), Expr::constant(0.0));
//! assert_eq!(expr, x);
//! ```
//!
//! Every constructor has a `_with` variant that reports the rules it applied to a
//! [`StepCollector`](crate::step_collector::StepCollector).

pub mod rules;
pub mod step;

pub use rules::{
    add::{add, add_with},
    divide::{div, div_with},
    logarithm::{ln, ln_with},
    multiply::{mul, mul_with},
    power::{pow, pow_with},
    subtract::{sub, sub_with},
};
pub use step::Step;

#[cfg(test)]
mod tests {
    use crate::consts::E;
    use crate::error::kind::{DivisionByZero, DomainError};
    use crate::expr::Expr;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn c(value: f64) -> Expr {
        Expr::constant(value)
    }

    /// A handful of expressions of every shape, to check identities against.
    fn samples() -> Vec<Expr> {
        vec![
            c(7.0),
            x(),
            add(x(), c(2.0)),
            sub(c(3.0), x()),
            mul(c(5.0), pow(x(), c(2.0))),
            div(x(), add(x(), c(1.0))).unwrap(),
            pow(c(2.0), x()),
            ln(x()).unwrap(),
        ]
    }

    #[test]
    fn add_zero() {
        for e in samples() {
            assert_eq!(add(c(0.0), e.clone()), e);
            assert_eq!(add(e.clone(), c(0.0)), e);
        }
    }

    #[test]
    fn add_constants_not_folded() {
        assert_eq!(add(c(2.0), c(3.0)).to_string(), "(2 + 3)");
    }

    #[test]
    fn sub_zero() {
        for e in samples() {
            assert_eq!(sub(e.clone(), c(0.0)), e);
        }

        // only the right-hand side is checked
        assert_eq!(sub(c(0.0), x()).to_string(), "(0 - x)");
    }

    #[test]
    fn multiply_one_and_zero() {
        for e in samples() {
            assert_eq!(mul(c(1.0), e.clone()), e);
            assert_eq!(mul(e.clone(), c(1.0)), e);
            assert_eq!(mul(c(0.0), e.clone()).to_string(), "0");
            assert_eq!(mul(e.clone(), c(0.0)), c(0.0));
        }
    }

    #[test]
    fn multiply_left_rules_first() {
        // `0 * 1` hits `0*a` before `a*1`
        assert_eq!(mul(c(0.0), c(1.0)), c(0.0));
        // `1 * 0` hits `1*a`
        assert_eq!(mul(c(1.0), c(0.0)), c(0.0));
        assert_eq!(mul(c(2.0), c(3.0)).to_string(), "(2 * 3)");
    }

    #[test]
    fn power_rules() {
        assert_eq!(pow(x(), c(0.0)), c(1.0));
        assert_eq!(pow(x(), c(1.0)), x());
        assert_eq!(pow(x(), c(2.0)).to_string(), "(x ^ 2)");
        assert_eq!(pow(add(x(), c(1.0)), c(1.0)), add(x(), c(1.0)));
    }

    #[test]
    fn power_rules_skip_constant_base() {
        assert_eq!(pow(c(3.0), c(0.0)).to_string(), "(3 ^ 0)");
        assert_eq!(pow(c(3.0), c(1.0)).to_string(), "(3 ^ 1)");
        assert_eq!(pow(x(), x()).to_string(), "(x ^ x)");
    }

    #[test]
    fn divide_by_zero() {
        for e in samples() {
            let err = div(e.clone(), c(0.0)).unwrap_err();
            assert!(err.is::<DivisionByZero>());
            assert_eq!(&err.src[err.spans[0].clone()], e.to_string());
            assert_eq!(&err.src[err.spans[1].clone()], "0");
        }
    }

    #[test]
    fn divide_zero_by_zero_fails() {
        let err = div(c(0.0), c(0.0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.src, "(0 / 0)");
    }

    #[test]
    fn divide_rules() {
        for e in samples() {
            assert_eq!(div(e.clone(), c(1.0)).unwrap(), e);
        }
        assert_eq!(div(c(0.0), x()).unwrap(), c(0.0));
        assert_eq!(div(c(1.0), x()).unwrap().to_string(), "(1 / x)");
        assert_eq!(div(c(6.0), c(3.0)).unwrap().to_string(), "(6 / 3)");
    }

    #[test]
    fn ln_of_zero() {
        let err = ln(c(0.0)).unwrap_err();
        assert_eq!(err.downcast_ref::<DomainError>(), Some(&DomainError { function: "ln" }));
        assert_eq!(err.src, " ln(0)");
        assert_eq!(&err.src[err.spans[0].clone()], "0");
    }

    #[test]
    fn ln_of_e() {
        assert_eq!(ln(c(2.718281828459045)).unwrap(), c(1.0));
        assert_eq!(ln(c(E)).unwrap(), c(1.0));
        assert_eq!(ln(c(E + 1e-11)).unwrap(), c(1.0));
        assert!(matches!(ln(c(E + 1e-9)).unwrap(), Expr::Ln(_)));
        assert!(matches!(ln(c(E - 1e-9)).unwrap(), Expr::Ln(_)));
        assert_eq!(ln(c(2.0)).unwrap().to_string(), " ln(2)");
        assert_eq!(ln(x()).unwrap().to_string(), " ln(x)");
    }

    #[test]
    fn idempotence() {
        // rebuilding any node from its own operands gives back the same node
        for e in samples() {
            let rebuilt = match e.clone() {
                Expr::Constant(_) | Expr::Variable(_) => e.clone(),
                Expr::Add(node) => {
                    let (lhs, rhs) = node.into_parts();
                    add(lhs, rhs)
                },
                Expr::Sub(node) => {
                    let (lhs, rhs) = node.into_parts();
                    sub(lhs, rhs)
                },
                Expr::Mul(node) => {
                    let (lhs, rhs) = node.into_parts();
                    mul(lhs, rhs)
                },
                Expr::Div(node) => {
                    let (lhs, rhs) = node.into_parts();
                    div(lhs, rhs).unwrap()
                },
                Expr::Pow(node) => {
                    let (lhs, rhs) = node.into_parts();
                    pow(lhs, rhs)
                },
                Expr::Ln(node) => ln(node.into_operand()).unwrap(),
            };
            assert_eq!(rebuilt, e);
        }
    }

    #[test]
    fn collects_steps() {
        let mut steps: Vec<Step> = Vec::new();
        let expr = add_with(
            mul_with(c(1.0), pow_with(x(), c(1.0), &mut steps), &mut steps),
            c(0.0),
            &mut steps,
        );
        assert_eq!(expr, x());
        assert_eq!(steps, vec![Step::PowerOne, Step::MultiplyOne, Step::AddZero]);
    }

    #[test]
    fn no_steps_without_simplification() {
        let mut steps: Vec<Step> = Vec::new();
        let expr = div_with(x(), c(2.0), &mut steps).unwrap();
        assert_eq!(expr.to_string(), "(x / 2)");
        assert!(steps.is_empty());
    }
}

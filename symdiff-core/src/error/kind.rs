use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// Attempted to divide by the constant zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "attempted to divide by zero",
    labels = ["", "this divisor is zero"],
)]
pub struct DivisionByZero;

/// The argument of a function is outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the argument of `{}` is zero", self.function),
    labels = ["this argument is zero"],
    help = format!("`{}` is only defined for positive arguments", self.function.fg(EXPR)),
)]
pub struct DomainError {
    /// The name of the function.
    pub function: &'static str,
}

/// The derivative of a power can only be computed if exactly one of the base and exponent is a
/// constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate this power with respect to `{}`", self.with),
    labels = if self.both_constant {
        ["this base is a constant", "and so is this exponent"]
    } else {
        ["this base is not a constant", "and neither is this exponent"]
    },
    help = format!(
        "only powers of the form {} or {} can be differentiated",
        "f(x) ^ n".fg(EXPR),
        "a ^ f(x)".fg(EXPR),
    ),
)]
pub struct UnsupportedDerivative {
    /// The variable the derivative was taken with respect to.
    pub with: String,

    /// Whether both operands were constants (otherwise, neither was).
    pub both_constant: bool,
}

/// Attempted to read the value of an expression that is not a constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "only constants have a value",
    labels = ["this expression is not a constant"],
)]
pub struct InvalidOperation;

#[cfg(test)]
mod tests {
    use crate::{derivative::derivative, expr::Expr, simplify::{div, ln, pow}};
    use super::*;

    /// Renders the report of an error without colors.
    fn render(err: &symdiff_error::Error) -> String {
        let mut buf = Vec::new();
        err.write_report(&mut buf).unwrap();
        strip_ansi_escapes::strip_str(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn division_by_zero_report() {
        let err = div(Expr::variable("x"), Expr::constant(0.0)).unwrap_err();
        let report = render(&err);
        assert!(report.contains("attempted to divide by zero"), "{report}");
        assert!(report.contains("this divisor is zero"), "{report}");
        assert!(report.contains("(x / 0)"), "{report}");
    }

    #[test]
    fn domain_error_report() {
        let err = ln(Expr::constant(0.0)).unwrap_err();
        let report = render(&err);
        assert!(report.contains("the argument of `ln` is zero"), "{report}");
        assert!(report.contains("`ln` is only defined for positive arguments"), "{report}");
    }

    #[test]
    fn unsupported_derivative_report() {
        let expr = pow(Expr::variable("x"), Expr::variable("x"));
        let err = derivative(&expr, "x").unwrap_err();
        let report = render(&err);
        assert!(report.contains("cannot differentiate this power with respect to `x`"), "{report}");
        assert!(report.contains("this base is not a constant"), "{report}");
        assert!(report.contains("and neither is this exponent"), "{report}");
    }

    #[test]
    fn messages() {
        let err = div(Expr::variable("x"), Expr::constant(0.0)).unwrap_err();
        assert_eq!(err.to_string(), "attempted to divide by zero in `(x / 0)`");

        let kind = UnsupportedDerivative { with: "t".to_string(), both_constant: true };
        assert_eq!(
            symdiff_error::ErrorKind::message(&kind),
            "cannot differentiate this power with respect to `t`",
        );
    }
}

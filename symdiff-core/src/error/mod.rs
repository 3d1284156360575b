//! Errors raised while building or differentiating expressions.
//!
//! Every error is a [`symdiff_error::Error`] whose `src` is the rendering of the node that could
//! not be built or differentiated, e.g. `(x / 0)`, with spans pointing at the offending operands.
//! The concrete error kinds live in [`kind`].

pub mod kind;

use crate::expr::Expr;
use std::ops::Range;

pub use symdiff_error::Error;

/// Returns the number of characters in `s`. Spans count characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Renders `(lhs <symbol> rhs)` exactly as [`Expr`]'s `Display` implementation would, returning
/// the rendering and the spans of both operands.
pub(crate) fn binary_spans(lhs: &Expr, symbol: &str, rhs: &Expr) -> (String, Range<usize>, Range<usize>) {
    let lhs = lhs.to_string();
    let rhs = rhs.to_string();
    let lhs_span = 1..1 + char_len(&lhs);
    let rhs_start = lhs_span.end + char_len(symbol) + 2;
    let rhs_span = rhs_start..rhs_start + char_len(&rhs);
    (format!("({} {} {})", lhs, symbol, rhs), lhs_span, rhs_span)
}

/// Renders ` name(operand)` exactly as [`Expr`]'s `Display` implementation would, returning the
/// rendering and the span of the operand.
pub(crate) fn unary_spans(name: &str, operand: &Expr) -> (String, Range<usize>) {
    let operand = operand.to_string();
    let start = char_len(name) + 2;
    let span = start..start + char_len(&operand);
    (format!(" {}({})", name, operand), span)
}

#[cfg(test)]
mod tests {
    use crate::simplify::{add, div, ln};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn spans_count_characters() {
        let err = div(Expr::variable("θθθθ"), Expr::constant(0.0)).unwrap_err();
        assert_eq!(err.src, "(θθθθ / 0)");
        assert_eq!(err.spans, vec![1..5, 8..9]);

        let err = ln(Expr::constant(0.0)).unwrap_err();
        assert_eq!(err.spans, vec![4..5]);

        let err = add(Expr::variable("λ"), Expr::constant(1.0)).value().unwrap_err();
        assert_eq!(err.spans, vec![0..7]);
    }

    #[test]
    fn non_ascii_report_labels() {
        let err = div(Expr::variable("θθθθ"), Expr::constant(0.0)).unwrap_err();
        let mut buf = Vec::new();
        err.write_report(&mut buf).unwrap();
        let report = strip_ansi_escapes::strip_str(String::from_utf8(buf).unwrap());
        assert!(report.contains("this divisor is zero"), "{report}");
    }
}

//! The expression tree.
//!
//! An [`Expr`] is a closed set of node kinds: two leaves ([`Expr::Constant`] and
//! [`Expr::Variable`]), five binary operators and the natural logarithm. Every operator node
//! exclusively owns its children, and no node is ever mutated after it is built; transformations
//! such as [`derivative`](crate::derivative::derivative) always build new trees.
//!
//! # Construction
//!
//! Leaves are built directly with [`Expr::constant`] and [`Expr::variable`]. Operator nodes can
//! **only** be built through the simplifying constructors in [`simplify`](crate::simplify), such
//! as [`add`](crate::simplify::add) and [`div`](crate::simplify::div). The payloads of operator
//! nodes ([`Binary`] and [`Unary`]) have private fields, so code outside this crate can inspect
//! an operator node but never assemble one by hand. This guarantees that no node handed to a
//! caller matches one of the trivially reducible patterns the constructors know about (`0 + a`,
//! `a * 1`, `a ^ 0`, ...).
//!
//! Simplification is purely local: a constructor only looks at its immediate operands. An
//! expression like `(5 * (x ^ 2)) + (5 * (x ^ 3))` is never factored, and two constant operands
//! are never folded together (`2 + 3` stays as it is).
//!
//! # Equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal if
//! they have the same shape, with equal constants and equally named variables at the same
//! positions. `(x + y)` and `(y + x)` are not equal.

mod iter;
#[cfg(feature = "serde")]
mod shape;

use crate::consts::{E, E_TOLERANCE};
use crate::error::{char_len, kind::InvalidOperation};
use crate::simplify::rules;
pub use iter::ExprIter;
use std::{fmt, ops::{Add, Mul, Sub}};
use symdiff_error::Error;

/// The two operands of a binary operator node.
///
/// For [`Expr::Pow`], the left-hand side is the base and the right-hand side is the exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    lhs: Box<Expr>,
    rhs: Box<Expr>,
}

impl Binary {
    /// Wraps the operands without applying any simplification. Only the simplifying constructors
    /// may call this.
    pub(crate) fn new(lhs: Expr, rhs: Expr) -> Self {
        Self { lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// The left-hand side of the operator.
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// The right-hand side of the operator.
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    /// Consumes the node, returning both operands.
    pub fn into_parts(self) -> (Expr, Expr) {
        (*self.lhs, *self.rhs)
    }
}

/// The operand of a unary operator node.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    operand: Box<Expr>,
}

impl Unary {
    /// Wraps the operand without applying any simplification. Only the simplifying constructors
    /// may call this.
    pub(crate) fn new(operand: Expr) -> Self {
        Self { operand: Box::new(operand) }
    }

    /// The operand of the operator.
    pub fn operand(&self) -> &Expr {
        &self.operand
    }

    /// Consumes the node, returning the operand.
    pub fn into_operand(self) -> Expr {
        *self.operand
    }
}

/// A symbolic expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "shape::Shape", try_from = "shape::Shape")
)]
pub enum Expr {
    /// A numeric literal, such as `2` or `0.5`.
    Constant(f64),

    /// A symbol, such as `x`.
    Variable(String),

    /// `lhs + rhs`
    Add(Binary),

    /// `lhs - rhs`
    Sub(Binary),

    /// `lhs * rhs`
    Mul(Binary),

    /// `lhs / rhs`
    Div(Binary),

    /// `lhs ^ rhs`
    Pow(Binary),

    /// `ln(operand)`
    Ln(Unary),
}

impl Expr {
    /// Creates a constant.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Returns true if the expression is a [`Expr::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// If the expression is a [`Expr::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of a [`Expr::Constant`].
    ///
    /// Returns [`Err`] with an [`InvalidOperation`] if the expression is anything else. Prefer
    /// [`Expr::as_constant`] or a `match` when the caller can handle both cases.
    pub fn value(&self) -> Result<f64, Error> {
        self.as_constant().ok_or_else(|| {
            let src = self.to_string();
            let span = 0..char_len(&src);
            Error::new(src, vec![span], InvalidOperation)
        })
    }

    /// Returns true if the expression is a [`Expr::Constant`] equal to `value`.
    pub(crate) fn is_constant_eq(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns true if the expression is a [`Expr::Constant`] within `1e-10` of Euler's number.
    pub fn is_constant_e(&self) -> bool {
        self.as_constant()
            .map(|value| (value - E).abs() < E_TOLERANCE)
            .unwrap_or(false)
    }

    /// If the expression is a [`Expr::Variable`], returns a reference to its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the symbol of a binary operator node.
    fn binary_symbol(&self) -> Option<&'static str> {
        match self {
            Self::Add(_) => Some("+"),
            Self::Sub(_) => Some("-"),
            Self::Mul(_) => Some("*"),
            Self::Div(_) => Some("/"),
            Self::Pow(_) => Some("^"),
            Self::Constant(_) | Self::Variable(_) | Self::Ln(_) => None,
        }
    }
}

/// Renders the expression in fully parenthesized infix notation, e.g. `((2 * x) + 1)`.
///
/// `ln` is rendered with a leading space (` ln(x)`), so that a product like `a * ln(b)` appears
/// as `(a *  ln(b))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Add(node) | Self::Sub(node) | Self::Mul(node) | Self::Div(node) | Self::Pow(node) => {
                // always `Some` for these variants
                let symbol = self.binary_symbol().unwrap_or_default();
                write!(f, "({} {} {})", node.lhs, symbol, node.rhs)
            },
            Self::Ln(node) => write!(f, " ln({})", node.operand),
        }
    }
}

/// Adds two expressions with [`add`](crate::simplify::add).
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        rules::add::add(self, rhs)
    }
}

/// Subtracts two expressions with [`sub`](crate::simplify::sub).
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        rules::subtract::sub(self, rhs)
    }
}

/// Multiplies two expressions with [`mul`](crate::simplify::mul).
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        rules::multiply::mul(self, rhs)
    }
}

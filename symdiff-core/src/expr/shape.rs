//! Serialized form of [`Expr`].
//!
//! The operator payloads of [`Expr`] can't be built outside of the simplifying constructors, so
//! serialization goes through this mirror type instead. Deserializing a [`Shape`] rebuilds the tree
//! bottom-up with the constructors, so a deserialized expression is simplified exactly like one
//! built by hand, and invalid nodes like `(x / 0)` are rejected.

use crate::simplify::{add, div, ln, mul, pow, sub};
use serde::{Deserialize, Serialize};
use super::Expr;
use symdiff_error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) enum Shape {
    Constant(f64),
    Variable(String),
    Add(Box<Shape>, Box<Shape>),
    Sub(Box<Shape>, Box<Shape>),
    Mul(Box<Shape>, Box<Shape>),
    Div(Box<Shape>, Box<Shape>),
    Pow(Box<Shape>, Box<Shape>),
    Ln(Box<Shape>),
}

impl From<Expr> for Shape {
    fn from(expr: Expr) -> Self {
        let binary = |node: super::Binary| {
            let (lhs, rhs) = node.into_parts();
            (Box::new(Shape::from(lhs)), Box::new(Shape::from(rhs)))
        };

        match expr {
            Expr::Constant(value) => Self::Constant(value),
            Expr::Variable(name) => Self::Variable(name),
            Expr::Add(node) => {
                let (lhs, rhs) = binary(node);
                Self::Add(lhs, rhs)
            },
            Expr::Sub(node) => {
                let (lhs, rhs) = binary(node);
                Self::Sub(lhs, rhs)
            },
            Expr::Mul(node) => {
                let (lhs, rhs) = binary(node);
                Self::Mul(lhs, rhs)
            },
            Expr::Div(node) => {
                let (lhs, rhs) = binary(node);
                Self::Div(lhs, rhs)
            },
            Expr::Pow(node) => {
                let (lhs, rhs) = binary(node);
                Self::Pow(lhs, rhs)
            },
            Expr::Ln(node) => Self::Ln(Box::new(Shape::from(node.into_operand()))),
        }
    }
}

impl TryFrom<Shape> for Expr {
    type Error = Error;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        let binary = |lhs: Box<Shape>, rhs: Box<Shape>| -> Result<(Expr, Expr), Error> {
            Ok((Expr::try_from(*lhs)?, Expr::try_from(*rhs)?))
        };

        Ok(match shape {
            Shape::Constant(value) => Expr::Constant(value),
            Shape::Variable(name) => Expr::Variable(name),
            Shape::Add(lhs, rhs) => {
                let (lhs, rhs) = binary(lhs, rhs)?;
                add(lhs, rhs)
            },
            Shape::Sub(lhs, rhs) => {
                let (lhs, rhs) = binary(lhs, rhs)?;
                sub(lhs, rhs)
            },
            Shape::Mul(lhs, rhs) => {
                let (lhs, rhs) = binary(lhs, rhs)?;
                mul(lhs, rhs)
            },
            Shape::Div(lhs, rhs) => {
                let (lhs, rhs) = binary(lhs, rhs)?;
                div(lhs, rhs)?
            },
            Shape::Pow(lhs, rhs) => {
                let (lhs, rhs) = binary(lhs, rhs)?;
                pow(lhs, rhs)
            },
            Shape::Ln(operand) => ln(Expr::try_from(*operand)?)?,
        })
    }
}

//! The simplifying constructors, one module per operator.
//!
//! Each constructor takes ownership of its operands and returns either one of them, a new
//! constant, or a freshly allocated node. The `_with` variants push a [`Step`] to the given
//! collector every time an identity is applied.
//!
//! [`Step`]: super::step::Step

pub mod add;
pub mod divide;
pub mod logarithm;
pub mod multiply;
pub mod power;
pub mod subtract;

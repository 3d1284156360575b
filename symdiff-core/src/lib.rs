#![doc = include_str!("../README.md")]

pub mod consts;
pub mod derivative;
pub mod error;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, derivative_with_steps};
pub use error::Error;
pub use expr::{Binary, Expr, Unary};
pub use simplify::Step;
pub use step_collector::StepCollector;

//! Solvers for scalar root-finding problems.
//!
//! These solvers search for an `x` where a [`DifferentiableFn`] crosses
//! zero. Each solve is a single synchronous call with no state carried
//! across invocations.
//!
//! # Solvers
//!
//! - [`newton_bisection`] — safeguarded Newton-Raphson on a bracketed
//!   interval; quadratic convergence near a simple root, bisection in the
//!   worst case
//!
//! [`DifferentiableFn`]: crate::DifferentiableFn

mod evaluate;
mod observe;

pub mod newton_bisection;

pub use evaluate::{EvalError, evaluate};
pub use observe::Observer;

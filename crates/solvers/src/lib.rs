//! Numerical solvers for scalar problems.
//!
//! A [`DifferentiableFn`] maps a real `x` to a function value and its
//! derivative. Solvers in this crate drive that value toward zero.
//!
//! # Solvers
//!
//! - [`scalar::newton_bisection`] — Newton-Raphson accelerated root finding
//!   on a bracketed interval, with guaranteed bisection fallback

mod function;

pub mod scalar;

pub use function::{DifferentiableFn, Sample};

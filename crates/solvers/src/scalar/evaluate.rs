use thiserror::Error;

use crate::{DifferentiableFn, Sample};

/// Errors that can occur when evaluating a differentiable function.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The function call failed.
    #[error("function evaluation failed")]
    Function(#[source] E),

    /// The function produced a non-finite value or derivative.
    #[error("non-finite sample at x = {x}: value = {value}, derivative = {derivative}")]
    NonFinite { x: f64, value: f64, derivative: f64 },
}

/// Evaluates the function at `x`, rejecting non-finite samples.
///
/// # Errors
///
/// Returns an error if the function call fails or produces a non-finite
/// value or derivative.
pub fn evaluate<F>(function: &F, x: f64) -> Result<Sample, EvalError<F::Error>>
where
    F: DifferentiableFn,
{
    let sample = function.eval(x).map_err(EvalError::Function)?;

    if !sample.is_finite() {
        return Err(EvalError::NonFinite {
            x,
            value: sample.value,
            derivative: sample.derivative,
        });
    }

    Ok(sample)
}

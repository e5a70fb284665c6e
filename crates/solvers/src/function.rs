use std::convert::Infallible;

/// A function value and its derivative at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub derivative: f64,
}

impl Sample {
    /// Creates a sample from a value and its derivative.
    #[must_use]
    pub fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }

    /// Returns true if both the value and the derivative are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.derivative.is_finite()
    }
}

/// A differentiable scalar function of one real variable.
///
/// Implementations must be pure within a solve: repeated calls with the
/// same `x` must return the same sample. Solvers rely on this when they
/// cache endpoint values across iterations.
pub trait DifferentiableFn {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function and its derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails.
    fn eval(&self, x: f64) -> Result<Sample, Self::Error>;
}

/// Blanket implementation for `(value, derivative)` closures.
impl<F> DifferentiableFn for F
where
    F: Fn(f64) -> (f64, f64),
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<Sample, Self::Error> {
        let (value, derivative) = self(x);
        Ok(Sample::new(value, derivative))
    }
}

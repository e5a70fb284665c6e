/// The update rule that produced an iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Newton-Raphson step from the previous iterate.
    Newton,
    /// Midpoint step over the current bracket.
    Bisection,
}

/// Iteration event emitted by the safeguarded Newton solver.
///
/// One event is emitted per iteration, after the step is chosen and
/// before the new iterate is evaluated. `f` and `df` are the sample at
/// the previous iterate, the values that drove the step decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Function evaluations spent so far.
    pub evaluations: usize,

    /// The update rule that produced `x`.
    pub method: Method,

    /// The new iterate.
    pub x: f64,

    /// The bracket before this iteration's update, as `[lower, upper]`.
    pub bracket: [f64; 2],

    /// The negated step: previous iterate minus `x`.
    pub minus_dx: f64,

    /// Function value at the previous iterate.
    pub f: f64,

    /// Derivative at the previous iterate.
    pub df: f64,
}

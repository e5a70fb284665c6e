//! Safeguarded Newton-Raphson root finding on a bracketed interval.
//!
//! # Algorithm
//!
//! The solver keeps a bracket `[x_lower, x_upper]` whose endpoint function
//! values have opposite signs, so a continuous function has a root inside
//! it. Each iteration takes a Newton-Raphson step when the previous step
//! shrank fast enough and the new iterate stays inside the bracket;
//! otherwise it bisects. The endpoint whose sign matches the new value
//! then moves to the iterate, so the sign change survives every update.
//! Worst case the method degenerates to plain bisection, which still
//! converges to some root in the bracket.
//!
//! Iteration stops when the magnitude of the last step drops below
//! [`Config::abs_tol`], or immediately if any evaluation lands exactly
//! on zero.
//!
//! # Evaluation counting
//!
//! The budget counts function evaluations, not loop trips: one each at
//! the lower bound, the upper bound, and the guess during initialization,
//! then one per iteration. [`Config::max_evals`] bounds this count, and
//! exact-zero hits report the count spent so far.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after choosing between
//! the Newton and bisection update and before evaluating the new iterate.
//! Observation is read-only: it can never change the solver's decisions
//! or its result.

mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use bracket::{Bracket, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Method};
pub use solution::{Solution, Status};

use crate::{
    DifferentiableFn,
    scalar::{Observer, evaluate},
};

/// Finds a root of `function` inside the bracket, starting from `x_guess`.
///
/// The bracket endpoints must evaluate to values of strictly opposite
/// sign, unless one of them is exactly a root, in which case that
/// endpoint is returned without further work. Observers see each
/// iteration's step decision and bracket state.
///
/// # Errors
///
/// Returns an error if the config is invalid, the guess falls outside
/// the bracket, the endpoint values share a sign, an evaluation fails or
/// produces a non-finite sample, or the evaluation budget runs out
/// before the step tolerance is met.
///
/// # Examples
///
/// ```
/// use plumb_solvers::scalar::newton_bisection::{self, Config};
///
/// let f = |x: f64| (x * x - 2.0, 2.0 * x);
///
/// let solution = newton_bisection::solve_unobserved(&f, [0.0, 2.0], 1.0, &Config::default())?;
/// assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-10);
/// # Ok::<(), newton_bisection::Error>(())
/// ```
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    x_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: DifferentiableFn,
    Obs: Observer<Event>,
{
    config.validate().map_err(Error::InvalidConfig)?;

    let [x_lower, x_upper] = bracket;
    if !x_lower.is_finite() || !x_upper.is_finite() || !x_guess.is_finite() {
        return Err(Error::NonFiniteInput {
            x_lower,
            x_upper,
            x_guess,
        });
    }
    if !(x_lower <= x_guess && x_guess <= x_upper) {
        return Err(Error::GuessOutsideBracket {
            x_lower,
            x_upper,
            x_guess,
        });
    }

    // First evaluation.
    let f_lower = evaluate(function, x_lower)?.value;
    if is_exact_root(f_lower) {
        return Ok(Solution::exact(x_lower, 1));
    }

    // Second evaluation.
    let f_upper = evaluate(function, x_upper)?.value;
    if is_exact_root(f_upper) {
        return Ok(Solution::exact(x_upper, 2));
    }

    let Some(mut bracket) = Bracket::with_sign_change(x_lower, x_upper, f_lower, f_upper) else {
        return Err(Error::NoSignChange {
            x_lower,
            f_lower,
            x_upper,
            f_upper,
        });
    };

    // Third evaluation.
    let mut root = x_guess;
    let sample = evaluate(function, root)?;
    if is_exact_root(sample.value) {
        return Ok(Solution::exact(root, 3));
    }
    let (mut f, mut df) = (sample.value, sample.derivative);

    // Seeding with the full bracket width makes the first slow-Newton
    // comparison conservative: bisection wins unless Newton clearly helps.
    let mut minus_dx = x_lower - x_upper;

    for evaluations in 3..=config.max_evals {
        // Always true when df == 0 (f is nonzero here), so a Newton step
        // never divides by a vanishing slope.
        let newton_is_slow = 2.0 * f.abs() > (minus_dx * df).abs();

        let (x, dx_negative, method) = if newton_is_slow {
            let (x, dx_negative) = bracket.bisect();
            (x, dx_negative, Method::Bisection)
        } else {
            let dx_negative = f / df;
            let x = root - dx_negative;
            if bracket.excludes(x) {
                // A Newton step that escapes the bracket is never trusted.
                let (x, dx_negative) = bracket.bisect();
                (x, dx_negative, Method::Bisection)
            } else {
                (x, dx_negative, Method::Newton)
            }
        };
        root = x;
        minus_dx = dx_negative;

        observer.observe(&Event {
            evaluations,
            method,
            x: root,
            bracket: bracket.as_array(),
            minus_dx,
            f,
            df,
        });

        if minus_dx.abs() < config.abs_tol {
            return Ok(Solution::converged(root, evaluations));
        }

        // The one evaluation per iteration.
        let sample = evaluate(function, root)?;
        if is_exact_root(sample.value) {
            return Ok(Solution::exact(root, evaluations));
        }
        (f, df) = (sample.value, sample.derivative);

        bracket.shrink(root, f);
    }

    Err(Error::NoConvergence {
        last_step: minus_dx.abs(),
        bracket_width: bracket.width().abs(),
    })
}

/// Runs the solver without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    x_guess: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: DifferentiableFn,
{
    solve(function, bracket, x_guess, config, ())
}

#[allow(clippy::float_cmp)]
fn is_exact_root(value: f64) -> bool {
    value == 0.0
}

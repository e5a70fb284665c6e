use std::error::Error as StdError;

use thiserror::Error;

use crate::scalar::EvalError;

use super::ConfigError;

/// Errors that can occur during a safeguarded Newton solve.
///
/// The first four variants are caller errors, detected before any
/// iteration. `NoConvergence` means the problem was well posed but the
/// evaluation budget ran out first.
#[derive(Debug, Error)]
pub enum Error {
    /// The solver configuration failed validation.
    #[error("invalid config")]
    InvalidConfig(#[source] ConfigError),

    /// The bracket or guess contains a non-finite value.
    #[error("non-finite input: bracket [{x_lower}, {x_upper}], guess {x_guess}")]
    NonFiniteInput {
        x_lower: f64,
        x_upper: f64,
        x_guess: f64,
    },

    /// The guess does not satisfy `x_lower <= x_guess <= x_upper`.
    #[error("guess {x_guess} outside bracket [{x_lower}, {x_upper}]")]
    GuessOutsideBracket {
        x_lower: f64,
        x_upper: f64,
        x_guess: f64,
    },

    /// The endpoint values share a sign, so no root is bracketed.
    #[error("no sign change: f({x_lower}) = {f_lower}, f({x_upper}) = {f_upper}")]
    NoSignChange {
        x_lower: f64,
        f_lower: f64,
        x_upper: f64,
        f_upper: f64,
    },

    /// The function call failed.
    #[error("function evaluation failed")]
    Evaluation(#[source] Box<dyn StdError + Send + Sync>),

    /// The function produced a non-finite value or derivative.
    #[error("non-finite sample at x = {x}: value = {value}, derivative = {derivative}")]
    NonFiniteSample {
        x: f64,
        value: f64,
        derivative: f64,
    },

    /// The evaluation budget ran out before the step tolerance was met.
    ///
    /// `last_step` and `bracket_width` let the caller judge whether the
    /// root is effectively found or the search genuinely failed.
    #[error("did not converge: |last step| = {last_step}, bracket width = {bracket_width}")]
    NoConvergence { last_step: f64, bracket_width: f64 },
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Function(e) => Self::Evaluation(Box::new(e)),
            EvalError::NonFinite {
                x,
                value,
                derivative,
            } => Self::NonFiniteSample {
                x,
                value,
                derivative,
            },
        }
    }
}

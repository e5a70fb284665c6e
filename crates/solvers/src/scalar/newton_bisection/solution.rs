/// How the solver arrived at the reported root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An evaluation landed exactly on zero.
    ExactRoot,

    /// The last step magnitude dropped below the configured tolerance.
    StepConverged,
}

/// The result of a successful safeguarded Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root estimate.
    pub root: f64,

    /// Total function evaluations spent.
    pub evaluations: usize,
}

impl Solution {
    pub(super) fn exact(root: f64, evaluations: usize) -> Self {
        Self {
            status: Status::ExactRoot,
            root,
            evaluations,
        }
    }

    pub(super) fn converged(root: f64, evaluations: usize) -> Self {
        Self {
            status: Status::StepConverged,
            root,
            evaluations,
        }
    }
}

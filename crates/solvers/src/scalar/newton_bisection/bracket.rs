/// The sign of a nonzero function value, for bracket bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of a nonzero value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// A root bracket: an interval whose endpoint function values have
/// opposite signs, so a continuous function crosses zero inside it.
///
/// The bracket caches the sign at the upper bound. Every [`shrink`]
/// replaces the endpoint whose sign matches the new interior value, so
/// the sign change across the interval holds for the whole solve.
///
/// [`shrink`]: Bracket::shrink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
    upper_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from endpoints with known nonzero function values.
    ///
    /// Returns `None` if the values share a sign, since the interval then
    /// carries no guarantee of containing a root.
    pub(super) fn with_sign_change(lower: f64, upper: f64, f_lower: f64, f_upper: f64) -> Option<Self> {
        let upper_sign = Sign::of(f_upper);
        if Sign::of(f_lower) == upper_sign {
            return None;
        }

        Some(Self {
            lower,
            upper,
            upper_sign,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `x` lies outside the bracket.
    pub(super) fn excludes(&self, x: f64) -> bool {
        x < self.lower || x > self.upper
    }

    /// Returns the bisection iterate and the negated step that reaches it.
    ///
    /// The midpoint is computed as `lower - 0.5 * (lower - upper)`. When
    /// the half width is insignificant next to `lower` in floating point,
    /// the subtraction saturates and the iterate lands exactly on `lower`,
    /// which lets the step-size termination test fire even for extremely
    /// tight tolerances.
    pub(super) fn bisect(&self) -> (f64, f64) {
        let dx_negative = 0.5 * (self.lower - self.upper);
        let x = self.lower - dx_negative;
        (x, dx_negative)
    }

    /// Shrinks the bracket with an interior point and its nonzero value.
    ///
    /// The endpoint whose sign matches `value` moves to `x`; the sign
    /// change across the bracket is preserved.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if Sign::of(value) == self.upper_sign {
            self.upper = x;
        } else {
            self.lower = x;
        }
    }
}

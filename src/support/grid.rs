//! Inclusive stepped ranges for sweeping operating conditions.
//!
//! A [`SteppedRange`] produces `low, low + step, low + 2·step, ...` by
//! repeated accumulation, stopping after the last value that does not exceed
//! the upper limit. Values are accumulated rather than computed as
//! `low + i·step`, so they match a hand-written `value += step` loop bit for bit.
//!
//! Accumulated steps such as `0.1` drift slightly, which can drop the upper
//! endpoint. [`UpperBound::HalfStepSlack`] extends the limit by half a step
//! so the endpoint is always included.
//!
//! ```
//! use styrene_models::support::{constraint::StrictlyPositive, grid::SteppedRange};
//!
//! let range = SteppedRange::new(800.0, 810.0, StrictlyPositive::new(5.0).unwrap()).unwrap();
//! assert_eq!(range.values().collect::<Vec<_>>(), vec![800.0, 805.0, 810.0]);
//! ```

use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// How the upper bound of a [`SteppedRange`] is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpperBound {
    /// Values are produced while `value <= high`.
    #[default]
    Exact,

    /// Values are produced while `value <= high + step / 2`.
    HalfStepSlack,
}

/// Errors that can occur when constructing a [`SteppedRange`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("range bounds must be finite: low={low}, high={high}")]
    NotFinite { low: f64, high: f64 },

    #[error("range low bound {low} is above high bound {high}")]
    LowAboveHigh { low: f64, high: f64 },

    #[error("invalid range step")]
    Step(#[from] ConstraintError),
}

/// An inclusive `(low, high, step)` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedRange {
    low: f64,
    high: f64,
    step: f64,
    bound: UpperBound,
}

impl SteppedRange {
    /// Creates a range with an exact upper bound comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or if `low > high`.
    pub fn new(
        low: f64,
        high: f64,
        step: Constrained<f64, StrictlyPositive>,
    ) -> Result<Self, RangeError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(RangeError::NotFinite { low, high });
        }
        if low > high {
            return Err(RangeError::LowAboveHigh { low, high });
        }

        Ok(Self {
            low,
            high,
            step: step.into_inner(),
            bound: UpperBound::Exact,
        })
    }

    /// Creates a range from raw values, validating the step as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not strictly positive, a bound is not
    /// finite, or `low > high`.
    pub fn from_raw(low: f64, high: f64, step: f64) -> Result<Self, RangeError> {
        Self::new(low, high, StrictlyPositive::new(step)?)
    }

    /// Creates a range containing only `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite.
    pub fn single(value: f64) -> Result<Self, RangeError> {
        Self::from_raw(value, value, 1.0)
    }

    /// Returns this range with the given upper bound comparison.
    #[must_use]
    pub fn with_upper_bound(self, bound: UpperBound) -> Self {
        Self { bound, ..self }
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn upper_bound(&self) -> UpperBound {
        self.bound
    }

    /// Iterates over the values of this range in increasing order.
    #[must_use]
    pub fn values(&self) -> Values {
        let limit = match self.bound {
            UpperBound::Exact => self.high,
            UpperBound::HalfStepSlack => self.high + self.step / 2.0,
        };
        Values {
            next: Some(self.low),
            step: self.step,
            limit,
        }
    }
}

/// Iterator over the values of a [`SteppedRange`].
#[derive(Debug, Clone)]
pub struct Values {
    next: Option<f64>,
    step: f64,
    limit: f64,
}

impl Iterator for Values {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let current = self.next.filter(|&v| v <= self.limit)?;
        let following = current + self.step;
        // A step below the spacing of floats at `current` would never advance.
        self.next = (following > current).then_some(following);
        Some(current)
    }
}

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when constructing [`Coefficients`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoefficientsError {
    /// A coefficient is NaN or infinite.
    #[error("coefficient `{coefficient}` is not finite: {value}")]
    NonFinite {
        coefficient: &'static str,
        value: f64,
    },
}

/// Finite coefficients of the equation `a·x² + b·x + c = 0`.
///
/// Finiteness is checked once at construction and the fields are private, so
/// the invariant holds for the lifetime of the value. The equation itself may
/// be degenerate: nothing requires `a`, `b`, or `c` to be nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    /// Creates validated coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientsError::NonFinite`] naming the first coefficient,
    /// in `a`, `b`, `c` order, that is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadroot_core::Coefficients;
    ///
    /// assert!(Coefficients::new(1.0, 2.0, 1.0).is_ok());
    /// assert!(Coefficients::new(f64::NAN, 2.0, 1.0).is_err());
    /// assert!(Coefficients::new(1.0, f64::INFINITY, 1.0).is_err());
    /// ```
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, CoefficientsError> {
        for (coefficient, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(CoefficientsError::NonFinite { coefficient, value });
            }
        }

        Ok(Self { a, b, c })
    }

    /// Returns the quadratic coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the linear coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant coefficient.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the discriminant `b² − 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluates `a·x² + b·x + c` at `x`, in Horner form.
    ///
    /// Substituting a reported root back in should land within
    /// floating-point rounding error of zero.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

//! Real-root classification for quadratic and degenerate linear equations.
//!
//! Given finite coefficients `a`, `b`, and `c` of `a·x² + b·x + c = 0`, this
//! crate decides how many real solutions exist and reports them:
//!
//! - [`Coefficients`] — validated, finite equation coefficients
//! - [`Roots`] — the discriminated outcome: none, one, two, or every real
//! - [`solve`] — the classification function itself
//! - [`selftest`] — a fixed regression fixture with mismatch reporting
//!
//! Classification is exhaustive over finite inputs: every combination of
//! coefficients maps to exactly one [`Roots`] variant, including the
//! degenerate cases where the leading coefficients vanish.
//!
//! # Example
//!
//! ```
//! use quadroot_core::{Coefficients, Roots, solve};
//!
//! let equation = Coefficients::new(1.0, -53.0, 196.0)?;
//! assert_eq!(solve(&equation), Roots::Two([49.0, 4.0]));
//! # Ok::<(), quadroot_core::CoefficientsError>(())
//! ```

mod coefficients;
mod roots;
mod solve;

pub mod selftest;

pub use coefficients::{Coefficients, CoefficientsError};
pub use roots::Roots;
pub use solve::solve;

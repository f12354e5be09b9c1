//! A fixed regression fixture for [`solve`].
//!
//! [`run`] feeds each [`Case`] through the solver and compares the outcome
//! against the expected classification for exact equality. Every mismatch is
//! recorded and the remaining cases still run. [`run_builtin`] checks the
//! [`CASES`] table shipped with the crate.

use std::fmt;

use serde::Serialize;

use crate::{Coefficients, Roots, solve};

/// One fixture entry: a coefficient triple and its expected classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Case {
    /// What the entry exercises.
    pub label: &'static str,

    /// The `a`, `b`, `c` coefficients fed to the solver.
    pub coefficients: [f64; 3],

    /// The classification the solver must return.
    pub expected: Roots,
}

/// The built-in fixture table.
///
/// Every expected value is exact in `f64` arithmetic, including the square
/// roots involved, so comparing for bit equality in [`run`] is sound.
pub const CASES: &[Case] = &[
    Case {
        label: "identically zero",
        coefficients: [0.0, 0.0, 0.0],
        expected: Roots::All,
    },
    Case {
        label: "negative discriminant",
        coefficients: [1.0, 1.0, 1.0],
        expected: Roots::None,
    },
    Case {
        label: "repeated root",
        coefficients: [1.0, 2.0, 1.0],
        expected: Roots::One(-1.0),
    },
    Case {
        label: "common factor of 144",
        coefficients: [288.0, -1296.0, 1008.0],
        expected: Roots::Two([3.5, 1.0]),
    },
    Case {
        label: "two integer roots",
        coefficients: [1.0, -53.0, 196.0],
        expected: Roots::Two([49.0, 4.0]),
    },
    Case {
        label: "reciprocal pair",
        coefficients: [25.0, 626.0, 25.0],
        expected: Roots::Two([-0.04, -25.0]),
    },
];

/// A fixture entry whose actual outcome differed from its expectation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    /// Position of the entry in the table passed to [`run`].
    pub index: usize,

    /// The entry itself, for reporting the offending input.
    pub case: Case,

    /// What the solver returned, or `None` if the coefficients were
    /// rejected as non-finite before the solver ran.
    pub actual: Option<Roots>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.case.coefficients;
        write!(
            f,
            "case {} ({}): a = {a}, b = {b}, c = {c}: expected `{}`, got ",
            self.index, self.case.label, self.case.expected
        )?;
        match &self.actual {
            Some(actual) => write!(f, "`{actual}`"),
            None => write!(f, "rejected as non-finite"),
        }
    }
}

/// The outcome of a fixture run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// How many entries were checked.
    pub cases_run: usize,

    /// Every entry whose outcome differed from its expectation, in table
    /// order.
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    /// Returns `true` if every entry matched its expectation.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_passed() {
            return write!(f, "all {} cases passed", self.cases_run);
        }

        write!(
            f,
            "{} of {} cases failed:",
            self.mismatches.len(),
            self.cases_run
        )?;
        for mismatch in &self.mismatches {
            write!(f, "\n  {mismatch}")?;
        }
        Ok(())
    }
}

/// Runs every entry in `cases` and reports the mismatches.
///
/// Comparison is exact. A mismatch does not stop the run.
#[must_use]
pub fn run(cases: &[Case]) -> Report {
    let mut mismatches = Vec::new();

    for (index, case) in cases.iter().enumerate() {
        let [a, b, c] = case.coefficients;
        let actual = Coefficients::new(a, b, c)
            .map(|equation| solve(&equation))
            .ok();

        if actual != Some(case.expected) {
            mismatches.push(Mismatch {
                index,
                case: *case,
                actual,
            });
        }
    }

    Report {
        cases_run: cases.len(),
        mismatches,
    }
}

/// Runs the built-in [`CASES`] table.
///
/// # Examples
///
/// ```
/// let report = quadroot_core::selftest::run_builtin();
/// assert!(report.all_passed(), "{report}");
/// ```
#[must_use]
pub fn run_builtin() -> Report {
    run(CASES)
}

use std::fmt;

use serde::Serialize;

/// The real solutions of `a·x² + b·x + c = 0`.
///
/// Classification is exhaustive: every finite coefficient triple maps to
/// exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Roots {
    /// No real number satisfies the equation.
    None,

    /// Exactly one real solution, from a linear equation or a repeated
    /// quadratic root.
    One(f64),

    /// Two distinct real solutions, positive square-root branch first.
    ///
    /// With `a > 0` the first entry is the larger root; with `a < 0` it is
    /// the smaller.
    Two([f64; 2]),

    /// Every real number satisfies the equation (`0 = 0`).
    All,
}

impl Roots {
    /// Returns the reported solutions as a slice.
    ///
    /// [`Roots::None`] and [`Roots::All`] both yield an empty slice, since
    /// neither reports individual values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::None | Self::All => &[],
            Self::One(x) => std::slice::from_ref(x),
            Self::Two(both) => both,
        }
    }
}

/// Formats the classification as a single line of text.
///
/// Values use `f64`'s `Display`, which prints the shortest decimal that
/// round-trips to the same float.
impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no real roots"),
            Self::One(x) => write!(f, "x = {x}"),
            Self::Two([x1, x2]) => write!(f, "x1 = {x1}, x2 = {x2}"),
            Self::All => write!(f, "infinite number of solutions"),
        }
    }
}

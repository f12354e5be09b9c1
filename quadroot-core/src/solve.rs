use crate::{Coefficients, Roots};

/// Classifies the real solutions of `a·x² + b·x + c = 0`.
///
/// Degenerate equations are handled before the quadratic formula is applied:
///
/// 1. `a = 0, b = 0, c = 0` is satisfied by every real ([`Roots::All`]);
///    `a = 0, b = 0, c ≠ 0` by none ([`Roots::None`]).
/// 2. `a = 0, b ≠ 0` is linear with the single solution `-c / b`.
/// 3. Otherwise the sign of the discriminant `b² − 4ac` decides. A negative
///    discriminant has no real roots and a zero discriminant the repeated
///    root `-b / 2a`. A positive discriminant yields two distinct roots,
///    with the positive square-root branch reported first.
///
/// All comparisons against zero are exact. Coefficients within rounding
/// error of zero are treated as the values they are, not as zero.
///
/// # Examples
///
/// ```
/// use quadroot_core::{Coefficients, Roots, solve};
///
/// let linear = Coefficients::new(0.0, 2.0, -8.0)?;
/// assert_eq!(solve(&linear), Roots::One(4.0));
///
/// let repeated = Coefficients::new(1.0, 2.0, 1.0)?;
/// assert_eq!(solve(&repeated), Roots::One(-1.0));
/// # Ok::<(), quadroot_core::CoefficientsError>(())
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn solve(coefficients: &Coefficients) -> Roots {
    let (a, b, c) = (coefficients.a(), coefficients.b(), coefficients.c());
    debug_assert!(
        a.is_finite() && b.is_finite() && c.is_finite(),
        "coefficients must be finite, which `Coefficients::new` enforces"
    );

    if a == 0.0 {
        if b == 0.0 {
            return if c == 0.0 { Roots::All } else { Roots::None };
        }
        return Roots::One(-c / b);
    }

    let discriminant = coefficients.discriminant();
    if discriminant < 0.0 {
        Roots::None
    } else if discriminant == 0.0 {
        Roots::One(-b / (2.0 * a))
    } else {
        let sqrt_discriminant = discriminant.sqrt();
        Roots::Two([
            (-b + sqrt_discriminant) / (2.0 * a),
            (-b - sqrt_discriminant) / (2.0 * a),
        ])
    }
}

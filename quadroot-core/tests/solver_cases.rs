//! End-to-end checks of the public solver API.

use approx::assert_abs_diff_eq;
use quadroot_core::{Coefficients, Roots, selftest, solve};

fn equation(a: f64, b: f64, c: f64) -> Coefficients {
    Coefficients::new(a, b, c).expect("test coefficients are finite")
}

#[test]
fn builtin_fixture_passes() {
    let report = selftest::run_builtin();
    assert!(report.all_passed(), "{report}");
}

#[test]
fn reported_roots_satisfy_their_equations() {
    let values = [-3.0, -1.0, -0.25, 0.0, 0.5, 2.0, 7.0];

    for a in values {
        for b in values {
            for c in values {
                let quadratic = equation(a, b, c);
                for &x in solve(&quadratic).as_slice() {
                    assert_abs_diff_eq!(quadratic.eval(x), 0.0, epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn two_roots_are_distinct() {
    let values = [-3.0, -1.0, -0.25, 0.0, 0.5, 2.0, 7.0];

    for a in values {
        for b in values {
            for c in values {
                if let Roots::Two([x1, x2]) = solve(&equation(a, b, c)) {
                    assert_ne!(x1, x2, "equation {a}x² + {b}x + {c} = 0");
                }
            }
        }
    }
}

#[test]
fn first_root_is_larger_when_leading_positive() {
    let cases = [
        (1.0, -53.0, 196.0),
        (288.0, -1296.0, 1008.0),
        (2.0, 3.0, -7.0),
        (0.5, 0.0, -8.0),
    ];

    for (a, b, c) in cases {
        match solve(&equation(a, b, c)) {
            Roots::Two([x1, x2]) => {
                assert!(x1 > x2, "expected descending roots, got [{x1}, {x2}]");
            }
            other => panic!("expected two roots, got {other:?}"),
        }
    }
}

#[test]
fn first_root_is_smaller_when_leading_negative() {
    let cases = [(-1.0, 0.0, 4.0), (-2.0, 2.0, 4.0), (-0.5, 3.0, 2.0)];

    for (a, b, c) in cases {
        match solve(&equation(a, b, c)) {
            Roots::Two([x1, x2]) => {
                assert!(x1 < x2, "expected ascending roots, got [{x1}, {x2}]");
            }
            other => panic!("expected two roots, got {other:?}"),
        }
    }
}

#[test]
fn degenerate_ladder_classifies_each_rung() {
    assert_eq!(solve(&equation(0.0, 0.0, 0.0)), Roots::All);
    assert_eq!(solve(&equation(0.0, 0.0, 3.0)), Roots::None);
    assert_eq!(solve(&equation(0.0, 3.0, 3.0)), Roots::One(-1.0));
    assert_eq!(solve(&equation(3.0, 6.0, 3.0)), Roots::One(-1.0));
    assert_eq!(solve(&equation(3.0, 0.0, 3.0)), Roots::None);
    assert_eq!(solve(&equation(3.0, 0.0, -3.0)), Roots::Two([1.0, -1.0]));
}

#[test]
fn classification_text_matches_variant() {
    assert_eq!(
        solve(&equation(0.0, 0.0, 0.0)).to_string(),
        "infinite number of solutions"
    );
    assert_eq!(solve(&equation(1.0, 1.0, 1.0)).to_string(), "no real roots");
    assert_eq!(solve(&equation(1.0, 2.0, 1.0)).to_string(), "x = -1");
    assert_eq!(
        solve(&equation(288.0, -1296.0, 1008.0)).to_string(),
        "x1 = 3.5, x2 = 1"
    );
}

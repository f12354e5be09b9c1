//! Console front end for the equation solver.
//!
//! Reads the coefficients `a`, `b`, and `c` as whitespace-separated numbers
//! from standard input, classifies the real roots of `a·x² + b·x + c = 0`,
//! and prints one line describing them. Exits with code 2 when the input
//! cannot be turned into finite coefficients.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use quadroot_core::{Coefficients, solve};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading coefficients from standard input")?;

    let [a, b, c] = parse_coefficients(&input)?;
    let equation = Coefficients::new(a, b, c)?;

    println!("{}", solve(&equation));
    Ok(())
}

/// Pulls the coefficients out of the first three whitespace-separated
/// tokens. Surplus tokens are ignored.
fn parse_coefficients(input: &str) -> anyhow::Result<[f64; 3]> {
    let mut tokens = input.split_whitespace();
    let mut coefficients = [0.0; 3];

    for (found, (slot, name)) in coefficients.iter_mut().zip(["a", "b", "c"]).enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| anyhow!("expected three coefficients, found {found}"))?;
        *slot = token
            .parse()
            .with_context(|| format!("coefficient `{name}` is not a number: `{token}`"))?;
    }

    Ok(coefficients)
}

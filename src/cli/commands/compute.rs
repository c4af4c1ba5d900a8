//! Calculation command: parse operands, run one operation, report.

use std::io::{self, Write};

use crate::calculator::{Calculator, Operation};
use crate::cli::{Cli, ExitCode, USAGE};

pub const UNKNOWN_OPERATION: &str = "unknown operation";

/// Parse an operand, treating malformed text as zero.
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or_else(|e| {
        tracing::debug!(target: "cli", "operand {text:?} is not a number ({e}), using 0");
        0.0
    })
}

/// Format a result with two decimals. Non-finite values print as `+Inf`,
/// `-Inf` and `NaN`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "Result: NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { '+' } else { '-' };
        format!("Result: {sign}Inf")
    } else {
        format!("Result: {value:.2}")
    }
}

/// Run one calculation and write the user-facing line to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> io::Result<ExitCode> {
    let Some((name, num1, num2)) = cli.positionals() else {
        writeln!(out, "{USAGE}")?;
        return Ok(ExitCode::Usage);
    };

    let op = match name.parse::<Operation>() {
        Ok(op) => op,
        Err(e) => {
            tracing::debug!(target: "cli", "{e}");
            writeln!(out, "{UNKNOWN_OPERATION}")?;
            return Ok(ExitCode::Success);
        }
    };

    let (a, b) = (parse_operand(num1), parse_operand(num2));
    let mut calculator = Calculator::new();

    match calculator.apply(op, a, b) {
        Ok(value) => writeln!(out, "{}", format_result(value))?,
        Err(e) => {
            tracing::info!(target: "cli", "{op} failed: {e}");
            writeln!(out, "Error: {e}")?
        }
    }

    Ok(ExitCode::Success)
}

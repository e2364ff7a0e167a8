//! Percentage calculator

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Two question forms:
///
/// - `"15 of 200"` — what is 15% of 200? (30)
/// - `"30 out of 200"` — what percentage is 30 of 200? (15%)
pub struct PercentageCalculator;

impl Tool for PercentageCalculator {
    fn id(&self) -> &str {
        "percentage-calculator"
    }

    fn name(&self) -> &str {
        "Percentage Calculator"
    }

    fn description(&self) -> &str {
        "Work out percentages of and between numbers"
    }

    fn run(&self, input: &str) -> Result<String> {
        if let Some((part, whole)) = split_on(input, " out of ") {
            let part = parse_number(part)?;
            let whole = parse_number(whole)?;
            if whole == 0.0 {
                return Err(Error::invalid_input("cannot take a percentage of zero"));
            }
            let pct = part / whole * 100.0;
            return Ok(format!("{} is {}% of {}", trim(part), trim(pct), trim(whole)));
        }

        if let Some((pct, total)) = split_on(input, " of ") {
            let pct = parse_number(pct)?;
            let total = parse_number(total)?;
            let result = pct / 100.0 * total;
            return Ok(format!("{}% of {} is {}", trim(pct), trim(total), trim(result)));
        }

        Err(Error::invalid_input(
            "expected '<p> of <total>' or '<part> out of <whole>'",
        ))
    }
}

fn split_on<'a>(input: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let idx = input.find(separator)?;
    Some((&input[..idx], &input[idx + separator.len()..]))
}

fn parse_number(raw: &str) -> Result<f64> {
    let cleaned = raw.trim().trim_end_matches('%');
    cleaned
        .parse::<f64>()
        .map_err(|_| Error::invalid_input(format!("bad number '{}'", raw.trim())))
}

fn trim(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

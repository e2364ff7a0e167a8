//! Date arithmetic

use chrono::{Days, NaiveDate};

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Three input forms, dates as `YYYY-MM-DD`:
///
/// - `"2024-01-01 + 30 days"` — add days
/// - `"2024-01-01 - 30 days"` — subtract days
/// - `"2024-01-01 to 2024-03-01"` — days between
pub struct DateCalculator;

impl Tool for DateCalculator {
    fn id(&self) -> &str {
        "date-calculator"
    }

    fn name(&self) -> &str {
        "Date Calculator"
    }

    fn description(&self) -> &str {
        "Add days to a date or count days between dates"
    }

    fn run(&self, input: &str) -> Result<String> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [from, "to", until] => {
                let from = parse_date(from)?;
                let until = parse_date(until)?;
                let days = until.signed_duration_since(from).num_days();
                Ok(format!("{} days", days))
            }
            [date, op @ ("+" | "-"), count, "days" | "day"] => {
                let date = parse_date(date)?;
                let count: u64 = count
                    .parse()
                    .map_err(|_| Error::invalid_input(format!("bad day count '{count}'")))?;
                let shifted = if *op == "+" {
                    date.checked_add_days(Days::new(count))
                } else {
                    date.checked_sub_days(Days::new(count))
                };
                let shifted = shifted
                    .ok_or_else(|| Error::invalid_input("resulting date is out of range"))?;
                Ok(shifted.format("%Y-%m-%d").to_string())
            }
            _ => Err(Error::invalid_input(
                "expected '<date> + <n> days', '<date> - <n> days', or '<date> to <date>'",
            )),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::invalid_input(format!("bad date '{raw}', expected YYYY-MM-DD")))
}

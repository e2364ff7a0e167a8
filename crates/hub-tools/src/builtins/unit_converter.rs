//! Unit converter for length, weight, and temperature

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Input form: `<value> <from-unit> to <to-unit>`, e.g. `"10 km to mi"`.
///
/// Length units: mm, cm, m, km, in, ft, yd, mi.
/// Weight units: g, kg, oz, lb.
/// Temperature units: c, f, k.
pub struct UnitConverter;

impl Tool for UnitConverter {
    fn id(&self) -> &str {
        "unit-converter"
    }

    fn name(&self) -> &str {
        "Unit Converter"
    }

    fn description(&self) -> &str {
        "Convert between length, weight, and temperature units"
    }

    fn run(&self, input: &str) -> Result<String> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let [value, from, "to", to] = parts.as_slice() else {
            return Err(Error::invalid_input(
                "expected '<value> <unit> to <unit>', e.g. '10 km to mi'",
            ));
        };

        let value: f64 = value
            .parse()
            .map_err(|_| Error::invalid_input(format!("bad number '{value}'")))?;

        let converted = convert(value, &from.to_lowercase(), &to.to_lowercase())?;
        Ok(format!("{} {} = {} {}", value, from, round(converted), to))
    }
}

fn round(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    if let (Some(from_m), Some(to_m)) = (length_in_meters(from), length_in_meters(to)) {
        return Ok(value * from_m / to_m);
    }
    if let (Some(from_g), Some(to_g)) = (weight_in_grams(from), weight_in_grams(to)) {
        return Ok(value * from_g / to_g);
    }
    if is_temperature(from) && is_temperature(to) {
        return Ok(from_celsius(to_celsius(value, from), to));
    }
    Err(Error::invalid_input(format!(
        "cannot convert between '{from}' and '{to}'"
    )))
}

fn length_in_meters(unit: &str) -> Option<f64> {
    match unit {
        "mm" => Some(0.001),
        "cm" => Some(0.01),
        "m" => Some(1.0),
        "km" => Some(1000.0),
        "in" => Some(0.0254),
        "ft" => Some(0.3048),
        "yd" => Some(0.9144),
        "mi" => Some(1609.344),
        _ => None,
    }
}

fn weight_in_grams(unit: &str) -> Option<f64> {
    match unit {
        "g" => Some(1.0),
        "kg" => Some(1000.0),
        "oz" => Some(28.349_523_125),
        "lb" => Some(453.592_37),
        _ => None,
    }
}

fn is_temperature(unit: &str) -> bool {
    matches!(unit, "c" | "f" | "k")
}

fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "f" => value * 9.0 / 5.0 + 32.0,
        "k" => value + 273.15,
        _ => value,
    }
}

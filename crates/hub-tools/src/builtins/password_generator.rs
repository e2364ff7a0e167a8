//! Random password generator

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Default password length when the input names none.
const DEFAULT_LENGTH: usize = 16;

/// Bounds accepted for the requested length.
const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 128;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}";

/// Input form: an optional length (`"24"`), empty for the default.
pub struct PasswordGenerator;

impl Tool for PasswordGenerator {
    fn id(&self) -> &str {
        "password-generator"
    }

    fn name(&self) -> &str {
        "Password Generator"
    }

    fn description(&self) -> &str {
        "Generate strong random passwords"
    }

    fn run(&self, input: &str) -> Result<String> {
        let length = match input.trim() {
            "" => DEFAULT_LENGTH,
            raw => raw
                .parse::<usize>()
                .map_err(|_| Error::invalid_input(format!("bad length '{raw}'")))?,
        };

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::invalid_input(format!(
                "length must be between {MIN_LENGTH} and {MAX_LENGTH}"
            )));
        }

        Ok(generate(length))
    }
}

/// Generate a password containing at least one character from each class.
fn generate(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let classes: [&[u8]; 4] = [LOWER, UPPER, DIGITS, SYMBOLS];

    // One guaranteed pick per class, the rest from the combined pool
    let mut chars: Vec<u8> = classes
        .iter()
        .map(|class| class[rng.gen_range(0..class.len())])
        .collect();

    let pool: Vec<u8> = classes.concat();
    while chars.len() < length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    chars.shuffle(&mut rng);
    String::from_utf8(chars).unwrap_or_default()
}

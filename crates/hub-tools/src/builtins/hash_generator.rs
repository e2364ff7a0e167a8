//! SHA-2 hash generator

use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Input form: `sha256 <text>` or `sha512 <text>`; bare text defaults to
/// SHA-256.
pub struct HashGenerator;

impl Tool for HashGenerator {
    fn id(&self) -> &str {
        "hash-generator"
    }

    fn name(&self) -> &str {
        "Hash Generator"
    }

    fn description(&self) -> &str {
        "Compute SHA-256 and SHA-512 digests"
    }

    fn run(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(Error::invalid_input("no text given"));
        }

        match input.split_once(' ') {
            Some(("sha256", payload)) => Ok(sha256_hex(payload)),
            Some(("sha512", payload)) => Ok(sha512_hex(payload)),
            _ => Ok(sha256_hex(input)),
        }
    }
}

fn sha256_hex(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

fn sha512_hex(text: &str) -> String {
    format!("{:x}", Sha512::digest(text.as_bytes()))
}

//! Base64 encoder/decoder

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Input form: `encode <text>` or `decode <base64>`.
pub struct Base64Encoder;

impl Tool for Base64Encoder {
    fn id(&self) -> &str {
        "base64-encoder"
    }

    fn name(&self) -> &str {
        "Base64 Encoder"
    }

    fn description(&self) -> &str {
        "Encode and decode Base64 strings"
    }

    fn run(&self, input: &str) -> Result<String> {
        let (op, payload) = input
            .split_once(' ')
            .ok_or_else(|| Error::invalid_input("expected 'encode <text>' or 'decode <base64>'"))?;

        match op {
            "encode" => Ok(STANDARD.encode(payload)),
            "decode" => {
                let bytes = STANDARD
                    .decode(payload.trim())
                    .map_err(|e| Error::invalid_input(format!("not valid Base64: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|_| Error::invalid_input("decoded bytes are not valid UTF-8"))
            }
            other => Err(Error::invalid_input(format!(
                "unknown operation '{other}', expected encode|decode"
            ))),
        }
    }
}

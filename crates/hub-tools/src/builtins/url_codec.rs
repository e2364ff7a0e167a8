//! URL percent-encoder/decoder

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Input form: `encode <text>` or `decode <text>`.
pub struct UrlEncoder;

impl Tool for UrlEncoder {
    fn id(&self) -> &str {
        "url-encoder"
    }

    fn name(&self) -> &str {
        "URL Encoder"
    }

    fn description(&self) -> &str {
        "Percent-encode and decode URL components"
    }

    fn run(&self, input: &str) -> Result<String> {
        let (op, payload) = input
            .split_once(' ')
            .ok_or_else(|| Error::invalid_input("expected 'encode <text>' or 'decode <text>'"))?;

        match op {
            "encode" => Ok(urlencoding::encode(payload).into_owned()),
            "decode" => urlencoding::decode(payload)
                .map(|s| s.into_owned())
                .map_err(|_| Error::invalid_input("decoded bytes are not valid UTF-8")),
            other => Err(Error::invalid_input(format!(
                "unknown operation '{other}', expected encode|decode"
            ))),
        }
    }
}

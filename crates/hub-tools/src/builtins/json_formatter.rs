//! JSON pretty-printer and minifier

use serde_json::Value;

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Pretty-prints by default; `minify <json>` compacts instead.
pub struct JsonFormatter;

impl Tool for JsonFormatter {
    fn id(&self) -> &str {
        "json-formatter"
    }

    fn name(&self) -> &str {
        "JSON Formatter"
    }

    fn description(&self) -> &str {
        "Pretty-print or minify JSON documents"
    }

    fn run(&self, input: &str) -> Result<String> {
        let (minify, document) = match input.strip_prefix("minify ") {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix("pretty ").unwrap_or(input)),
        };

        let document = document.trim();
        if document.is_empty() {
            return Err(Error::invalid_input("no JSON given"));
        }

        let value: Value = serde_json::from_str(document)
            .map_err(|e| Error::invalid_input(format!("not valid JSON: {e}")))?;

        let rendered = if minify {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        Ok(rendered)
    }
}

//! Text case converter

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Input form: `<mode> <text>` where mode is one of
/// `upper`, `lower`, `title`, `snake`, `kebab`, `camel`.
pub struct TextCaseConverter;

impl Tool for TextCaseConverter {
    fn id(&self) -> &str {
        "text-case-converter"
    }

    fn name(&self) -> &str {
        "Text Case Converter"
    }

    fn description(&self) -> &str {
        "Convert text between upper, lower, title, snake, kebab, and camel case"
    }

    fn run(&self, input: &str) -> Result<String> {
        let (mode, text) = input
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::invalid_input("expected '<mode> <text>'"))?;
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid_input("no text given"));
        }

        match mode {
            "upper" => Ok(text.to_uppercase()),
            "lower" => Ok(text.to_lowercase()),
            "title" => Ok(title_case(text)),
            "snake" => Ok(delimited_case(text, '_')),
            "kebab" => Ok(delimited_case(text, '-')),
            "camel" => Ok(camel_case(text)),
            other => Err(Error::invalid_input(format!(
                "unknown mode '{other}', expected upper|lower|title|snake|kebab|camel"
            ))),
        }
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn delimited_case(text: &str, delimiter: char) -> String {
    words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

fn camel_case(text: &str) -> String {
    let words = words(text);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Split on whitespace, underscores, and hyphens.
fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|s| !s.is_empty())
        .collect()
}

//! Regular expression tester

use regex::Regex;

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Input form: `<pattern> :: <text>`. Lists every match with its byte range;
/// capture groups are shown per match when the pattern defines any.
pub struct RegexTester;

impl Tool for RegexTester {
    fn id(&self) -> &str {
        "regex-tester"
    }

    fn name(&self) -> &str {
        "Regex Tester"
    }

    fn description(&self) -> &str {
        "Test regular expressions against sample text"
    }

    fn run(&self, input: &str) -> Result<String> {
        let (pattern, text) = input
            .split_once(" :: ")
            .ok_or_else(|| Error::invalid_input("expected '<pattern> :: <text>'"))?;

        let regex = Regex::new(pattern)
            .map_err(|e| Error::invalid_input(format!("bad pattern: {e}")))?;

        let mut lines = Vec::new();
        for (i, captures) in regex.captures_iter(text).enumerate() {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let mut line = format!(
                "{}: '{}' at {}..{}",
                i + 1,
                whole.as_str(),
                whole.start(),
                whole.end()
            );
            for (g, group) in captures.iter().enumerate().skip(1) {
                if let Some(group) = group {
                    line.push_str(&format!("  [{}: '{}']", g, group.as_str()));
                }
            }
            lines.push(line);
        }

        if lines.is_empty() {
            return Ok("no matches".to_string());
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_matches_with_ranges() {
        let output = RegexTester.run(r"\d+ :: a1 b22 c333").unwrap();
        assert_eq!(
            output,
            "1: '1' at 1..2\n2: '22' at 4..6\n3: '333' at 8..11"
        );
    }

    #[test]
    fn shows_capture_groups() {
        let output = RegexTester.run(r"(\w+)@(\w+) :: mail me at user@example").unwrap();
        assert!(output.contains("'user@example'"));
        assert!(output.contains("[1: 'user']"));
        assert!(output.contains("[2: 'example']"));
    }

    #[test]
    fn reports_no_matches() {
        let output = RegexTester.run(r"\d+ :: letters only").unwrap();
        assert_eq!(output, "no matches");
    }

    #[test]
    fn bad_pattern_is_rejected() {
        assert!(RegexTester.run("( :: text").is_err());
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert!(RegexTester.run(r"\d+ against text").is_err());
    }
}

//! Character, word, and line counter

use crate::error::{Error, Result};
use crate::tool::Tool;

pub struct CharacterCounter;

impl Tool for CharacterCounter {
    fn id(&self) -> &str {
        "character-counter"
    }

    fn name(&self) -> &str {
        "Character Counter"
    }

    fn description(&self) -> &str {
        "Count characters, words, and lines"
    }

    fn run(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(Error::invalid_input("no text given"));
        }

        let characters = input.chars().count();
        let without_spaces = input.chars().filter(|c| !c.is_whitespace()).count();
        let words = input.split_whitespace().count();
        let lines = input.lines().count();

        Ok(format!(
            "characters: {characters}\ncharacters (no spaces): {without_spaces}\nwords: {words}\nlines: {lines}"
        ))
    }
}

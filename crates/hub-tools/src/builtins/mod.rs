//! Built-in tool implementations
//!
//! The fixed declarative table the registry is populated from at startup.
//! Each leaf is independent and replaceable; none is load-bearing for the
//! dispatch core. Catalog entries without a binding here (qr-generator,
//! image-compressor, markdown-editor, color-picker, csv-viewer) take the
//! dispatcher's fallback path by design.

mod base64_codec;
mod calculator;
mod character_counter;
mod date_calculator;
mod hash_generator;
mod json_formatter;
mod password_generator;
mod percentage_calculator;
mod regex_tester;
mod text_case;
mod unit_converter;
mod url_codec;

use std::sync::Arc;

use crate::tool::Tool;

pub use base64_codec::Base64Encoder;
pub use calculator::Calculator;
pub use character_counter::CharacterCounter;
pub use date_calculator::DateCalculator;
pub use hash_generator::HashGenerator;
pub use json_formatter::JsonFormatter;
pub use password_generator::PasswordGenerator;
pub use percentage_calculator::PercentageCalculator;
pub use regex_tester::RegexTester;
pub use text_case::TextCaseConverter;
pub use unit_converter::UnitConverter;
pub use url_codec::UrlEncoder;

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 12;

/// The built-in table, in the order tools were introduced.
pub fn builtin_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(Calculator),
        Arc::new(UnitConverter),
        Arc::new(DateCalculator),
        Arc::new(JsonFormatter),
        Arc::new(Base64Encoder),
        Arc::new(PasswordGenerator),
        Arc::new(UrlEncoder),
        Arc::new(TextCaseConverter),
        Arc::new(RegexTester),
        Arc::new(HashGenerator),
        Arc::new(CharacterCounter),
        Arc::new(PercentageCalculator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn table_matches_builtin_count() {
        assert_eq!(builtin_tools().len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let tools = builtin_tools();
        let mut ids: Vec<_> = tools.iter().map(|t| t.id().to_string()).collect();
        ids.sort();
        let len_before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len_before);
    }

    #[test]
    fn every_builtin_has_a_catalog_entry() {
        for tool in builtin_tools() {
            let info = catalog::find(tool.id());
            assert!(info.is_some(), "missing catalog entry for {}", tool.id());
            assert_eq!(info.unwrap().name, tool.name());
        }
    }
}

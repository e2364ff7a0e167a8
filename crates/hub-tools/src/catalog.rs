//! Static catalog of every tool the directory lists
//!
//! The catalog is display metadata only; whether an id is actually bound to
//! an implementation is the registry's concern. Listing a tool here without
//! binding it is the normal way to announce an upcoming tool — navigating to
//! it takes the dispatcher's fallback path.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Grouping used by listing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Calculators,
    Converters,
    Generators,
    Formatters,
    Text,
    Developer,
    Media,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Calculators,
            Category::Converters,
            Category::Generators,
            Category::Formatters,
            Category::Text,
            Category::Developer,
            Category::Media,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Calculators => "calculators",
            Category::Converters => "converters",
            Category::Generators => "generators",
            Category::Formatters => "formatters",
            Category::Text => "text",
            Category::Developer => "developer",
            Category::Media => "media",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calculators" => Ok(Category::Calculators),
            "converters" => Ok(Category::Converters),
            "generators" => Ok(Category::Generators),
            "formatters" => Ok(Category::Formatters),
            "text" => Ok(Category::Text),
            "developer" => Ok(Category::Developer),
            "media" => Ok(Category::Media),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Display metadata for one directory entry.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Highlighted on the landing surface.
    pub featured: bool,
    /// Carries a "New" badge.
    pub is_new: bool,
}

/// Every tool the directory lists, in display order.
const CATALOG: &[ToolInfo] = &[
    ToolInfo {
        id: "calculator",
        name: "Calculator",
        description: "Evaluate arithmetic expressions",
        category: Category::Calculators,
        featured: true,
        is_new: false,
    },
    ToolInfo {
        id: "unit-converter",
        name: "Unit Converter",
        description: "Convert between length, weight, and temperature units",
        category: Category::Converters,
        featured: true,
        is_new: false,
    },
    ToolInfo {
        id: "date-calculator",
        name: "Date Calculator",
        description: "Add days to a date or count days between dates",
        category: Category::Calculators,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "qr-generator",
        name: "QR Generator",
        description: "Generate QR codes from text and links",
        category: Category::Generators,
        featured: false,
        is_new: true,
    },
    ToolInfo {
        id: "json-formatter",
        name: "JSON Formatter",
        description: "Pretty-print or minify JSON documents",
        category: Category::Formatters,
        featured: true,
        is_new: false,
    },
    ToolInfo {
        id: "base64-encoder",
        name: "Base64 Encoder",
        description: "Encode and decode Base64 strings",
        category: Category::Developer,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "password-generator",
        name: "Password Generator",
        description: "Generate strong random passwords",
        category: Category::Generators,
        featured: true,
        is_new: false,
    },
    ToolInfo {
        id: "image-compressor",
        name: "Image Compressor",
        description: "Shrink images without visible quality loss",
        category: Category::Media,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "url-encoder",
        name: "URL Encoder",
        description: "Percent-encode and decode URL components",
        category: Category::Developer,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "markdown-editor",
        name: "Markdown Editor",
        description: "Write Markdown with a live preview",
        category: Category::Text,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "color-picker",
        name: "Color Picker",
        description: "Pick colors and convert between formats",
        category: Category::Media,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "text-case-converter",
        name: "Text Case Converter",
        description: "Convert text between upper, lower, title, snake, kebab, and camel case",
        category: Category::Text,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "csv-viewer",
        name: "CSV Viewer",
        description: "Inspect CSV files as tables",
        category: Category::Developer,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "regex-tester",
        name: "Regex Tester",
        description: "Test regular expressions against sample text",
        category: Category::Developer,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "hash-generator",
        name: "Hash Generator",
        description: "Compute SHA-256 and SHA-512 digests",
        category: Category::Generators,
        featured: false,
        is_new: false,
    },
    ToolInfo {
        id: "character-counter",
        name: "Character Counter",
        description: "Count characters, words, and lines",
        category: Category::Text,
        featured: false,
        is_new: true,
    },
    ToolInfo {
        id: "percentage-calculator",
        name: "Percentage Calculator",
        description: "Work out percentages of and between numbers",
        category: Category::Calculators,
        featured: false,
        is_new: true,
    },
];

/// The full catalog in display order.
pub fn catalog() -> &'static [ToolInfo] {
    CATALOG
}

/// Find a catalog entry by id.
pub fn find(id: &str) -> Option<&'static ToolInfo> {
    CATALOG.iter().find(|info| info.id == id)
}

/// Catalog entries in a category, in display order.
pub fn by_category(category: Category) -> Vec<&'static ToolInfo> {
    CATALOG
        .iter()
        .filter(|info| info.category == category)
        .collect()
}

/// Case-insensitive search over id, name, and description.
pub fn search(term: &str) -> Vec<&'static ToolInfo> {
    let needle = term.to_lowercase();
    CATALOG
        .iter()
        .filter(|info| {
            info.id.contains(&needle)
                || info.name.to_lowercase().contains(&needle)
                || info.description.to_lowercase().contains(&needle)
        })
        .collect()
}

// crates/core/src/language/mod.rs

//! Supported text formats and the per-language logical-line weighting rules.

use serde::Serialize;
use tree_sitter::Node;

use crate::result::Count;
use crate::tree::EvalTrace;

pub mod c;
pub mod java;

/// The total number of supported text formats, including
/// supported programming languages.
pub const NUM_FORMATS: usize = 4;

/// Enumeration of supported text formats and programming languages.
///
/// Do not rely on the numeric discriminant values, as they may change when
/// support for new formats is added and the enumerators are reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextFormat {
    /// Text with no specific formatting, as usually found in
    /// files with a '.txt' extension.
    UnformattedText,

    /// Source files for the C programming language.
    C,

    /// Source files for the Java programming language.
    Java,

    /// Markdown formatted text files.
    Markdown,
}

impl TextFormat {
    /// All supported formats, in index order.
    pub const ALL: [TextFormat; NUM_FORMATS] =
        [Self::UnformattedText, Self::C, Self::Java, Self::Markdown];

    /// The index of this format into per-format count tables.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::UnformattedText => 0,
            Self::C => 1,
            Self::Java => 2,
            Self::Markdown => 3,
        }
    }

    /// The bitmask flag of this format for format selection options.
    #[must_use]
    pub fn flag(self) -> u32 {
        1 << self.index()
    }

    /// Whether this format represents a programming language for which
    /// logical lines of code can be counted.
    #[must_use]
    pub fn is_programming_language(self) -> bool {
        matches!(self, Self::C | Self::Java)
    }

    /// Maps a lowercase file extension (without the leading dot) to
    /// its text format. Unknown extensions are unsupported.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "c" | "h" => Some(Self::C),
            "java" => Some(Self::Java),
            "md" => Some(Self::Markdown),
            "txt" => Some(Self::UnformattedText),
            _ => None,
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UnformattedText => "Plain Text",
            Self::C => "C",
            Self::Java => "Java",
            Self::Markdown => "Markdown",
        }
    }

    /// The character sequence introducing an inline source code comment in
    /// this programming language.
    #[must_use]
    pub fn inline_comment_token(self) -> &'static str {
        // C and Java share the same inline comment syntax
        "//"
    }
}

/// The logical-line weighting rules of one programming language, with the
/// grammar symbol ids resolved for one parser instantiation.
#[derive(Debug)]
pub enum WeightRules {
    C(c::CSymbols),
    Java(java::JavaSymbols),
}

impl WeightRules {
    /// Resolves the weighting rules for the given format. Returns `None` if
    /// the format does not represent a supported programming language.
    #[must_use]
    pub fn for_format(format: TextFormat) -> Option<Self> {
        let language = crate::grammar::language_for(format)?;
        match format {
            TextFormat::C => Some(Self::C(c::CSymbols::resolve(&language))),
            TextFormat::Java => Some(Self::Java(java::JavaSymbols::resolve(&language))),
            _ => None,
        }
    }

    /// Computes the logical-line weight contributed by the given node and
    /// updates the tie-breaking trace.
    pub fn weigh(&self, node: Node<'_>, trace: &mut EvalTrace) -> Count {
        match self {
            Self::C(symbols) => c::weigh(symbols, node, trace),
            Self::Java(symbols) => java::weigh(symbols, node, trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_mapping() {
        assert_eq!(TextFormat::from_extension("c"), Some(TextFormat::C));
        assert_eq!(TextFormat::from_extension("h"), Some(TextFormat::C));
        assert_eq!(TextFormat::from_extension("java"), Some(TextFormat::Java));
        assert_eq!(TextFormat::from_extension("md"), Some(TextFormat::Markdown));
        assert_eq!(TextFormat::from_extension("txt"), Some(TextFormat::UnformattedText));
        assert_eq!(TextFormat::from_extension("rs"), None);
        assert_eq!(TextFormat::from_extension(""), None);
    }

    #[test]
    fn format_indices_are_unique_and_in_bounds() {
        for (position, format) in TextFormat::ALL.iter().enumerate() {
            assert_eq!(format.index(), position);
            assert!(format.index() < NUM_FORMATS);
        }
    }

    #[test]
    fn only_languages_support_logical_lines() {
        assert!(TextFormat::C.is_programming_language());
        assert!(TextFormat::Java.is_programming_language());
        assert!(!TextFormat::Markdown.is_programming_language());
        assert!(!TextFormat::UnformattedText.is_programming_language());
    }

    #[test]
    fn rules_exist_only_for_languages() {
        assert!(WeightRules::for_format(TextFormat::C).is_some());
        assert!(WeightRules::for_format(TextFormat::Java).is_some());
        assert!(WeightRules::for_format(TextFormat::Markdown).is_none());
        assert!(WeightRules::for_format(TextFormat::UnformattedText).is_none());
    }
}

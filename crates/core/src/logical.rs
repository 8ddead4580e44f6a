// crates/core/src/logical.rs

//! Logical lines of code: counting and source annotation entry points.

use std::path::Path;

use tree_sitter::Node;

use crate::annotation::Annotator;
use crate::encoding::{Encoding, detect_encoding, has_utf8_bom};
use crate::fileio::SourceFile;
use crate::language::{TextFormat, WeightRules};
use crate::physical::count_physical_bytes;
use crate::result::{Count, CountResult, ErrorKind};
use crate::source::SourceText;
use crate::tree::{EvalTrace, NodeVisitor, evaluate_source_tree};

/// Visitor accumulating the logical-line count across a tree walk.
struct LogicalCounter {
    rules: WeightRules,
    count: Count,
}

impl NodeVisitor for LogicalCounter {
    fn visit(&mut self, node: Node<'_>, trace: &mut EvalTrace) {
        self.count = self.count.wrapping_add(self.rules.weigh(node, trace));
        trace.idx += 1;
    }
}

/// Counts the number of logical lines of code in the specified source text.
///
/// A logical line is a language-defined standalone construct, counted
/// independently of physical line breaks and formatting. Multiple
/// statements on one physical line count as multiple logical lines; one
/// statement spanning multiple physical lines counts as one.
///
/// The given format must denote a supported programming language. Source
/// text that the grammar cannot parse yields a
/// [`ErrorKind::SyntaxError`] result.
#[must_use]
pub fn count_logical_lines(language: TextFormat, source: &SourceText) -> CountResult {
    let Some(rules) = WeightRules::for_format(language) else {
        return CountResult::failure(
            ErrorKind::UnsupportedFormat,
            "The input format or programming language is not supported",
        );
    };
    let mut counter = LogicalCounter { rules, count: 0 };
    let mut trace = EvalTrace::default();
    let state = evaluate_source_tree(source.as_bytes(), language, &mut counter, &mut trace);
    CountResult { count: if state.ok { counter.count } else { 0 }, state }
}

/// Marks the counted logical lines in the specified source code text.
///
/// Creates a copy of the source with inline comments added to lines that
/// are counted, indicating the count number plus the kinds of the counted
/// constructs. One physical line can carry the annotations of multiple
/// logical lines. The input must be encoded in UTF-8; a leading BOM is
/// skipped and does not appear in the output.
pub fn mark_logical_lines(
    language: TextFormat,
    source: &SourceText,
) -> Result<SourceText, ErrorKind> {
    let mut bytes = source.as_bytes();
    if detect_encoding(bytes) != Encoding::Utf8 {
        return Err(ErrorKind::InvalidInput);
    }
    if has_utf8_bom(bytes) {
        bytes = &bytes[3..];
    }
    let lines = count_physical_bytes(bytes);
    if !lines.state.ok {
        return Err(lines.state.error.unwrap_or(ErrorKind::Unknown));
    }
    let rules = WeightRules::for_format(language).ok_or(ErrorKind::UnsupportedFormat)?;
    let mut annotator = Annotator::new(language, rules, lines.count as usize);
    let mut trace = EvalTrace::default();
    let state = evaluate_source_tree(bytes, language, &mut annotator, &mut trace);
    if !state.ok {
        return Err(state.error.unwrap_or(ErrorKind::Unknown));
    }
    Ok(annotator.into_annotated(bytes))
}

/// Marks the counted logical lines in the source code of the given file.
///
/// The file must have a supported programming language format, detected
/// from its extension, and must contain UTF-8 encoded text.
pub fn mark_logical_lines_in_file(path: &Path) -> Result<SourceText, ErrorKind> {
    let mut file = SourceFile::new(path);
    let format = file
        .detect_format()
        .filter(|format| format.is_programming_language())
        .ok_or(ErrorKind::UnsupportedFormat)?;
    if !file.read_content() {
        return Err(ErrorKind::InvalidInput);
    }
    let Some(content) = file.content() else {
        return Err(ErrorKind::InvalidInput);
    };
    mark_logical_lines(format, content)
}

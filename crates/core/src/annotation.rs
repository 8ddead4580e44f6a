// crates/core/src/annotation.rs

//! Per-line accumulation and rendering of logical-line annotations.
//!
//! The annotator serves as the visitor during a tree walk. For every node
//! the weighting rules assign a non-zero weight to, it records the weight
//! and the node kind against the physical line the node starts on. After
//! the walk, the recorded data is rendered into inline comments and merged
//! into a copy of the original source.

use std::fmt::Write as _;

use tree_sitter::Node;

use crate::language::{TextFormat, WeightRules};
use crate::result::Count;
use crate::source::SourceText;
use crate::tree::{EvalTrace, NodeVisitor};

/// Accumulated annotation data for one physical line.
///
/// A rendered source code comment might look like: ` // +2 (type 1, type 2)`
#[derive(Debug, Default, Clone)]
struct LineBuffer {
    rendered: String,
    weight: Count,
    kinds: Vec<String>,
}

/// Visitor that annotates physical lines with the kinds of the counted
/// nodes and their logical-line weights.
#[derive(Debug)]
pub struct Annotator {
    rules: WeightRules,
    language: TextFormat,
    lines: Vec<LineBuffer>,
}

impl Annotator {
    /// Creates an annotator with one empty line buffer per physical line.
    #[must_use]
    pub(crate) fn new(language: TextFormat, rules: WeightRules, line_count: usize) -> Self {
        Self { rules, language, lines: vec![LineBuffer::default(); line_count] }
    }

    /// Renders the final comment strings from the accumulated weights and
    /// kind names. Kinds appear in visit order; duplicates are kept.
    fn finalize_comments(&mut self) {
        let token = self.language.inline_comment_token();
        for buffer in &mut self.lines {
            if buffer.kinds.is_empty() {
                continue;
            }
            let mut comment = String::new();
            let _ = write!(comment, " {token} +{} (", buffer.weight);
            comment.push_str(&buffer.kinds.join(", "));
            comment.push(')');
            buffer.rendered = comment;
        }
    }

    /// Builds the annotated output by inserting each line's rendered
    /// comment just before its line break. CRLF endings are preserved; a
    /// final line without a terminator has its comment appended at the end.
    pub(crate) fn into_annotated(mut self, source: &[u8]) -> SourceText {
        self.finalize_comments();
        let comment_total: usize = self.lines.iter().map(|line| line.rendered.len()).sum();
        let mut annotated = Vec::with_capacity(source.len() + comment_total);
        let mut line_index = 0usize;
        let mut offset = 0usize;
        while offset < source.len() {
            let newline = newline_width(source, offset);
            if newline == 0 {
                annotated.push(source[offset]);
                offset += 1;
                continue;
            }
            if let Some(buffer) = self.lines.get(line_index) {
                annotated.extend_from_slice(buffer.rendered.as_bytes());
            }
            if newline == 2 {
                annotated.push(source[offset]); // CR
                offset += 1;
            }
            annotated.push(source[offset]); // LF
            offset += 1;
            line_index += 1;
        }
        // If the last line had no newline, append its comment at the end
        if let Some(buffer) = self.lines.get(line_index) {
            annotated.extend_from_slice(buffer.rendered.as_bytes());
        }
        debug_assert_eq!(annotated.len(), source.len() + comment_total);
        SourceText::new(annotated)
    }
}

impl NodeVisitor for Annotator {
    fn visit(&mut self, node: Node<'_>, trace: &mut EvalTrace) {
        let weight = self.rules.weigh(node, trace);
        trace.idx += 1;
        if weight == 0 {
            return;
        }
        let row = node.start_position().row;
        let Some(buffer) = self.lines.get_mut(row) else {
            return; // out-of-range rows are skipped
        };
        buffer.weight = buffer.weight.wrapping_add(weight);
        buffer.kinds.push(node.kind().replace('_', " "));
    }
}

/// Returns 0 if the byte at `offset` does not start a line break, 1 for a
/// lone LF and 2 for a CRLF pair.
fn newline_width(bytes: &[u8], offset: usize) -> usize {
    if bytes[offset] == b'\n' {
        return 1;
    }
    if bytes[offset] == b'\r' && offset + 1 < bytes.len() && bytes[offset + 1] == b'\n' {
        return 2;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_width_classifies_line_breaks() {
        assert_eq!(newline_width(b"a\nb", 1), 1);
        assert_eq!(newline_width(b"a\r\nb", 1), 2);
        assert_eq!(newline_width(b"a\rb", 1), 0);
        assert_eq!(newline_width(b"a\r", 1), 0);
        assert_eq!(newline_width(b"abc", 0), 0);
    }
}

// crates/core/src/tree.rs

//! Depth-first pre-order traversal of syntax trees.

use tree_sitter::Node;

use crate::grammar;
use crate::language::TextFormat;
use crate::result::{ErrorKind, ResultState};

/// Tie-breaking state tracked across one tree walk.
///
/// `idx` is incremented for every visited node in traversal order. The
/// last-seen indices and source rows are used by the per-language weighting
/// rules to suppress double counting of grammatically nested constructs
/// that conceptually form a single logical line. Rows are 1-based.
#[derive(Debug, Default, Clone)]
pub struct EvalTrace {
    pub idx: u64,
    pub idx_last_for: u64,
    pub idx_last_else: u64,
    pub idx_last_typedef: u64,
    pub ln_last_decl: u64,
    pub ln_last_expr: u64,
    pub ln_last_switch_label: u64,
    pub ln_last_arrow: u64,
}

/// The physical line number that corresponds to the given node, 1-based.
#[must_use]
pub fn current_line(node: Node<'_>) -> u64 {
    node.start_position().row as u64 + 1
}

/// A visitor invoked for every node during tree traversal.
///
/// Implementations perform the evaluation logic specific to their purpose
/// and are responsible for advancing `trace.idx` once per visited node.
pub trait NodeVisitor {
    fn visit(&mut self, node: Node<'_>, trace: &mut EvalTrace);
}

enum TraversalState {
    Descend,
    NextSibling,
    Ascend,
}

/// Traverses the entire tree in pre-order, starting at the given root node,
/// calling the visitor for each node. The walker itself does not branch on
/// node kinds.
pub fn traverse<V: NodeVisitor>(root: Node<'_>, visitor: &mut V, trace: &mut EvalTrace) {
    let mut cursor = root.walk();
    let mut state = TraversalState::Descend;
    loop {
        if matches!(state, TraversalState::Descend) {
            let node = cursor.node();
            log_node(node);
            visitor.visit(node, trace);
            if cursor.goto_first_child() {
                continue;
            }
            state = TraversalState::NextSibling;
        }
        if matches!(state, TraversalState::NextSibling) {
            if cursor.goto_next_sibling() {
                state = TraversalState::Descend;
                continue;
            }
            state = TraversalState::Ascend;
        }
        if matches!(state, TraversalState::Ascend) {
            if !cursor.goto_parent() {
                break;
            }
            state = TraversalState::NextSibling;
        }
    }
}

/// Evaluates the syntax tree of the given source code, calling the visitor
/// for every node. The returned state indicates whether the evaluation was
/// successful or which error occurred.
pub(crate) fn evaluate_source_tree<V: NodeVisitor>(
    bytes: &[u8],
    language: TextFormat,
    visitor: &mut V,
    trace: &mut EvalTrace,
) -> ResultState {
    if bytes.len() > u32::MAX as usize {
        return ResultState::failure(
            ErrorKind::InputTooLarge,
            "Source input exceeds maximum supported size",
        );
    }
    let tree = match grammar::parse_detected(bytes, language) {
        Ok(tree) => tree,
        Err(error) => {
            return ResultState::failure(
                error,
                match error {
                    ErrorKind::UnsupportedFormat => "The input language is not supported",
                    ErrorKind::SyntaxError => "Syntax error detected in source code",
                    _ => "Failed to parse source code",
                },
            );
        }
    };
    traverse(tree.root_node(), visitor, trace);
    ResultState::success()
}

fn log_node(node: Node<'_>) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    let mut name = node.grammar_name();
    if name == "\n" {
        name = "\\n";
    }
    let marker = if node.is_error() {
        " [ERROR]: Invalid"
    } else if node.is_missing() {
        " [ERROR]: Missing"
    } else {
        ""
    };
    let point = node.start_position();
    log::trace!(
        "Line: {:6}  Col: {:6}  Node: {:<32} ({}){}",
        point.row + 1,
        point.column + 1,
        name,
        node.grammar_id(),
        marker
    );
}

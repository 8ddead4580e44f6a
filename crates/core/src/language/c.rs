// crates/core/src/language/c.rs

//! Logical-line weighting rules for the C programming language.

use tree_sitter::{Language, Node};

use crate::result::Count;
use crate::tree::{EvalTrace, current_line};

/// Grammar kinds that carry a unit weight without tie-breaking.
///
/// Hidden grammar rules (e.g. the top-level variant of an expression
/// statement or old-style function definitions) surface under the aliased
/// kinds listed here, so matching happens on the public kind id of a node.
const UNIT_WEIGHT_KINDS: &[&str] = &[
    "attribute",
    "attribute_specifier",
    "attributed_declarator",
    "attributed_statement",
    "attributed_type_declarator",
    "break_statement",
    "case_statement",
    "continue_statement",
    "declaration_list",
    "enumerator",
    "expression",
    "field_declaration",
    "function_definition",
    "goto_statement",
    "labeled_statement",
    "linkage_specification",
    "preproc_def",
    "preproc_directive",
    "preproc_elif",
    "preproc_elifdef",
    "preproc_else",
    "preproc_function_def",
    "preproc_if",
    "preproc_ifdef",
    "preproc_include",
    "return_statement",
    "statement",
    "switch_statement",
    "type_specifier",
    "while_statement",
];

/// The C grammar symbol ids consulted by the weighting rules, resolved once
/// per parser instantiation.
#[derive(Debug)]
pub struct CSymbols {
    for_statement: u16,
    declaration: u16,
    do_statement: u16,
    type_definition: u16,
    struct_specifier: u16,
    enum_specifier: u16,
    union_specifier: u16,
    expression_statement: u16,
    if_statement: u16,
    else_clause: u16,
    unit_weight: Vec<u16>,
}

impl CSymbols {
    #[must_use]
    pub fn resolve(language: &Language) -> Self {
        let named = |kind: &str| language.id_for_node_kind(kind, true);
        let mut unit_weight: Vec<u16> = UNIT_WEIGHT_KINDS
            .iter()
            .map(|kind| named(kind))
            .filter(|&id| id != 0)
            .collect();
        unit_weight.sort_unstable();
        Self {
            for_statement: named("for_statement"),
            declaration: named("declaration"),
            do_statement: named("do_statement"),
            type_definition: named("type_definition"),
            struct_specifier: named("struct_specifier"),
            enum_specifier: named("enum_specifier"),
            union_specifier: named("union_specifier"),
            expression_statement: named("expression_statement"),
            if_statement: named("if_statement"),
            else_clause: named("else_clause"),
            unit_weight,
        }
    }
}

/// Computes the logical-line weight of one node and updates the
/// tie-breaking trace. The caller advances `trace.idx` afterwards.
pub(crate) fn weigh(symbols: &CSymbols, node: Node<'_>, trace: &mut EvalTrace) -> Count {
    let sym = node.kind_id();
    if sym == 0 {
        return 0;
    }
    if sym == symbols.for_statement {
        trace.idx_last_for = trace.idx;
        return 1;
    }
    if sym == symbols.declaration {
        trace.ln_last_decl = current_line(node);
        // A declaration three nodes after a for-statement is the clause of
        // the for-header (for_statement, "for", "(", declaration) and does
        // not count on its own.
        if trace.idx_last_for == trace.idx.wrapping_sub(3) {
            return 0;
        }
        return 1;
    }
    if sym == symbols.do_statement {
        // Body statement plus the loop itself
        return 2;
    }
    if sym == symbols.type_definition {
        trace.idx_last_typedef = trace.idx;
        return 1;
    }
    if sym == symbols.struct_specifier {
        // typedef of a struct: the specifier follows two nodes after the
        // type_definition ("typedef" keyword in between)
        if trace.idx_last_typedef == trace.idx.wrapping_sub(2) {
            return 0;
        }
        let line = current_line(node);
        if trace.ln_last_decl == line {
            return 0;
        }
        if trace.ln_last_expr == line {
            return 0;
        }
        return 1;
    }
    if sym == symbols.enum_specifier || sym == symbols.union_specifier {
        if trace.ln_last_decl == current_line(node) {
            return 0;
        }
        return 1;
    }
    if sym == symbols.expression_statement {
        trace.ln_last_expr = current_line(node);
        return 1;
    }
    if sym == symbols.if_statement {
        // else-if counts as one; the chain is else_clause, "else",
        // if_statement in traversal order
        if trace.idx_last_else == trace.idx.wrapping_sub(2) {
            return 0;
        }
        return 1;
    }
    if sym == symbols.else_clause {
        trace.idx_last_else = trace.idx;
        return 1;
    }
    if symbols.unit_weight.binary_search(&sym).is_ok() {
        return 1;
    }
    0
}

// crates/core/src/language/java.rs

//! Logical-line weighting rules for the Java programming language.

use tree_sitter::{Language, Node};

use crate::result::Count;
use crate::tree::{EvalTrace, current_line};

/// Named grammar kinds that carry a unit weight without tie-breaking.
const UNIT_WEIGHT_KINDS: &[&str] = &[
    "annotation",
    "annotation_type_declaration",
    "annotation_type_element_declaration",
    "assert_statement",
    "break_statement",
    "catch_clause",
    "class_declaration",
    "compact_constructor_declaration",
    "constant_declaration",
    "constructor_declaration",
    "continue_statement",
    "declaration",
    "enhanced_for_statement",
    "enum_constant",
    "enum_declaration",
    "explicit_constructor_invocation",
    "exports_module_directive",
    "expression",
    "field_declaration",
    "finally_clause",
    "guard",
    "import_declaration",
    "interface_declaration",
    "marker_annotation",
    "method_declaration",
    "module_declaration",
    "module_directive",
    "opens_module_directive",
    "package_declaration",
    "pattern",
    "permits",
    "provides_module_directive",
    "record_declaration",
    "record_pattern",
    "record_pattern_body",
    "record_pattern_component",
    "requires_modifier",
    "requires_module_directive",
    "return_statement",
    "statement",
    "static_initializer",
    "switch_expression",
    "synchronized_statement",
    "throw_statement",
    "try_statement",
    "try_with_resources_statement",
    "type_pattern",
    "uses_module_directive",
    "while_statement",
    "yield_statement",
];

/// Keyword tokens that carry a unit weight, e.g. in module declarations.
const UNIT_WEIGHT_TOKENS: &[&str] = &[
    "exports", "module", "open", "opens", "provides", "requires", "to", "transitive", "uses",
    "when", "with",
];

/// The Java grammar symbol ids consulted by the weighting rules, resolved
/// once per parser instantiation.
#[derive(Debug)]
pub struct JavaSymbols {
    arrow: u16,
    kw_else: u16,
    switch_label: u16,
    expression_statement: u16,
    if_statement: u16,
    local_variable_declaration: u16,
    do_statement: u16,
    for_statement: u16,
    unit_weight: Vec<u16>,
}

impl JavaSymbols {
    #[must_use]
    pub fn resolve(language: &Language) -> Self {
        let named = |kind: &str| language.id_for_node_kind(kind, true);
        let token = |kind: &str| language.id_for_node_kind(kind, false);
        let mut unit_weight: Vec<u16> = UNIT_WEIGHT_KINDS
            .iter()
            .map(|kind| named(kind))
            .chain(UNIT_WEIGHT_TOKENS.iter().map(|kind| token(kind)))
            .filter(|&id| id != 0)
            .collect();
        unit_weight.sort_unstable();
        Self {
            arrow: token("->"),
            kw_else: token("else"),
            switch_label: named("switch_label"),
            expression_statement: named("expression_statement"),
            if_statement: named("if_statement"),
            local_variable_declaration: named("local_variable_declaration"),
            do_statement: named("do_statement"),
            for_statement: named("for_statement"),
            unit_weight,
        }
    }
}

/// Computes the logical-line weight of one node and updates the
/// tie-breaking trace. The caller advances `trace.idx` afterwards.
pub(crate) fn weigh(symbols: &JavaSymbols, node: Node<'_>, trace: &mut EvalTrace) -> Count {
    let sym = node.kind_id();
    if sym == 0 {
        return 0;
    }
    if sym == symbols.arrow {
        trace.ln_last_arrow = current_line(node);
        return 0;
    }
    if sym == symbols.kw_else {
        trace.idx_last_else = trace.idx;
        return 1;
    }
    if sym == symbols.switch_label {
        trace.ln_last_switch_label = current_line(node);
        return 1;
    }
    if sym == symbols.expression_statement {
        // The body of a single-line switch arrow rule is part of the
        // already counted label
        let line = current_line(node);
        if trace.ln_last_switch_label == line && trace.ln_last_arrow == line {
            return 0;
        }
        return 1;
    }
    if sym == symbols.if_statement {
        // else-if counts as one; the chained if directly follows the
        // "else" keyword in traversal order
        if trace.idx_last_else == trace.idx.wrapping_sub(1) {
            return 0;
        }
        return 1;
    }
    if sym == symbols.local_variable_declaration {
        // A declaration three nodes after a for-statement is the clause of
        // the for-header and does not count on its own
        if trace.idx_last_for == trace.idx.wrapping_sub(3) {
            return 0;
        }
        return 1;
    }
    if sym == symbols.do_statement {
        // Body statement plus the loop itself
        return 2;
    }
    if sym == symbols.for_statement {
        trace.idx_last_for = trace.idx;
        return 1;
    }
    if symbols.unit_weight.binary_search(&sym).is_ok() {
        return 1;
    }
    0
}

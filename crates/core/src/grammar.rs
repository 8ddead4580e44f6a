// crates/core/src/grammar.rs

//! The grammar service: parses source bytes into a typed syntax tree.
//!
//! Parsers are backed by the tree-sitter runtime with the C and Java
//! grammars. Symbol ids referenced by the weighting rules are resolved from
//! kind names per parser instantiation, never hard-coded, so that grammar
//! upgrades keep a single point of maintenance.

use tree_sitter::{Language, Parser, Tree};

use crate::encoding::{Encoding, detect_encoding, has_utf8_bom};
use crate::language::TextFormat;
use crate::result::ErrorKind;

/// Returns the grammar for the given format, or `None` if the format is not
/// a supported programming language.
#[must_use]
pub fn language_for(format: TextFormat) -> Option<Language> {
    match format {
        TextFormat::C => Some(tree_sitter_c::LANGUAGE.into()),
        TextFormat::Java => Some(tree_sitter_java::LANGUAGE.into()),
        _ => None,
    }
}

/// Creates a parser for source code in the specified programming language.
/// Returns `None` if the language is not supported.
#[must_use]
pub fn create_parser(format: TextFormat) -> Option<Parser> {
    let language = language_for(format)?;
    let mut parser = Parser::new();
    parser.set_language(&language).ok()?;
    Some(parser)
}

/// Parses the given source bytes into a syntax tree.
///
/// The bytes are interpreted according to the given encoding; a leading BOM
/// is skipped. Inputs the grammar cannot parse yield
/// [`ErrorKind::SyntaxError`]; unsupported languages yield
/// [`ErrorKind::UnsupportedFormat`].
pub fn parse(bytes: &[u8], encoding: Encoding, language: TextFormat) -> Result<Tree, ErrorKind> {
    let mut parser = create_parser(language).ok_or(ErrorKind::UnsupportedFormat)?;
    let tree = match encoding {
        Encoding::Utf8 => {
            let text = if has_utf8_bom(bytes) { &bytes[3..] } else { bytes };
            parser.parse(text, None)
        }
        Encoding::Utf16Le => {
            let units = code_units(bytes, true);
            parser.parse_utf16_le(&units, None)
        }
        Encoding::Utf16Be => {
            let units = code_units(bytes, false);
            parser.parse_utf16_be(&units, None)
        }
    };
    let tree = tree.ok_or(ErrorKind::Unknown)?;
    if tree.root_node().has_error() {
        log_syntax_errors(&tree);
        return Err(ErrorKind::SyntaxError);
    }
    Ok(tree)
}

/// Decodes raw bytes into UTF-16 code units, skipping a leading BOM.
/// A trailing lone byte is dropped.
fn code_units(bytes: &[u8], little_endian: bool) -> Vec<u16> {
    let mut units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if little_endian { u16::from_le_bytes(pair) } else { u16::from_be_bytes(pair) }
        })
        .collect();
    if units.first() == Some(&0xfeff) {
        units.remove(0);
    }
    units
}

fn log_syntax_errors(tree: &Tree) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    log::trace!("[ERROR] Syntax error in input detected");
    let mut cursor = tree.walk();
    'walk: loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let point = node.start_position();
            log::trace!(
                "[ERROR] Node {} at line {} column {} produces a syntax error",
                node.grammar_name(),
                point.row + 1,
                point.column + 1
            );
        }
        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }
}

/// Parses with the encoding detected from the input bytes.
pub fn parse_detected(bytes: &[u8], language: TextFormat) -> Result<Tree, ErrorKind> {
    parse(bytes, detect_encoding(bytes), language)
}

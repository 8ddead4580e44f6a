// crates/core/src/words.rs
use crate::result::{CountResult, ErrorKind};
use crate::source::SourceText;

/// Counts the number of words in the specified source text.
///
/// A word is a non-zero-length sequence of printable characters delimited by
/// white space. The scan is byte-wise with the classical ASCII whitespace
/// class. This is intentionally encoding-ignorant: UTF-16 input yields a
/// byte-level approximation.
#[must_use]
pub fn count_words(source: &SourceText) -> CountResult {
    let bytes = source.as_bytes();
    if bytes.is_empty() {
        return CountResult::success(0);
    }
    if bytes.len() > u32::MAX as usize {
        return CountResult::failure(
            ErrorKind::InputTooLarge,
            "Input exceeds maximum supported size",
        );
    }

    let mut count: u64 = 0;
    let mut in_word = false;
    for &byte in bytes {
        if is_ascii_space(byte) {
            in_word = false;
        } else if byte != 0 && !in_word {
            count += 1;
            in_word = true;
        }
    }
    CountResult::success(count)
}

/// The classical `isspace()` class: space, tab, newline, vertical tab,
/// form feed and carriage return.
fn is_ascii_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

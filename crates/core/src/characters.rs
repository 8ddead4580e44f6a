// crates/core/src/characters.rs
use crate::encoding::{Encoding, detect_encoding, has_utf8_bom};
use crate::result::{Count, CountResult, ErrorKind};
use crate::source::SourceText;

const UTF16_BOM_LE: u16 = 0xfffe;
const UTF16_BOM_BE: u16 = 0xfeff;
const HIGH_SURROGATE_START: u16 = 0xd800;
const HIGH_SURROGATE_END: u16 = 0xdbff;
const LOW_SURROGATE_START: u16 = 0xdc00;
const LOW_SURROGATE_END: u16 = 0xdfff;

const MASK_B2: u8 = 0xe0;
const MASK_B3: u8 = 0xf0;
const MASK_B4: u8 = 0xf8;
const TWO_BYTE_SEQ: u8 = 0xc0;
const THREE_BYTE_SEQ: u8 = 0xe0;
const FOUR_BYTE_SEQ: u8 = 0xf0;

/// Counts the number of characters in the specified source text.
///
/// A character is defined as a Unicode code point. This metric includes
/// control characters, like newlines. Malformed sequences are tolerated:
/// in UTF-8, continuation bytes are not validated and an invalid or
/// truncated sequence counts as one character; in UTF-16, an unpaired
/// surrogate contributes nothing.
#[must_use]
pub fn count_characters(source: &SourceText) -> CountResult {
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

    let count = match detect_encoding(bytes) {
        Encoding::Utf8 => count_utf8(bytes),
        encoding => count_utf16(bytes, encoding == Encoding::Utf16Le),
    };
    CountResult::success(count)
}

fn count_utf8(bytes: &[u8]) -> Count {
    let mut count: Count = 0;
    let mut offset = if has_utf8_bom(bytes) { 3 } else { 0 };
    let size = bytes.len();
    while offset < size {
        let byte = bytes[offset];
        // Always consume at least one byte to avoid stalling on encoding
        // errors like a truncated or invalid leading byte.
        let mut stride = 1;
        if (byte & MASK_B2) == TWO_BYTE_SEQ && offset + 1 < size {
            stride = 2;
        } else if (byte & MASK_B3) == THREE_BYTE_SEQ && offset + 2 < size {
            stride = 3;
        } else if (byte & MASK_B4) == FOUR_BYTE_SEQ && offset + 3 < size {
            stride = 4;
        }
        offset += stride;
        count += 1;
    }
    count
}

/// Reads a 16-bit code unit at the given byte offset. No range checks.
fn code_unit(bytes: &[u8], offset: usize, little_endian: bool) -> u16 {
    let pair = [bytes[offset], bytes[offset + 1]];
    if little_endian { u16::from_le_bytes(pair) } else { u16::from_be_bytes(pair) }
}

fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

fn count_utf16(bytes: &[u8], little_endian: bool) -> Count {
    let mut count: Count = 0;
    let size = bytes.len();
    let mut offset = 0;
    if size >= 2 {
        let unit = code_unit(bytes, 0, little_endian);
        if unit == UTF16_BOM_BE || unit == UTF16_BOM_LE {
            offset = 2;
        }
    }
    while offset + 1 < size {
        let unit = code_unit(bytes, offset, little_endian);
        offset += 2;
        if unit == UTF16_BOM_BE || unit == UTF16_BOM_LE {
            continue; // ignore stray BOMs beyond the start
        }
        if is_high_surrogate(unit) {
            // A high surrogate followed by a low surrogate forms a single
            // code point; one without a valid follower contributes nothing.
            if offset + 1 < size {
                let next = code_unit(bytes, offset, little_endian);
                if is_low_surrogate(next) {
                    offset += 2;
                    count += 1;
                }
            }
            continue;
        }
        if is_low_surrogate(unit) {
            continue; // ignore stray low surrogates
        }
        count += 1;
    }
    // Any trailing single byte is ignored
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(source: SourceText) -> u64 {
        let result = count_characters(&source);
        assert!(result.state.ok);
        result.count
    }

    fn utf16le(text: &str) -> SourceText {
        let mut bytes = vec![0xff, 0xfe];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        SourceText::new(bytes)
    }

    #[test]
    fn empty_input_counts_zero() {
        assert_eq!(count(SourceText::from("")), 0);
    }

    #[test]
    fn counts_ascii_and_control_characters() {
        assert_eq!(count(SourceText::from("ab\ncd\n")), 6);
    }

    #[test]
    fn counts_multi_byte_sequences_once() {
        assert_eq!(count(SourceText::from("\u{00e9}")), 1); // 2 bytes
        assert_eq!(count(SourceText::from("\u{20ac}")), 1); // 3 bytes
        assert_eq!(count(SourceText::from("\u{1f600}")), 1); // 4 bytes
        assert_eq!(count(SourceText::from("a\u{20ac}b")), 3);
    }

    #[test]
    fn skips_utf8_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"abc");
        assert_eq!(count(SourceText::new(bytes)), 3);
    }

    #[test]
    fn invalid_utf8_bytes_count_one_each() {
        // Stray continuation bytes have no valid leading byte
        assert_eq!(count(SourceText::new(vec![0x80, 0x80, 0x80])), 3);
        // Truncated two-byte sequence at the end of input
        assert_eq!(count(SourceText::new(vec![b'a', 0xc3])), 2);
    }

    #[test]
    fn utf16_bmp_characters() {
        assert_eq!(count(utf16le("abc")), 3);
    }

    #[test]
    fn utf16_surrogate_pair_counts_once() {
        assert_eq!(count(utf16le("a\u{1f600}b")), 3);
    }

    #[test]
    fn utf16_unpaired_high_surrogate_contributes_nothing() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend_from_slice(&0xd800u16.to_le_bytes());
        bytes.extend_from_slice(&(b'a' as u16).to_le_bytes());
        assert_eq!(count(SourceText::new(bytes)), 1);
    }

    #[test]
    fn utf16_stray_low_surrogate_contributes_nothing() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend_from_slice(&0xdc00u16.to_le_bytes());
        bytes.extend_from_slice(&(b'a' as u16).to_le_bytes());
        assert_eq!(count(SourceText::new(bytes)), 1);
    }

    #[test]
    fn utf16_interior_boms_are_ignored() {
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend_from_slice(&(b'a' as u16).to_le_bytes());
        bytes.extend_from_slice(&0xfeffu16.to_le_bytes());
        bytes.extend_from_slice(&(b'b' as u16).to_le_bytes());
        assert_eq!(count(SourceText::new(bytes)), 2);
    }

    #[test]
    fn utf16_bom_only_counts_zero() {
        assert_eq!(count(SourceText::new(vec![0xff, 0xfe])), 0);
        assert_eq!(count(SourceText::new(vec![0xfe, 0xff])), 0);
    }
}

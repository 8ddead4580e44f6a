// crates/core/src/encoding.rs

/// The UTF-8 byte order mark.
pub const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

const UTF16_BOM_LE: [u8; 2] = [0xff, 0xfe];
const UTF16_BOM_BE: [u8; 2] = [0xfe, 0xff];

/// Enumeration of supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// Checks whether the given source text starts with a UTF-8 BOM.
#[must_use]
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[..3] == UTF8_BOM
}

/// Detects the text encoding of the given input source.
///
/// Supports detection of UTF-8 (with or without BOM), UTF-16LE and UTF-16BE.
/// By default, UTF-8 is assumed if no BOM is present.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> Encoding {
    if has_utf8_bom(bytes) {
        return Encoding::Utf8;
    }
    if bytes.len() >= 2 {
        if bytes[..2] == UTF16_BOM_LE {
            return Encoding::Utf16Le;
        }
        if bytes[..2] == UTF16_BOM_BE {
            return Encoding::Utf16Be;
        }
    }
    Encoding::Utf8
}

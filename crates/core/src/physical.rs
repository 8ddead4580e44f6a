// crates/core/src/physical.rs
use crate::encoding::{Encoding, detect_encoding};
use crate::result::CountResult;
use crate::source::SourceText;

/// Counts the number of hard physical lines in the specified source text.
///
/// The count includes all physical lines, including blank lines and
/// comments, not only physical lines of code. The result is therefore
/// independent of any programming language. If the input is non-empty and
/// does not end with a line break, the final unterminated line is counted.
#[must_use]
pub fn count_physical_lines(source: &SourceText) -> CountResult {
    count_physical_bytes(source.as_bytes())
}

pub(crate) fn count_physical_bytes(bytes: &[u8]) -> CountResult {
    if bytes.is_empty() {
        return CountResult::success(0);
    }
    if bytes.len() > u32::MAX as usize {
        return CountResult::failure(
            crate::result::ErrorKind::InputTooLarge,
            "Input exceeds maximum supported size",
        );
    }

    let mut count: u64 = 0;
    match detect_encoding(bytes) {
        Encoding::Utf8 => {
            for &byte in bytes {
                if byte == b'\n' {
                    count += 1;
                }
            }
            // Account for the last line if not ending with a newline
            if bytes[bytes.len() - 1] != b'\n' {
                count += 1;
            }
        }
        encoding => {
            let little_endian = encoding == Encoding::Utf16Le;
            let (nl0, nl1) = if little_endian { (0x0a, 0x00) } else { (0x00, 0x0a) };
            let mut offset = 2; // skip the BOM
            while offset + 1 < bytes.len() {
                if bytes[offset] == nl0 && bytes[offset + 1] == nl1 {
                    count += 1;
                }
                offset += 2;
            }
            // Account for the last line if not ending with a newline.
            // An input consisting of only the BOM yields zero.
            if bytes.len() > 2
                && (bytes[bytes.len() - 2] != nl0 || bytes[bytes.len() - 1] != nl1)
            {
                count += 1;
            }
        }
    }
    CountResult::success(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: impl Into<SourceText>) -> u64 {
        let result = count_physical_lines(&text.into());
        assert!(result.state.ok);
        result.count
    }

    #[test]
    fn empty_input_counts_zero() {
        assert_eq!(count(""), 0);
    }

    #[test]
    fn counts_terminated_lines() {
        assert_eq!(count("one\ntwo\nthree\n"), 3);
    }

    #[test]
    fn counts_final_unterminated_line() {
        assert_eq!(count("one\ntwo\nthree"), 3);
        assert_eq!(count("no newline at all"), 1);
    }

    #[test]
    fn crlf_line_breaks_count_once() {
        assert_eq!(count("one\r\ntwo\r\n"), 2);
    }

    #[test]
    fn utf16le_lines() {
        // BOM + "a\nb\n" in UTF-16LE
        let bytes = vec![0xff, 0xfe, b'a', 0x00, 0x0a, 0x00, b'b', 0x00, 0x0a, 0x00];
        assert_eq!(count(SourceText::new(bytes)), 2);
    }

    #[test]
    fn utf16be_unterminated_line() {
        // BOM + "a\nb" in UTF-16BE
        let bytes = vec![0xfe, 0xff, 0x00, b'a', 0x00, 0x0a, 0x00, b'b'];
        assert_eq!(count(SourceText::new(bytes)), 2);
    }

    #[test]
    fn utf16_bom_only_counts_zero() {
        assert_eq!(count(SourceText::new(vec![0xff, 0xfe])), 0);
        assert_eq!(count(SourceText::new(vec![0xfe, 0xff])), 0);
    }
}

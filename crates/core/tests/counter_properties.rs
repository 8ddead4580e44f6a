//! Property tests pinning the counters against simple reference models.

use proptest::prelude::*;

use reckon_core::{SourceText, count_characters, count_physical_lines, count_words};

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('z'),
            Just('0'),
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\u{e9}'),
            Just('\u{20ac}'),
            Just('\u{1f600}'),
        ],
        0..200,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn physical_lines_match_the_newline_model(text in text_strategy()) {
        let expected = {
            let newlines = text.bytes().filter(|&b| b == b'\n').count() as u64;
            if text.is_empty() {
                0
            } else if text.as_bytes()[text.len() - 1] == b'\n' {
                newlines
            } else {
                newlines + 1
            }
        };
        let result = count_physical_lines(&SourceText::from(text.as_str()));
        prop_assert!(result.state.ok);
        prop_assert_eq!(result.count, expected);
    }

    #[test]
    fn words_match_the_whitespace_split_model(text in text_strategy()) {
        // The byte-wise scan agrees with an ASCII whitespace split as long
        // as the input contains no NUL or vertical-tab bytes.
        let expected = text.split_ascii_whitespace().count() as u64;
        let result = count_words(&SourceText::from(text.as_str()));
        prop_assert!(result.state.ok);
        prop_assert_eq!(result.count, expected);
    }

    #[test]
    fn characters_match_code_points_in_utf8(text in text_strategy()) {
        let expected = text.chars().count() as u64;
        let result = count_characters(&SourceText::from(text.as_str()));
        prop_assert!(result.state.ok);
        prop_assert_eq!(result.count, expected);
    }

    #[test]
    fn characters_match_code_points_in_utf16(text in text_strategy()) {
        let expected = text.chars().count() as u64;
        for little_endian in [true, false] {
            let mut bytes = if little_endian {
                vec![0xff, 0xfe]
            } else {
                vec![0xfe, 0xff]
            };
            for unit in text.encode_utf16() {
                let pair = if little_endian {
                    unit.to_le_bytes()
                } else {
                    unit.to_be_bytes()
                };
                bytes.extend_from_slice(&pair);
            }
            let result = count_characters(&SourceText::new(bytes));
            prop_assert!(result.state.ok);
            prop_assert_eq!(result.count, expected);
        }
    }
}

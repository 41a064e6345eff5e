//! Property tests for the delimiter-separated field splitter.

use proptest::prelude::*;

use pang_installer::{field_at, Field, ManifestBuffer};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/-]{1,12}").unwrap()
}

/// Lines that may be empty anywhere but last, where a blank would read as a trailing delimiter.
fn lines() -> impl Strategy<Value = Vec<String>> {
    let inner = proptest::string::string_regex("[A-Za-z0-9._/-]{0,12}").unwrap();
    (proptest::collection::vec(inner, 0..7), token()).prop_map(|(mut lines, last)| {
        lines.push(last);
        lines
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the splitter never panics, whatever the buffer, index or delimiter.
    #[test]
    fn property_field_at_never_panics(
        buffer in "(?s).{0,128}",
        index in 0usize..64,
        delimiter in any::<char>(),
    ) {
        let _ = field_at(&buffer, index, delimiter);
    }

    /// PROPERTY: splitting inverts joining, and the field after the last one is the end marker.
    #[test]
    fn property_split_inverts_join(tokens in lines()) {
        let joined = tokens.join("\n");

        for (i, expected) in tokens.iter().enumerate() {
            prop_assert_eq!(field_at(&joined, i, '\n').unwrap(), Field::Value(expected.clone()));
        }
        prop_assert_eq!(field_at(&joined, tokens.len(), '\n').unwrap(), Field::End);
    }

    /// PROPERTY: a trailing delimiter does not add a field.
    #[test]
    fn property_trailing_delimiter_adds_nothing(
        tokens in proptest::collection::vec(token(), 1..8),
    ) {
        let with_newline = format!("{}\n", tokens.join("\n"));
        prop_assert!(field_at(&with_newline, tokens.len(), '\n').unwrap().is_end());
    }

    /// PROPERTY: every lookup past the end returns the same end marker.
    #[test]
    fn property_end_is_stable(
        tokens in proptest::collection::vec(token(), 0..6),
        extra in 0usize..32,
    ) {
        let joined = tokens.join("\n");
        let past = tokens.len() + extra;
        for _ in 0..3 {
            let field = field_at(&joined, past, '\n').unwrap();
            prop_assert!(field.is_end());
            prop_assert_eq!(field.as_str(), pang_installer::END_OF_DATA);
        }
    }

    /// PROPERTY: a returned field never contains the delimiter.
    #[test]
    fn property_fields_exclude_delimiter(
        buffer in "[a-c/]{0,64}",
        index in 0usize..16,
    ) {
        let field = field_at(&buffer, index, '/').unwrap();
        prop_assert!(!field.as_str().contains('/'));
    }

    /// PROPERTY: manifest entries are the newline fields of the manifest text.
    #[test]
    fn property_manifest_entries_match_lines(tokens in lines()) {
        let manifest = ManifestBuffer::from_text(tokens.join("\n"));
        for (i, expected) in tokens.iter().enumerate() {
            let entry = manifest.entry(i).unwrap();
            prop_assert_eq!(entry.as_str(), expected.as_str());
        }
        prop_assert!(manifest.entry(tokens.len()).unwrap().is_empty());
    }
}

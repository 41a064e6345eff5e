//! Property tests for manifest entry validation.

use proptest::prelude::*;

use pang_installer::EntryPath;

fn normal_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,10}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics.
    #[test]
    fn property_entry_validation_never_panics(entry in "(?s).{0,128}") {
        let _ = EntryPath::new(&entry);
    }

    /// PROPERTY: plain relative paths are accepted unchanged.
    #[test]
    fn property_relative_paths_accepted(
        parts in proptest::collection::vec(normal_segment(), 1..5),
    ) {
        let entry = parts.join("/");
        let path = EntryPath::new(&entry).unwrap();
        prop_assert_eq!(path.as_str(), entry.as_str());
    }

    /// PROPERTY: a `..` segment anywhere is rejected.
    #[test]
    fn property_traversal_rejected(
        before in proptest::collection::vec(normal_segment(), 0..3),
        after in proptest::collection::vec(normal_segment(), 0..3),
    ) {
        let mut parts = before;
        parts.push("..".to_string());
        parts.extend(after);
        prop_assert!(EntryPath::new(&parts.join("/")).is_err());
    }
}

//! Property tests for the invisible character cleaner.

use proptest::prelude::*;

use assetmap::clean_text;
use assetmap::domain::services::{is_invisible, INVISIBLE_CHARS};

fn invisible() -> impl Strategy<Value = char> {
    proptest::sample::select(INVISIBLE_CHARS.iter().map(|(c, _)| *c).collect::<Vec<_>>())
}

fn mixed_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![any::<char>(), invisible()], 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: cleaning twice equals cleaning once.
    #[test]
    fn property_clean_is_idempotent(input in mixed_text()) {
        let (once, _) = clean_text(&input);
        let (twice, report) = clean_text(&once);
        prop_assert_eq!(&*once, &*twice);
        prop_assert!(report.is_clean());
    }

    /// PROPERTY: text without invisible characters comes back unchanged.
    #[test]
    fn property_clean_text_is_byte_identical(
        input in "\\PC*".prop_filter("no invisible chars", |s| !s.chars().any(is_invisible))
    ) {
        let (output, report) = clean_text(&input);
        prop_assert_eq!(output.as_bytes(), input.as_bytes());
        prop_assert_eq!(report.total(), 0);
    }

    /// PROPERTY: every invisible character becomes one space; nothing else moves.
    #[test]
    fn property_clean_replaces_in_place(input in mixed_text()) {
        let (output, report) = clean_text(&input);
        let expected_hits = input.chars().filter(|c| is_invisible(*c)).count();
        prop_assert_eq!(report.total(), expected_hits);
        prop_assert_eq!(output.chars().count(), input.chars().count());
        for (before, after) in input.chars().zip(output.chars()) {
            if is_invisible(before) {
                prop_assert_eq!(after, ' ');
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}

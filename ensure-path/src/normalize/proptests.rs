//! Property-based tests for path normalization.
//!
//! The normalize module already has quick property tests for the basic
//! guarantees. This module runs many more cases over arbitrary entries and
//! substrings, and checks ordering and report consistency.

use super::{normalize, EntryPlacement, NormalizeOptions, Normalizer, DELIMITER};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[a-d/._ -]{1,6}",
    ]
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..12)
}

fn options_strategy() -> impl Strategy<Value = NormalizeOptions> {
    (
        "[a-d/]{0,3}",
        any::<bool>(),
        any::<bool>(),
        prop::option::of("[a-d/]{0,2}"),
    )
        .prop_map(|(entry, ensure_first, remove_empty, remove_matching)| {
            NormalizeOptions::new(entry)
                .with_ensure_first(ensure_first)
                .with_remove_empty(remove_empty)
                .with_remove_matching(remove_matching)
        })
}

/// Segments other than the entry that the removal filters keep.
fn expected_others<'a>(path: &'a str, options: &NormalizeOptions) -> Vec<&'a str> {
    path.split(DELIMITER)
        .filter(|s| *s != options.entry())
        .filter(|s| !(options.remove_empty() && s.trim().is_empty()))
        .filter(|s| options.remove_matching().map_or(true, |m| !s.contains(m)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The entry appears exactly once for any entry and any options
    #[test]
    fn entry_exactly_once(segments in path_strategy(), options in options_strategy()) {
        let output = normalize(&segments.join(DELIMITER), &options);
        let count = output.split(DELIMITER).filter(|s| *s == options.entry()).count();
        prop_assert_eq!(count, 1);
    }

    // Non-entry segments keep their relative order and filtered ones never return
    #[test]
    fn other_segments_keep_order(segments in path_strategy(), options in options_strategy()) {
        let path = segments.join(DELIMITER);
        let output = normalize(&path, &options);
        let others: Vec<&str> = output
            .split(DELIMITER)
            .filter(|s| *s != options.entry())
            .collect();
        prop_assert_eq!(others, expected_others(&path, &options));
    }

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(segments in path_strategy(), options in options_strategy()) {
        let once = normalize(&segments.join(DELIMITER), &options);
        let twice = normalize(&once, &options);
        prop_assert_eq!(once, twice);
    }

    // Presence-only mode never touches a path that already contains the
    // entry once and nothing removable
    #[test]
    fn presence_mode_noop_when_clean(segments in path_strategy(), entry in "[a-d/]{1,3}") {
        let options = NormalizeOptions::new(entry.clone()).with_ensure_first(false);
        let mut segments: Vec<String> = segments.into_iter().filter(|s| *s != entry).collect();
        segments.push(entry);
        let path = segments.join(DELIMITER);
        prop_assert_eq!(normalize(&path, &options), path);
    }

    // The report's removal count accounts for every input segment
    #[test]
    fn report_counts_balance(segments in path_strategy(), options in options_strategy()) {
        let path = segments.join(DELIMITER);
        let result = Normalizer::new(&options).run(&path);
        let input_len = path.split(DELIMITER).count();
        let output_len = result.output.split(DELIMITER).count();
        // Every input segment is either in the output or removed; the entry
        // is counted once more when it was inserted from nowhere.
        let inserted = usize::from(result.placement == EntryPlacement::Inserted);
        prop_assert_eq!(input_len - result.removed + inserted, output_len);
    }
}

//! Property tests for fixture diffs.

use golden_fixtures::{DiffKind, Fixtures};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn fixture_map() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(
        "[a-c]{1,2}(/[a-c]{1,2})?\\.txt",
        prop::collection::vec(any::<u8>(), 0..8),
        0..8,
    )
}

fn to_fixtures(map: &BTreeMap<String, Vec<u8>>) -> Fixtures {
    let mut fixtures = Fixtures::new();
    for (path, content) in map {
        fixtures.add(content.clone(), &[path]).unwrap();
    }
    fixtures
}

proptest! {
    #[test]
    fn diff_with_self_is_empty(map in fixture_map()) {
        let fixtures = to_fixtures(&map);
        prop_assert!(fixtures.diff(&fixtures).is_empty());
    }

    #[test]
    fn diff_is_sorted_and_unique(a in fixture_map(), b in fixture_map()) {
        let diff = to_fixtures(&a).diff(&to_fixtures(&b));
        let paths = diff.paths();
        prop_assert!(paths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn diff_classifies_every_path(a in fixture_map(), b in fixture_map()) {
        let actual = to_fixtures(&a);
        let expected = to_fixtures(&b);
        let diff = actual.diff(&expected);

        for entry in &diff {
            match entry.kind {
                DiffKind::Missing => {
                    prop_assert!(a.contains_key(&entry.path) && !b.contains_key(&entry.path));
                }
                DiffKind::Unexpected => {
                    prop_assert!(!a.contains_key(&entry.path) && b.contains_key(&entry.path));
                }
                DiffKind::Changed => {
                    prop_assert_ne!(a.get(&entry.path), b.get(&entry.path));
                    prop_assert_eq!(entry.actual.as_ref(), a.get(&entry.path));
                    prop_assert_eq!(entry.expected.as_ref(), b.get(&entry.path));
                }
            }
        }

        let differing = a
            .keys()
            .chain(b.keys())
            .filter(|path| a.get(*path) != b.get(*path))
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        prop_assert_eq!(diff.len(), differing);
    }

    #[test]
    fn disjoint_sets_have_no_changed_entries(a in fixture_map(), b in fixture_map()) {
        let a: BTreeMap<String, Vec<u8>> = a.into_iter().map(|(k, v)| (format!("x/{k}"), v)).collect();
        let b: BTreeMap<String, Vec<u8>> = b.into_iter().map(|(k, v)| (format!("y/{k}"), v)).collect();
        let diff = to_fixtures(&a).diff(&to_fixtures(&b));
        prop_assert_eq!(diff.count(DiffKind::Missing), a.len());
        prop_assert_eq!(diff.count(DiffKind::Unexpected), b.len());
        prop_assert_eq!(diff.count(DiffKind::Changed), 0);
    }

    #[test]
    fn reversed_diff_swaps_missing_and_unexpected(a in fixture_map(), b in fixture_map()) {
        let x = to_fixtures(&a);
        let y = to_fixtures(&b);
        let forward = x.diff(&y);
        let backward = y.diff(&x);
        prop_assert_eq!(forward.count(DiffKind::Missing), backward.count(DiffKind::Unexpected));
        prop_assert_eq!(forward.count(DiffKind::Changed), backward.count(DiffKind::Changed));
    }

    #[test]
    fn without_unexpected_keeps_the_rest(a in fixture_map(), b in fixture_map()) {
        let diff = to_fixtures(&a).diff(&to_fixtures(&b));
        let kept = diff.count(DiffKind::Missing) + diff.count(DiffKind::Changed);
        let filtered = diff.without_unexpected();
        prop_assert_eq!(filtered.len(), kept);
        prop_assert_eq!(filtered.count(DiffKind::Unexpected), 0);
    }
}

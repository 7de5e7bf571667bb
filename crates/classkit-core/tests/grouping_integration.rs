//! Integration tests for random grouping.

use classkit_core::grouping::effective_group_size;
use classkit_core::{read_label_file, GroupMethod, Grouper};
use proptest::prelude::*;

#[test]
fn test_group_from_imported_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("class.txt");
    std::fs::write(&path, "Amy, Ben, Cleo\nDan\nEve,\n\nFay\nGus\n").unwrap();

    let participants = read_label_file(&path).unwrap();
    assert_eq!(participants.len(), 7);

    let mut grouper = Grouper::seeded(9);
    grouper
        .group(participants, GroupMethod::ByGroupSize, 3)
        .unwrap();
    assert_eq!(grouper.latest().sizes(), vec![3, 3, 1]);

    let text = grouper.latest().to_clipboard_text();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Group 1: "));
}

#[test]
fn test_regrouping_replaces_result() {
    let mut grouper = Grouper::seeded(10);
    grouper.group_text("a,b,c,d", GroupMethod::ByGroupCount, 2).unwrap();
    assert_eq!(grouper.latest().len(), 2);
    grouper.group_text("a,b,c,d", GroupMethod::ByGroupCount, 4).unwrap();
    assert_eq!(grouper.latest().len(), 4);
}

fn participants() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet so duplicates show up.
    prop::collection::vec("[a-e]{1,2}", 1..40)
}

proptest! {
    #[test]
    fn grouping_is_a_partition(
        seed in any::<u64>(),
        people in participants(),
        by_count in any::<bool>(),
        value in 1usize..12,
    ) {
        let method = if by_count { GroupMethod::ByGroupCount } else { GroupMethod::ByGroupSize };
        let mut grouper = Grouper::seeded(seed);
        grouper.group(people.clone(), method, value).unwrap();

        let groups = grouper.latest();
        let size = effective_group_size(people.len(), method, value).unwrap();
        prop_assert_eq!(groups.len(), people.len().div_ceil(size));
        prop_assert_eq!(groups.member_count(), people.len());

        let sizes = groups.sizes();
        let (last, rest) = sizes.split_last().unwrap();
        prop_assert!(rest.iter().all(|&s| s == size));
        prop_assert!(*last >= 1 && *last <= size);

        let mut got: Vec<String> = groups.groups().concat();
        let mut want = people;
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn group_count_never_exceeds_request(people in participants(), value in 1usize..12) {
        let mut grouper = Grouper::seeded(0);
        grouper.group(people, GroupMethod::ByGroupCount, value).unwrap();
        prop_assert!(grouper.latest().len() <= value);
    }
}

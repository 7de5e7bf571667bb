//! Integration tests for drawing without replacement.

use std::collections::HashSet;

use classkit_core::{parse_labels, DrawSource, Drawer, Entry, Event};
use proptest::prelude::*;

#[test]
fn test_classroom_draw_workflow() {
    let mut drawer = Drawer::seeded(2024);
    let names = parse_labels("Amy\nBen\nCleo\nDan\nEve\nFay\nGus");
    drawer.initialize(DrawSource::Labels(names.clone())).unwrap();

    // Rounds of three: the last round only gets the one leftover.
    let mut batches = Vec::new();
    while let Some(Event::EntriesDrawn { batch, .. }) = drawer.draw(3) {
        batches.push(batch);
    }
    let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    // History is the concatenation of batches in draw order.
    let concatenated: Vec<Entry> = batches.concat();
    assert_eq!(drawer.history(), concatenated.as_slice());

    let mut drawn: Vec<String> = drawer.history().iter().map(Entry::to_string).collect();
    let mut expected = names;
    drawn.sort();
    expected.sort();
    assert_eq!(drawn, expected);
}

#[test]
fn test_reset_then_reinitialize() {
    let mut drawer = Drawer::seeded(1);
    drawer.initialize(DrawSource::Count(3)).unwrap();
    drawer.draw(2).unwrap();
    drawer.reset().unwrap();
    assert!(drawer.draw(1).is_none());

    drawer.initialize(DrawSource::Count(3)).unwrap();
    assert_eq!(drawer.remaining(), 3);
    assert!(drawer.history().is_empty());
}

proptest! {
    #[test]
    fn pool_and_history_always_partition(
        seed in any::<u64>(),
        total in 1u32..60,
        requests in prop::collection::vec(0usize..10, 0..20),
    ) {
        let mut drawer = Drawer::seeded(seed);
        drawer.initialize(DrawSource::Count(total)).unwrap();

        for k in requests {
            let before = drawer.remaining();
            let event = drawer.draw(k);
            let expected = k.min(before);
            if expected == 0 {
                prop_assert!(event.is_none());
            }
            prop_assert_eq!(drawer.remaining(), before - expected);

            let pool: HashSet<_> = drawer.pool().iter().cloned().collect();
            let history: HashSet<_> = drawer.history().iter().cloned().collect();
            prop_assert!(pool.is_disjoint(&history));
            prop_assert_eq!(pool.len() + history.len(), total as usize);
            prop_assert_eq!(history.len(), drawer.history().len());
        }
    }

    #[test]
    fn exhausting_draws_visit_every_entry_once(seed in any::<u64>(), total in 1u32..80, k in 1usize..12) {
        let mut drawer = Drawer::seeded(seed);
        drawer.initialize(DrawSource::Count(total)).unwrap();
        while drawer.draw(k).is_some() {}

        let mut seen: Vec<u32> = drawer
            .history()
            .iter()
            .filter_map(|e| match e {
                Entry::Number(n) => Some(*n),
                Entry::Label(_) => None,
            })
            .collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (1..=total).collect::<Vec<_>>());
    }
}

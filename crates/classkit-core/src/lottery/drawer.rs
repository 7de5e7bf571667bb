//! Drawer state machine.
//!
//! ## Usage
//!
//! ```ignore
//! let mut drawer = Drawer::new();
//! drawer.initialize(DrawSource::Count(30));
//! drawer.draw(3); // Returns Some(Event::EntriesDrawn) with the batch
//! ```

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

use super::entry::{Entry, PoolSource};
use crate::events::Event;

/// Input for [`Drawer::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawSource {
    /// Pool of sequential numbers `1..=n`.
    Count(u32),
    /// Pool of imported labels, in import order.
    Labels(Vec<String>),
}

/// Draws entries from a pool without replacement.
///
/// Invalid requests (empty source, zero count, exhausted pool) are no-ops
/// and return `None`, leaving pool and history untouched.
#[derive(Debug, Clone)]
pub struct Drawer<R = Mcg128Xsl64> {
    pool: Vec<Entry>,
    history: Vec<Entry>,
    last_batch: Vec<Entry>,
    source: Option<PoolSource>,
    rng: R,
}

impl Drawer<Mcg128Xsl64> {
    /// Create an empty drawer seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(Mcg128Xsl64::from_entropy())
    }

    /// Create an empty drawer with a fixed seed, for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Mcg128Xsl64::seed_from_u64(seed))
    }
}

impl Default for Drawer<Mcg128Xsl64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Drawer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            pool: Vec::new(),
            history: Vec::new(),
            last_batch: Vec::new(),
            source: None,
            rng,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Entries not yet drawn, in their original relative order.
    pub fn pool(&self) -> &[Entry] {
        &self.pool
    }

    /// Every entry drawn since the last initialize, in selection order.
    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    /// The batch produced by the most recent successful draw.
    pub fn last_batch(&self) -> &[Entry] {
        &self.last_batch
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn drawn_count(&self) -> usize {
        self.history.len()
    }

    /// Size of the pool at initialization.
    pub fn total(&self) -> usize {
        self.pool.len() + self.history.len()
    }

    pub fn source(&self) -> Option<PoolSource> {
        self.source
    }

    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the pool wholesale and clear the history.
    pub fn initialize(&mut self, source: DrawSource) -> Option<Event> {
        let (pool, kind) = match source {
            DrawSource::Count(0) => return None,
            DrawSource::Count(n) => (
                (1..=n).map(Entry::Number).collect::<Vec<_>>(),
                PoolSource::Numbers,
            ),
            DrawSource::Labels(labels) if labels.is_empty() => return None,
            DrawSource::Labels(labels) => (
                labels.into_iter().map(Entry::Label).collect::<Vec<_>>(),
                PoolSource::Labels,
            ),
        };

        self.pool = pool;
        self.history.clear();
        self.last_batch.clear();
        self.source = Some(kind);
        tracing::debug!(pool_size = self.pool.len(), source = ?kind, "lottery initialized");

        Some(Event::LotteryInitialized {
            source: kind,
            pool_size: self.pool.len(),
            at: Utc::now(),
        })
    }

    /// Draw up to `count` entries.
    ///
    /// Each step picks a uniformly random index into what is left of the
    /// pool and removes it, so every ordered selection is equally likely.
    pub fn draw(&mut self, count: usize) -> Option<Event> {
        if count == 0 || self.pool.is_empty() {
            return None;
        }

        let quota = count.min(self.pool.len());
        let mut batch = Vec::with_capacity(quota);
        for _ in 0..quota {
            let index = self.rng.gen_range(0..self.pool.len());
            batch.push(self.pool.remove(index));
        }

        self.history.extend(batch.iter().cloned());
        self.last_batch = batch.clone();
        tracing::debug!(
            requested = count,
            drawn = quota,
            remaining = self.pool.len(),
            "entries drawn"
        );

        Some(Event::EntriesDrawn {
            batch,
            remaining: self.pool.len(),
            drawn_total: self.history.len(),
            at: Utc::now(),
        })
    }

    /// Clear pool and history unconditionally.
    pub fn reset(&mut self) -> Option<Event> {
        self.pool.clear();
        self.history.clear();
        self.last_batch.clear();
        self.source = None;
        Some(Event::LotteryReset { at: Utc::now() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn labels(names: &[&str]) -> DrawSource {
        DrawSource::Labels(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn initialize_from_count_builds_sequential_pool() {
        let mut drawer = Drawer::seeded(1);
        assert!(drawer.initialize(DrawSource::Count(5)).is_some());
        let expected: Vec<Entry> = (1..=5).map(Entry::Number).collect();
        assert_eq!(drawer.pool(), expected.as_slice());
        assert_eq!(drawer.source(), Some(PoolSource::Numbers));
        assert!(drawer.history().is_empty());
    }

    #[test]
    fn initialize_from_labels_keeps_order() {
        let mut drawer = Drawer::seeded(1);
        drawer.initialize(labels(&["Amy", "Ben", "Cleo"]));
        assert_eq!(
            drawer.pool(),
            &[Entry::from("Amy"), Entry::from("Ben"), Entry::from("Cleo")]
        );
        assert_eq!(drawer.source(), Some(PoolSource::Labels));
    }

    #[test]
    fn invalid_initialize_is_noop() {
        let mut drawer = Drawer::seeded(1);
        drawer.initialize(DrawSource::Count(3));
        drawer.draw(1);

        assert!(drawer.initialize(DrawSource::Count(0)).is_none());
        assert!(drawer.initialize(DrawSource::Labels(Vec::new())).is_none());
        assert_eq!(drawer.remaining(), 2);
        assert_eq!(drawer.drawn_count(), 1);
    }

    #[test]
    fn reinitialize_clears_history() {
        let mut drawer = Drawer::seeded(2);
        drawer.initialize(DrawSource::Count(4));
        drawer.draw(2);
        drawer.initialize(DrawSource::Count(6));
        assert_eq!(drawer.remaining(), 6);
        assert!(drawer.history().is_empty());
        assert!(drawer.last_batch().is_empty());
    }

    #[test]
    fn draw_moves_entries_from_pool_to_history() {
        let mut drawer = Drawer::seeded(3);
        drawer.initialize(DrawSource::Count(10));

        let event = drawer.draw(3).unwrap();
        match event {
            Event::EntriesDrawn {
                batch,
                remaining,
                drawn_total,
                ..
            } => {
                assert_eq!(batch.len(), 3);
                assert_eq!(remaining, 7);
                assert_eq!(drawn_total, 3);
                assert_eq!(batch.as_slice(), drawer.last_batch());
                for entry in &batch {
                    assert!(!drawer.pool().contains(entry));
                }
            }
            other => panic!("Expected EntriesDrawn, got {other:?}"),
        }
        assert_eq!(drawer.history(), drawer.last_batch());
    }

    #[test]
    fn overdraw_takes_only_what_remains() {
        let mut drawer = Drawer::seeded(4);
        drawer.initialize(DrawSource::Count(5));
        drawer.draw(2);
        drawer.draw(100);
        assert_eq!(drawer.last_batch().len(), 3);
        assert!(drawer.is_exhausted());
        assert_eq!(drawer.drawn_count(), 5);
    }

    #[test]
    fn zero_draw_and_empty_pool_are_noops() {
        let mut drawer = Drawer::seeded(5);
        assert!(drawer.draw(3).is_none());

        drawer.initialize(DrawSource::Count(2));
        assert!(drawer.draw(0).is_none());
        assert_eq!(drawer.remaining(), 2);
        assert!(drawer.history().is_empty());

        drawer.draw(2);
        let history = drawer.history().to_vec();
        assert!(drawer.draw(1).is_none());
        assert_eq!(drawer.history(), history.as_slice());
    }

    #[test]
    fn exhausting_visits_every_entry_once() {
        let mut drawer = Drawer::seeded(6);
        drawer.initialize(DrawSource::Count(25));
        while drawer.draw(4).is_some() {}

        let seen: HashSet<_> = drawer.history().iter().cloned().collect();
        assert_eq!(drawer.history().len(), 25);
        assert_eq!(seen.len(), 25);
        assert!(drawer.pool().is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut drawer = Drawer::seeded(7);
        drawer.initialize(DrawSource::Count(5));
        drawer.draw(2);
        assert!(drawer.reset().is_some());
        assert!(drawer.pool().is_empty());
        assert!(drawer.history().is_empty());
        assert_eq!(drawer.source(), None);
        // Reset on an empty drawer still succeeds.
        assert!(drawer.reset().is_some());
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = Drawer::seeded(42);
        let mut b = Drawer::seeded(42);
        a.initialize(DrawSource::Count(50));
        b.initialize(DrawSource::Count(50));
        a.draw(10);
        b.draw(10);
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn single_draws_are_roughly_uniform() {
        let mut drawer = Drawer::seeded(99);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            drawer.initialize(DrawSource::Count(4));
            drawer.draw(1);
            if let Some(Entry::Number(n)) = drawer.last_batch().first() {
                counts[(*n - 1) as usize] += 1;
            }
        }
        // Expect ~2000 each.
        for count in counts {
            assert!((1700..2300).contains(&count), "skewed counts: {counts:?}");
        }
    }
}

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use super::group_set::GroupSet;
use crate::events::Event;
use crate::labels::parse_labels;

/// How the grouping value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMethod {
    /// Value is the desired number of groups.
    ByGroupCount,
    /// Value is the desired number of members per group.
    ByGroupSize,
}

/// Members per group for `len` participants.
///
/// Returns `None` when there is nothing to group or `value` is zero.
pub fn effective_group_size(len: usize, method: GroupMethod, value: usize) -> Option<usize> {
    if len == 0 || value == 0 {
        return None;
    }
    Some(match method {
        GroupMethod::ByGroupCount => len.div_ceil(value),
        GroupMethod::ByGroupSize => value,
    })
}

/// Split `members` into consecutive chunks of `size`; the last may be shorter.
pub fn partition(members: Vec<String>, size: usize) -> GroupSet {
    if size == 0 {
        return GroupSet::default();
    }
    GroupSet::new(members.chunks(size).map(<[String]>::to_vec).collect())
}

/// Shuffles participants and splits them into groups.
///
/// Keeps the most recent [`GroupSet`]; each successful invocation replaces
/// it and a no-op leaves it in place.
#[derive(Debug, Clone)]
pub struct Grouper<R = Mcg128Xsl64> {
    latest: GroupSet,
    rng: R,
}

impl Grouper<Mcg128Xsl64> {
    pub fn new() -> Self {
        Self::with_rng(Mcg128Xsl64::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Mcg128Xsl64::seed_from_u64(seed))
    }
}

impl Default for Grouper<Mcg128Xsl64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Grouper<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            latest: GroupSet::default(),
            rng,
        }
    }

    pub fn latest(&self) -> &GroupSet {
        &self.latest
    }

    /// Group free text: labels split on newlines or commas.
    pub fn group_text(&mut self, text: &str, method: GroupMethod, value: usize) -> Option<Event> {
        self.group(parse_labels(text), method, value)
    }

    /// Shuffle `participants` uniformly and partition them.
    pub fn group(
        &mut self,
        participants: Vec<String>,
        method: GroupMethod,
        value: usize,
    ) -> Option<Event> {
        let participant_count = participants.len();
        let size = effective_group_size(participant_count, method, value)?;

        let mut shuffled = participants;
        // Fisher-Yates: walks from the end, swapping with a uniform index at
        // or before the cursor.
        shuffled.shuffle(&mut self.rng);

        self.latest = partition(shuffled, size);
        tracing::debug!(
            participants = participant_count,
            groups = self.latest.len(),
            group_size = size,
            method = ?method,
            "participants grouped"
        );

        Some(Event::GroupsFormed {
            participant_count,
            group_count: self.latest.len(),
            group_size: size,
            at: Utc::now(),
        })
    }

    pub fn clear(&mut self) {
        self.latest = GroupSet::default();
    }
}

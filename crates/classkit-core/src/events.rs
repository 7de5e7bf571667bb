use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lottery::{Entry, PoolSource};

/// Every state change in the toolbox produces an Event.
/// Front ends render from events; no-op commands produce none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    LotteryInitialized {
        source: PoolSource,
        pool_size: usize,
        at: DateTime<Utc>,
    },
    EntriesDrawn {
        /// Entries in selection order.
        batch: Vec<Entry>,
        remaining: usize,
        drawn_total: usize,
        at: DateTime<Utc>,
    },
    LotteryReset {
        at: DateTime<Utc>,
    },
    GroupsFormed {
        participant_count: usize,
        group_count: usize,
        group_size: usize,
        at: DateTime<Utc>,
    },
    CountdownStarted {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    CountdownResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    CountdownPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    CountdownStopped {
        at: DateTime<Utc>,
    },
    CountdownTick {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Fired exactly once per countdown completion; triggers the alarm.
    CountdownCompleted {
        at: DateTime<Utc>,
    },
    CountdownReset {
        at: DateTime<Utc>,
    },
    AlarmPlayed {
        /// 1-based index of this play within the sequence.
        play: u32,
        of: u32,
        at: DateTime<Utc>,
    },
    TimezoneChanged {
        timezone: String,
        at: DateTime<Utc>,
    },
}

//! Countdown engine.
//!
//! Like the rest of the toolbox it owns no thread: a [`Ticker`] (or any
//! other driver) calls `tick()` once per second.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused -> Running)* -> Completed
//!           \-> stop()/reset() -> Idle
//! ```
//!
//! [`Ticker`]: super::Ticker

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    Paused,
    /// Reached zero; the completion event has already been emitted.
    Completed,
}

/// The minutes/seconds the user typed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownInput {
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownInput {
    pub fn total_secs(&self) -> u64 {
        self.minutes.saturating_mul(60).saturating_add(self.seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    state: CountdownState,
    input: CountdownInput,
    remaining_secs: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            state: CountdownState::Idle,
            input: CountdownInput::default(),
            remaining_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn input(&self) -> CountdownInput {
        self.input
    }

    /// `MM:SS`; minutes are not wrapped into hours.
    pub fn format_remaining(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start from `minutes`/`seconds`. No-op if the total is zero.
    pub fn start(&mut self, minutes: u64, seconds: u64) -> Option<Event> {
        let input = CountdownInput { minutes, seconds };
        let total_secs = input.total_secs();
        if total_secs == 0 {
            return None;
        }
        self.input = input;
        self.remaining_secs = total_secs;
        self.state = CountdownState::Running;
        tracing::debug!(total_secs, "countdown started");
        Some(Event::CountdownStarted {
            total_secs,
            at: Utc::now(),
        })
    }

    /// Continue a paused countdown.
    pub fn resume(&mut self) -> Option<Event> {
        if self.state != CountdownState::Paused || self.remaining_secs == 0 {
            return None;
        }
        self.state = CountdownState::Running;
        Some(Event::CountdownResumed {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Halt ticking but keep the remaining time.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.state = CountdownState::Paused;
        Some(Event::CountdownPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Halt and drop the remaining time. The last input is kept.
    pub fn stop(&mut self) -> Option<Event> {
        if matches!(self.state, CountdownState::Idle | CountdownState::Completed) {
            return None;
        }
        self.state = CountdownState::Idle;
        self.remaining_secs = 0;
        Some(Event::CountdownStopped { at: Utc::now() })
    }

    /// Back to idle with cleared input.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = CountdownState::Idle;
        self.remaining_secs = 0;
        self.input = CountdownInput::default();
        Some(Event::CountdownReset { at: Utc::now() })
    }

    /// Advance one second.
    ///
    /// Returns `CountdownCompleted` on the tick that reaches zero, and only
    /// on that tick; later ticks return `None` until the next `start()`.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = CountdownState::Completed;
            tracing::debug!(total_secs = self.input.total_secs(), "countdown completed");
            return Some(Event::CountdownCompleted { at: Utc::now() });
        }
        Some(Event::CountdownTick {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_mm_ss(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

//! # Classkit Core Library
//!
//! Core logic for a small classroom toolbox: a timezone clock, a countdown
//! timer with an alarm, a random-draw lottery and a random-grouping tool.
//! The `classkit` CLI is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Lottery**: [`Drawer`] removes random batches from a pool without
//!   replacement and keeps the drawn history
//! - **Grouping**: [`Grouper`] shuffles participants uniformly and partitions
//!   them by group count or group size
//! - **Timer**: [`Countdown`] state machine driven by one-second `tick()`
//!   calls, a bounded [`Alarm`] sequence and a cancelable [`Ticker`]
//! - **Clock**: fixed timezone table and time/date formatting
//! - **Storage**: TOML-based preferences
//!
//! All tool state lives in memory. Invalid input to any tool command is a
//! no-op that returns `None`; only file and config boundaries return errors.

pub mod clock;
pub mod error;
pub mod events;
pub mod grouping;
pub mod labels;
pub mod lottery;
pub mod storage;
pub mod timer;

pub use clock::{Clock, TimezoneOption, TIMEZONES};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use grouping::{GroupMethod, GroupSet, Grouper};
pub use labels::{parse_labels, read_label_file};
pub use lottery::{DrawSource, Drawer, Entry, PoolSource};
pub use storage::Config;
pub use timer::{Alarm, AlarmSettings, AlarmSink, AlarmSound, Countdown, CountdownState, TickHandle, Ticker};

//! Alarm played when a countdown completes.
//!
//! The alarm is a bounded sequence: the sound plays `repeat_count` times
//! with `gap_ms` of silence after each play, then stops on its own.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::Event;

pub const DEFAULT_VOLUME: f32 = 0.3;
pub const DEFAULT_REPEAT_COUNT: u32 = 3;
pub const DEFAULT_GAP_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmSound {
    /// Sine beep with an exponential fade-out.
    Beep { frequency_hz: u32, duration_ms: u64 },
    /// User-supplied audio file; played as-is, never decoded here.
    Custom(PathBuf),
}

impl Default for AlarmSound {
    fn default() -> Self {
        AlarmSound::Beep {
            frequency_hz: 440,
            duration_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmSettings {
    volume: f32,
    pub repeat_count: u32,
    pub gap_ms: u64,
    pub sound: AlarmSound,
}

impl AlarmSettings {
    /// Build settings; `volume` is clamped like [`AlarmSettings::set_volume`].
    pub fn new(volume: f32, repeat_count: u32, gap_ms: u64, sound: AlarmSound) -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            repeat_count,
            gap_ms,
            sound,
        }
        .with_volume(volume)
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set volume, clamped to `0.0..=1.0`. NaN becomes silence.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.set_volume(volume);
        self
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            repeat_count: DEFAULT_REPEAT_COUNT,
            gap_ms: DEFAULT_GAP_MS,
            sound: AlarmSound::default(),
        }
    }
}

/// Output device for alarm plays.
///
/// `play` returns once the sound has finished, so the gap is measured from
/// the end of each play.
pub trait AlarmSink {
    fn play(&mut self, sound: &AlarmSound, volume: f32) -> Result<()>;
}

/// Tracks how many times the alarm has played in the current sequence.
#[derive(Debug, Clone)]
pub struct Alarm {
    settings: AlarmSettings,
    plays: u32,
    armed: bool,
}

impl Alarm {
    pub fn new(settings: AlarmSettings) -> Self {
        Self {
            settings,
            plays: 0,
            armed: false,
        }
    }

    pub fn settings(&self) -> &AlarmSettings {
        &self.settings
    }

    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Start a fresh sequence, discarding any in progress.
    pub fn trigger(&mut self) {
        self.plays = 0;
        self.armed = true;
    }

    /// Silence the alarm before the sequence ends.
    pub fn silence(&mut self) {
        self.armed = false;
    }

    pub fn is_finished(&self) -> bool {
        !self.armed || self.plays >= self.settings.repeat_count
    }

    /// Play once if the sequence still has plays left.
    pub fn play_next(&mut self, sink: &mut dyn AlarmSink) -> Result<Option<Event>> {
        if self.is_finished() {
            return Ok(None);
        }
        sink.play(&self.settings.sound, self.settings.volume)?;
        self.plays += 1;
        Ok(Some(Event::AlarmPlayed {
            play: self.plays,
            of: self.settings.repeat_count,
            at: Utc::now(),
        }))
    }

    /// Trigger and play the whole sequence, sleeping the gap after each play.
    pub async fn ring(&mut self, sink: &mut dyn AlarmSink) -> Result<Vec<Event>> {
        self.trigger();
        let mut events = Vec::new();
        while let Some(event) = self.play_next(sink)? {
            events.push(event);
            tokio::time::sleep(self.settings.gap()).await;
        }
        self.armed = false;
        Ok(events)
    }
}

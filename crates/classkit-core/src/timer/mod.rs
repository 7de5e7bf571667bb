mod alarm;
mod countdown;
mod ticker;

pub use alarm::{
    Alarm, AlarmSettings, AlarmSink, AlarmSound, DEFAULT_GAP_MS, DEFAULT_REPEAT_COUNT,
    DEFAULT_VOLUME,
};
pub use countdown::{format_mm_ss, Countdown, CountdownInput, CountdownState};
pub use ticker::{TickHandle, Ticker};

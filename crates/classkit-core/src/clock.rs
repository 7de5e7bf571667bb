//! Wall clock rendered in one of a fixed set of timezones.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::events::Event;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Taipei;

/// A selectable timezone with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneOption {
    #[serde(serialize_with = "serialize_tz")]
    pub tz: Tz,
    pub label: &'static str,
}

impl TimezoneOption {
    pub fn id(&self) -> &'static str {
        self.tz.name()
    }
}

fn serialize_tz<S: serde::Serializer>(tz: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(tz.name())
}

pub static TIMEZONES: [TimezoneOption; 10] = [
    TimezoneOption { tz: chrono_tz::Asia::Taipei, label: "Taipei (GMT+8)" },
    TimezoneOption { tz: chrono_tz::Asia::Tokyo, label: "Tokyo (GMT+9)" },
    TimezoneOption { tz: chrono_tz::Asia::Shanghai, label: "Shanghai (GMT+8)" },
    TimezoneOption { tz: chrono_tz::Asia::Hong_Kong, label: "Hong Kong (GMT+8)" },
    TimezoneOption { tz: chrono_tz::Asia::Singapore, label: "Singapore (GMT+8)" },
    TimezoneOption { tz: chrono_tz::America::New_York, label: "New York (GMT-5)" },
    TimezoneOption { tz: chrono_tz::America::Los_Angeles, label: "Los Angeles (GMT-8)" },
    TimezoneOption { tz: chrono_tz::Europe::London, label: "London (GMT+0)" },
    TimezoneOption { tz: chrono_tz::Europe::Paris, label: "Paris (GMT+1)" },
    TimezoneOption { tz: chrono_tz::Australia::Sydney, label: "Sydney (GMT+11)" },
];

/// Look up a selectable timezone by IANA name.
pub fn find_timezone(name: &str) -> Option<&'static TimezoneOption> {
    TIMEZONES.iter().find(|option| option.id() == name)
}

#[derive(Debug, Clone)]
pub struct Clock {
    timezone: &'static TimezoneOption,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            timezone: &TIMEZONES[0],
        }
    }

    /// Clock in `name`, or `None` if it is not a selectable zone.
    pub fn with_timezone(name: &str) -> Option<Self> {
        find_timezone(name).map(|timezone| Self { timezone })
    }

    pub fn timezone(&self) -> &'static TimezoneOption {
        self.timezone
    }

    /// Switch zones. Unknown names are ignored.
    pub fn set_timezone(&mut self, name: &str) -> Option<Event> {
        let timezone = find_timezone(name)?;
        self.timezone = timezone;
        Some(Event::TimezoneChanged {
            timezone: timezone.id().to_string(),
            at: Utc::now(),
        })
    }

    /// `HH:MM:SS`, 24-hour.
    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone.tz)
            .format("%H:%M:%S")
            .to_string()
    }

    /// `YYYY/MM/DD Weekday`.
    pub fn format_date(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone.tz)
            .format("%Y/%m/%d %A")
            .to_string()
    }

    pub fn now_line(&self) -> String {
        let now = Utc::now();
        format!("{}  {}", self.format_time(now), self.format_date(now))
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

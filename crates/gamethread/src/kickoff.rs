use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use common::{GamethreadError, GamethreadResult};
use regex::Regex;

static WALL_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2})(?::(\d{2}))?\s*(?:([ap])\.?\s*m\.?)?")
        .expect("wall clock regex is valid")
});

const DISPLAY_FORMAT: &str = "%I:%M";

/// Kickoff in each US zone, as 12-hour `HH:MM` without AM/PM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickoffTimes {
    pub eastern: String,
    pub central: String,
    pub mountain: String,
    pub pacific: String,
}

impl KickoffTimes {
    /// Shifts an Eastern kickoff back by whole hours per zone. No DST or
    /// date rollover handling.
    pub fn from_eastern(time: NaiveTime) -> GamethreadResult<Self> {
        Ok(Self {
            eastern: shift_hours(time, 0)?,
            central: shift_hours(time, 1)?,
            mountain: shift_hours(time, 2)?,
            pacific: shift_hours(time, 3)?,
        })
    }
}

/// Subtracts `hours` from the hour field. Going below midnight is an error,
/// never a wrap to the previous day.
pub fn shift_hours(time: NaiveTime, hours: u32) -> GamethreadResult<String> {
    let hour = time.hour().checked_sub(hours).ok_or_else(|| {
        GamethreadError::Parse(format!(
            "kickoff {} cannot be shifted back {} hours",
            time.format("%H:%M"),
            hours
        ))
    })?;

    NaiveTime::from_hms_opt(hour, time.minute(), 0)
        .map(|t| t.format(DISPLAY_FORMAT).to_string())
        .ok_or_else(|| GamethreadError::Parse(format!("invalid shifted hour {}", hour)))
}

/// Reads a wall-clock time such as `8:00 PM`, `7:30PM ET`, `8 pm` or `20:00`.
/// The first candidate in `text` that forms a valid time wins.
pub fn parse_wall_clock(text: &str) -> GamethreadResult<NaiveTime> {
    WALL_CLOCK
        .captures_iter(text)
        .find_map(|caps| wall_clock_from(&caps))
        .ok_or_else(|| GamethreadError::Parse(format!("unrecognized kickoff time: {:?}", text)))
}

fn wall_clock_from(caps: &regex::Captures<'_>) -> Option<NaiveTime> {
    let hour: u32 = caps[1].parse().ok()?;
    let minute = caps.get(2);

    let hour = match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            if meridiem == "p" {
                hour % 12 + 12
            } else {
                hour % 12
            }
        }
        // a bare number is not a time
        None if minute.is_none() => return None,
        None => hour,
    };
    let minute: u32 = minute.map_or(Some(0), |m| m.as_str().parse().ok())?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

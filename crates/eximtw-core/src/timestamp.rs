//! Day-relative timestamps.
//!
//! Every record carries the number of seconds between midnight of the logged
//! date and the logged time, both taken as wall-clock times in a [`Zone`].
//! Across a DST change the result is the real elapsed time, so it can fall
//! outside `0..86400`.

use chrono::{NaiveDate, NaiveTime, TimeZone};
use serde::Deserialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Time zone the log's wall-clock times are read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The process-local zone (honours `TZ`).
    #[default]
    Local,
    Utc,
}

/// Seconds since midnight of `date` at `time`, or `None` if either token
/// fails to parse or the wall-clock time does not exist in `zone`.
pub fn day_offset(date: &str, time: &str, zone: Zone) -> Option<i64> {
    match zone {
        Zone::Local => offset_in(&chrono::Local, date, time),
        Zone::Utc => offset_in(&chrono::Utc, date, time),
    }
}

fn offset_in<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> Option<i64> {
    let day = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let at = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;

    // Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant.
    // A gap that starts exactly at midnight leaves 00:00 on the old offset.
    let midnight = tz.from_local_datetime(&day.and_hms_opt(0, 0, 0)?).earliest()?;
    let logged = tz.from_local_datetime(&day.and_time(at)).earliest()?;
    Some((logged - midnight).num_seconds())
}

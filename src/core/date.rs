//! Flexible date parsing
//!
//! Farbox headers hold whatever the author typed, so several layouts are
//! tried in turn. Values without an offset are read as local time.

use crate::error::{ConvertError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M %z",
    "%Y/%m/%d %H:%M:%S%.f %z",
    "%a %b %d %H:%M:%S %z %Y",
];

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
    "%Y年%m月%d日 %H:%M:%S",
    "%Y年%m月%d日 %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y年%m月%d日",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%Y%m%d",
];

/// Parse a date written in any supported layout into local time
pub fn parse_local(input: &str) -> Result<DateTime<Local>> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ConvertError::date_parse(input));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Local));
    }
    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(s, layout) {
            return Ok(dt.with_timezone(&Local));
        }
    }

    for layout in DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return localize(naive).ok_or_else(|| ConvertError::date_parse(input));
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(s, layout) {
            return date
                .and_hms_opt(0, 0, 0)
                .and_then(localize)
                .ok_or_else(|| ConvertError::date_parse(input));
        }
    }

    // Unix seconds
    if s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(dt) = s
            .parse::<i64>()
            .ok()
            .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        {
            return Ok(dt);
        }
    }

    Err(ConvertError::date_parse(input))
}

fn localize(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

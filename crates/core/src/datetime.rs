//! Date, time and duration expressions.
//!
//! Absolute values are parsed with `chrono` format layouts. Relative values use
//! a small grammar: `-` means now, `N-` means N units before now and `N+` means N
//! units after now. Durations accept Go-style unit suffixes and default to hours.

use std::sync::OnceLock;

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;

use crate::error::{Error, Result};

/// Default layout of absolute dates, e.g. `240131`.
pub const DATE_INPUT_LAYOUT: &str = "%y%m%d";
/// Default layout of times of day, e.g. `0930`.
pub const TIME_INPUT_LAYOUT: &str = "%H%M";
/// Default layout of absolute date-times, e.g. `240131 0930`.
pub const DATE_TIME_INPUT_LAYOUT: &str = "%y%m%d %H%M";

const NOW: &str = "-";

/// Parses relative date expressions against a reference moment.
///
/// Without a fixed reference the local time at parse time is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateParser {
    now: Option<NaiveDateTime>,
}

impl DateParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }

    /// `-`, `N-` or `N+` days from now.
    pub fn relative_day(&self, expression: &str) -> Result<NaiveDateTime> {
        let offset = parse_offset(expression)?;
        TimeDelta::try_days(offset)
            .and_then(|delta| self.now().checked_add_signed(delta))
            .ok_or_else(|| Error::InvalidDateExpression(expression.to_string()))
    }

    /// `-`, `N-` or `N+` weeks from now.
    pub fn relative_week(&self, expression: &str) -> Result<NaiveDateTime> {
        let offset = parse_offset(expression)?;
        TimeDelta::try_weeks(offset)
            .and_then(|delta| self.now().checked_add_signed(delta))
            .ok_or_else(|| Error::InvalidDateExpression(expression.to_string()))
    }

    /// `-` is now; `N-` and `N+` are the first day of the month N months away.
    pub fn relative_month(&self, expression: &str) -> Result<NaiveDateTime> {
        let offset = parse_offset(expression)?;
        let now = self.now();
        if expression == NOW {
            return Ok(now);
        }

        let first_of_month = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
            .ok_or_else(|| Error::InvalidDateExpression(expression.to_string()))?;
        let months = Months::new(u32::try_from(offset.unsigned_abs()).unwrap_or(u32::MAX));
        let shifted = if offset < 0 {
            first_of_month.checked_sub_months(months)
        } else {
            first_of_month.checked_add_months(months)
        };

        shifted
            .map(|date| date.and_time(NaiveTime::MIN))
            .ok_or_else(|| Error::InvalidDateExpression(expression.to_string()))
    }
}

/// Reads the day offset of `-`, `N-` or `N+`.
fn parse_offset(expression: &str) -> Result<i64> {
    if expression == NOW {
        return Ok(0);
    }

    let (raw, sign) = if let Some(raw) = expression.strip_suffix('-') {
        (raw, -1)
    } else if let Some(raw) = expression.strip_suffix('+') {
        (raw, 1)
    } else {
        return Err(Error::InvalidDateExpression(expression.to_string()));
    };

    raw.parse::<i64>()
        .map(|offset| sign * offset)
        .map_err(|_| Error::InvalidDateExpression(expression.to_string()))
}

/// Parses an absolute date or date-time.
///
/// Layouts without time fields produce midnight of the parsed day.
pub fn parse_date(expression: &str, layout: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(expression, layout).or_else(|_| {
        NaiveDate::parse_from_str(expression, layout)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|e| Error::invalid_date(expression, layout, e))
    })
}

/// Parses a time of day and places it on the calendar day of `date`.
pub fn parse_time(date: NaiveDateTime, expression: &str, layout: &str) -> Result<NaiveDateTime> {
    NaiveTime::parse_from_str(expression, layout)
        .map(|time| date.date().and_time(time))
        .map_err(|e| Error::invalid_date(expression, layout, e))
}

/// Truncates to midnight.
#[must_use]
pub fn date_only(moment: NaiveDateTime) -> NaiveDateTime {
    moment.date().and_time(NaiveTime::MIN)
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d*)?|\.\d+)(ms|h|m|s)").expect("duration pattern is valid")
    })
}

/// Parses durations such as `5h`, `7.75h`, `1h30m`, `90s` or `12.25`.
///
/// A value without a unit suffix is read as hours.
pub fn parse_duration(expression: &str) -> Result<TimeDelta> {
    let invalid = || Error::InvalidDuration(expression.to_string());

    let (negative, unsigned) = match expression.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, expression.strip_prefix('+').unwrap_or(expression)),
    };

    let with_unit = if unsigned.ends_with(['h', 'm', 's']) {
        unsigned.to_string()
    } else {
        format!("{unsigned}h")
    };

    let mut consumed = 0;
    let mut nanos = 0f64;
    for captures in duration_pattern().captures_iter(&with_unit) {
        let whole = captures.get(0).ok_or_else(invalid)?;
        if whole.start() != consumed {
            return Err(invalid());
        }
        consumed = whole.end();

        let value: f64 = captures[1].parse().map_err(|_| invalid())?;
        let unit_nanos = match &captures[2] {
            "h" => 3_600_000_000_000f64,
            "m" => 60_000_000_000f64,
            "s" => 1_000_000_000f64,
            _ => 1_000_000f64,
        };
        nanos += value * unit_nanos;
    }

    if consumed == 0 || consumed != with_unit.len() || !nanos.is_finite() || nanos > i64::MAX as f64 {
        return Err(invalid());
    }

    let nanos = nanos.round() as i64;
    Ok(TimeDelta::nanoseconds(if negative { -nanos } else { nanos }))
}

//! Tables the `tk` commands print their results with.

use chrono::{NaiveDateTime, TimeDelta};
use termkit_core::style::{Palette, Style};
use termkit_core::table::TableBuilder;

pub const INPUT_HEADER: &str = "input";
pub const VALUE_HEADER: &str = "value";

/// One parsed argument and how it was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub input: String,
    pub value: String,
}

impl Reading {
    pub fn new(input: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            value: value.into(),
        }
    }
}

/// An `input`/`value` table; values are printed in the palette's info style.
pub fn readings_table(
    readings: Vec<Reading>,
    palette: &Palette,
) -> TableBuilder<Reading, impl Fn(&Reading, &str) -> (Style, String)> {
    let value_style = palette.info.clone();
    TableBuilder::with_renderer(move |reading: &Reading, header: &str| match header {
        VALUE_HEADER => (value_style.clone(), reading.value.clone()),
        _ => (Style::plain(), reading.input.clone()),
    })
    .add_headers([INPUT_HEADER, VALUE_HEADER])
    .add_rows(readings)
}

/// Durations with their sum in the footer; negative values use the warn style.
pub fn durations_table(
    durations: Vec<(String, TimeDelta)>,
    palette: &Palette,
) -> TableBuilder<(String, TimeDelta), impl Fn(&(String, TimeDelta), &str) -> (Style, String)> {
    let total = durations
        .iter()
        .fold(TimeDelta::zero(), |sum, (_, duration)| sum + *duration);
    let total_style = sign_style(total, palette);

    let styles = palette.clone();
    TableBuilder::with_renderer(
        move |(input, duration): &(String, TimeDelta), header: &str| match header {
            VALUE_HEADER => (sign_style(*duration, &styles), format_duration(*duration)),
            _ => (Style::plain(), input.clone()),
        },
    )
    .add_headers([INPUT_HEADER, VALUE_HEADER])
    .add_rows(durations)
    .footer_cell(INPUT_HEADER, "total", Style::plain())
    .footer_cell(VALUE_HEADER, format_duration(total), total_style)
}

fn sign_style(duration: TimeDelta, palette: &Palette) -> Style {
    if duration < TimeDelta::zero() {
        palette.warn.clone()
    } else {
        palette.success.clone()
    }
}

/// `7h30m`, `-0h15m`, `12h00m`.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let sign = if duration < TimeDelta::zero() { "-" } else { "" };
    let minutes = duration.num_minutes().abs();
    format!("{sign}{}h{:02}m", minutes / 60, minutes % 60)
}

#[must_use]
pub fn format_date(moment: NaiveDateTime) -> String {
    moment.format("%Y-%m-%d (%a)").to_string()
}

#[must_use]
pub fn format_date_time(moment: NaiveDateTime) -> String {
    moment.format("%Y-%m-%d %H:%M").to_string()
}

#[must_use]
pub fn format_week(moment: NaiveDateTime) -> String {
    moment.format("%G-W%V, %Y-%m-%d (%a)").to_string()
}

#[must_use]
pub fn format_month(moment: NaiveDateTime) -> String {
    moment.format("%Y-%m").to_string()
}

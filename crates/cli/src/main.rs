use std::io::{Stdout, Write};
use std::process::ExitCode;

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use log::debug;
use serde_json::Value;
use termkit_cli::candidates::LineList;
use termkit_cli::cli_args::{Args, Command};
use termkit_cli::console::Console;
use termkit_cli::report::{self, Reading};
use termkit_cli::select::Selector;
use termkit_core::args::{choose_item, ArgOptions, Collector};
use termkit_core::config::{self, Settings};
use termkit_core::error::Result;
use termkit_core::file_handling;
use termkit_core::table::{from_object, from_objects};

/// Loads settings and applies the command-line overrides.
fn initialize_settings(args: &Args) -> Result<Settings> {
    let settings_path = config::get_settings_path(args.config.as_deref());
    debug!("Settings path: `{settings_path}`");

    let mut settings = file_handling::load_settings(&settings_path)?;
    if args.debug {
        settings.debug = true;
    }
    if args.no_color {
        settings.colors = false;
    }
    Ok(settings)
}

fn print_table(
    console: &mut Console<Stdout>,
    settings: &Settings,
    path: &str,
    hide_headers: bool,
    indent: Option<String>,
) -> Result<()> {
    let data: Value = file_handling::read_data_file(path)?;
    let builder = match &data {
        Value::Array(items) => from_objects(items),
        other => from_object(other),
    };

    let mut builder = builder
        .with_config(settings.table_config())
        .hide_headers(hide_headers);
    if let Some(indent) = indent {
        builder = builder.indentation(indent);
    }
    console.table(&builder)
}

fn print_date(console: &mut Console<Stdout>, settings: &Settings, args: Vec<String>) -> Result<()> {
    let collector = Collector::from_settings(args, settings);
    let mut batch = collector.batch();

    let now = now();
    let date = batch.get_date(0, ArgOptions::with_default(now));
    let date_time = (collector.count() > 1).then(|| batch.get_date_time(0, 1, ArgOptions::default()));
    batch.finish()?;

    let input = collector.args().join(" ");
    let value = match date_time {
        Some(date_time) => report::format_date_time(date_time),
        None => report::format_date(date),
    };

    let palette = console.current_palette().clone();
    console.table(&report::readings_table(vec![Reading::new(input, value)], &palette))
}

fn print_period(
    console: &mut Console<Stdout>,
    settings: &Settings,
    arg: Option<String>,
    month: bool,
) -> Result<()> {
    let collector = Collector::from_settings(arg, settings);
    let options = ArgOptions::with_default(now());

    let (start, value) = if month {
        let start = collector.get_month(0, options)?;
        (start, report::format_month(start))
    } else {
        let start = collector.get_week(0, options)?;
        (start, report::format_week(start))
    };
    debug!("Period starts at {start}");

    let input = collector.args().first().cloned().unwrap_or_default();
    let palette = console.current_palette().clone();
    console.table(&report::readings_table(vec![Reading::new(input, value)], &palette))
}

fn print_durations(
    console: &mut Console<Stdout>,
    settings: &Settings,
    args: Vec<String>,
) -> Result<()> {
    let collector = Collector::from_settings(args, settings);
    let mut batch = collector.batch();
    batch.validate(1);

    let durations: Vec<_> = (0..collector.count())
        .map(|index| {
            let duration = batch.get_duration(index, ArgOptions::default());
            (collector.args()[index].clone(), duration)
        })
        .collect();
    batch.finish()?;

    let total_minutes: i64 = durations.iter().map(|(_, d)| d.num_minutes()).sum();
    let palette = console.current_palette().clone();
    console.table(&report::durations_table(durations, &palette))?;
    console.debug(format!("{total_minutes} minutes\n"))?;
    console.print_conditional(total_minutes, format!("{:.2}h\n", total_minutes as f64 / 60.0))
}

fn pick_line(console: &mut Console<Stdout>, path: &str, query: Option<String>) -> Result<()> {
    let lines = LineList::new(file_handling::read_lines(path)?);
    let selector = Selector::new();

    let picked: String = match query {
        Some(query) => {
            Collector::new([query]).get_list_item(0, &lines, &selector, ArgOptions::default())?
        }
        None => choose_item(&lines, &selector, "choose item:")?,
    };
    debug!("Picked `{picked}`");

    console.success(format!("{picked}\n"))
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let settings = initialize_settings(&args)?;
    let mut console = Console::from_settings(std::io::stdout(), &settings)?;

    match args.command {
        Command::Table {
            path,
            hide_headers,
            indent,
        } => print_table(&mut console, &settings, &path, hide_headers, indent),
        Command::Date { args } => print_date(&mut console, &settings, args),
        Command::Week { arg } => print_period(&mut console, &settings, arg, false),
        Command::Month { arg } => print_period(&mut console, &settings, arg, true),
        Command::Duration { args } => print_durations(&mut console, &settings, args),
        Command::Pick { path, query } => pick_line(&mut console, &path, query),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = std::io::stdout().flush();
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

use chrono::{NaiveDateTime, TimeDelta};

use crate::args::batch::Batch;
use crate::args::list::{select_item, Chooser, ListProvider};
use crate::args::retrieve::{retrieve, Retrieval};
use crate::config::Settings;
use crate::datetime::{
    parse_date, parse_duration, parse_time, DateParser, DATE_INPUT_LAYOUT, DATE_TIME_INPUT_LAYOUT,
    TIME_INPUT_LAYOUT,
};
use crate::error::{Error, Result};

/// Per-call options of a getter.
#[derive(Debug, Clone)]
pub struct ArgOptions<T> {
    default: Option<T>,
}

impl<T> ArgOptions<T> {
    /// Returns `value` when the argument is not supplied.
    pub fn with_default(value: T) -> Self {
        Self {
            default: Some(value),
        }
    }

    pub fn into_default(self) -> Option<T> {
        self.default
    }
}

impl<T> Default for ArgOptions<T> {
    fn default() -> Self {
        Self { default: None }
    }
}

/// Positional arguments plus the layouts used to read dates from them.
#[derive(Debug, Clone)]
pub struct Collector {
    args: Vec<String>,
    date_layout: String,
    time_layout: String,
    date_time_layout: String,
    dates: DateParser,
}

impl Collector {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            date_layout: DATE_INPUT_LAYOUT.to_string(),
            time_layout: TIME_INPUT_LAYOUT.to_string(),
            date_time_layout: DATE_TIME_INPUT_LAYOUT.to_string(),
            dates: DateParser::new(),
        }
    }

    /// A collector using the layouts configured in `settings`.
    pub fn from_settings<I, S>(args: I, settings: &Settings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(args)
            .date_layout(&settings.date_layout)
            .time_layout(&settings.time_layout)
            .date_time_layout(&settings.date_time_layout)
    }

    #[must_use]
    pub fn date_layout(mut self, layout: impl Into<String>) -> Self {
        self.date_layout = layout.into();
        self
    }

    #[must_use]
    pub fn time_layout(mut self, layout: impl Into<String>) -> Self {
        self.time_layout = layout.into();
        self
    }

    #[must_use]
    pub fn date_time_layout(mut self, layout: impl Into<String>) -> Self {
        self.date_time_layout = layout.into();
        self
    }

    /// Fixes the moment relative expressions are measured from.
    #[must_use]
    pub fn now(mut self, now: NaiveDateTime) -> Self {
        self.dates = self.dates.with_now(now);
        self
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// # Errors
    ///
    /// Returns [`Error::NotEnoughArguments`] if fewer than `min_count` args were given.
    pub fn validate(&self, min_count: usize) -> Result<()> {
        if self.args.len() < min_count {
            return Err(Error::NotEnoughArguments {
                required: min_count,
                actual: self.args.len(),
            });
        }
        Ok(())
    }

    /// Starts a batch that collects failures instead of returning them.
    #[must_use]
    pub fn batch(&self) -> Batch<'_> {
        Batch::new(self)
    }

    /// Reads an argument with a caller-supplied parser chain.
    pub fn get<T>(&self, index: usize, retrieval: Retrieval<'_, T>) -> Result<T> {
        retrieve(&self.args, index, retrieval)
    }

    pub fn get_int(&self, index: usize, options: ArgOptions<i64>) -> Result<i64> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| {
                exp.parse::<i64>()
                    .map_err(|e| Error::invalid_integer(exp, e))
            })
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    pub fn get_string(&self, index: usize, options: ArgOptions<String>) -> Result<String> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| Ok(exp.to_string()))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    /// A relative day (`-`, `N-`, `N+`) or an absolute date.
    pub fn get_date(&self, index: usize, options: ArgOptions<NaiveDateTime>) -> Result<NaiveDateTime> {
        self.get(index, self.date_retrieval(options))
    }

    pub fn get_date_abs(
        &self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| parse_date(exp, &self.date_layout))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    pub fn get_date_rel(
        &self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| self.dates.relative_day(exp))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    /// A relative week (`-`, `N-`, `N+`) or an absolute date.
    pub fn get_week(&self, index: usize, options: ArgOptions<NaiveDateTime>) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| self.dates.relative_week(exp))
            .parser(|exp: &str| parse_date(exp, &self.date_layout))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    pub fn get_week_rel(
        &self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| self.dates.relative_week(exp))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    /// A relative month (`-`, `N-`, `N+`) or an absolute date.
    pub fn get_month(
        &self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| self.dates.relative_month(exp))
            .parser(|exp: &str| parse_date(exp, &self.date_layout))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    pub fn get_month_rel(
        &self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| self.dates.relative_month(exp))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    /// An absolute date-time in a single argument.
    pub fn get_date_time_abs(
        &self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| parse_date(exp, &self.date_time_layout))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    /// A date (relative or absolute) and a time of day in two arguments.
    ///
    /// The default, if any, applies to both arguments.
    pub fn get_date_time(
        &self,
        date_index: usize,
        time_index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let default = options.into_default();
        let date = self.get(date_index, self.date_retrieval(ArgOptions { default }))?;
        self.get(time_index, self.time_retrieval(date, default))
    }

    /// A relative day and a time of day in two arguments.
    pub fn get_date_time_rel(
        &self,
        date_index: usize,
        time_index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> Result<NaiveDateTime> {
        let default = options.into_default();
        let retrieval = Retrieval::new()
            .parser(|exp: &str| self.dates.relative_day(exp))
            .default_value(default);
        let date = self.get(date_index, retrieval)?;
        self.get(time_index, self.time_retrieval(date, default))
    }

    /// A duration such as `7.5h` or `90m`; a bare number means hours.
    pub fn get_duration(&self, index: usize, options: ArgOptions<TimeDelta>) -> Result<TimeDelta> {
        let retrieval = Retrieval::new()
            .parser(parse_duration)
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    /// Resolves the argument against `provider`, asking `chooser` when the
    /// expression matches several items.
    pub fn get_list_item<V>(
        &self,
        index: usize,
        provider: &dyn ListProvider<V>,
        chooser: &dyn Chooser,
        options: ArgOptions<V>,
    ) -> Result<V> {
        let retrieval = Retrieval::new()
            .parser(|exp: &str| select_item(provider, chooser, exp))
            .default_value(options.into_default());
        self.get(index, retrieval)
    }

    fn date_retrieval(&self, options: ArgOptions<NaiveDateTime>) -> Retrieval<'_, NaiveDateTime> {
        Retrieval::new()
            .parser(|exp: &str| self.dates.relative_day(exp))
            .parser(|exp: &str| parse_date(exp, &self.date_layout))
            .default_value(options.into_default())
    }

    fn time_retrieval(
        &self,
        date: NaiveDateTime,
        default: Option<NaiveDateTime>,
    ) -> Retrieval<'_, NaiveDateTime> {
        Retrieval::new()
            .parser(move |exp: &str| parse_time(date, exp, &self.time_layout))
            .default_value(default)
    }
}

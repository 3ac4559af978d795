use chrono::{NaiveDateTime, TimeDelta};
use log::debug;

use crate::args::collector::{ArgOptions, Collector};
use crate::args::list::{Chooser, ListProvider};
use crate::args::retrieve::Retrieval;
use crate::error::{Error, Result};

/// Reads many arguments and reports all failures together.
///
/// Failed getters return the type's default value and record the error.
/// Call [`Batch::finish`] once every argument has been read.
pub struct Batch<'c> {
    collector: &'c Collector,
    errors: Vec<Error>,
}

impl<'c> Batch<'c> {
    pub fn new(collector: &'c Collector) -> Self {
        Self {
            collector,
            errors: Vec::new(),
        }
    }

    fn record<T: Default>(&mut self, result: Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                debug!("Batch recorded error: {e}");
                self.errors.push(e);
                T::default()
            }
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`Error::Batch`] holding every recorded failure, in order.
    pub fn finish(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Batch(self.errors))
        }
    }

    pub fn validate(&mut self, min_count: usize) {
        let result = self.collector.validate(min_count);
        self.record(result);
    }

    pub fn get<T: Default>(&mut self, index: usize, retrieval: Retrieval<'_, T>) -> T {
        let result = self.collector.get(index, retrieval);
        self.record(result)
    }

    pub fn get_int(&mut self, index: usize, options: ArgOptions<i64>) -> i64 {
        let result = self.collector.get_int(index, options);
        self.record(result)
    }

    pub fn get_string(&mut self, index: usize, options: ArgOptions<String>) -> String {
        let result = self.collector.get_string(index, options);
        self.record(result)
    }

    pub fn get_date(&mut self, index: usize, options: ArgOptions<NaiveDateTime>) -> NaiveDateTime {
        let result = self.collector.get_date(index, options);
        self.record(result)
    }

    pub fn get_date_abs(
        &mut self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self.collector.get_date_abs(index, options);
        self.record(result)
    }

    pub fn get_date_rel(
        &mut self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self.collector.get_date_rel(index, options);
        self.record(result)
    }

    pub fn get_week(&mut self, index: usize, options: ArgOptions<NaiveDateTime>) -> NaiveDateTime {
        let result = self.collector.get_week(index, options);
        self.record(result)
    }

    pub fn get_week_rel(
        &mut self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self.collector.get_week_rel(index, options);
        self.record(result)
    }

    pub fn get_month(&mut self, index: usize, options: ArgOptions<NaiveDateTime>) -> NaiveDateTime {
        let result = self.collector.get_month(index, options);
        self.record(result)
    }

    pub fn get_month_rel(
        &mut self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self.collector.get_month_rel(index, options);
        self.record(result)
    }

    pub fn get_date_time(
        &mut self,
        date_index: usize,
        time_index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self.collector.get_date_time(date_index, time_index, options);
        self.record(result)
    }

    pub fn get_date_time_rel(
        &mut self,
        date_index: usize,
        time_index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self
            .collector
            .get_date_time_rel(date_index, time_index, options);
        self.record(result)
    }

    pub fn get_date_time_abs(
        &mut self,
        index: usize,
        options: ArgOptions<NaiveDateTime>,
    ) -> NaiveDateTime {
        let result = self.collector.get_date_time_abs(index, options);
        self.record(result)
    }

    pub fn get_duration(&mut self, index: usize, options: ArgOptions<TimeDelta>) -> TimeDelta {
        let result = self.collector.get_duration(index, options);
        self.record(result)
    }

    /// `None` when the item could not be resolved.
    pub fn get_list_item<V>(
        &mut self,
        index: usize,
        provider: &dyn ListProvider<V>,
        chooser: &dyn Chooser,
        options: ArgOptions<V>,
    ) -> Option<V> {
        let result = self
            .collector
            .get_list_item(index, provider, chooser, options)
            .map(Some);
        self.record(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_batch_finishes_cleanly() {
        let collector = Collector::new(["3", "word", "1h"]);
        let mut batch = collector.batch();
        assert_eq!(batch.get_int(0, ArgOptions::default()), 3);
        assert_eq!(batch.get_string(1, ArgOptions::default()), "word");
        assert_eq!(
            batch.get_duration(2, ArgOptions::default()),
            TimeDelta::hours(1)
        );
        assert!(!batch.has_errors());
        assert!(batch.finish().is_ok());
    }

    #[test]
    fn test_every_failure_is_recorded_in_order() {
        let collector = Collector::new(["x", "y", "z"]);
        let mut batch = collector.batch();

        assert_eq!(batch.get_int(0, ArgOptions::default()), 0);
        assert_eq!(batch.get_date_abs(1, ArgOptions::default()), NaiveDateTime::default());
        assert_eq!(batch.get_duration(2, ArgOptions::default()), TimeDelta::zero());
        assert_eq!(batch.get_string(3, ArgOptions::default()), "");
        assert_eq!(batch.errors().len(), 4);

        match batch.finish() {
            Err(Error::Batch(errors)) => {
                assert!(matches!(errors[0], Error::InvalidInteger { .. }));
                assert!(matches!(errors[1], Error::InvalidDate { .. }));
                assert!(matches!(errors[2], Error::InvalidDuration(_)));
                assert!(matches!(errors[3], Error::MissingArgument(3)));
            }
            _ => panic!("Expected a batch error"),
        }
    }

    #[test]
    fn test_validate_failure_is_recorded() {
        let collector = Collector::new(["1"]);
        let mut batch = collector.batch();
        batch.validate(2);
        assert!(matches!(
            batch.errors()[0],
            Error::NotEnoughArguments {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_batch_error_message_lists_failures() {
        let collector = Collector::new(Vec::<String>::new());
        let mut batch = collector.batch();
        batch.get_int(0, ArgOptions::default());
        batch.get_int(1, ArgOptions::default());
        let message = batch.finish().unwrap_err().to_string();
        assert_eq!(
            message,
            "batch error: [missing arg at index 0, missing arg at index 1]"
        );
    }
}

//! Source of the current date for date validation

use chrono::{Local, NaiveDate};

/// Trait for reading today's date, enabling fixed dates in tests and demos
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current calendar date. Read every time a date rule runs.
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

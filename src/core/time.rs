use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so the store stays deterministic in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock. `today` follows the local calendar, matching what the user sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

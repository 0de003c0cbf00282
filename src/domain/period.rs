use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time granularity used to bucket expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    /// Derives the bucket a date falls into for this granularity.
    pub fn bucket_for(self, date: NaiveDate) -> BucketKey {
        match self {
            Period::Daily => BucketKey::Day(date),
            Period::Weekly => {
                let iso = date.iso_week();
                BucketKey::Week {
                    week: iso.week(),
                    year: iso.year(),
                }
            }
            Period::Monthly => BucketKey::Month {
                month: (0..date.month0()).fold(Month::January, |month, _| month.succ()),
                year: date.year(),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping identifier produced by a [`Period`].
///
/// Weekly keys use the ISO-8601 week-numbering year, so late December dates can
/// belong to week 1 of the following year and early January dates to week 52 or
/// 53 of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Day(NaiveDate),
    Week { week: u32, year: i32 },
    Month { month: Month, year: i32 },
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            BucketKey::Week { week, year } => write!(f, "Week {} of {}", week, year),
            BucketKey::Month { month, year } => write!(f, "{} {:04}", month.name(), year),
        }
    }
}

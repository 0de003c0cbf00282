use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ExpenseError, Result};

/// On-disk and display format for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single spending event.
///
/// The date is kept as its persisted text. Records written by this crate always
/// carry a valid `YYYY-MM-DD` date, but a hand-edited store may not, and that
/// must surface when the date is interpreted rather than when the store loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl Expense {
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parses the stored date strictly as `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        parse_date(&self.date)
    }

    /// Case-insensitive exact comparison against a category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Parses a `YYYY-MM-DD` date, reporting failures as [`ExpenseError::InvalidDateFormat`].
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| {
        ExpenseError::InvalidDateFormat {
            date: raw.to_string(),
            source,
        }
    })
}

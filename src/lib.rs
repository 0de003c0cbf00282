#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps an append-only log of dated, categorized expenses and
//! summarizes spending by category or by day, ISO week, or month.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::services::{PeriodSummary, SummaryService};
pub use crate::core::ExpenseStore;
pub use domain::{BucketKey, Expense, Period};
pub use errors::{ExpenseError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Tracker tracing initialized.");
    });
}

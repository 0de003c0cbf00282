pub mod expense;
pub mod period;

pub use expense::{parse_date, Expense, DATE_FORMAT};
pub use period::{BucketKey, Period};

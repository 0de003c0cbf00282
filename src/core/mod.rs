pub mod expense_store;
pub mod services;
pub mod time;
pub mod utils;

pub use expense_store::ExpenseStore;
pub use time::{Clock, FixedClock, SystemClock};

pub mod summary_service;

pub use summary_service::{CategoryTotal, PeriodBucket, PeriodSummary, SummaryService};

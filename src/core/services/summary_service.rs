use std::collections::HashMap;

use crate::{
    domain::{BucketKey, Expense, Period},
    errors::Result,
};

/// Totals for one bucket of a [`PeriodSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodBucket {
    pub key: BucketKey,
    pub total: f64,
}

/// Spending grouped by time bucket, in the order each bucket was first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    buckets: Vec<PeriodBucket>,
}

impl PeriodSummary {
    pub fn iter(&self) -> impl Iterator<Item = &PeriodBucket> {
        self.buckets.iter()
    }

    pub fn get(&self, key: &BucketKey) -> Option<f64> {
        self.buckets
            .iter()
            .find(|bucket| &bucket.key == key)
            .map(|bucket| bucket.total)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|bucket| bucket.total).sum()
    }

    /// One `"{key}: {symbol}{total}"` line per bucket, totals to two decimals.
    pub fn render_lines(&self, currency_symbol: &str) -> Vec<String> {
        self.buckets
            .iter()
            .map(|bucket| format!("{}: {}{:.2}", bucket.key, currency_symbol, bucket.total))
            .collect()
    }
}

/// Total for a single category, labelled as the category was first entered.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Pure aggregation over an expense sequence.
pub struct SummaryService;

impl SummaryService {
    /// Sums expenses whose category equals `category`, ignoring case.
    pub fn total_by_category(expenses: &[Expense], category: &str) -> f64 {
        expenses
            .iter()
            .filter(|expense| expense.in_category(category))
            .map(|expense| expense.amount)
            .sum()
    }

    pub fn total_overall(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in expenses {
            let slot = *index
                .entry(expense.category.to_lowercase())
                .or_insert_with(|| {
                    totals.push(CategoryTotal {
                        category: expense.category.clone(),
                        total: 0.0,
                    });
                    totals.len() - 1
                });
            totals[slot].total += expense.amount;
        }
        totals
    }

    /// Groups spending into day, ISO week, or month buckets.
    ///
    /// Fails on the first expense whose date does not parse; no partial summary
    /// is returned.
    pub fn group_by_period(expenses: &[Expense], period: Period) -> Result<PeriodSummary> {
        let mut index: HashMap<BucketKey, usize> = HashMap::new();
        let mut buckets: Vec<PeriodBucket> = Vec::new();
        for expense in expenses {
            let key = period.bucket_for(expense.parsed_date()?);
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(PeriodBucket { key, total: 0.0 });
                buckets.len() - 1
            });
            buckets[slot].total += expense.amount;
        }
        Ok(PeriodSummary { period, buckets })
    }
}

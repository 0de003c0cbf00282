use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    core::time::{Clock, SystemClock},
    domain::Expense,
    errors::Result,
    storage::StorageBackend,
};

/// Facade that owns the in-memory expense log and its persistence backend.
///
/// Opening the store loads the persisted sequence once; every append is written
/// back in full immediately afterwards.
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl ExpenseStore {
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        Self::open_with_clock(storage, Box::new(SystemClock))
    }

    pub fn open_with_clock(storage: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Result<Self> {
        let expenses = storage.load()?;
        Ok(Self {
            expenses,
            storage,
            clock,
        })
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Appends an expense dated `date`, or today when absent, and persists the log.
    ///
    /// When the write fails the record is kept in memory and the error is
    /// returned, so the caller can tell the user it was not saved to disk.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Result<&Expense> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let expense = Expense::new(amount, category, date);
        info!(
            amount = expense.amount,
            category = %expense.category,
            date = %expense.date,
            "adding expense"
        );
        self.expenses.push(expense);
        if let Err(err) = self.save() {
            warn!(error = %err, "expense kept in memory but not persisted");
            return Err(err);
        }
        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.expenses)
    }
}

use chrono::NaiveDate;

use crate::{
    cli::{
        output,
        prompts::{Prompter, Selection},
        CliError,
    },
    core::{services::SummaryService, ExpenseStore},
    domain::{parse_date, Period},
    errors::ExpenseError,
};

const MAIN_TITLE: &str = "Personal Expense Tracker";
const MAIN_ITEMS: [&str; 3] = ["Add Expense", "View Summary", "Exit"];
const SUMMARY_TITLE: &str = "View Summary";
const SUMMARY_ITEMS: [&str; 3] = [
    "View total spending by category",
    "View total overall spending",
    "View spending over time",
];
const PERIOD_TITLE: &str = "Spending Over Time";
const PERIOD_ITEMS: [&str; 3] = ["Daily summary", "Weekly summary", "Monthly summary"];

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Outcome of handling one main-menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// One run of the menu loop over an opened expense store.
pub struct Session {
    store: ExpenseStore,
    currency_symbol: String,
}

impl Session {
    pub fn new(store: ExpenseStore, currency_symbol: impl Into<String>) -> Self {
        Self {
            store,
            currency_symbol: currency_symbol.into(),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        loop {
            if self.step(prompter)? == LoopControl::Exit {
                output::info("Exiting the program. Goodbye!");
                return Ok(());
            }
        }
    }

    fn step(&mut self, prompter: &mut dyn Prompter) -> Result<LoopControl, CliError> {
        match prompter.select(MAIN_TITLE, &MAIN_ITEMS)? {
            Selection::Chosen(0) => self.add_expense(prompter)?,
            Selection::Chosen(1) => self.view_summary(prompter)?,
            Selection::Chosen(_) | Selection::Closed => return Ok(LoopControl::Exit),
            Selection::Invalid => output::warning(INVALID_CHOICE),
        }
        output::blank_line();
        Ok(LoopControl::Continue)
    }

    fn add_expense(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let Some(raw_amount) = prompter.input("Enter the amount: $")? else {
            return Ok(());
        };
        let Some(amount) = parse_amount(&raw_amount) else {
            output::warning(format!(
                "Invalid amount `{}`. Please enter a non-negative number.",
                raw_amount.trim()
            ));
            return Ok(());
        };

        let Some(category) =
            prompter.input("Enter the category (e.g., Food, Transport, Entertainment): ")?
        else {
            return Ok(());
        };
        if category.trim().is_empty() {
            output::warning("Category cannot be empty.");
            return Ok(());
        }

        let Some(raw_date) =
            prompter.input("Enter the date (YYYY-MM-DD) or press Enter to use today's date: ")?
        else {
            return Ok(());
        };
        let date = match parse_optional_date(&raw_date) {
            Ok(date) => date,
            Err(err) => {
                output::warning(err);
                return Ok(());
            }
        };

        match self.store.add_expense(amount, category, date) {
            Ok(_) => output::success("Expense added successfully!"),
            Err(err @ ExpenseError::StorageWrite { .. }) => output::error(format!(
                "Expense recorded for this session but not saved to disk: {err}"
            )),
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn view_summary(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        if self.store.is_empty() {
            output::info("No expenses to show.");
            return Ok(());
        }

        match prompter.select(SUMMARY_TITLE, &SUMMARY_ITEMS)? {
            Selection::Chosen(0) => {
                let Some(category) = prompter.input("Enter the category: ")? else {
                    return Ok(());
                };
                let total = SummaryService::total_by_category(self.store.expenses(), &category);
                output::info(format!(
                    "Total spending on {}: {}{:.2}",
                    category, self.currency_symbol, total
                ));
            }
            Selection::Chosen(1) => {
                let total = SummaryService::total_overall(self.store.expenses());
                output::info(format!(
                    "Total overall spending: {}{:.2}",
                    self.currency_symbol, total
                ));
            }
            Selection::Chosen(_) => self.spending_over_time(prompter)?,
            Selection::Invalid => output::warning(INVALID_CHOICE),
            Selection::Closed => {}
        }
        Ok(())
    }

    fn spending_over_time(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let period = match prompter.select(PERIOD_TITLE, &PERIOD_ITEMS)? {
            Selection::Chosen(index) => Period::ALL[index.min(Period::ALL.len() - 1)],
            Selection::Invalid => {
                output::warning(INVALID_CHOICE);
                return Ok(());
            }
            Selection::Closed => return Ok(()),
        };

        match SummaryService::group_by_period(self.store.expenses(), period) {
            Ok(summary) => {
                output::blank_line();
                output::info(format!("Spending summary ({}):", summary.period));
                for line in summary.render_lines(&self.currency_symbol) {
                    output::info(line);
                }
            }
            Err(err @ ExpenseError::InvalidDateFormat { .. }) => {
                output::error(format!("Cannot summarize spending: {err}"));
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

/// Parses a user-entered amount, rejecting negatives and non-finite values.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

/// Empty input means "today"; anything else must be a valid `YYYY-MM-DD` date.
pub fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, ExpenseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_date(trimmed).map(Some)
}

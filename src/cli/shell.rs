use std::io::{self, IsTerminal};

use thiserror::Error;
use tracing::info;

use crate::{
    cli::{
        menus::Session,
        output,
        prompts::{DialoguerPrompter, ScriptPrompter},
    },
    config::ConfigManager,
    core::ExpenseStore,
    errors::ExpenseError,
    storage::JsonStorage,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// How answers reach the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// Terminal session driven by arrow-key menus.
    Interactive,
    /// Piped stdin, one answer per line.
    Script,
}

impl CliMode {
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            CliMode::Interactive
        } else {
            CliMode::Script
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new().load()?;
    if !config.ui_color_enabled {
        output::disable_color();
    }

    let store = ExpenseStore::open(Box::new(JsonStorage::new(config.resolve_data_file())))?;
    if let Some(path) = store.storage().location() {
        info!(path = %path.display(), expenses = store.len(), "expense store opened");
    }

    let mut session = Session::new(store, config.currency_symbol);
    match CliMode::detect() {
        CliMode::Interactive => session.run(&mut DialoguerPrompter::new()),
        CliMode::Script => session.run(&mut ScriptPrompter::new(io::stdin().lock())),
    }
}

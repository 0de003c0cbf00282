pub mod json_backend;

use std::path::Path;

use crate::{domain::Expense, errors::Result};

/// Abstraction over persistence backends holding the full expense sequence.
pub trait StorageBackend {
    /// Loads every persisted expense in insertion order. A store that does not
    /// exist yet loads as an empty sequence.
    fn load(&self) -> Result<Vec<Expense>>;

    /// Replaces the persisted sequence with `expenses`.
    fn save(&self, expenses: &[Expense]) -> Result<()>;

    /// Location of the backing data, when there is one.
    fn location(&self) -> Option<&Path> {
        None
    }
}

pub use json_backend::JsonStorage;

use dirs::home_dir;
use std::{fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Resolves the on-disk locations used by the tracker.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory, defaulting to `~/.expense_tracker`.
    pub fn base_dir() -> PathBuf {
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    /// Expense store used when the configuration does not name one: `expenses.json`
    /// in the working directory.
    pub fn default_data_file() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

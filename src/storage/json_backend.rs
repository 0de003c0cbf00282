use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    core::utils::ensure_dir,
    domain::Expense,
    errors::{ExpenseError, Result},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Stores the expense sequence as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Expense>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no expense store yet, starting empty");
            return Ok(Vec::new());
        }
        let data = fs::read(&self.path).map_err(|source| ExpenseError::StorageRead {
            path: self.path.clone(),
            source,
        })?;
        let expenses: Vec<Expense> =
            serde_json::from_slice(&data).map_err(|source| ExpenseError::StorageCorrupt {
                path: self.path.clone(),
                source,
            })?;
        info!(
            path = %self.path.display(),
            count = expenses.len(),
            "loaded expense store"
        );
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)
            .map_err(|err| ExpenseError::write(&self.path, io::Error::from(err)))?;
        write_replacing(&self.path, &json)
            .map_err(|source| ExpenseError::write(&self.path, source))?;
        debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "saved expense store"
        );
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Writes `data` to a sibling temp file and renames it over `path`, so a failed
/// write never truncates the previous contents.
pub(crate) fn write_replacing(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path).map_err(|err| {
        let _ = fs::remove_file(&tmp);
        err
    })
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

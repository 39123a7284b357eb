//! Trade storage backends

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::{JournalError, Trade};
use super::TradeStore;

/// Trade log kept as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "trades.json".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    /// Copy of the last log that held records which could not be decoded
    pub fn backup_path(&self) -> PathBuf {
        self.sibling_path(".corrupt")
    }

    /// Copy the raw log to `backup_path`
    fn back_up(&self) {
        let backup = self.backup_path();
        match fs::copy(&self.path, &backup) {
            Ok(_) => tracing::warn!(backup = ?backup, "Copied unreadable trade log aside"),
            Err(e) => tracing::warn!(backup = ?backup, error = %e, "Failed to back up trade log"),
        }
    }
}

impl TradeStore for JsonFileStore {
    fn load(&self) -> Vec<Trade> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Unreadable trade log, treating as empty");
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Corrupt trade log, treating as empty");
                self.back_up();
                return Vec::new();
            }
        };

        // Decode per record; unreadable entries are skipped
        let total = records.len();
        let trades: Vec<Trade> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(trade) => Some(trade),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping unreadable trade record");
                    None
                }
            })
            .collect();

        if trades.len() < total {
            self.back_up();
        }
        trades
    }

    fn save(&self, trades: &[Trade]) -> Result<(), JournalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(trades)?;

        // Atomic replace via rename
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!(count = trades.len(), path = ?self.path, "Saved trade log");
        Ok(())
    }
}

/// In-memory trade store
#[derive(Debug, Default)]
pub struct MemoryStore {
    trades: RefCell<Vec<Trade>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trades(trades: Vec<Trade>) -> Self {
        Self {
            trades: RefCell::new(trades),
        }
    }
}

impl TradeStore for MemoryStore {
    fn load(&self) -> Vec<Trade> {
        self.trades.borrow().clone()
    }

    fn save(&self, trades: &[Trade]) -> Result<(), JournalError> {
        *self.trades.borrow_mut() = trades.to_vec();
        Ok(())
    }
}

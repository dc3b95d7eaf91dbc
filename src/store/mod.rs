//! Best-score persistence.
//!
//! The engine only ever raises the stored value and never reads it mid-move.
//! Stores must be forgiving on read: a missing or unreadable record counts
//! as a best score of 0.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::StoreError;

/// Where the best score lives between sessions.
pub trait BestScoreStore {
    /// Current best score, 0 if none has been recorded.
    fn read(&self) -> u64;

    /// Replace the stored best score.
    fn write(&mut self, score: u64) -> Result<(), StoreError>;
}

/// In-process store. Nothing survives the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: u64,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing best score.
    #[must_use]
    pub fn with_best(best: u64) -> Self {
        Self { best, writes: 0 }
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BestScoreStore for MemoryStore {
    fn read(&self) -> u64 {
        self.best
    }

    fn write(&mut self, score: u64) -> Result<(), StoreError> {
        self.best = score;
        self.writes += 1;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u64,
}

/// Accepts both the record written by this crate and a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBest {
    Record(BestScoreRecord),
    Bare(u64),
}

/// Best score kept in a small JSON file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn read(&self) -> u64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return 0,
            Err(err) => {
                warn!("could not read best score from {}: {err}", self.path.display());
                return 0;
            }
        };

        match serde_json::from_str::<StoredBest>(&text) {
            Ok(StoredBest::Record(record)) => record.best_score,
            Ok(StoredBest::Bare(score)) => score,
            Err(err) => {
                warn!(
                    "ignoring malformed best score in {}: {err}",
                    self.path.display()
                );
                0
            }
        }
    }

    fn write(&mut self, score: u64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&BestScoreRecord { best_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

//! Score and preference storage
//!
//! Features:
//! - Single persisted score behind the [`ScoreSink`] seam
//! - In-memory store for tests and embedding hosts
//! - JSON file store with tmp-then-rename writes

mod error;

pub use error::PersistenceError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Where the last finished run's score goes
pub trait ScoreSink {
    /// Store the score of a finished run
    fn save_score(&mut self, score: u64) -> Result<(), PersistenceError>;

    /// Stored score, if any run has been saved
    fn load_score(&self) -> Result<Option<u64>, PersistenceError>;
}

/// Volatile score store
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    score: Option<u64>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreSink for MemoryScoreStore {
    fn save_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        self.score = Some(score);
        Ok(())
    }

    fn load_score(&self) -> Result<Option<u64>, PersistenceError> {
        Ok(self.score)
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SavedScore {
    score: u64,
}

/// Score stored as a small JSON document
#[derive(Debug, Clone)]
pub struct JsonScoreFile {
    path: PathBuf,
}

impl JsonScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreSink for JsonScoreFile {
    fn save_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        save_json(&self.path, &SavedScore { score })?;
        log::info!("Score {} saved to {}", score, self.path.display());
        Ok(())
    }

    fn load_score(&self) -> Result<Option<u64>, PersistenceError> {
        Ok(load_json::<SavedScore>(&self.path)?.map(|saved| saved.score))
    }
}

/// Read a JSON document; a missing file is `Ok(None)`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Write a JSON document through a sibling tmp file, then rename over
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(value)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.load_score().unwrap(), None);
        store.save_score(12).unwrap();
        store.save_score(7).unwrap();
        assert_eq!(store.load_score().unwrap(), Some(7));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonScoreFile::new(dir.path().join("score.json"));
        assert_eq!(store.load_score().unwrap(), None);

        store.save_score(31).unwrap();
        assert_eq!(store.load_score().unwrap(), Some(31));
        assert!(!dir.path().join("score.json.tmp").exists());
    }

    #[test]
    fn test_file_store_reports_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonScoreFile::new(&path);
        assert!(matches!(store.load_score(), Err(PersistenceError::Format(_))));
    }

    #[test]
    fn test_file_store_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonScoreFile::new(dir.path().join("missing").join("score.json"));
        assert!(matches!(store.save_score(1), Err(PersistenceError::Io(_))));
    }
}

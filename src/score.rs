use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Key-value persistence for the best score. Implementations swallow their
/// own failures: an unreadable store reads as 0.
pub trait BestScoreStore {
    fn get_best_score(&self) -> u32;
    fn set_best_score(&mut self, score: u32);
}

// Persistent storage
#[derive(Debug, Serialize, Deserialize, Default)]
struct SaveData {
    best_score: u32,
}

/// Best score kept in a JSON file that outlives the process
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

    fn read(&self) -> Result<SaveData> {
        if !self.path.exists() {
            return Ok(SaveData::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write(&self, data: &SaveData) -> Result<()> {
        let text = serde_json::to_string_pretty(data).context("Failed to encode save data")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl BestScoreStore for JsonFileStore {
    fn get_best_score(&self) -> u32 {
        match self.read() {
            Ok(data) => data.best_score,
            Err(err) => {
                warn!("Best score unavailable, assuming 0: {err:#}");
                0
            }
        }
    }

    fn set_best_score(&mut self, score: u32) {
        if let Err(err) = self.write(&SaveData { best_score: score }) {
            warn!("Could not persist best score {score}: {err:#}");
        }
    }
}

/// Best score held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn get_best_score(&self) -> u32 {
        self.best
    }

    fn set_best_score(&mut self, score: u32) {
        self.best = score;
    }
}

/// Current and best score for one player
#[derive(Debug)]
pub struct ScoreTracker<S: BestScoreStore> {
    store: S,
    score: u32,
    /// Best score as last shown to the player
    best: u32,
}

impl<S: BestScoreStore> ScoreTracker<S> {
    pub fn new(store: S) -> Self {
        let best = store.get_best_score();
        Self {
            store,
            score: 0,
            best,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// New session: score back to 0, best re-read from the store
    pub fn reset(&mut self) {
        self.score = 0;
        self.best = self.store.get_best_score();
    }

    pub fn on_food_eaten(&mut self) {
        self.score += 1;
    }

    /// Compare the final score with the persisted best and store it if it
    /// is higher. Returns true when a new best was recorded.
    pub fn on_game_over(&mut self) -> bool {
        let persisted = self.store.get_best_score();
        if self.score > persisted {
            self.store.set_best_score(self.score);
            self.best = self.score;
            info!("New best score: {}", self.score);
            true
        } else {
            self.best = persisted;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_save(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pulse_snake_{name}.json"));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_score_counts_meals() {
        let mut tracker = ScoreTracker::new(MemoryStore::new());
        for _ in 0..4 {
            tracker.on_food_eaten();
        }
        assert_eq!(tracker.score(), 4);
    }

    #[test]
    fn test_best_only_raised_when_exceeded() {
        let mut tracker = ScoreTracker::new(MemoryStore::with_best(5));
        assert_eq!(tracker.best(), 5);

        for _ in 0..3 {
            tracker.on_food_eaten();
        }
        assert!(!tracker.on_game_over());
        assert_eq!(tracker.store().get_best_score(), 5);

        tracker.reset();
        for _ in 0..7 {
            tracker.on_food_eaten();
        }
        assert!(tracker.on_game_over());
        assert_eq!(tracker.best(), 7);
        assert_eq!(tracker.store().get_best_score(), 7);
    }

    #[test]
    fn test_equal_score_is_not_a_new_best() {
        let mut tracker = ScoreTracker::new(MemoryStore::with_best(2));
        tracker.on_food_eaten();
        tracker.on_food_eaten();
        assert!(!tracker.on_game_over());
    }

    #[test]
    fn test_reset_clears_score() {
        let mut tracker = ScoreTracker::new(MemoryStore::new());
        tracker.on_food_eaten();
        tracker.reset();
        assert_eq!(tracker.score(), 0);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = temp_save("round_trip");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get_best_score(), 0);

        store.set_best_score(7);
        assert_eq!(store.get_best_score(), 7);
        // survives a fresh handle, as after a restart
        assert_eq!(JsonFileStore::new(&path).get_best_score(), 7);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let path = temp_save("corrupt");
        fs::write(&path, "best_score=lots").unwrap();
        assert_eq!(JsonFileStore::new(&path).get_best_score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_unwritable_path() {
        let dir = std::env::temp_dir().join("pulse_snake_missing_dir");
        let _ = fs::remove_dir_all(&dir);
        let mut store = JsonFileStore::new(dir.join("save.json"));
        store.set_best_score(3);
        assert_eq!(store.get_best_score(), 0);
    }
}

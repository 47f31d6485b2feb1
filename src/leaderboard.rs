//! Local top-10 leaderboard, persisted as a single JSON snapshot in
//! ~/.skyward/.
//!
//! The whole list is loaded and rewritten on every update — there is no
//! incremental diffing, and a single writer is assumed.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

use crate::utils::persistence;

/// Maximum number of entries kept.
pub const MAX_ENTRIES: usize = 10;

const LEADERBOARD_FILE: &str = "leaderboard.json";

/// One past run. Immutable once created; `id` is a unique stable key, not a
/// player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    /// Date the score was achieved, formatted %Y-%m-%d.
    pub date: String,
    pub id: u64,
}

/// The ranking itself: at most [`MAX_ENTRIES`] entries, sorted descending by
/// score, ties kept in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Insert a run scored today and re-rank.
    ///
    /// The sort is stable, so a score equal to existing entries lands after
    /// them. Anything ranked past [`MAX_ENTRIES`] is dropped.
    pub fn add(&mut self, score: u32) {
        let id = self.entries.iter().map(|e| e.id).max().map_or(1, |m| m + 1);
        self.entries.push(LeaderboardEntry {
            score,
            date: Utc::now().format("%Y-%m-%d").to_string(),
            id,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Best persisted score, 0 for an empty board.
    pub fn high_score(&self) -> u32 {
        self.entries.first().map_or(0, |e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stateless persistence service with an explicit storage location, so tests
/// can point it at a scratch file.
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    /// Store backed by the default ~/.skyward/leaderboard.json.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: persistence::save_path(LEADERBOARD_FILE)?,
        })
    }

    /// Store backed by an arbitrary file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted ranking. Absent or corrupt storage yields an empty
    /// board — never an error.
    pub fn load(&self) -> Leaderboard {
        persistence::load_json_or_default(&self.path)
    }

    /// Record a finished run: load, insert, truncate, persist, and return
    /// the updated board.
    ///
    /// A failed write is logged and otherwise ignored; the returned board
    /// still reflects the update for the current session.
    pub fn save(&self, score: u32) -> Leaderboard {
        let mut board = self.load();
        board.add(score);
        if let Err(e) = persistence::save_json(&self.path, &board) {
            log::warn!("failed to persist leaderboard to {}: {}", self.path.display(), e);
        }
        board
    }

    /// Erase all persisted entries.
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("failed to clear leaderboard at {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sorts_descending() {
        let mut board = Leaderboard::default();
        board.add(5);
        board.add(20);
        board.add(10);
        let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![20, 10, 5]);
    }

    #[test]
    fn test_add_truncates_to_capacity() {
        let mut board = Leaderboard::default();
        for s in 1..=15u32 {
            board.add(s);
        }
        assert_eq!(board.entries.len(), MAX_ENTRIES);
        assert_eq!(board.entries[0].score, 15);
        assert_eq!(board.entries.last().unwrap().score, 6);
    }

    #[test]
    fn test_tied_scores_keep_insertion_order() {
        let mut board = Leaderboard::default();
        for _ in 0..MAX_ENTRIES {
            board.add(50);
        }
        let ids_before: Vec<u64> = board.entries.iter().map(|e| e.id).collect();

        board.add(50);
        assert_eq!(board.entries.len(), MAX_ENTRIES);
        // The newest tie ranks last among equals, displacing nothing above it
        let ids_after: Vec<u64> = board.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids_after[..MAX_ENTRIES - 1], ids_before[..MAX_ENTRIES - 1]);
        assert_eq!(*ids_after.last().unwrap(), 11);
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut board = Leaderboard::default();
        board.add(3);
        board.add(1);
        board.add(2);
        let mut ids: Vec<u64> = board.entries.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_high_score() {
        let mut board = Leaderboard::default();
        assert_eq!(board.high_score(), 0);
        board.add(12);
        board.add(7);
        assert_eq!(board.high_score(), 12);
    }
}

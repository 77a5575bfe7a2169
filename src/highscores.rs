/*
highscores.rs

Copyright 2025 Hervé Quatremain

This file is part of Pixel Master.

Pixel Master is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pixel Master is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pixel Master. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the high scores.
//!
//! The main object, [`HighScores`], maintains a sorted list of the best cumulative scores.
//! A score is recorded every time the player completes a stage, so the board tracks how far
//! the best runs went.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Number of entries in the scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Cumulative score of the run.
    pub score: u32,

    /// Stage reached when the score was recorded.
    pub stage: u32,

    /// Timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Sorted list of the top scores, best first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl HighScores {
    /// Create an empty [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A null score never makes it to the board,
    /// and a score equal to an existing one is placed after it.
    pub fn add_score(&mut self, score: u32, stage: u32) -> Option<usize> {
        self.add_score_at(score, stage, SystemTime::now())
    }

    fn add_score_at(&mut self, score: u32, stage: u32, when: SystemTime) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let index: usize = self.top.iter().take_while(|s| s.score >= score).count();
        if index >= BOARD_SIZE {
            return None;
        }
        self.top.insert(index, Score { score, stage, when });
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }

    /// Replace the entries of the current run with its new cumulative score.
    ///
    /// The entries recorded at or after `run_start`, the time the run started, are dropped. The
    /// score is then added like with [`HighScores::add_score`], so it is kept only if it makes
    /// the board.
    pub fn record_run(&mut self, score: u32, stage: u32, run_start: SystemTime) -> Option<usize> {
        self.top.retain(|s| s.when < run_start);
        self.add_score(score, stage)
    }

    /// Return the best score, or None when the board is empty.
    pub fn best(&self) -> Option<u32> {
        self.top.first().map(|s| s.score)
    }

    /// Return the list of [`Score`], best first.
    pub fn get_scores(&self) -> &[Score] {
        &self.top
    }

    /// Return whether the scoreboard is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scores(board: &HighScores) -> Vec<u32> {
        board.get_scores().iter().map(|s| s.score).collect()
    }

    #[test]
    fn test_empty_board() {
        let board: HighScores = HighScores::new();
        assert!(board.is_empty());
        assert_eq!(board.best(), None);
    }

    #[test]
    fn test_sorted_insertion() {
        let mut board: HighScores = HighScores::new();
        assert_eq!(board.add_score(105, 1), Some(1));
        assert_eq!(board.add_score(300, 3), Some(1));
        assert_eq!(board.add_score(200, 2), Some(2));
        assert_eq!(board.add_score(200, 2), Some(3));
        assert_eq!(scores(&board), vec![300, 200, 200, 105]);
        assert_eq!(board.best(), Some(300));
        assert_eq!(board.get_scores()[0].stage, 3);
    }

    #[test]
    fn test_null_score_is_ignored() {
        let mut board: HighScores = HighScores::new();
        assert_eq!(board.add_score(0, 1), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_board_is_bounded() {
        let mut board: HighScores = HighScores::new();
        for s in 1..=BOARD_SIZE as u32 {
            board.add_score(s * 10, s);
        }
        assert_eq!(board.get_scores().len(), BOARD_SIZE);
        assert_eq!(board.add_score(5, 1), None);
        assert_eq!(board.add_score(10, 1), None);
        assert_eq!(board.add_score(15, 1), Some(10));
        assert_eq!(board.get_scores().len(), BOARD_SIZE);
        assert_eq!(board.get_scores()[BOARD_SIZE - 1].score, 15);
        assert_eq!(board.best(), Some(100));
    }

    #[test]
    fn test_record_run_replaces_partial_score() {
        let mut board: HighScores = HighScores::new();
        let earlier: SystemTime = SystemTime::now() - Duration::from_secs(3600);
        board.add_score_at(500, 5, earlier - Duration::from_secs(60));

        let run_start: SystemTime = earlier;
        assert_eq!(board.record_run(105, 1, run_start), Some(2));
        assert_eq!(board.record_run(215, 2, run_start), Some(2));
        assert_eq!(board.record_run(600, 3, run_start), Some(1));
        assert_eq!(scores(&board), vec![600, 500]);
    }

    #[test]
    fn test_record_run_on_a_full_board() {
        let mut board: HighScores = HighScores::new();
        let run_start: SystemTime = SystemTime::now() - Duration::from_secs(60);
        for s in 1..=BOARD_SIZE as u32 {
            board.add_score_at(s * 100, s, run_start - Duration::from_secs(s as u64));
        }
        assert_eq!(board.record_run(1050, 10, run_start), Some(1));
        assert_eq!(board.get_scores().len(), BOARD_SIZE);
        assert_eq!(board.get_scores()[BOARD_SIZE - 1].score, 200);

        // The previous entry of the run frees its slot
        assert_eq!(board.record_run(150, 11, run_start), Some(BOARD_SIZE));
        assert_eq!(board.best(), Some(1000));
        assert_eq!(scores(&board)[BOARD_SIZE - 2..], [200, 150]);

        assert_eq!(board.record_run(0, 12, run_start), None);
        assert_eq!(board.get_scores().len(), BOARD_SIZE - 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut board: HighScores = HighScores::new();
        board.add_score(105, 1);
        let json: String = serde_json::to_string(&board).unwrap();
        let back: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_scores(), board.get_scores());
    }
}

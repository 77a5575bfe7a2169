/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the whole session: the current stage, the target grid, the player's
//! canvas, the move counter, and the cumulative score.
//!
//! A stage is in progress until a paint makes the canvas identical to the target. The stage is
//! then completed: its score is added once, and further paints are ignored until the player
//! resets the stage or moves to the next one.
//!
//! The game is saved and restored through its [`SavedGame`] representation (see
//! [`crate::saver::game`]).

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::SystemTime;
use strum_macros::Display;

use crate::canvas;
use crate::config::TOTAL_STAGES;
use crate::generator;
use crate::grid::{Grid, GridError};
use crate::palette::{self, BACKGROUND, Color};
use crate::progression::{self, StageInfo};
use crate::saver::game::SavedGame;
use crate::scoring;

/// Type of errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    /// The color is not available at the current level.
    UnavailableColor(Color),

    /// The player painted a cell outside of the canvas.
    Grid(GridError),

    /// The saved stage is not part of the game.
    StageOutOfRange { stage: u32, total_stages: u32 },

    /// The saved canvas and target grids do not have the same size.
    SizeMismatch { canvas: usize, target: usize },

    /// The saved target does not have the size of the saved stage.
    WrongGridSize { expected: usize, found: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::UnavailableColor(c) => {
                write!(f, "color {c} is not available at this level")
            }
            GameError::Grid(e) => write!(f, "{e}"),
            GameError::StageOutOfRange {
                stage,
                total_stages,
            } => write!(f, "stage {stage} is not between 1 and {total_stages}"),
            GameError::SizeMismatch { canvas, target } => write!(
                f,
                "the canvas size ({canvas}) differs from the target size ({target})"
            ),
            GameError::WrongGridSize { expected, found } => {
                write!(f, "the grid size is {found} instead of {expected}")
            }
        }
    }
}

impl Error for GameError {}

impl From<GridError> for GameError {
    fn from(e: GridError) -> Self {
        GameError::Grid(e)
    }
}

/// Status of the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum StageStatus {
    #[default]
    #[strum(serialize = "in progress")]
    InProgress,

    #[strum(serialize = "completed")]
    Completed,
}

/// Result of a paint action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    /// The stage was already completed. Nothing changed.
    Ignored,

    /// The cell was painted, and the stage is still in progress.
    Painted,

    /// The cell was painted and completed the stage.
    Completed {
        /// Score added for the stage.
        stage_score: u32,
    },

    /// The cell completed a stage that was reset after being scored. The score is unchanged.
    Replayed,
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SavedGame", try_from = "SavedGame")]
pub struct Game {
    /// Current stage, starting at 1.
    stage: u32,

    /// Number of stages in a run.
    total_stages: u32,

    /// Cumulative score of the run.
    score: u32,

    /// Number of paint actions since the stage started or was reset.
    moves: u32,

    /// Player's canvas.
    canvas: Grid<Color>,

    /// Solution of the stage.
    target: Grid<Color>,

    /// Color used by the next paint action.
    selected_color: Color,

    /// Status of the current stage.
    status: StageStatus,

    /// Whether the score of the current stage was already added. Only a new stage clears it.
    scored: bool,

    /// Time the run started. Identifies the run in the high scores.
    started: SystemTime,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(TOTAL_STAGES)
    }
}

impl Game {
    /// Create a [`Game`] object and start the first stage.
    pub fn new(total_stages: u32) -> Self {
        debug_assert!(total_stages > 0, "a game needs at least one stage");
        let mut game: Game = Self {
            stage: 1,
            total_stages,
            score: 0,
            moves: 0,
            canvas: Grid::filled(0, BACKGROUND),
            target: Grid::filled(0, BACKGROUND),
            selected_color: BACKGROUND,
            status: StageStatus::InProgress,
            scored: false,
            started: SystemTime::now(),
        };
        game.begin_stage(1);
        game
    }

    /// Start the given stage with a new target and an empty canvas.
    ///
    /// The cumulative score is kept.
    ///
    /// # Errors
    ///
    /// The method returns an error if the stage is not between 1 and the number of stages.
    pub fn start_stage(&mut self, stage: u32) -> Result<(), GameError> {
        if stage == 0 || stage > self.total_stages {
            return Err(GameError::StageOutOfRange {
                stage,
                total_stages: self.total_stages,
            });
        }
        self.begin_stage(stage);
        Ok(())
    }

    fn begin_stage(&mut self, stage: u32) {
        let info: StageInfo = StageInfo::new(stage);
        debug!(
            "Start stage {stage}/{}: level {} ({}/5), grid {}x{}, {} colors",
            self.total_stages,
            info.level,
            info.position,
            info.grid_size,
            info.grid_size,
            info.palette_size
        );
        self.stage = stage;
        self.target = generator::build_target_grid(info.grid_size, stage, info.level);
        self.canvas = canvas::create_empty_canvas(info.grid_size);
        self.moves = 0;
        self.status = StageStatus::InProgress;
        self.scored = false;
        self.selected_color = palette::active_palette(info.level)[0];
    }

    /// Return the current stage.
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Return the number of stages in a run.
    pub fn total_stages(&self) -> u32 {
        self.total_stages
    }

    /// Return the sizing parameters of the current stage.
    pub fn info(&self) -> StageInfo {
        StageInfo::new(self.stage)
    }

    /// Return the cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return the number of moves for the current stage.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn canvas(&self) -> &Grid<Color> {
        &self.canvas
    }

    pub fn target(&self) -> &Grid<Color> {
        &self.target
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    /// Return the colors that the player can use for the current stage.
    pub fn palette(&self) -> &'static [Color] {
        palette::active_palette(progression::level(self.stage))
    }

    /// Return the time the run started.
    pub fn started(&self) -> SystemTime {
        self.started
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Change the color used by the next paint actions.
    ///
    /// The background color is always accepted: it erases cells.
    ///
    /// # Errors
    ///
    /// The method returns an error if the color is not part of the active palette.
    pub fn select_color(&mut self, color: Color) -> Result<(), GameError> {
        if color != BACKGROUND && !self.palette().contains(&color) {
            return Err(GameError::UnavailableColor(color));
        }
        self.selected_color = color;
        Ok(())
    }

    /// Paint a cell with the selected color.
    ///
    /// Every accepted paint counts as a move, even when the cell already has the color.
    ///
    /// # Errors
    ///
    /// The method returns an error if the cell is outside of the canvas. The move counter is not
    /// incremented in that case.
    pub fn paint(&mut self, row: usize, col: usize) -> Result<PaintOutcome, GameError> {
        if self.status == StageStatus::Completed {
            debug!("Stage {} already completed: paint ignored", self.stage);
            return Ok(PaintOutcome::Ignored);
        }

        self.canvas = canvas::paint_cell(&self.canvas, row, col, self.selected_color)?;
        self.moves += 1;

        if !scoring::is_complete(&self.canvas, &self.target) {
            return Ok(PaintOutcome::Painted);
        }

        self.status = StageStatus::Completed;
        if self.scored {
            debug!("Stage {} completed again: score unchanged", self.stage);
            return Ok(PaintOutcome::Replayed);
        }

        let stage_score: u32 = scoring::compute_score(self.moves, self.stage, &self.target);
        self.score += stage_score;
        self.scored = true;
        info!(
            "Stage {} completed in {} moves: +{stage_score} (total {})",
            self.stage, self.moves, self.score
        );
        Ok(PaintOutcome::Completed { stage_score })
    }

    /// Clear the canvas and the move counter of the current stage.
    ///
    /// The score already obtained for the stage, if any, is kept, and completing the stage again
    /// does not add it a second time.
    pub fn reset(&mut self) {
        debug!("Reset stage {}", self.stage);
        self.canvas = canvas::create_empty_canvas(self.target.size());
        self.moves = 0;
        self.status = StageStatus::InProgress;
    }

    /// Move to the next stage.
    ///
    /// After the last stage, the game starts again from the first stage with a null score. In
    /// that case, the method returns the final score of the run that just ended.
    pub fn next_stage(&mut self) -> Option<u32> {
        if self.stage < self.total_stages {
            self.begin_stage(self.stage + 1);
            return None;
        }
        let final_score: u32 = self.score;
        info!("All {} stages played: final score {final_score}", self.total_stages);
        self.score = 0;
        self.started = SystemTime::now();
        self.begin_stage(1);
        Some(final_score)
    }

    /// Whether the current stage is completed and is the last stage of its level.
    pub fn is_level_complete(&self) -> bool {
        self.status == StageStatus::Completed && self.info().is_last_of_level()
    }

    /// Whether the last stage of the game is completed.
    pub fn is_game_complete(&self) -> bool {
        self.status == StageStatus::Completed && self.stage >= self.total_stages
    }

    /// Return the representation of the game that is saved.
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            stage: self.stage,
            total_stages: self.total_stages,
            score: self.score,
            moves: self.moves,
            canvas: self.canvas.clone(),
            target: self.target.clone(),
            scored: self.scored,
            started: self.started,
        }
    }

    /// Restore a saved game.
    ///
    /// The saved target is used as is. A canvas that is already identical to the target is
    /// restored as completed, so that the stage score is not added a second time.
    ///
    /// # Errors
    ///
    /// The method returns an error if the saved data is inconsistent.
    pub fn resume(saved: SavedGame) -> Result<Self, GameError> {
        if saved.stage == 0 || saved.stage > saved.total_stages {
            return Err(GameError::StageOutOfRange {
                stage: saved.stage,
                total_stages: saved.total_stages,
            });
        }
        if saved.canvas.size() != saved.target.size() {
            return Err(GameError::SizeMismatch {
                canvas: saved.canvas.size(),
                target: saved.target.size(),
            });
        }
        let info: StageInfo = StageInfo::new(saved.stage);
        if saved.target.size() != info.grid_size {
            return Err(GameError::WrongGridSize {
                expected: info.grid_size,
                found: saved.target.size(),
            });
        }

        let status: StageStatus = if scoring::is_complete(&saved.canvas, &saved.target) {
            StageStatus::Completed
        } else {
            StageStatus::InProgress
        };
        // A completed canvas was always scored, even in records without the flag
        let scored: bool = saved.scored || status == StageStatus::Completed;
        debug!("Resume stage {} ({status})", saved.stage);
        Ok(Self {
            stage: saved.stage,
            total_stages: saved.total_stages,
            score: saved.score,
            moves: saved.moves,
            canvas: saved.canvas,
            target: saved.target,
            selected_color: palette::active_palette(info.level)[0],
            status,
            scored,
            started: saved.started,
        })
    }
}

impl From<Game> for SavedGame {
    fn from(game: Game) -> Self {
        game.to_saved()
    }
}

impl TryFrom<SavedGame> for Game {
    type Error = GameError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        Game::resume(saved)
    }
}

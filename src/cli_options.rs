/*
cli_options.rs

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

//! Process command-line options.
//!
//! The options either preview the generated puzzles, or drive the game saved in the data
//! directory: every command loads the saved game, applies the actions, and saves the result.
//!
//! In the printed grids, `.` is the background and the digits are the palette slots.
//!
//! # Examples
//!
//! Preview the first stage:
//!
//! ```
//! $ pixel-master -s 1
//! Stage 1: level 1 (1/5), 7x7, 2 colors, Heart
//! . . . . . . .
//! . 2 . . . 2 .
//! ...
//! ```
//!
//! Paint two cells of the current stage, the second one with the eraser:
//!
//! ```
//! $ pixel-master -p 1:1:2 -p 0:0:0
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::{debug, warn};
use rand::Rng;
use std::env;
use std::error::Error;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use pixel_master::config::{self, COPYRIGHT_NOTICE, TOTAL_STAGES};
use pixel_master::game::{Game, PaintOutcome};
use pixel_master::generator::{pattern, shapes};
use pixel_master::grid::Grid;
use pixel_master::highscores::HighScores;
use pixel_master::palette::{BACKGROUND, Color};
use pixel_master::progression::StageInfo;
use pixel_master::saver::{self, game::SaverGame, highscores::SaverHighScores};
use pixel_master::saver::settings::SaverSettings;
use pixel_master::scoring;
use pixel_master::settings::Settings;

/// Play Pixel Master from the command line.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the shapes
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Preview the puzzle of the given stage
    #[arg(
        short,
        long,
        group = "preview",
        value_parser = clap::value_parser!(u32).range(1..=TOTAL_STAGES as i64)
    )]
    stage: Option<u32>,

    /// Preview a random stage
    #[arg(short, long, group = "preview", default_value_t = false)]
    random: bool,

    /// Number of consecutive stages to preview
    #[arg(short, long, default_value_t = 1, requires = "stage")]
    count: u32,

    /// Print the number of cells to paint and the perfect score of the previewed stages
    #[arg(long, default_value_t = false, requires = "preview")]
    summary: bool,

    /// Print the saved game, the settings, and the high scores
    #[arg(long, default_value_t = false)]
    status: bool,

    /// Abandon the saved game and start a new one
    #[arg(long, default_value_t = false)]
    new_game: bool,

    /// Move to the next stage
    #[arg(long, default_value_t = false)]
    next: bool,

    /// Clear the canvas of the current stage
    #[arg(long, default_value_t = false)]
    reset: bool,

    /// Paint a cell. SLOT 0 is the eraser, and 1 to N are the palette colors
    #[arg(short, long, value_name = "ROW:COL:SLOT", value_parser = parse_paint)]
    paint: Vec<PaintAction>,

    /// Toggle the dark mode
    #[arg(long, default_value_t = false)]
    toggle_dark_mode: bool,

    /// Toggle the sound effects
    #[arg(long, default_value_t = false)]
    toggle_sound: bool,

    /// Toggle the background music
    #[arg(long, default_value_t = false)]
    toggle_music: bool,

    /// Sound effects volume
    #[arg(long, value_name = "V", value_parser = clap::value_parser!(u8).range(0..=100))]
    sound_volume: Option<u8>,

    /// Music volume
    #[arg(long, value_name = "V", value_parser = clap::value_parser!(u8).range(0..=100))]
    music_volume: Option<u8>,

    /// Delete the saved game, the settings, and the high scores
    #[arg(long, default_value_t = false)]
    clear_data: bool,

    /// Directory where the data is saved
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    fn changes_session(&self) -> bool {
        self.new_game || self.next || self.reset || !self.paint.is_empty()
    }

    fn changes_settings(&self) -> bool {
        self.toggle_dark_mode
            || self.toggle_sound
            || self.toggle_music
            || self.sound_volume.is_some()
            || self.music_volume.is_some()
    }
}

/// A cell to paint and the palette slot to use.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PaintAction {
    row: usize,
    col: usize,
    slot: usize,
}

fn parse_paint(s: &str) -> Result<PaintAction, String> {
    let values: Vec<usize> = s
        .split(':')
        .map(|v| v.trim().parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|e| format!("{s}: {e}"))?;
    match values[..] {
        [row, col, slot] => Ok(PaintAction { row, col, slot }),
        _ => Err(format!("{s}: expected ROW:COL:SLOT")),
    }
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: PathBuf = args.data_dir.clone().unwrap_or_else(config::user_data_dir);
    debug!("Data directory: {data_dir:?}");

    //
    // Puzzle previews
    //
    if args.ls {
        for (tag, shape) in shapes::SHAPES.iter().enumerate() {
            println!("{tag:>2} {}", shape.name);
        }
        return 0;
    }
    if args.random {
        let stage: u32 = rand::rng().random_range(1..=TOTAL_STAGES);
        preview(stage, args.summary);
        return 0;
    }
    if let Some(first) = args.stage {
        for stage in preview_range(first, args.count) {
            preview(stage, args.summary);
        }
        return 0;
    }

    if args.clear_data {
        saver::clear_all(&data_dir);
        println!("All the data has been deleted.");
        return 0;
    }

    let mut ret: u8 = 0;
    if args.changes_settings() {
        if let Err(e) = update_settings(&args, &data_dir) {
            eprintln!("Cannot save the settings: {e}");
            ret = 1;
        }
    }
    if args.changes_session() {
        if let Err(e) = play(&args, &data_dir) {
            eprintln!("Error: {e}");
            ret = 1;
        }
    }
    if args.status || (!args.changes_settings() && !args.changes_session()) {
        print_status(&data_dir);
    }
    ret
}

/// Return the stages to preview. The range stops at the last stage of the game.
fn preview_range(first: u32, count: u32) -> RangeInclusive<u32> {
    let last: u32 = first.saturating_add(count).min(TOTAL_STAGES + 1);
    first..=last - 1
}

/// Return one line per grid row, with the given character for each cell.
fn render<T: Copy>(grid: &Grid<T>, symbol: impl Fn(T) -> char) -> Vec<String> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|c| symbol(*c).to_string())
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect()
}

fn code_symbol(code: u8) -> char {
    match code {
        0 => '.',
        c => char::from_digit(c as u32, 36).unwrap_or('?'),
    }
}

fn color_symbol(palette: &[Color], color: Color) -> char {
    if color == BACKGROUND {
        return '.';
    }
    match palette.iter().position(|c| *c == color) {
        Some(i) => char::from_digit(i as u32 + 1, 36).unwrap_or('?'),
        None => '?',
    }
}

/// Print the stage parameters and its pattern.
fn preview(stage: u32, summary: bool) {
    let info: StageInfo = StageInfo::new(stage);
    println!(
        "Stage {stage}: level {} ({}/5), {}x{}, {} colors, {}",
        info.level,
        info.position,
        info.grid_size,
        info.grid_size,
        info.palette_size,
        pattern::shape_name(stage)
    );
    let codes: Grid<u8> = pattern::generate_pattern(info.grid_size, stage, info.level);
    for line in render(&codes, code_symbol) {
        println!("{line}");
    }
    if summary {
        let target: Grid<Color> =
            pixel_master::generator::build_target_grid(info.grid_size, stage, info.level);
        let filled: usize = scoring::filled_cells(&target);
        println!(
            "Cells to paint: {filled}, perfect score: {}",
            scoring::compute_score(filled as u32, stage, &target)
        );
    }
    println!();
}

fn update_settings(args: &Args, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let saver: SaverSettings = SaverSettings::new(data_dir.to_path_buf());
    let mut settings: Settings = saver.get_settings();
    if args.toggle_dark_mode {
        settings.toggle_dark_mode();
    }
    if args.toggle_sound {
        settings.toggle_sound();
    }
    if args.toggle_music {
        settings.toggle_music();
    }
    if let Some(v) = args.sound_volume {
        settings.set_sound_volume(v);
    }
    if let Some(v) = args.music_volume {
        settings.set_music_volume(v);
    }
    saver.save_settings(&settings)?;
    print_settings(&settings);
    Ok(())
}

/// Restore the saved game, or start a new one when there is none or it cannot be used.
fn load_game(saver: &SaverGame) -> Game {
    match saver.get_game() {
        Ok(Some(saved)) => match Game::resume(saved) {
            Ok(game) => game,
            Err(e) => {
                warn!("Inconsistent saved game, starting a new game: {e}");
                saver.delete_save();
                Game::default()
            }
        },
        Ok(None) => Game::default(),
        Err(e) => {
            warn!("Cannot read the saved game, starting a new game: {e}");
            saver.delete_save();
            Game::default()
        }
    }
}

/// Apply the session actions to the saved game, and then save it.
fn play(args: &Args, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let saver: SaverGame = SaverGame::new(data_dir.to_path_buf());
    let mut game: Game = if args.new_game {
        Game::default()
    } else {
        load_game(&saver)
    };

    if args.next {
        if let Some(final_score) = game.next_stage() {
            println!("All the stages were played. Final score: {final_score}");
        }
    }
    if args.reset {
        game.reset();
    }

    let ret: Result<(), Box<dyn Error>> = apply_paints(&mut game, &args.paint, data_dir);

    saver.save_game(&game.to_saved())?;
    print_game(&game);
    ret
}

fn apply_paints(
    game: &mut Game,
    actions: &[PaintAction],
    data_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    for action in actions {
        let palette: &[Color] = game.palette();
        let color: Color = match action.slot {
            0 => BACKGROUND,
            s => *palette
                .get(s - 1)
                .ok_or_else(|| format!("slot {s} is not in the palette (1 to {})", palette.len()))?,
        };
        game.select_color(color)?;
        match game.paint(action.row, action.col)? {
            PaintOutcome::Painted => (),
            PaintOutcome::Ignored => {
                println!("Stage {} is already completed: paint ignored.", game.stage());
            }
            PaintOutcome::Replayed => {
                println!(
                    "Stage {} completed again in {} moves. The score does not change.",
                    game.stage(),
                    game.moves()
                );
            }
            PaintOutcome::Completed { stage_score } => {
                println!(
                    "Stage {} completed in {} moves! +{stage_score} points",
                    game.stage(),
                    game.moves()
                );
                if game.is_game_complete() {
                    println!("Congratulations! All {} stages completed.", game.total_stages());
                } else if game.is_level_complete() {
                    println!("Level {} completed!", game.info().level);
                }
                record_score(game, data_dir);
            }
        }
    }
    Ok(())
}

/// Record the cumulative score of the run in the high scores.
fn record_score(game: &Game, data_dir: &Path) {
    let saver: SaverHighScores = SaverHighScores::new(data_dir.to_path_buf());
    let mut highscores: HighScores = match saver.get_highscores() {
        Ok(h) => h.unwrap_or_default(),
        Err(e) => {
            warn!("Cannot read the high scores, starting a new board: {e}");
            HighScores::new()
        }
    };
    if let Some(position) = highscores.record_run(game.score(), game.stage(), game.started()) {
        debug!("Score {} at position {position}", game.score());
        if position == 1 {
            println!("New high score: {}", game.score());
        }
    }
    if let Err(e) = saver.save_highscores(&highscores) {
        warn!("Cannot save the high scores: {e}");
    }
}

fn print_game(game: &Game) {
    let info: StageInfo = game.info();
    println!(
        "Stage {}/{} (level {}, {}/5), {}, moves: {}, score: {}",
        game.stage(),
        game.total_stages(),
        info.level,
        info.position,
        game.status(),
        game.moves(),
        game.score()
    );
    let palette: &[Color] = game.palette();
    let slots: Vec<String> = palette
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}={c}", i + 1))
        .collect();
    println!("Palette: 0=eraser {}", slots.join(" "));

    let target: Vec<String> = render(game.target(), |c| color_symbol(palette, c));
    let canvas: Vec<String> = render(game.canvas(), |c| color_symbol(palette, c));
    let width: usize = info.grid_size * 2 - 1;
    println!("{:<width$}   {}", "Target", "Canvas");
    for (t, c) in target.iter().zip(canvas.iter()) {
        println!("{t}   {c}");
    }
}

fn print_settings(settings: &Settings) {
    let on_off = |b: bool| if b { "on" } else { "off" };
    println!(
        "Dark mode: {}, sound: {} ({}%), music: {} ({}%)",
        on_off(settings.dark_mode),
        on_off(settings.sound_enabled),
        settings.sound_volume,
        on_off(settings.music_enabled),
        settings.music_volume
    );
}

fn print_status(data_dir: &Path) {
    match SaverGame::new(data_dir.to_path_buf()).get_game() {
        Ok(Some(saved)) if saved.has_progress() => {
            println!("Continue? Stage {} (score {})", saved.stage, saved.score);
        }
        Ok(_) => println!("No game in progress."),
        Err(e) => warn!("Cannot read the saved game: {e}"),
    }

    print_settings(&SaverSettings::new(data_dir.to_path_buf()).get_settings());

    let saver: SaverHighScores = SaverHighScores::new(data_dir.to_path_buf());
    let highscores: HighScores = match saver.get_highscores() {
        Ok(h) => h.unwrap_or_default(),
        Err(e) => {
            warn!("Cannot read the high scores: {e}");
            HighScores::new()
        }
    };
    if highscores.is_empty() {
        println!("No high scores yet.");
        return;
    }
    println!("High scores:");
    for (i, score) in highscores.get_scores().iter().enumerate() {
        let when: DateTime<Local> = score.when.into();
        println!(
            "{:>2}. {:>6}  stage {:>3}  {}",
            i + 1,
            score.score,
            score.stage,
            when.format("%Y-%m-%d %H:%M")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paint() {
        assert_eq!(
            parse_paint("3:4:1"),
            Ok(PaintAction {
                row: 3,
                col: 4,
                slot: 1
            })
        );
        assert!(parse_paint("3:4").is_err());
        assert!(parse_paint("3:4:1:2").is_err());
        assert!(parse_paint("a:4:1").is_err());
        assert!(parse_paint("-1:4:1").is_err());
    }

    #[test]
    fn test_preview_range() {
        assert_eq!(preview_range(1, 1).collect::<Vec<u32>>(), vec![1]);
        assert_eq!(preview_range(10, 3).collect::<Vec<u32>>(), vec![10, 11, 12]);
        assert_eq!(
            preview_range(399, 5).collect::<Vec<u32>>(),
            vec![399, TOTAL_STAGES]
        );
        assert_eq!(preview_range(TOTAL_STAGES, 1).count(), 1);
        assert_eq!(preview_range(5, 0).count(), 0);
    }

    #[test]
    fn test_stage_option_range() {
        assert!(Args::try_parse_from(["pixel-master", "-s", "400"]).is_ok());
        assert!(Args::try_parse_from(["pixel-master", "-s", "401"]).is_err());
        assert!(Args::try_parse_from(["pixel-master", "-s", "0"]).is_err());
    }

    #[test]
    fn test_render() {
        let mut grid: Grid<u8> = Grid::filled(3, 0);
        grid.set(1, 2, 3).unwrap();
        assert_eq!(render(&grid, code_symbol), vec![". . .", ". . 3", ". . ."]);
    }

    #[test]
    fn test_color_symbol() {
        let palette: &[Color] = pixel_master::palette::active_palette(1);
        assert_eq!(color_symbol(palette, BACKGROUND), '.');
        assert_eq!(color_symbol(palette, palette[1]), '2');
        let unknown: Color = pixel_master::palette::GAME_COLORS[5];
        assert_eq!(color_symbol(palette, unknown), '?');
    }

    #[test]
    fn test_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

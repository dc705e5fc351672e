/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Tilemaze.

Tilemaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tilemaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tilemaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers tuning the maze parameters.
//! Tilemaze generates one or more sessions and prints a JSON report for each.
//!
//! # Examples
//!
//! Generate a 6x6 maze with five targets and replay a few moves:
//!
//! ```
//! $ tilemaze --width 6 --height 6 --targets 5 --seed 42 --moves right,right,down
//! ```
//!
//! Generate 100 random-threshold mazes and print statistics:
//!
//! ```
//! $ tilemaze -g random --threshold 0.6 -c 100 --summary
//! ```

use clap::Parser;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use tilemaze::maze::generator::GeneratorKind;
use tilemaze::maze::solver::Reachability;
use tilemaze::maze::topology::{Direction, Position};
use tilemaze::session::{MoveOutcome, Session};
use tilemaze::settings::GameSettings;

/// Generate Tilemaze mazes and targets for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// JSON settings file. Command-line options override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(short = 'x', long)]
    width: Option<usize>,

    /// Number of rows
    #[arg(short = 'y', long)]
    height: Option<usize>,

    /// Number of targets
    #[arg(short, long)]
    targets: Option<usize>,

    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maze generation algorithm
    #[arg(value_enum, short, long)]
    generator: Option<GeneratorKind>,

    /// Probability of opening a wall with the random generator
    #[arg(long)]
    threshold: Option<f64>,

    /// Moves to replay from the start position, separated by commas
    #[arg(value_enum, short, long, value_delimiter = ',')]
    moves: Vec<Direction>,

    /// Number of sessions to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the sessions
    #[arg(short = 'S', long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Target description in the report.
#[derive(Serialize)]
struct TargetReport {
    cell: usize,
    position: Position,
    distance: Option<usize>,
}

/// Replayed move in the report.
#[derive(Serialize)]
struct MoveReport {
    direction: Direction,
    position: usize,
    outcome: MoveOutcome,
}

/// JSON report for a generated session.
#[derive(Serialize)]
struct SessionReport {
    width: usize,
    height: usize,
    generator: GeneratorKind,
    start: usize,
    open_edges: Vec<(usize, usize)>,
    reachable: usize,
    targets: Vec<TargetReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    moves: Vec<MoveReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    won: Option<bool>,
}

impl SessionReport {
    fn new(settings: &GameSettings, session: &mut Session, moves: &[Direction]) -> Self {
        let reachability: Reachability =
            Reachability::from_source(session.maze(), session.start());
        let targets: Vec<TargetReport> = session
            .targets()
            .iter()
            .map(|t| TargetReport {
                cell: *t,
                position: session.maze().position(*t),
                distance: reachability.distance(*t),
            })
            .collect();

        let moves: Vec<MoveReport> = moves
            .iter()
            .map(|d| {
                let outcome: MoveOutcome = session.apply_move(*d);
                MoveReport {
                    direction: *d,
                    position: session.position(),
                    outcome,
                }
            })
            .collect();

        Self {
            width: settings.width,
            height: settings.height,
            generator: settings.generator,
            start: session.start(),
            open_edges: session.maze().open_edges(),
            reachable: reachability.len(),
            targets,
            won: (!moves.is_empty()).then(|| session.is_won()),
            moves,
        }
    }
}

/// Merge the settings file and the command-line options.
fn build_settings(args: &Args) -> Result<GameSettings, Box<dyn Error>> {
    let mut settings: GameSettings = match &args.config {
        Some(path) => match GameSettings::load(path)? {
            Some(s) => s,
            None => {
                warn!("Settings file {path:?} not found, using the defaults");
                GameSettings::default()
            }
        },
        None => GameSettings::default(),
    };

    if let Some(w) = args.width {
        settings.width = w;
    }
    if let Some(h) = args.height {
        settings.height = h;
    }
    if let Some(t) = args.targets {
        settings.targets = t;
    }
    if let Some(g) = args.generator {
        settings.generator = g;
    }
    if let Some(t) = args.threshold {
        settings.threshold = t;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate()?;
    Ok(settings)
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: GameSettings = match build_settings(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    debug!("Settings: {settings:?}");

    let mut rng: StdRng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut total_edges: usize = 0;
    let mut total_reachable: usize = 0;
    let mut errors: usize = 0;
    for i in 0..args.count {
        debug!("Iteration {i}");

        match Session::new(&settings, &mut rng) {
            Ok(mut session) => {
                let report: SessionReport = SessionReport::new(&settings, &mut session, &args.moves);
                total_edges += report.open_edges.len();
                total_reachable += report.reachable;
                match serde_json::to_string_pretty(&report) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return 1;
                    }
                }
            }
            Err(e) => {
                // Only the random generator can leave too few reachable cells
                errors += 1;
                warn!("Session {i}: {e}");
            }
        }
    }

    if args.summary {
        let generated: usize = args.count - errors;
        let divisor: f32 = generated.max(1) as f32;
        println!(
            "
         sessions = {}
average open edges = {}
 average reachable = {}
            errors = {}",
            generated,
            total_edges as f32 / divisor,
            total_reachable as f32 / divisor,
            errors
        );
    }

    if errors == args.count && args.count > 0 {
        return 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("tilemaze-{name}-{}.json", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn options_override_the_defaults() {
        let args = Args::try_parse_from(["tilemaze", "--width", "7", "-g", "random"]).unwrap();
        let settings = build_settings(&args).unwrap();
        assert_eq!(settings.width, 7);
        assert_eq!(settings.generator, GeneratorKind::Random);
        assert_eq!(settings.height, GameSettings::default().height);
        assert_eq!(settings.targets, GameSettings::default().targets);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn options_override_the_config_file() {
        let path = temp_config(
            "override",
            r#"{"width": 5, "height": 6, "targets": 2, "seed": 7}"#,
        );
        let args = Args::try_parse_from([
            "tilemaze",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "8",
            "-s",
            "11",
        ])
        .unwrap();
        let result = build_settings(&args);
        let _ = fs::remove_file(&path);
        let settings = result.unwrap();
        assert_eq!(settings.width, 5);
        assert_eq!(settings.height, 8);
        assert_eq!(settings.targets, 2);
        assert_eq!(settings.seed, Some(11));
    }

    #[test]
    fn missing_config_file_uses_the_defaults() {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("tilemaze-missing-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        let args =
            Args::try_parse_from(["tilemaze", "--config", path.to_str().unwrap()]).unwrap();
        assert_eq!(build_settings(&args).unwrap(), GameSettings::default());
    }

    #[test]
    fn invalid_merged_settings_fail() {
        let path = temp_config("invalid", r#"{"width": 2, "height": 2}"#);
        let args = Args::try_parse_from([
            "tilemaze",
            "--config",
            path.to_str().unwrap(),
            "--targets",
            "4",
        ])
        .unwrap();
        let result = build_settings(&args);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());

        let path = temp_config("malformed", "{ width: ");
        let args = Args::try_parse_from(["tilemaze", "--config", path.to_str().unwrap()]).unwrap();
        let result = build_settings(&args);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());

        let args = Args::try_parse_from(["tilemaze", "--width", "0"]).unwrap();
        assert!(build_settings(&args).is_err());
    }
}

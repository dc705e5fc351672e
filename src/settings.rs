/*
settings.rs

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

//! Game settings.
//!
//! Settings can be read from a JSON file with [`GameSettings::load`]. Missing fields take their
//! default value:
//!
//! ```json
//! {
//!     "width": 6,
//!     "height": 6,
//!     "targets": 5,
//!     "start": { "x": 0, "y": 0 },
//!     "generator": "depth-first",
//!     "seed": 1234
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::maze::MazeError;
use crate::maze::generator::GeneratorKind;
use crate::maze::topology::{GridTopology, Position};

/// Parameters of a play session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameSettings {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Number of targets to collect.
    pub targets: usize,

    /// Starting position of the player.
    pub start: Position,

    /// Maze generation algorithm.
    pub generator: GeneratorKind,

    /// Probability of opening a wall, for [`GeneratorKind::Random`] only.
    pub threshold: f64,

    /// Seed for the random generator. A random seed is used when not set.
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            targets: 3,
            start: Position::new(0, 0),
            generator: GeneratorKind::DepthFirst,
            threshold: 0.5,
            seed: None,
        }
    }
}

impl GameSettings {
    /// Read the settings from a JSON file.
    ///
    /// Return [`None`] if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, Box<dyn Error>> {
        debug!("Settings file: {path:?}");
        let file: File;
        match File::open(path) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let settings: GameSettings = serde_json::from_reader(reader)?;
        Ok(Some(settings))
    }

    /// Verify that a maze can be built from the settings.
    ///
    /// The number of targets is only checked against the grid size here. The number of reachable
    /// cells depends on the generated maze.
    pub fn validate(&self) -> Result<(), MazeError> {
        let topology: GridTopology = GridTopology::new(self.width, self.height)?;
        topology.cell_id(self.start.x, self.start.y)?;
        if self.generator == GeneratorKind::Random && !(0.0..=1.0).contains(&self.threshold) {
            return Err(MazeError::InvalidThreshold(self.threshold));
        }
        if self.targets >= topology.num_cells() {
            return Err(MazeError::InvalidSettings(format!(
                "{} targets do not fit in a {}x{} maze",
                self.targets, self.width, self.height
            )));
        }
        Ok(())
    }
}

/*
session.rs

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

//! Manage the status of a play session.
//!
//! A [`Session`] owns the maze, the player position, and the targets. The presentation layer
//! creates one per play, forwards the player's moves to [`Session::apply_move`], and reacts to
//! the returned [`MoveOutcome`] (sound, animation, end-of-game dialog). Playing again means
//! dropping the session and creating a new one.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::maze::MazeError;
use crate::maze::graph::MazeGraph;
use crate::maze::targets::pick_targets;
use crate::maze::topology::{Direction, Position};
use crate::settings::GameSettings;

/// Result of a player move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOutcome {
    /// A wall or the maze boundary stopped the player.
    Blocked,

    /// The player moved to an empty cell, or to a target already collected.
    Moved,

    /// The player collected the target with the given index.
    TargetFound(usize),

    /// The player collected the last target.
    Won,
}

/// Play session.
#[derive(Debug, Clone)]
pub struct Session {
    maze: MazeGraph,

    /// Starting cell.
    start: usize,

    /// Current cell of the player.
    position: usize,

    /// Target cells, in the order they were picked.
    targets: Vec<usize>,

    /// Whether each target has been collected.
    found: Vec<bool>,

    /// Number of collected targets.
    score: usize,

    /// Number of moves, blocked moves included.
    moves: usize,
}

impl Session {
    /// Create a session: generate the maze and pick the targets.
    ///
    /// # Errors
    ///
    /// Invalid settings, or not enough reachable cells for the targets (possible with the random
    /// generator).
    pub fn new<R: Rng>(settings: &GameSettings, rng: &mut R) -> Result<Self, MazeError> {
        settings.validate()?;
        let maze: MazeGraph =
            settings
                .generator
                .build(settings.width, settings.height, settings.threshold, rng)?;
        let targets: Vec<usize> = pick_targets(&maze, settings.start, settings.targets, rng)?;
        Self::with_maze(maze, settings.start, targets)
    }

    /// Create a session from an existing maze and targets.
    ///
    /// # Errors
    ///
    /// The start position and the targets must be inside the maze. The targets must be distinct
    /// and differ from the start cell.
    pub fn with_maze(
        maze: MazeGraph,
        start: Position,
        targets: Vec<usize>,
    ) -> Result<Self, MazeError> {
        let start: usize = maze.cell_at(start)?;
        if let Some(t) = targets.iter().find(|t| !maze.topology().contains(**t)) {
            return Err(MazeError::InvalidSettings(format!(
                "target {t} is outside the maze"
            )));
        }
        if targets.contains(&start) {
            return Err(MazeError::InvalidSettings(format!(
                "target {start} is the start cell"
            )));
        }
        let mut seen: HashSet<usize> = HashSet::with_capacity(targets.len());
        if let Some(t) = targets.iter().find(|t| !seen.insert(**t)) {
            return Err(MazeError::InvalidSettings(format!(
                "target {t} is listed twice"
            )));
        }
        info!(
            "New session: {}x{} maze, start at {start}, targets {targets:?}",
            maze.width(),
            maze.height()
        );
        Ok(Self {
            maze,
            start,
            position: start,
            found: vec![false; targets.len()],
            targets,
            score: 0,
            moves: 0,
        })
    }

    /// Maze of the session.
    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }

    /// Starting cell of the player.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current cell of the player.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Target cells, in the order they were picked.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Whether the target with the given index has been collected.
    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    /// Number of collected targets.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of moves, blocked moves included.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Whether all the targets are collected.
    pub fn is_won(&self) -> bool {
        self.score == self.targets.len()
    }

    /// Move the player one cell in the given direction.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let from: usize = self.position;
        self.position = self.maze.move_from(from, direction);
        self.moves += 1;

        let outcome: MoveOutcome = if self.position == from {
            MoveOutcome::Blocked
        } else {
            match self.uncollected_target() {
                Some(index) => {
                    self.found[index] = true;
                    self.score += 1;
                    if self.is_won() {
                        MoveOutcome::Won
                    } else {
                        MoveOutcome::TargetFound(index)
                    }
                }
                None => MoveOutcome::Moved,
            }
        };
        debug!(
            "Move {direction} from {from} to {}: {outcome:?}",
            self.position
        );
        outcome
    }

    /// Index of the target at the current position, if not collected yet.
    fn uncollected_target(&self) -> Option<usize> {
        self.targets
            .iter()
            .enumerate()
            .find(|(i, t)| **t == self.position && !self.found[*i])
            .map(|(i, _)| i)
    }
}

/*
generator.rs

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

//! Carve random mazes.
//!
//! Two generators are available:
//!
//! * [`create_maze`] carves a perfect maze by a randomized depth-first traversal from the
//!   top-left cell. The open edges form a spanning tree of the grid.
//! * [`create_random_maze`] opens every wall independently with a given probability. The result
//!   usually contains loops and unreachable pockets.

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::MazeError;
use super::graph::MazeGraph;

/// Maze generation algorithm.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// Randomized depth-first carving (perfect maze).
    #[default]
    DepthFirst,

    /// Each wall opened independently with the configured probability.
    Random,
}

impl GeneratorKind {
    /// Build a maze with the selected algorithm.
    ///
    /// `threshold` is only used by [`GeneratorKind::Random`].
    pub fn build<R: Rng>(
        &self,
        width: usize,
        height: usize,
        threshold: f64,
        rng: &mut R,
    ) -> Result<MazeGraph, MazeError> {
        match self {
            GeneratorKind::DepthFirst => create_maze(width, height, rng),
            GeneratorKind::Random => create_random_maze(width, height, threshold, rng),
        }
    }
}

/// Carve a perfect maze by randomized depth-first traversal from cell `(0, 0)`.
///
/// # Errors
///
/// Only zero dimensions are rejected. The carving itself always succeeds.
pub fn create_maze<R: Rng>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<MazeGraph, MazeError> {
    let mut maze: MazeGraph = MazeGraph::new(width, height)?;
    let initial_cell: usize = maze.cell_id(0, 0)?;

    let mut visited: Vec<bool> = vec![false; maze.num_cells()];
    let mut stack: Vec<usize> = Vec::with_capacity(maze.num_cells());

    visited[initial_cell] = true;
    stack.push(initial_cell);

    // The current cell stays on the stack under the cell it carves to, so that the traversal
    // backtracks to it once the new branch is exhausted.
    while let Some(&cell) = stack.last() {
        let unexplored: Vec<usize> = maze
            .all_neighbors(cell)
            .into_iter()
            .filter(|n| !visited[*n])
            .collect();

        if unexplored.is_empty() {
            stack.pop();
            continue;
        }

        let selected: usize = unexplored[rng.random_range(0..unexplored.len())];
        maze.open(cell, selected)?;
        visited[selected] = true;
        stack.push(selected);
    }

    debug!(
        "Depth-first maze {width}x{height}: {} open edges",
        maze.open_edge_count()
    );
    maze.debug();
    Ok(maze)
}

/// Open every wall of a `width` x `height` grid with probability `threshold`.
///
/// Walls on the outer boundary do not exist and are never opened.
///
/// # Errors
///
/// The dimensions must be at least one and `threshold` must be inside `[0, 1]`.
pub fn create_random_maze<R: Rng>(
    width: usize,
    height: usize,
    threshold: f64,
    rng: &mut R,
) -> Result<MazeGraph, MazeError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(MazeError::InvalidThreshold(threshold));
    }
    let mut maze: MazeGraph = MazeGraph::new(width, height)?;

    for y in 0..height {
        for x in 0..width {
            let cell: usize = maze.cell_id(x, y)?;
            if y + 1 < height && rng.random::<f64>() < threshold {
                maze.open(cell, maze.cell_id(x, y + 1)?)?;
            }
            if x + 1 < width && rng.random::<f64>() < threshold {
                maze.open(cell, maze.cell_id(x + 1, y)?)?;
            }
        }
    }

    debug!(
        "Random maze {width}x{height} (threshold {threshold}): {} open edges",
        maze.open_edge_count()
    );
    maze.debug();
    Ok(maze)
}

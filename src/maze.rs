/*
maze.rs

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

//! Generate mazes and compute the cells reachable in them.
//!
//! The components, from the leaves up:
//!
//! * [`topology::GridTopology`] converts between cell IDs and [`topology::Position`] objects and
//!   finds the neighbor of a cell in a [`topology::Direction`].
//! * [`edges::EdgeSet`] stores whether each wall between two adjacent cells is open.
//! * [`graph::MazeGraph`] combines both and answers the movement queries used by the game:
//!   [`graph::MazeGraph::is_open`], [`graph::MazeGraph::move_from`], and
//!   [`graph::MazeGraph::legal_moves`].
//! * [`generator::create_maze`] carves a perfect maze with a randomized depth-first traversal.
//!   [`generator::create_random_maze`] opens walls at random instead.
//! * [`solver::Reachability`] computes the distance from a source cell to every other cell.
//! * [`targets::pick_targets`] selects distinct reachable cells as goals for the player.
//!
//! All the random operations take the random generator as a parameter, so that a seeded
//! generator reproduces the same maze.

use std::error::Error;
use std::fmt;

pub mod edges;
pub mod generator;
pub mod graph;
pub mod solver;
pub mod targets;
pub mod topology;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The maze needs at least one row and one column.
    InvalidDimensions { width: usize, height: usize },

    /// Coordinates outside the grid.
    InvalidCoordinate { x: usize, y: usize },

    /// Cell ID outside the grid.
    InvalidCell(usize),

    /// The two cells do not share a wall.
    NonAdjacentCells { pred: usize, succ: usize },

    /// Not enough reachable cells to place the requested targets.
    InsufficientReachableCells { requested: usize, available: usize },

    /// The probability of the random generator is not inside `[0, 1]`.
    InvalidThreshold(f64),

    /// Inconsistent game settings.
    InvalidSettings(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}")
            }
            MazeError::InvalidCoordinate { x, y } => {
                write!(f, "coordinates ({x}, {y}) are outside the maze")
            }
            MazeError::InvalidCell(cell) => write!(f, "cell {cell} is outside the maze"),
            MazeError::NonAdjacentCells { pred, succ } => {
                write!(f, "cells {pred} and {succ} are not adjacent")
            }
            MazeError::InsufficientReachableCells {
                requested,
                available,
            } => write!(
                f,
                "{requested} targets requested, but only {available} cells are reachable"
            ),
            MazeError::InvalidThreshold(t) => {
                write!(f, "threshold {t} is not between 0 and 1")
            }
            MazeError::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl Error for MazeError {}

/*
graph.rs

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

//! The maze: grid topology plus the passability of its edges.
//!
//! A [`MazeGraph`] is mutated by the generators only. Afterwards the game and the solver treat it
//! as read-only.

use log::{Level, debug, log_enabled};

use super::MazeError;
use super::edges::EdgeSet;
use super::topology::{Direction, GridTopology, Position};

/// Grid graph with per-edge passability.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeGraph {
    topology: GridTopology,
    edges: EdgeSet,
}

impl MazeGraph {
    /// Create a maze with every wall closed.
    ///
    /// # Errors
    ///
    /// Both dimensions must be at least one.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let topology: GridTopology = GridTopology::new(width, height)?;
        Ok(Self {
            topology,
            edges: EdgeSet::new(topology),
        })
    }

    /// Grid geometry of the maze.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.topology.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.topology.height()
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.topology.num_cells()
    }

    /// See [`GridTopology::cell_id`].
    pub fn cell_id(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        self.topology.cell_id(x, y)
    }

    /// ID of the cell at `position`.
    pub fn cell_at(&self, position: Position) -> Result<usize, MazeError> {
        self.topology.cell_id(position.x, position.y)
    }

    /// Coordinates of the cell.
    pub fn position(&self, cell_id: usize) -> Position {
        self.topology.position(cell_id)
    }

    /// Whether the wall leaving `cell_id` in `direction` is open.
    pub fn is_open(&self, cell_id: usize, direction: Direction) -> bool {
        self.edges.is_open(cell_id, direction)
    }

    /// Open the wall between two adjacent cells.
    pub fn open(&mut self, pred: usize, succ: usize) -> Result<(), MazeError> {
        self.edges.open(pred, succ)
    }

    /// Close the wall between two adjacent cells.
    pub fn close(&mut self, pred: usize, succ: usize) -> Result<(), MazeError> {
        self.edges.close(pred, succ)
    }

    /// Geometric neighbors, whether walls are open or not.
    pub fn all_neighbors(&self, cell_id: usize) -> Vec<usize> {
        self.topology.neighbors(cell_id)
    }

    /// Cell reached by moving from `cell_id` in `direction`.
    ///
    /// When the wall is closed, or at the grid boundary, the cell itself is returned.
    pub fn move_from(&self, cell_id: usize, direction: Direction) -> usize {
        if self.edges.is_open(cell_id, direction) {
            self.topology.neighbor_in_direction(cell_id, direction)
        } else {
            cell_id
        }
    }

    /// Neighbors reachable through an open edge.
    pub fn legal_moves(&self, cell_id: usize) -> Vec<usize> {
        Direction::ALL
            .iter()
            .map(|d| self.move_from(cell_id, *d))
            .filter(|c| *c != cell_id)
            .collect()
    }

    /// Number of open walls.
    pub fn open_edge_count(&self) -> usize {
        self.edges.count_open()
    }

    /// Each open edge once, as `(cell, neighbor)` with `cell < neighbor`.
    pub fn open_edges(&self) -> Vec<(usize, usize)> {
        self.edges.open_edges()
    }

    /// Print the maze to the debug log, one text line per cell row plus one per wall row.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }

        let mut s: String = String::new();
        debug!("+{}", "--+".repeat(self.width()));
        for y in 0..self.height() {
            s.clear();
            s.push('|');
            for x in 0..self.width() {
                let cell: usize = self.topology.index(x, y);
                s.push_str(&format!("{cell:>2}"));
                s.push(if self.is_open(cell, Direction::Right) {
                    ' '
                } else {
                    '|'
                });
            }
            debug!("{s}");

            s.clear();
            s.push('+');
            for x in 0..self.width() {
                let cell: usize = self.topology.index(x, y);
                s.push_str(if self.is_open(cell, Direction::Down) {
                    "  +"
                } else {
                    "--+"
                });
            }
            debug!("{s}");
        }
    }
}

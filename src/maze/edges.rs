/*
edges.rs

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

//! Passability of the walls between maze cells.

use super::MazeError;
use super::topology::{Direction, GridTopology, Position};

/// Open or closed state of every potential edge of the grid.
///
/// Each cell owns two slots: its down edge at `cell_id` and its right edge at `n + cell_id`,
/// where `n` is the number of cells. An edge seen from its other endpoint (up or left) resolves
/// to the same slot, so a single boolean covers both traversal directions.
///
/// The down slots of the bottom row and the right slots of the last column have no physical
/// wall behind them and are always reported closed.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSet {
    topology: GridTopology,

    /// `2 * n` slots, `true` when the edge is open.
    open: Vec<bool>,
}

impl EdgeSet {
    /// Create the edge set with all the edges closed.
    pub fn new(topology: GridTopology) -> Self {
        Self {
            topology,
            open: vec![false; 2 * topology.num_cells()],
        }
    }

    /// Canonical slot of the edge leaving `cell_id` in `direction`.
    ///
    /// On the boundary the neighbor is the cell itself, which yields a slot that is never
    /// opened; [`EdgeSet::is_open`] still guards the boundary explicitly.
    pub fn edge_id(&self, cell_id: usize, direction: Direction) -> usize {
        let neighbor: usize = self.topology.neighbor_in_direction(cell_id, direction);
        cell_id.min(neighbor) + self.topology.num_cells() * direction.axis()
    }

    /// Whether the player can cross the edge leaving `cell_id` in `direction`.
    pub fn is_open(&self, cell_id: usize, direction: Direction) -> bool {
        let p: Position = self.topology.position(cell_id);
        if self.topology.exceeds_bound(p, direction) {
            return false;
        }
        self.open[self.edge_id(cell_id, direction)]
    }

    /// Open the wall between two adjacent cells.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidCell`] when a cell is outside the grid, and
    /// [`MazeError::NonAdjacentCells`] when the cells are not adjacent. The edges are left
    /// untouched in both cases.
    pub fn open(&mut self, pred: usize, succ: usize) -> Result<(), MazeError> {
        self.set(pred, succ, true)
    }

    /// Close the wall between two adjacent cells.
    ///
    /// # Errors
    ///
    /// Same as [`EdgeSet::open`].
    pub fn close(&mut self, pred: usize, succ: usize) -> Result<(), MazeError> {
        self.set(pred, succ, false)
    }

    fn set(&mut self, pred: usize, succ: usize, status: bool) -> Result<(), MazeError> {
        if let Some(cell) = [pred, succ].into_iter().find(|c| !self.topology.contains(*c)) {
            return Err(MazeError::InvalidCell(cell));
        }
        let direction: Direction = self.topology.try_direction_between(pred, succ)?;
        let edge_id: usize = self.edge_id(pred, direction);
        self.open[edge_id] = status;
        Ok(())
    }

    /// Close every edge.
    pub fn clear(&mut self) {
        self.open.fill(false);
    }

    /// Number of open edges.
    pub fn count_open(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }

    /// Open edges as `(cell, neighbor)` pairs with `cell < neighbor`, vertical edges first.
    pub fn open_edges(&self) -> Vec<(usize, usize)> {
        let n: usize = self.topology.num_cells();
        self.open
            .iter()
            .enumerate()
            .filter(|(_, o)| **o)
            .map(|(slot, _)| {
                let cell: usize = slot % n;
                let direction: Direction = if slot < n {
                    Direction::Down
                } else {
                    Direction::Right
                };
                (cell, self.topology.neighbor_in_direction(cell, direction))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_set(width: usize, height: usize) -> EdgeSet {
        EdgeSet::new(GridTopology::new(width, height).unwrap())
    }

    #[test]
    fn both_endpoints_share_the_edge_id() {
        let e = edge_set(4, 3);
        // cell 5 is (1, 1)
        assert_eq!(e.edge_id(5, Direction::Down), e.edge_id(9, Direction::Up));
        assert_eq!(e.edge_id(5, Direction::Right), e.edge_id(6, Direction::Left));
        assert_eq!(e.edge_id(5, Direction::Down), 5);
        assert_eq!(e.edge_id(5, Direction::Right), 12 + 5);
    }

    #[test]
    fn open_and_close_are_symmetric() {
        let mut e = edge_set(3, 3);
        assert_eq!(e.open(4, 1), Ok(()));
        assert!(e.is_open(4, Direction::Up));
        assert!(e.is_open(1, Direction::Down));
        assert!(!e.is_open(4, Direction::Down));
        assert_eq!(e.count_open(), 1);

        assert_eq!(e.close(1, 4), Ok(()));
        assert!(!e.is_open(4, Direction::Up));
        assert_eq!(e.count_open(), 0);
    }

    #[test]
    fn non_adjacent_cells_leave_edges_untouched() {
        let mut e = edge_set(3, 3);
        assert_eq!(
            e.open(0, 8),
            Err(MazeError::NonAdjacentCells { pred: 0, succ: 8 })
        );
        assert_eq!(e.count_open(), 0);
        assert!(e.close(2, 3).is_err());
    }

    #[test]
    fn cells_outside_the_grid_leave_edges_untouched() {
        let mut e = edge_set(3, 3);
        // 9 would sit right below 6 if the grid had a fourth row
        assert_eq!(e.open(9, 6), Err(MazeError::InvalidCell(9)));
        assert_eq!(e.open(6, 9), Err(MazeError::InvalidCell(9)));
        assert_eq!(e.open(18, 19), Err(MazeError::InvalidCell(18)));
        assert_eq!(e.close(8, 11), Err(MazeError::InvalidCell(11)));
        assert_eq!(e.count_open(), 0);
        assert!(e.open_edges().is_empty());
    }

    #[test]
    fn boundary_is_always_closed() {
        let mut e = edge_set(3, 3);
        // Opening the down edge of cell 0 also fills the slot the top-row UP lookup falls on.
        e.open(0, 3).unwrap();
        e.open(0, 1).unwrap();
        assert!(!e.is_open(0, Direction::Up));
        assert!(!e.is_open(0, Direction::Left));
        assert!(e.is_open(0, Direction::Down));
        assert!(e.is_open(0, Direction::Right));
        assert!(!e.is_open(8, Direction::Down));
        assert!(!e.is_open(8, Direction::Right));
    }

    #[test]
    fn open_edges_are_listed_once() {
        let mut e = edge_set(3, 2);
        e.open(4, 1).unwrap();
        e.open(5, 4).unwrap();
        e.open(0, 1).unwrap();
        assert_eq!(e.open_edges(), vec![(1, 4), (0, 1), (4, 5)]);

        e.clear();
        assert!(e.open_edges().is_empty());
    }
}

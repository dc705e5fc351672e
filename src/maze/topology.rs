/*
topology.rs

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

//! Coordinate math for the maze grid.
//!
//! Cells are addressed by a row-major identifier: `id = x + width * y`.
//! Nothing is stored besides the grid dimensions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MazeError;

/// Movement direction in the grid.
///
/// The discriminants matter: `direction as usize % 2` gives the edge axis (0 for the vertical
/// `Down`/`Up` edges, 1 for the horizontal `Right`/`Left` edges).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Direction {
    Down = 0,
    Right = 1,
    Up = 2,
    Left = 3,
}

impl Direction {
    /// The four directions, in edge-id order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    /// Edge axis: 0 for vertical edges, 1 for horizontal edges.
    pub fn axis(self) -> usize {
        self as usize % 2
    }

    /// Direction that crosses the same edge the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Left => write!(f, "left"),
        }
    }
}

/// Column and row of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions and the coordinate operations derived from them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridTopology {
    /// Number of columns, from left to right.
    width: usize,

    /// Number of rows, from top to bottom.
    height: usize,
}

impl GridTopology {
    /// Create a [`GridTopology`] object.
    ///
    /// # Errors
    ///
    /// Both dimensions must be at least one, and the two edge slots of every cell must fit in a
    /// `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let slots: Option<usize> = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(2));
        if width == 0 || height == 0 || slots.is_none() {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// Whether the cell ID is inside the grid.
    pub fn contains(&self, cell_id: usize) -> bool {
        cell_id < self.num_cells()
    }

    /// Return the ID of the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// The coordinates must be inside `[0, width) x [0, height)`.
    pub fn cell_id(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if x >= self.width || y >= self.height {
            return Err(MazeError::InvalidCoordinate { x, y });
        }
        Ok(self.index(x, y))
    }

    /// Unchecked row-major index. Callers guarantee the coordinates are inside the grid.
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        x + self.width * y
    }

    /// Return the coordinates of the given cell.
    pub fn position(&self, cell_id: usize) -> Position {
        Position {
            x: cell_id % self.width,
            y: cell_id / self.width,
        }
    }

    /// Whether a step from `position` in `direction` would leave the grid.
    pub fn exceeds_bound(&self, position: Position, direction: Direction) -> bool {
        match direction {
            Direction::Down => position.y >= self.height - 1,
            Direction::Right => position.x >= self.width - 1,
            Direction::Up => position.y == 0,
            Direction::Left => position.x == 0,
        }
    }

    /// Return the cell one step away in the given direction.
    ///
    /// On the boundary the cell itself is returned, so "no move" is always
    /// `neighbor == cell_id`.
    pub fn neighbor_in_direction(&self, cell_id: usize, direction: Direction) -> usize {
        let p: Position = self.position(cell_id);
        if self.exceeds_bound(p, direction) {
            return cell_id;
        }
        match direction {
            Direction::Down => self.index(p.x, p.y + 1),
            Direction::Right => self.index(p.x + 1, p.y),
            Direction::Up => self.index(p.x, p.y - 1),
            Direction::Left => self.index(p.x - 1, p.y),
        }
    }

    /// Direction of the step from `pred` to `succ`.
    ///
    /// Return [`None`] if the two cells are not adjacent along exactly one axis.
    pub fn direction_between(&self, pred: usize, succ: usize) -> Option<Direction> {
        let p: Position = self.position(pred);
        let s: Position = self.position(succ);

        if p.y == s.y {
            if p.x + 1 == s.x {
                return Some(Direction::Right);
            }
            if s.x + 1 == p.x {
                return Some(Direction::Left);
            }
        } else if p.x == s.x {
            if s.y + 1 == p.y {
                return Some(Direction::Up);
            }
            if p.y + 1 == s.y {
                return Some(Direction::Down);
            }
        }
        None
    }

    /// Same as [`GridTopology::direction_between`], but non-adjacent cells are an error.
    pub fn try_direction_between(&self, pred: usize, succ: usize) -> Result<Direction, MazeError> {
        self.direction_between(pred, succ)
            .ok_or(MazeError::NonAdjacentCells { pred, succ })
    }

    /// Geometric neighbors of the cell, ignoring walls, in [`Direction::ALL`] order.
    pub fn neighbors(&self, cell_id: usize) -> Vec<usize> {
        Direction::ALL
            .iter()
            .map(|d| self.neighbor_in_direction(cell_id, *d))
            .filter(|n| *n != cell_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize) -> GridTopology {
        GridTopology::new(width, height).unwrap()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GridTopology::new(0, 3),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(GridTopology::new(3, 0).is_err());
        assert!(GridTopology::new(1, 1).is_ok());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            GridTopology::new(usize::MAX, 2),
            Err(MazeError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
        // The cell count fits, but not the two edge slots per cell
        assert!(GridTopology::new(usize::MAX / 2 + 1, 1).is_err());
        assert!(GridTopology::new(usize::MAX / 2, 1).is_ok());
    }

    #[test]
    fn cell_id_is_row_major() {
        let g = grid(5, 3);
        assert_eq!(g.cell_id(0, 0), Ok(0));
        assert_eq!(g.cell_id(4, 0), Ok(4));
        assert_eq!(g.cell_id(0, 1), Ok(5));
        assert_eq!(g.cell_id(3, 2), Ok(13));
        assert_eq!(g.position(13), Position::new(3, 2));
    }

    #[test]
    fn out_of_range_coordinates_fail() {
        let g = grid(5, 3);
        assert_eq!(
            g.cell_id(5, 0),
            Err(MazeError::InvalidCoordinate { x: 5, y: 0 })
        );
        assert!(g.cell_id(0, 3).is_err());
    }

    #[test]
    fn neighbor_stays_put_on_boundary() {
        let g = grid(6, 6);
        let origin = g.cell_id(0, 0).unwrap();
        assert_eq!(g.neighbor_in_direction(origin, Direction::Up), origin);
        assert_eq!(g.neighbor_in_direction(origin, Direction::Left), origin);
        assert_eq!(g.neighbor_in_direction(origin, Direction::Right), 1);
        assert_eq!(g.neighbor_in_direction(origin, Direction::Down), 6);

        let corner = g.cell_id(5, 5).unwrap();
        assert_eq!(g.neighbor_in_direction(corner, Direction::Down), corner);
        assert_eq!(g.neighbor_in_direction(corner, Direction::Right), corner);
    }

    #[test]
    fn direction_between_adjacent_cells() {
        let g = grid(6, 6);
        let c = g.cell_id(1, 1).unwrap();
        assert_eq!(
            g.direction_between(c, g.cell_id(2, 1).unwrap()),
            Some(Direction::Right)
        );
        assert_eq!(
            g.direction_between(c, g.cell_id(0, 1).unwrap()),
            Some(Direction::Left)
        );
        assert_eq!(
            g.direction_between(c, g.cell_id(1, 0).unwrap()),
            Some(Direction::Up)
        );
        assert_eq!(
            g.direction_between(c, g.cell_id(1, 2).unwrap()),
            Some(Direction::Down)
        );
        assert_eq!(g.direction_between(c, g.cell_id(5, 5).unwrap()), None);
        assert_eq!(g.direction_between(c, g.cell_id(2, 2).unwrap()), None);
        assert_eq!(g.direction_between(c, c), None);
    }

    #[test]
    fn row_wrap_is_not_adjacent() {
        // Cells 2 and 3 are consecutive IDs, but on different rows.
        let g = grid(3, 2);
        assert_eq!(g.direction_between(2, 3), None);
        assert_eq!(
            g.try_direction_between(2, 3),
            Err(MazeError::NonAdjacentCells { pred: 2, succ: 3 })
        );
    }

    #[test]
    fn neighbors_skip_the_boundary() {
        let g = grid(3, 3);
        assert_eq!(g.neighbors(0), vec![3, 1]);
        assert_eq!(g.neighbors(4), vec![7, 5, 1, 3]);
        assert!(grid(1, 1).neighbors(0).is_empty());
    }

    #[test]
    fn opposite_flips_axis_direction() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.opposite().axis(), d.axis());
            assert_ne!(d.opposite(), d);
        }
    }
}

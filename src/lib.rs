/*
lib.rs

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

//! Tile maze game engine.
//!
//! A maze is generated on a grid, the player moves one tile at a time, and collects targets
//! placed on reachable tiles until all are found.
//! Drawing, input devices, and sound are left to the front end, which only queries the
//! [`maze::graph::MazeGraph`] and drives a [`session::Session`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tilemaze::maze::generator::create_maze;
//! use tilemaze::maze::targets::pick_targets;
//! use tilemaze::maze::topology::Position;
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let maze = create_maze(3, 3, &mut rng).unwrap();
//! assert_eq!(maze.open_edge_count(), 8);
//!
//! let targets = pick_targets(&maze, Position::new(0, 0), 3, &mut rng).unwrap();
//! assert_eq!(targets.len(), 3);
//! assert!(!targets.contains(&0));
//! ```

pub mod maze;
pub mod session;
pub mod settings;

pub use maze::MazeError;
pub use maze::generator::{GeneratorKind, create_maze};
pub use maze::graph::MazeGraph;
pub use maze::targets::pick_targets;
pub use maze::topology::{Direction, Position};
pub use session::{MoveOutcome, Session};
pub use settings::GameSettings;

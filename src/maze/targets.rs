/*
targets.rs

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

//! Select the goal cells the player must collect.

use log::debug;
use rand::Rng;

use super::MazeError;
use super::graph::MazeGraph;
use super::solver::reachable_cells;
use super::topology::Position;

/// Pick `count` distinct target cells reachable from `start`.
///
/// The start cell is never a target.
///
/// # Errors
///
/// Return [`MazeError::InvalidCoordinate`] when `start` is outside the maze, and
/// [`MazeError::InsufficientReachableCells`] when fewer than `count` cells, other than the start
/// cell, can be reached. The result is never truncated.
pub fn pick_targets<R: Rng>(
    maze: &MazeGraph,
    start: Position,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, MazeError> {
    let source: usize = maze.cell_at(start)?;
    let mut candidates: Vec<usize> = reachable_cells(maze, source);
    candidates.retain(|c| *c != source);

    if count > candidates.len() {
        return Err(MazeError::InsufficientReachableCells {
            requested: count,
            available: candidates.len(),
        });
    }

    let mut targets: Vec<usize> = Vec::with_capacity(count);
    for _ in 0..count {
        let selected: usize = candidates.swap_remove(rng.random_range(0..candidates.len()));
        debug!("Target {} at cell {selected}", targets.len());
        targets.push(selected);
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generator::create_maze;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn targets_are_distinct_and_skip_the_start() {
        let mut rng = StdRng::seed_from_u64(5);
        let maze = create_maze(3, 3, &mut rng).unwrap();
        let targets = pick_targets(&maze, Position::new(0, 0), 3, &mut rng).unwrap();
        assert_eq!(targets.len(), 3);
        assert!(!targets.contains(&0));
        assert!(targets.iter().all(|t| (1..9).contains(t)));
        let mut sorted = targets.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn every_other_cell_can_be_a_target() {
        let mut rng = StdRng::seed_from_u64(9);
        let maze = create_maze(4, 4, &mut rng).unwrap();
        let start = Position::new(2, 1);
        let mut targets = pick_targets(&maze, start, 15, &mut rng).unwrap();
        targets.sort_unstable();
        let expected: Vec<usize> = (0..16).filter(|c| *c != 6).collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn too_many_targets_is_an_error() {
        let mut rng = StdRng::seed_from_u64(9);
        let maze = create_maze(2, 2, &mut rng).unwrap();
        assert_eq!(
            pick_targets(&maze, Position::new(0, 0), 4, &mut rng),
            Err(MazeError::InsufficientReachableCells {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn only_reachable_cells_are_candidates() {
        let mut maze = MazeGraph::new(3, 1).unwrap();
        maze.open(1, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(
            pick_targets(&maze, Position::new(1, 0), 1, &mut rng),
            Ok(vec![2])
        );
        assert!(pick_targets(&maze, Position::new(0, 0), 1, &mut rng).is_err());
    }

    #[test]
    fn start_outside_the_maze() {
        let mut rng = StdRng::seed_from_u64(2);
        let maze = MazeGraph::new(3, 3).unwrap();
        assert_eq!(
            pick_targets(&maze, Position::new(3, 3), 1, &mut rng),
            Err(MazeError::InvalidCoordinate { x: 3, y: 3 })
        );
    }

    #[test]
    fn zero_targets() {
        let mut rng = StdRng::seed_from_u64(2);
        let maze = MazeGraph::new(1, 1).unwrap();
        assert_eq!(
            pick_targets(&maze, Position::new(0, 0), 0, &mut rng),
            Ok(Vec::new())
        );
    }
}

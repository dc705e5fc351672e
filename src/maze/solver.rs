/*
solver.rs

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

//! Single-source shortest paths over the open edges of a maze.
//!
//! Every open edge costs one step. The solver is a label-setting search driven by a binary
//! heap, so the cost stays `O(n log n)` on large grids.

use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::graph::MazeGraph;

/// Distances from a source cell to every cell of the maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Reachability {
    source: usize,

    /// Number of steps from the source, [`None`] for unreachable cells.
    distances: Vec<Option<usize>>,

    /// Previous cell on a shortest path from the source.
    predecessors: Vec<Option<usize>>,
}

impl Reachability {
    /// Compute the distances from `source` to every cell of the maze.
    ///
    /// `source` must be a cell of the maze.
    pub fn from_source(maze: &MazeGraph, source: usize) -> Self {
        let n: usize = maze.num_cells();
        let mut distances: Vec<Option<usize>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized: Vec<bool> = vec![false; n];
        let mut queue: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();

        distances[source] = Some(0);
        queue.push(Reverse((0, source)));

        while let Some(Reverse((distance, u))) = queue.pop() {
            // Stale entry, the cell was settled through a shorter path
            if finalized[u] {
                continue;
            }
            finalized[u] = true;

            for v in maze.legal_moves(u) {
                let cost: usize = distance + 1;
                if distances[v].is_none_or(|d| cost < d) {
                    distances[v] = Some(cost);
                    predecessors[v] = Some(u);
                    queue.push(Reverse((cost, v)));
                }
            }
        }

        let reachability: Reachability = Self {
            source,
            distances,
            predecessors,
        };
        debug!(
            "Reachable cells from {source}: {} out of {n}",
            reachability.len()
        );
        reachability
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of steps from the source to `cell_id`, or [`None`] if it cannot be reached.
    pub fn distance(&self, cell_id: usize) -> Option<usize> {
        self.distances.get(cell_id).copied().flatten()
    }

    pub fn contains(&self, cell_id: usize) -> bool {
        self.distance(cell_id).is_some()
    }

    /// Number of reachable cells, the source included.
    pub fn len(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Always `false`: the source reaches itself.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reachable cells in increasing ID order, the source included.
    pub fn cells(&self) -> Vec<usize> {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(c, _)| c)
            .collect()
    }

    /// Cells of a shortest path from the source to `cell_id`, both ends included.
    pub fn path_to(&self, cell_id: usize) -> Option<Vec<usize>> {
        self.distance(cell_id)?;

        let mut path: Vec<usize> = vec![cell_id];
        let mut current: usize = cell_id;
        while let Some(p) = self.predecessors[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Reachable cells from `source`, in increasing ID order.
pub fn reachable_cells(maze: &MazeGraph, source: usize) -> Vec<usize> {
    Reachability::from_source(maze, source).cells()
}

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{SearchAlgorithm, SearchState, Solver};
use crate::maze::{Coord, Grid};

/// Cost of moving between two adjacent open cells.
pub trait EdgeCost {
    fn cost(&self, from: Coord, to: Coord) -> u32;
}

/// Every step costs 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformCost;

impl EdgeCost for UniformCost {
    fn cost(&self, _from: Coord, _to: Coord) -> u32 {
        1
    }
}

/// Dijkstra's algorithm over an arbitrary non-negative [`EdgeCost`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra<C = UniformCost> {
    cost: C,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self { cost: UniformCost }
    }
}

impl<C: EdgeCost> Dijkstra<C> {
    pub fn with_cost(cost: C) -> Self {
        Self { cost }
    }
}

impl<C: EdgeCost> SearchAlgorithm for Dijkstra<C> {
    fn solver(&self) -> Solver {
        Solver::Dijkstra
    }

    fn explore(&self, grid: &Grid, start: Coord, goal: Coord, state: &mut SearchState) -> bool {
        best_first(grid, start, goal, state, &self.cost, |_| 0)
    }
}

/// Priority queue entry: `(priority, insertion sequence, cost so far, cell)`.
/// Wrapped in `Reverse` to turn the max-heap into a min-heap; the unique sequence number makes
/// equal priorities pop in insertion order.
type QueueEntry = Reverse<(u32, u64, u32, Coord)>;

/// Best-first search keyed by `cost so far + heuristic(cell)`, with lazy decrease-key.
///
/// A cell is finalized (visited and traced) the first time it is popped; later entries for it
/// are stale and skipped. With a zero heuristic this is Dijkstra's algorithm, with an admissible
/// and consistent one it is A*.
pub(super) fn best_first<C, H>(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    state: &mut SearchState,
    cost: &C,
    heuristic: H,
) -> bool
where
    C: EdgeCost + ?Sized,
    H: Fn(Coord) -> u32,
{
    let mut distances: HashMap<Coord, u32> = HashMap::from([(start, 0)]);
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut sequence = 0u64;
    queue.push(Reverse((heuristic(start), sequence, 0, start)));

    while let Some(Reverse((_, _, distance, cell))) = queue.pop() {
        if !state.mark_visited(cell) {
            continue;
        }
        state.record_visit(cell);

        if cell == goal {
            return true;
        }

        for neighbor in grid.open_neighbors(cell) {
            if state.is_visited(neighbor) {
                continue;
            }
            let tentative = distance.saturating_add(cost.cost(cell, neighbor));
            let is_cheaper = distances
                .get(&neighbor)
                .is_none_or(|&known| tentative < known);
            if is_cheaper {
                distances.insert(neighbor, tentative);
                state.set_parent(neighbor, cell);
                sequence += 1;
                queue.push(Reverse((
                    tentative.saturating_add(heuristic(neighbor)),
                    sequence,
                    tentative,
                    neighbor,
                )));
            }
        }
    }

    false
}

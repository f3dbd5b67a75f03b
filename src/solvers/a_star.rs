use super::{SearchAlgorithm, SearchState, Solver, UniformCost, dijkstra::best_first};
use crate::maze::{Coord, Grid, manhattan};

/// A* search with the Manhattan distance to the goal as heuristic.
///
/// On a 4-connected grid with unit steps the heuristic never overestimates and is consistent,
/// so the first time the goal is popped its path is a shortest one. Entries with equal
/// `f = g + h` pop in the order they were discovered.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn solver(&self) -> Solver {
        Solver::AStar
    }

    fn explore(&self, grid: &Grid, start: Coord, goal: Coord, state: &mut SearchState) -> bool {
        best_first(grid, start, goal, state, &UniformCost, |cell| {
            manhattan(cell, goal)
        })
    }
}

use super::{SearchAlgorithm, SearchState, Solver};
use crate::maze::{Coord, Grid};

/// Depth-first search with an explicit stack. Finds a path, not necessarily a shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl SearchAlgorithm for DepthFirst {
    fn solver(&self) -> Solver {
        Solver::Dfs
    }

    fn explore(&self, grid: &Grid, start: Coord, goal: Coord, state: &mut SearchState) -> bool {
        let mut stack = vec![start];

        while let Some(cell) = stack.pop() {
            // A cell can sit on the stack several times, only the first pop counts
            if !state.mark_visited(cell) {
                continue;
            }
            state.record_visit(cell);

            if cell == goal {
                return true;
            }

            for neighbor in grid.open_neighbors(cell) {
                if !state.is_visited(neighbor) {
                    state.record_parent(neighbor, cell);
                    stack.push(neighbor);
                }
            }
        }

        false
    }
}

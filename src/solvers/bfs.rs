use std::collections::VecDeque;

use super::{SearchAlgorithm, SearchState, Solver};
use crate::maze::{Coord, Grid};

/// Breadth-first search. Every step costs the same, so the first path found to the goal has
/// the fewest possible steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl SearchAlgorithm for BreadthFirst {
    fn solver(&self) -> Solver {
        Solver::Bfs
    }

    fn explore(&self, grid: &Grid, start: Coord, goal: Coord, state: &mut SearchState) -> bool {
        let mut queue = VecDeque::from([start]);
        // Cells are marked when enqueued so each one enters the queue at most once
        state.mark_visited(start);

        while let Some(cell) = queue.pop_front() {
            state.record_visit(cell);

            if cell == goal {
                return true;
            }

            for neighbor in grid.open_neighbors(cell) {
                if state.mark_visited(neighbor) {
                    state.record_parent(neighbor, cell);
                    queue.push_back(neighbor);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_takes_shorter_branch() {
        let grid = Grid::from_rows(&["#####", "#...#", "#.#.#", "#...#", "#####"]).unwrap();
        let result = BreadthFirst.search(&grid, (1, 1), (3, 1));
        assert_eq!(result.path(), Some(&[(1, 1), (2, 1), (3, 1)][..]));
        assert_eq!(result.trace, vec![(1, 1), (2, 1), (1, 2), (3, 1)]);
    }

    #[test]
    fn test_bfs_trace_in_distance_order() {
        let grid = Grid::from_rows(&["#######", "#.....#", "#######"]).unwrap();
        let result = BreadthFirst.search(&grid, (3, 1), (5, 1));
        assert_eq!(result.trace, vec![(3, 1), (4, 1), (2, 1), (5, 1)]);
        assert_eq!(result.path_len(), Some(2));
    }
}

use std::collections::{HashMap, HashSet};

use super::{SearchOutcome, SearchResult, Solver};
use crate::maze::Coord;

/// Bookkeeping owned by a single search run: which cells have been visited, in which order,
/// and the predecessor of each discovered cell. The frontier itself belongs to the algorithm.
#[derive(Debug, Default)]
pub struct SearchState {
    visited: HashSet<Coord>,
    parents: HashMap<Coord, Coord>,
    trace: Vec<Coord>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    /// Mark a cell as visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, coord: Coord) -> bool {
        self.visited.insert(coord)
    }

    /// Append a cell to the trace.
    pub fn record_visit(&mut self, coord: Coord) {
        self.trace.push(coord);
    }

    /// Record `parent` as the predecessor of `child` unless it already has one.
    pub fn record_parent(&mut self, child: Coord, parent: Coord) {
        self.parents.entry(child).or_insert(parent);
    }

    /// Record `parent` as the predecessor of `child`, replacing any earlier one.
    pub fn set_parent(&mut self, child: Coord, parent: Coord) {
        self.parents.insert(child, parent);
    }

    pub fn parent(&self, child: Coord) -> Option<Coord> {
        self.parents.get(&child).copied()
    }

    /// Walk parent pointers back from `goal` to `start`.
    ///
    /// # Panics
    /// If the chain breaks or loops before reaching `start`. Every cell a search extracts was
    /// discovered from a parent, so either case means the search is broken.
    fn reconstruct_path(&self, start: Coord, goal: Coord) -> Vec<Coord> {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            current = self.parent(current).unwrap_or_else(|| {
                panic!(
                    "No parent recorded for {:?} on the way back to {:?}",
                    current, start
                )
            });
            path.push(current);
            assert!(
                path.len() <= self.parents.len() + 1,
                "Parent chain from {:?} loops without reaching {:?}",
                goal,
                start
            );
        }
        path.reverse();
        path
    }

    /// Consume the state into a result. `goal` is `Some` only when the run ended on the goal.
    pub fn into_result(self, solver: Solver, start: Coord, goal: Option<Coord>) -> SearchResult {
        let outcome = match goal {
            Some(goal) => SearchOutcome::Found(self.reconstruct_path(start, goal)),
            None => SearchOutcome::NotFound,
        };
        SearchResult {
            solver,
            trace: self.trace,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_parent_wins() {
        let mut state = SearchState::new();
        state.record_parent((1, 0), (0, 0));
        state.record_parent((1, 0), (2, 0));
        assert_eq!(state.parent((1, 0)), Some((0, 0)));
        state.set_parent((1, 0), (2, 0));
        assert_eq!(state.parent((1, 0)), Some((2, 0)));
    }

    #[test]
    fn test_mark_visited() {
        let mut state = SearchState::new();
        assert!(state.mark_visited((3, 3)));
        assert!(!state.mark_visited((3, 3)));
        assert!(state.is_visited((3, 3)));
    }

    #[test]
    fn test_reconstruct_path() {
        let mut state = SearchState::new();
        state.record_parent((1, 0), (0, 0));
        state.record_parent((1, 1), (1, 0));
        state.record_parent((2, 1), (1, 1));
        state.record_visit((0, 0));
        let result = state.into_result(Solver::Bfs, (0, 0), Some((2, 1)));
        assert_eq!(result.path(), Some(&[(0, 0), (1, 0), (1, 1), (2, 1)][..]));
        assert_eq!(result.trace, vec![(0, 0)]);
    }

    #[test]
    #[should_panic(expected = "No parent recorded")]
    fn test_broken_chain_panics() {
        let mut state = SearchState::new();
        state.record_parent((2, 0), (1, 0));
        state.into_result(Solver::Dfs, (0, 0), Some((2, 0)));
    }

    #[test]
    #[should_panic(expected = "loops")]
    fn test_looping_chain_panics() {
        let mut state = SearchState::new();
        state.set_parent((1, 0), (2, 0));
        state.set_parent((2, 0), (1, 0));
        state.into_result(Solver::Dfs, (0, 0), Some((1, 0)));
    }
}

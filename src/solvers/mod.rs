mod a_star;
mod bfs;
mod dfs;
mod dijkstra;
mod state;

use std::{fmt, str::FromStr};

pub use a_star::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::{Dijkstra, EdgeCost, UniformCost};
pub use state::SearchState;

use crate::{
    error::MazeError,
    maze::{Coord, Grid},
};

/// Selector naming one of the available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
}

impl Solver {
    /// Available maze solvers
    pub const ALL: [Solver; 4] = [Solver::Dfs, Solver::Bfs, Solver::Dijkstra, Solver::AStar];

    /// Short identifier of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Solver::Dfs => "DFS",
            Solver::Bfs => "BFS",
            Solver::Dijkstra => "Dijkstra",
            Solver::AStar => "A*",
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Solver::Dfs),
            "bfs" | "breadth-first" => Ok(Solver::Bfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Solver::AStar),
            _ => Err(MazeError::UnknownSolver(s.trim().to_string())),
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached. Holds the path from start to goal, both inclusive.
    Found(Vec<Coord>),
    /// The frontier ran dry without reaching the goal.
    NotFound,
}

/// Output of a single search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub solver: Solver,
    /// Cells in the order the search visited them, for step-by-step replay.
    pub trace: Vec<Coord>,
    pub outcome: SearchOutcome,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Coord]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    /// Number of steps (edges) along the path. A start that is its own goal has length 0.
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }

    pub fn visited_count(&self) -> usize {
        self.trace.len()
    }
}

/// A graph search over the open cells of a [`Grid`].
///
/// Implementors only provide the exploration loop; [`SearchAlgorithm::search`] takes care of
/// the checks shared by every strategy and assembles the [`SearchResult`].
pub trait SearchAlgorithm {
    fn solver(&self) -> Solver;

    /// Run the search from `start` until `goal` is extracted from the frontier (returns `true`)
    /// or the frontier is exhausted (returns `false`). `start` is open and differs from `goal`.
    fn explore(&self, grid: &Grid, start: Coord, goal: Coord, state: &mut SearchState) -> bool;

    /// Search for a path from `start` to `goal`.
    ///
    /// A walled `start` finds nothing. A `start` equal to `goal` returns the single-cell path
    /// without expanding any neighbor.
    ///
    /// # Panics
    /// If `start` or `goal` lies outside the grid.
    fn search(&self, grid: &Grid, start: Coord, goal: Coord) -> SearchResult {
        assert!(
            grid.in_bounds(start) && grid.in_bounds(goal),
            "Search endpoints {:?} -> {:?} must lie inside the {}x{} grid",
            start,
            goal,
            grid.width(),
            grid.height()
        );

        let mut state = SearchState::new();
        let found = if !grid.is_passable(start) {
            tracing::debug!("[solve] start {:?} is a wall, nothing to explore", start);
            false
        } else if start == goal {
            state.mark_visited(start);
            state.record_visit(start);
            true
        } else {
            self.explore(grid, start, goal, &mut state)
        };

        let result = state.into_result(self.solver(), start, found.then_some(goal));
        tracing::debug!(
            "[solve] {} {:?} -> {:?}: visited {} cells, path length {:?}",
            result.solver.name(),
            start,
            goal,
            result.visited_count(),
            result.path_len()
        );
        result
    }
}

impl SearchAlgorithm for Solver {
    fn solver(&self) -> Solver {
        *self
    }

    fn explore(&self, grid: &Grid, start: Coord, goal: Coord, state: &mut SearchState) -> bool {
        match self {
            Solver::Dfs => DepthFirst.explore(grid, start, goal, state),
            Solver::Bfs => BreadthFirst.explore(grid, start, goal, state),
            Solver::Dijkstra => Dijkstra::new().explore(grid, start, goal, state),
            Solver::AStar => AStar.explore(grid, start, goal, state),
        }
    }
}

/// Solve the maze from its entrance to its exit with the selected solver.
pub fn solve_maze(grid: &Grid, solver: Solver) -> SearchResult {
    solver.search(grid, grid.entrance(), grid.exit())
}

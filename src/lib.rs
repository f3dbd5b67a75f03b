//! Perfect maze generation and four interchangeable maze solvers.
//!
//! A [`Grid`](maze::Grid) is carved once by [`generate`](generators::generate) and is read-only
//! afterwards. Any [`SearchAlgorithm`](solvers::SearchAlgorithm) can then search it from a start
//! to a goal cell, returning the order in which cells were visited and the path it found.

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;

pub use config::{LogConfig, MazeConfig};
pub use error::{MazeError, Result};
pub use generators::{generate, generate_with_rng};
pub use maze::{Coord, Direction, Grid, GridCell};
pub use solvers::{SearchAlgorithm, SearchOutcome, SearchResult, Solver, solve_maze};

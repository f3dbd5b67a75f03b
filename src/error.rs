use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}: both must be odd and at least 5")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unexpected character '{found}' at row {row}, column {column}")]
    InvalidFixtureChar { row: usize, column: usize, found: char },
    #[error("Unknown solver '{0}', expected one of: dfs, bfs, dijkstra, astar")]
    UnknownSolver(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;

use std::fmt;

/// Represents a cell in the grid, which can be either an open path or a wall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    Path,
    #[default]
    Wall,
}

impl GridCell {
    /// Character used for walls in fixture rows and plain-text output.
    pub const WALL_CHAR: char = '#';
    /// Character used for open cells in plain-text output.
    pub const PATH_CHAR: char = '.';

    pub fn is_passable(self) -> bool {
        matches!(self, GridCell::Path)
    }

    /// Parse a single fixture character. `#` is a wall, `.` and ` ` are open paths.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            GridCell::WALL_CHAR => Some(GridCell::Wall),
            GridCell::PATH_CHAR | ' ' => Some(GridCell::Path),
            _ => None,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            GridCell::Path => GridCell::PATH_CHAR,
            GridCell::Wall => GridCell::WALL_CHAR,
        };
        write!(f, "{}", c)
    }
}

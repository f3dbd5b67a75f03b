use std::{collections::HashSet, fmt};

use super::{Coord, Direction, cell::GridCell};
use crate::error::{MazeError, Result};

/// Immutable rectangular maze grid.
///
/// Cells are addressed as `(x, y)` where `x` is the column and `y` the row. The only way to
/// change cells is from inside the crate (the generator), so a `Grid` handed out to callers is
/// read-only and can be shared freely between concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16, cell: GridCell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Build a grid from text rows, where `#` is a wall and `.` or a space is an open cell.
    ///
    /// Every row must have the same number of characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let (Ok(grid_width), Ok(grid_height)) = (u16::try_from(width), u16::try_from(rows.len()))
        else {
            return Err(MazeError::InvalidConfig(format!(
                "fixture of {}x{} cells exceeds the maximum grid size",
                width,
                rows.len()
            )));
        };

        let mut data = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, c) in line.chars().enumerate() {
                let cell = GridCell::from_char(c).ok_or(MazeError::InvalidFixtureChar {
                    row,
                    column,
                    found: c,
                })?;
                data.push(cell);
            }
        }

        Ok(Grid {
            data: data.into_boxed_slice(),
            width: grid_width,
            height: grid_height,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: GridCell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Whether the cell is open. Coordinates outside the grid are never passable.
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self[coord].is_passable()
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.0 == 0 || coord.1 == 0 || coord.0 == self.width - 1 || coord.1 == self.height - 1
    }

    /// The cell `distance` steps away from `coord` in `direction`, if it lies inside the grid.
    pub fn offset(&self, coord: Coord, direction: Direction, distance: u16) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = i32::from(coord.0) + dx * i32::from(distance);
        let y = i32::from(coord.1) + dy * i32::from(distance);
        // Negative or oversized targets fail the conversion and are filtered out here
        let target = (u16::try_from(x).ok()?, u16::try_from(y).ok()?);
        self.in_bounds(target).then_some(target)
    }

    /// In-bounds 4-connected neighbors of a cell, in [`Direction::ALL`] order
    /// (right, left, down, up). Walls are included.
    ///
    /// # Panics
    /// If `coord` is out of bounds. Searches only ever ask about cells they got from the grid,
    /// so an out-of-bounds query is an internal bug.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        assert!(
            self.in_bounds(coord),
            "Neighbor query for out-of-bounds cell {:?} on a {}x{} grid",
            coord,
            self.width,
            self.height
        );
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.offset(coord, direction, 1))
    }

    /// Passable neighbors of a cell, in the same fixed order as [`Grid::neighbors`].
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord).filter(move |&c| self[c].is_passable())
    }

    /// Where a single step from `from` in `direction` leads, or `None` if the move would leave
    /// the grid or walk into a wall.
    pub fn step(&self, from: Coord, direction: Direction) -> Option<Coord> {
        self.offset(from, direction, 1)
            .filter(|&target| self[target].is_passable())
    }

    /// Entrance cell by convention: row 1, column 0.
    pub fn entrance(&self) -> Coord {
        (0, 1u16.min(self.height.saturating_sub(1)))
    }

    /// Exit cell by convention: row `height - 2`, column `width - 1`.
    pub fn exit(&self) -> Coord {
        (self.width.saturating_sub(1), self.height.saturating_sub(2))
    }

    pub fn is_exit(&self, coord: Coord) -> bool {
        coord == self.exit()
    }

    /// All cells in row-major order together with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, GridCell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(move |coord| (coord, self[coord]))
    }

    pub fn open_count(&self) -> usize {
        self.data.iter().filter(|c| c.is_passable()).count()
    }

    /// Flood fill over open cells. Returns every cell reachable from `start`, including `start`
    /// itself when it is open. An out-of-bounds or walled `start` yields an empty set.
    pub fn reachable_from(&self, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::new();
        if !self.is_passable(start) {
            return seen;
        }
        seen.insert(start);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            for next in self.open_neighbors(cell) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.in_bounds(index),
            "Cell {:?} is outside the {}x{} grid",
            index,
            self.width,
            self.height
        );
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self[(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

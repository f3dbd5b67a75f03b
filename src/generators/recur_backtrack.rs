use rand::{Rng, seq::SliceRandom};

use crate::maze::{Coord, Direction, Grid, GridCell};

/// Cell the carving starts from.
pub const CARVE_START: Coord = (1, 1);

/// Get rooms two steps away from `cell` that can still be carved into, each paired with the
/// wall between it and `cell`. A room must lie strictly inside the outer boundary and still be
/// a wall.
fn carvable_neighbors(cell: Coord, grid: &Grid) -> Vec<(Coord, Coord)> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let room = grid.offset(cell, direction, 2)?;
            let wall = grid.offset(cell, direction, 1)?;
            Some((wall, room))
        })
        .filter(|&(_, room)| !grid.is_boundary(room) && grid[room] == GridCell::Wall)
        .collect()
}

/// Carve a perfect maze into an all-wall grid with an iterative randomized backtracker.
///
/// Odd-odd cells are the rooms of the maze and the cells between them are the walls that get
/// knocked down. Every room reachable from [`CARVE_START`] ends up open and connected by exactly
/// one simple path.
pub fn recursive_backtrack<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.set(CARVE_START, GridCell::Path);

    // The stack will keep only path cells
    let mut stack = vec![CARVE_START];

    while let Some(&cell) = stack.last() {
        let mut candidates = carvable_neighbors(cell, grid);
        if candidates.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        candidates.shuffle(rng);
        let (wall, next) = candidates[0];

        // Knock down the wall between the two rooms
        grid.set(wall, GridCell::Path);
        grid.set(next, GridCell::Path);
        tracing::trace!("[generate] carved {:?} -> {:?} through {:?}", cell, next, wall);

        stack.push(next);
    }
}

mod recur_backtrack;

use rand::{Rng, SeedableRng, rngs::StdRng};

pub use recur_backtrack::{CARVE_START, recursive_backtrack};

use crate::{
    error::{MazeError, Result},
    maze::{Grid, GridCell},
};

/// Smallest width or height a generated maze may have.
pub const MIN_DIMENSION: u16 = 5;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Check that both dimensions are odd and at least [`MIN_DIMENSION`].
pub fn validate_dimensions(width: u16, height: u16) -> Result<()> {
    let valid = |d: u16| d >= MIN_DIMENSION && d % 2 == 1;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { width, height })
    }
}

/// Generate a perfect maze of the given size, optionally seeded for reproducibility.
pub fn generate(width: u16, height: u16, seed: Option<u64>) -> Result<Grid> {
    let mut rng = get_rng(seed);
    let grid = generate_with_rng(width, height, &mut rng)?;
    tracing::info!(
        "[generate] {}x{} maze generated with seed {:?}, {} open cells",
        width,
        height,
        seed,
        grid.open_count()
    );
    Ok(grid)
}

/// Generate a perfect maze drawing all randomness from `rng`.
///
/// The entrance (row 1, column 0) and exit (row `height - 2`, column `width - 1`) are opened
/// after carving. Both sit next to an odd-odd room, and the carving opens every such room, so
/// they are always connected to each other.
pub fn generate_with_rng<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Result<Grid> {
    validate_dimensions(width, height)?;

    let mut grid = Grid::new(width, height, GridCell::Wall);
    recursive_backtrack(&mut grid, rng);

    let (entrance, exit) = (grid.entrance(), grid.exit());
    grid.set(entrance, GridCell::Path);
    grid.set(exit, GridCell::Path);
    tracing::debug!(
        "[generate] opened entrance {:?} and exit {:?}",
        entrance,
        exit
    );

    debug_assert!(
        grid.reachable_from(entrance).contains(&exit),
        "exit {:?} is not reachable from entrance {:?}",
        exit,
        entrance
    );

    Ok(grid)
}

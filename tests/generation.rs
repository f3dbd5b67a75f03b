mod common;

use mazest::{Grid, MazeError, generate, generators::get_rng, generate_with_rng};

#[test_log::test]
fn test_entrance_and_exit_connected_for_all_sizes_and_seeds() {
    for (width, height) in common::SIZES {
        for seed in 0..20 {
            let grid = generate(width, height, Some(seed)).unwrap();
            let (entrance, exit) = (grid.entrance(), grid.exit());
            assert_eq!(entrance, (0, 1));
            assert_eq!(exit, (width - 1, height - 2));
            assert!(grid.is_passable(entrance));
            assert!(grid.is_passable(exit));
            assert!(
                common::component(&grid, entrance).contains(&exit),
                "{}x{} seed {} is disconnected:\n{}",
                width,
                height,
                seed,
                grid
            );
        }
    }
}

#[test]
fn test_wide_and_tall_mazes_stay_connected() {
    // Room coordinates on these grids add up past u16::MAX while carving
    for (width, height) in [(32771, 5), (5, 32771)] {
        for seed in 0..2 {
            let grid = generate(width, height, Some(seed)).unwrap();
            let reachable = common::component(&grid, grid.entrance());
            assert!(
                reachable.contains(&grid.exit()),
                "{}x{} seed {} is disconnected",
                width,
                height,
                seed
            );
            assert_eq!(reachable.len(), grid.open_count());
        }
    }
}

#[test]
fn test_every_open_cell_is_connected() {
    // A perfect maze has a single component holding every open cell
    for (width, height) in common::SIZES {
        let grid = generate(width, height, Some(17)).unwrap();
        let reachable = common::component(&grid, grid.entrance());
        assert_eq!(reachable.len(), grid.open_count());
    }
}

#[test]
fn test_generated_maze_has_no_cycles() {
    // A connected graph is a tree iff it has exactly one edge fewer than it has nodes
    for (width, height) in common::SIZES {
        let grid = generate(width, height, Some(23)).unwrap();
        let edges: usize = grid
            .cells()
            .filter(|(_, cell)| cell.is_passable())
            .map(|((x, y), _)| {
                [(x + 1, y), (x, y + 1)]
                    .into_iter()
                    .filter(|&c| grid.is_passable(c))
                    .count()
            })
            .sum();
        assert_eq!(edges, grid.open_count() - 1);
    }
}

#[test]
fn test_invalid_dimensions() {
    for (width, height) in [(4, 5), (5, 4), (3, 5), (5, 3), (1, 1), (0, 7), (6, 6)] {
        assert_eq!(
            generate(width, height, Some(0)),
            Err(MazeError::InvalidDimensions { width, height })
        );
    }
}

#[test]
fn test_same_seed_reproduces_maze() {
    let a = generate(31, 21, Some(2024)).unwrap();
    let b = generate(31, 21, Some(2024)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_different_seeds_give_different_mazes() {
    let a = generate(21, 21, Some(1)).unwrap();
    let b = generate(21, 21, Some(2)).unwrap();
    assert_ne!(a, b);
    for grid in [&a, &b] {
        assert!(common::component(grid, grid.entrance()).contains(&grid.exit()));
    }
}

#[test]
fn test_injected_rng_matches_seeded_generation() {
    let mut rng = get_rng(Some(77));
    let injected: Grid = generate_with_rng(15, 15, &mut rng).unwrap();
    assert_eq!(injected, generate(15, 15, Some(77)).unwrap());
}

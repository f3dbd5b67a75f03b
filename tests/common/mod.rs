#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use mazest::{Coord, Grid};

/// Dimensions exercised by the generated-maze tests.
pub const SIZES: [(u16, u16); 6] = [(5, 5), (7, 5), (9, 11), (21, 21), (31, 31), (41, 15)];

/// Breadth-first distances from `start` to every reachable open cell, computed straight from
/// passability queries so it does not share code with the solvers.
pub fn distances_from(grid: &Grid, start: Coord) -> HashMap<Coord, usize> {
    let mut distances = HashMap::new();
    if !grid.is_passable(start) {
        return distances;
    }
    distances.insert(start, 0);
    let mut queue = VecDeque::from([start]);
    while let Some((x, y)) = queue.pop_front() {
        let distance = distances[&(x, y)];
        let candidates = [
            (x.checked_add(1), Some(y)),
            (x.checked_sub(1), Some(y)),
            (Some(x), y.checked_add(1)),
            (Some(x), y.checked_sub(1)),
        ];
        for candidate in candidates {
            if let (Some(nx), Some(ny)) = candidate {
                let next = (nx, ny);
                if grid.is_passable(next) && !distances.contains_key(&next) {
                    distances.insert(next, distance + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    distances
}

pub fn component(grid: &Grid, start: Coord) -> HashSet<Coord> {
    distances_from(grid, start).into_keys().collect()
}

/// Check that `path` walks from `start` to `goal` over open, 4-adjacent cells.
pub fn assert_valid_path(grid: &Grid, path: &[Coord], start: Coord, goal: Coord) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for cell in path {
        assert!(grid.is_passable(*cell), "path crosses wall at {:?}", cell);
    }
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(
            a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
            1,
            "path jumps from {:?} to {:?}",
            a,
            b
        );
    }
}

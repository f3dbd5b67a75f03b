use std::time::{Duration, Instant};

use mazest::{LogConfig, SearchAlgorithm, Solver, generate, logging};

/// Side length of the profiled maze
const PROFILE_DIMENSION: u16 = 255;

/// Number of profiling runs from the first argument. Missing or unparsable input means one run.
fn parse_iterations(arg: Option<&str>) -> u32 {
    arg.and_then(|s| s.parse::<u32>().ok()).unwrap_or(1)
}

fn main() -> std::io::Result<()> {
    let _log_guard = LogConfig::from_env()
        .ok()
        .and_then(|config| logging::init_logging(&config));

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = parse_iterations(args.next().as_deref());

    let mut generation_time = Duration::ZERO;
    let mut solve_times = [Duration::ZERO; Solver::ALL.len()];

    for seed in 0..num_iters {
        let started = Instant::now();
        let grid = match generate(PROFILE_DIMENSION, PROFILE_DIMENSION, Some(u64::from(seed))) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(());
            }
        };
        generation_time += started.elapsed();

        for (solver, total) in Solver::ALL.iter().zip(solve_times.iter_mut()) {
            let started = Instant::now();
            let result = solver.search(&grid, grid.entrance(), grid.exit());
            let elapsed = started.elapsed();
            *total += elapsed;
            tracing::info!(
                "[profile] seed {} {}: {:?}, visited {}, path length {:?}",
                seed,
                solver.name(),
                elapsed,
                result.visited_count(),
                result.path_len()
            );
        }
    }

    let iterations = num_iters.max(1);
    println!(
        "{} iterations on a {}x{} maze",
        num_iters, PROFILE_DIMENSION, PROFILE_DIMENSION
    );
    println!("  generation: {:?} avg", generation_time / iterations);
    for (solver, total) in Solver::ALL.iter().zip(solve_times) {
        println!("  {:>8}: {:?} avg", solver.name(), total / iterations);
    }
    Ok(())
}

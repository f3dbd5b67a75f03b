use std::io::Write;

use mazest::{LogConfig, MazeConfig, SearchAlgorithm, Solver, logging, render};

fn read_line() -> std::io::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> std::io::Result<()> {
    let log_config = LogConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{}. Logging disabled.", e);
        LogConfig::default()
    });
    let _log_guard = logging::init_logging(&log_config);

    let mut config = MazeConfig::default();

    println!(
        "Enter maze dimensions (width height), both odd and at least 5. Leave empty for {}x{}:",
        config.width, config.height
    );
    let input = read_line()?;
    if !input.is_empty() {
        // Parse the input dimensions
        let dims = input
            .split_whitespace()
            .take(2)
            .filter_map(|s| s.parse::<u16>().ok())
            .collect::<Vec<_>>();
        if dims.len() != 2 {
            eprintln!("Please enter two valid numbers for width and height.");
            return Ok(());
        }
        (config.width, config.height) = (dims[0], dims[1]);
    }
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        return Ok(());
    }

    println!("Enter a seed, or leave empty for a random maze:");
    let input = read_line()?;
    if !input.is_empty() {
        match input.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) => {
                eprintln!("The seed must be a non-negative integer.");
                return Ok(());
            }
        }
    }

    // Let user select the algorithm
    println!("Select maze solving algorithm:");
    for (i, solver) in Solver::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, solver);
    }
    let input = read_line()?;
    let solver = match input.parse::<usize>() {
        Ok(n) if (1..=Solver::ALL.len()).contains(&n) => Solver::ALL[n - 1],
        _ => match input.parse::<Solver>() {
            Ok(solver) => solver,
            Err(e) => {
                eprintln!("Invalid selection: {}", e);
                return Ok(());
            }
        },
    };

    let grid = match config.generate() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    };

    let (start, goal) = (config.entrance(), config.exit());
    let result = solver.search(&grid, start, goal);

    let mut stdout = std::io::stdout();
    render::render(&mut stdout, &grid, Some(&result), Some((start, goal)))?;

    match result.path_len() {
        Some(len) => println!(
            "Maze solved with {}! Goal reached in {} steps after visiting {} cells.",
            solver,
            len,
            result.visited_count()
        ),
        None => println!(
            "No path found to the goal after visiting {} cells.",
            result.visited_count()
        ),
    }
    stdout.flush()
}

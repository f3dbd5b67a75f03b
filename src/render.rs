use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::{
    maze::{Coord, Grid, GridCell},
    solvers::SearchResult,
};

/// What a single grid position looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    /// Explored by the search but not on the final path.
    Visited,
    /// Part of the path found by the search.
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Visited => "* ".with(Color::Blue),
            Tile::Route => "🟨".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Lay out the tiles of `grid` row by row, overlaying the trace and path of `result` if given.
/// The `(start, goal)` endpoints are painted last, whether or not the search ever reached them.
pub fn tiles(
    grid: &Grid,
    result: Option<&SearchResult>,
    endpoints: Option<(Coord, Coord)>,
) -> Vec<Vec<Tile>> {
    let mut rows = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| match grid[(x, y)] {
                    GridCell::Wall => Tile::Wall,
                    GridCell::Path => Tile::Empty,
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut paint = |(x, y): Coord, tile: Tile| rows[y as usize][x as usize] = tile;

    if let Some(result) = result {
        result
            .trace
            .iter()
            .for_each(|&coord| paint(coord, Tile::Visited));
        if let Some(path) = result.path() {
            path.iter().for_each(|&coord| paint(coord, Tile::Route));
        }
    }
    if let Some((start, goal)) = endpoints {
        paint(start, Tile::Start);
        paint(goal, Tile::Goal);
    }

    rows
}

/// Draw the grid, with the search overlay if given, to `out`.
pub fn render<W: Write>(
    out: &mut W,
    grid: &Grid,
    result: Option<&SearchResult>,
    endpoints: Option<(Coord, Coord)>,
) -> std::io::Result<()> {
    for row in tiles(grid, result, endpoints) {
        for tile in row {
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }
    out.flush()
}

//! Command-line interface for loading a puzzle input and querying its grid

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::io::configuration::{COORDINATE_SEPARATOR, DEFAULT_TIMING_RUNS};
use crate::io::error::Result;
use crate::io::input::read_grid;
use crate::io::timing::average_time;
use crate::spatial::neighborhood::Neighborhood;
use crate::spatial::point::Point;

#[derive(Parser, Debug)]
#[command(name = "puzzlegrid")]
#[command(author, version, about = "Load a puzzle input as a grid and query it")]
/// Command-line arguments for the grid inspection tool
pub struct Cli {
    /// Puzzle input file, one grid row per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report every position holding this character
    #[arg(short, long)]
    pub find: Option<char>,

    /// Report the neighborhood of a position
    #[arg(short, long, value_name = "X,Y", value_parser = parse_point)]
    pub around: Option<Point>,

    /// Restrict neighborhood scans to the four cardinal directions
    #[arg(short, long)]
    pub cardinal: bool,

    /// Include the position itself in neighborhood scans
    #[arg(short = 'S', long)]
    pub include_self: bool,

    /// Print the grid after loading
    #[arg(short, long)]
    pub show: bool,

    /// Load the input this many times and report the mean load time
    #[arg(short, long, default_value_t = DEFAULT_TIMING_RUNS)]
    pub runs: usize,
}

impl Cli {
    /// Neighborhood shape selected by the flags
    pub const fn neighborhood(&self) -> Neighborhood {
        Neighborhood {
            diagonals: !self.cardinal,
            include_self: self.include_self,
        }
    }
}

/// Parse an `X,Y` position argument
///
/// # Errors
///
/// Returns a message when the separator is missing or either component is
/// not an integer.
pub fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (x, y) = value
        .split_once(COORDINATE_SEPARATOR)
        .ok_or_else(|| format!("expected X{COORDINATE_SEPARATOR}Y, got '{value}'"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x coordinate '{x}': {e}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y coordinate '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

/// Loads the input named on the command line and writes the requested reports
pub struct InputProcessor {
    cli: Cli,
}

impl InputProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the grid and write every requested report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be loaded as a grid, `--runs` is
    /// out of range, the `--around` position lies outside the grid, or
    /// writing to `out` fails.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let timing = average_time("load grid", self.cli.runs, || read_grid(&self.cli.input))?;
        let grid = timing.result?;

        writeln!(out, "{}", grid.summary())?;
        if let Some(average) = timing.average {
            writeln!(
                out,
                "Load time: first {:?}, average {average:?} over {} repeats",
                timing.first_run,
                self.cli.runs - 1
            )?;
        }

        if self.cli.show {
            write!(out, "{grid}")?;
        }

        if let Some(target) = self.cli.find {
            let positions: Vec<Point> = grid
                .search_grid(|&cell| cell == target)?
                .map(|(position, _)| position)
                .collect();
            writeln!(out, "Found {} '{target}'", positions.len())?;
            for position in positions {
                writeln!(out, "  {position}")?;
            }
        }

        if let Some(origin) = self.cli.around {
            let center = grid.get(origin)?;
            writeln!(out, "Around {origin} '{center}':")?;
            for (delta, value) in grid.scan_surroundings(origin, self.cli.neighborhood())? {
                writeln!(out, "  {delta} '{value}'")?;
            }
        }

        Ok(())
    }
}

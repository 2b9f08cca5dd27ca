use std::{fs, path::Path, str::FromStr};

use log::debug;

use crate::charset::Charset;
use crate::error::{InvalidMaze, MazeError};
use crate::grid::{Cell, Grid, Point};

/// Build a grid from text lines, one line per row.
///
/// There must be exactly one start and one goal character in the whole input. A single empty
/// line at the end (left by a final newline) is ignored.
pub fn parse_lines<I, S>(lines: I, charset: &Charset) -> Result<Grid, MazeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    charset.validate()?;

    let mut cells: Vec<Vec<Cell>> = Vec::new();
    let mut starts = Vec::new();
    let mut goals = Vec::new();

    for (row, line) in lines.into_iter().enumerate() {
        let mut cell_row = Vec::new();

        for (col, ch) in line.as_ref().chars().enumerate() {
            cell_row.push(if ch == charset.start {
                starts.push(Point::new(row, col));
                Cell::Open
            } else if ch == charset.goal {
                goals.push(Point::new(row, col));
                Cell::Open
            } else if ch == charset.open {
                Cell::Open
            } else {
                Cell::Wall
            });
        }

        cells.push(cell_row);
    }

    if cells.len() > 1 && cells.last().is_some_and(|row| row.is_empty()) {
        cells.pop();
    }

    if starts.len() != 1 {
        return Err(InvalidMaze::StartCount(starts.len()).into());
    }
    if goals.len() != 1 {
        return Err(InvalidMaze::GoalCount(goals.len()).into());
    }

    let grid = Grid::new(cells, starts[0], goals[0])?;
    debug!(
        "parsed {}x{} maze, start {}, goal {}",
        grid.rows(),
        grid.columns(),
        grid.start(),
        grid.goal()
    );

    Ok(grid)
}

pub fn parse_str(text: &str, charset: &Charset) -> Result<Grid, MazeError> {
    parse_lines(text.lines(), charset)
}

/// Read and parse a maze file
pub fn load(path: impl AsRef<Path>, charset: &Charset) -> Result<Grid, MazeError> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!("loaded {}", path.as_ref().display());
    parse_str(&text, charset)
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s, &Charset::default())
    }
}

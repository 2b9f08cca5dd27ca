use crate::error::{InvalidMaze, MazeError};
use crate::find::{MapStorage, MapTrait, NodeReference};
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(anyhow::anyhow!("Invalid direction: {}", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one step away in one of the four directions
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl NodeReference for Point {}

/// A rectangular maze of wall and open cells with one start and one goal.
///
/// The grid is immutable once built; [`Grid::new`] checks that start and goal are distinct,
/// inside the grid and not walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
    start: Point,
    goal: Point,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Cell>>, start: Point, goal: Point) -> Result<Self, MazeError> {
        let rows = cells.len();
        let columns = cells.first().map(|row| row.len()).unwrap_or(0);

        if rows == 0 || columns == 0 {
            return Err(InvalidMaze::Empty.into());
        }

        if let Some((line, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(InvalidMaze::Ragged {
                line: line + 1,
                expected: columns,
                found: row.len(),
            }
            .into());
        }

        if start == goal {
            return Err(InvalidMaze::StartIsGoal.into());
        }

        let grid = Self {
            rows,
            columns,
            cells,
            start,
            goal,
        };

        for point in [start, goal] {
            if !grid.is_valid(point) || grid.cells[point.row][point.col] == Cell::Wall {
                return Err(InvalidMaze::Blocked(point).into());
            }
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.cells.get(point.row)?.get(point.col).copied()
    }

    pub fn is_wall(&self, point: Point) -> Result<bool, MazeError> {
        match self.cell(point) {
            Some(cell) => Ok(cell == Cell::Wall),
            None => Err(MazeError::OutOfRange {
                point,
                rows: self.rows,
                columns: self.columns,
            }),
        }
    }

    /// The open cells next to `point`, always in up, down, left, right order.
    ///
    /// The order decides which route a depth-first search commits to first.
    pub fn neighbors(&self, point: Point) -> Vec<(Point, Direction)> {
        let mut points = Vec::with_capacity(4);

        if point.row > 0 {
            points.push((Point::new(point.row - 1, point.col), Direction::Up));
        }
        if point.row + 1 < self.rows {
            points.push((Point::new(point.row + 1, point.col), Direction::Down));
        }
        if point.col > 0 {
            points.push((Point::new(point.row, point.col - 1), Direction::Left));
        }
        if point.col + 1 < self.columns {
            points.push((Point::new(point.row, point.col + 1), Direction::Right));
        }

        // filter to only keep open cells
        points.retain(|(p, _)| self.cells[p.row][p.col] == Cell::Open);

        points
    }

    /// Returns a copy of the maze scaled by the given factor, i.e. to make it twice as large, pass 2.
    /// Every cell is repeated as a `factor` by `factor` block; start and goal move to the
    /// top-left corner of their blocks.
    pub fn scale_up(&self, factor: usize) -> Grid {
        let factor = factor.max(1);
        let mut cells = vec![vec![Cell::default(); self.columns * factor]; self.rows * factor];

        for row in 0..self.rows {
            for col in 0..self.columns {
                for r in 0..factor {
                    for c in 0..factor {
                        cells[row * factor + r][col * factor + c] = self.cells[row][col];
                    }
                }
            }
        }

        Grid {
            rows: self.rows * factor,
            columns: self.columns * factor,
            cells,
            start: Point::new(self.start.row * factor, self.start.col * factor),
            goal: Point::new(self.goal.row * factor, self.goal.col * factor),
        }
    }
}

/// A MapStorage that keeps one value per grid cell (a vec in a vec)
#[derive(Debug, Clone)]
pub struct CellStorage<T>(Vec<Vec<T>>);

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.row < self.0.len() && node.col < self.0[0].len()
    }

    fn get(&self, node: Self::Reference) -> T {
        self.0[node.row][node.col]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.0[node.row][node.col]
    }
}

impl MapTrait for Grid {
    type Reference = Point;
    type Action = Direction;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.row < self.rows && node.col < self.columns
    }

    fn neighbors_of(
        &self,
        node: Self::Reference,
    ) -> impl Iterator<Item = (Self::Reference, Self::Action)> {
        self.neighbors(node).into_iter()
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage(vec![vec![Default::default(); self.columns]; self.rows])
    }
}

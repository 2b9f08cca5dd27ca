use std::{collections::HashSet, fmt::Display};

use crate::charset::Charset;
use crate::find::MapStorage;
use crate::grid::{Cell, CellStorage, Grid, Point};

/// A printable view of a grid, optionally with a path and the explored cells drawn on top.
///
/// Each cell is drawn as the first that applies of: wall, start, goal, path, explored, open.
pub struct Rendered<'a> {
    grid: &'a Grid,
    charset: &'a Charset,
    path: HashSet<Point>,
    explored: Option<&'a CellStorage<bool>>,
}

impl<'a> Rendered<'a> {
    pub fn new(grid: &'a Grid, charset: &'a Charset) -> Self {
        Self {
            grid,
            charset,
            path: HashSet::new(),
            explored: None,
        }
    }

    pub fn with_path(mut self, path: &[Point]) -> Self {
        self.path.extend(path.iter().copied());
        self
    }

    pub fn with_explored(mut self, explored: &'a CellStorage<bool>) -> Self {
        self.explored = Some(explored);
        self
    }

    fn symbol(&self, point: Point) -> char {
        if self.grid.cell(point) != Some(Cell::Open) {
            self.charset.wall
        } else if point == self.grid.start() {
            self.charset.start
        } else if point == self.grid.goal() {
            self.charset.goal
        } else if self.path.contains(&point) {
            self.charset.path
        } else if self.explored.is_some_and(|explored| explored.get(point)) {
            self.charset.explored
        } else {
            self.charset.open
        }
    }
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                write!(f, "{}", self.symbol(Point::new(row, col)))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Grid {
    pub fn render<'a>(&'a self, charset: &'a Charset) -> Rendered<'a> {
        Rendered::new(self, charset)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Charset::default()))
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::find::Solver;
    use crate::frontier::Strategy;

    #[test]
    fn test_render_plain() {
        let grid: Grid = "A  \n # \n  B".parse().unwrap();

        assert_eq!(grid.to_string(), "A  \n █ \n  B\n");
    }

    #[test]
    fn test_render_path() {
        let grid: Grid = "A  \n # \n  B".parse().unwrap();
        let solution = Solver::new(Strategy::DepthFirst).solve(&grid).unwrap();
        let charset = Charset::default();

        assert_eq!(
            grid.render(&charset).with_path(&solution.path).to_string(),
            "A**\n █*\n  B\n"
        );
    }

    #[test]
    fn test_start_and_goal_win_over_path() {
        let grid: Grid = "A B".parse().unwrap();
        let charset = Charset::default();
        let everything = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)];

        assert_eq!(
            grid.render(&charset).with_path(&everything).to_string(),
            "A*B\n"
        );
    }

    #[test]
    fn test_render_explored() {
        let grid: Grid = "A  \n # \n  B".parse().unwrap();
        let (solution, explored) = Solver::new(Strategy::BreadthFirst)
            .solve_explored(&grid)
            .unwrap();
        let charset = Charset {
            wall: '#',
            explored: '.',
            ..Charset::default()
        };

        // (0,1), (0,2) and (1,2) were expanded but are not on the path
        assert_eq!(
            grid.render(&charset)
                .with_path(&solution.path)
                .with_explored(&explored)
                .to_string(),
            "A..\n*#.\n**B\n"
        );
    }
}

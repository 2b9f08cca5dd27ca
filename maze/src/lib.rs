//! Solve text mazes with depth-first or breadth-first search.
//!
//! A maze is read from text with [`util::parse_str`] (or [`util::load`]), solved with a
//! [`Solver`] and drawn again with [`Grid::render`].
//!
//! ```
//! use maze::{Grid, Solver, Strategy};
//!
//! let grid: Grid = "A  \n # \n  B".parse().unwrap();
//! let solution = Solver::new(Strategy::BreadthFirst).solve(&grid).unwrap();
//! assert_eq!(solution.len(), 4);
//! ```

pub mod charset;
pub mod error;
pub mod find;
pub mod frontier;
pub mod grid;
pub mod render;
pub mod util;

pub use charset::Charset;
pub use error::{InvalidMaze, MazeError, SearchError};
pub use find::{
    MapStorage, MapTrait, Node, NodeId, NodeReference, PathFinder, PathFinderState, PathResult,
    Solution, Solver,
};
pub use frontier::{Frontier, Strategy};
pub use grid::{Cell, CellStorage, Direction, Grid, Point};
pub use render::Rendered;

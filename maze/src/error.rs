use thiserror::Error;

use crate::grid::Point;

/// Errors raised while searching a map
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Tried to take a node out of a frontier that holds none. Only used to detect exhaustion.
    #[error("empty frontier")]
    EmptyFrontier,

    /// Every reachable cell was explored without reaching the goal
    #[error("no solution found")]
    NoSolution,

    /// Start or goal is not a node of the map being searched
    #[error("start or goal lies outside the map")]
    OutOfMap,
}

/// Errors raised while building or querying a maze
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze: {0}")]
    InvalidMaze(#[from] InvalidMaze),

    #[error("point ({}, {}) is outside of the {rows}x{columns} maze", .point.row, .point.col)]
    OutOfRange {
        point: Point,
        rows: usize,
        columns: usize,
    },

    #[error("charset uses {0:?} for more than one of start, goal and open")]
    AmbiguousCharset(char),

    #[error("could not read maze: {0}")]
    Io(#[from] std::io::Error),
}

/// The ways a maze description can be malformed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMaze {
    #[error("expected exactly one start cell, found {0}")]
    StartCount(usize),

    #[error("expected exactly one goal cell, found {0}")]
    GoalCount(usize),

    #[error("maze has no cells")]
    Empty,

    #[error("line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("start and goal are the same cell")]
    StartIsGoal,

    #[error("cell ({}, {}) is a wall or outside the maze", .0.row, .0.col)]
    Blocked(Point),
}

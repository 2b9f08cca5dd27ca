use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Characters used to read mazes from text and to draw them again.
///
/// `start`, `goal` and `open` are recognized by the loader; every other character is a wall.
/// `wall`, `path` and `explored` are only used when rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charset {
    pub start: char,
    pub goal: char,
    pub open: char,
    pub wall: char,
    pub path: char,
    pub explored: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            start: 'A',
            goal: 'B',
            open: ' ',
            wall: '█',
            path: '*',
            explored: '·',
        }
    }
}

impl Charset {
    /// The loader can only tell cells apart if start, goal and open are distinct characters.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.start == self.goal || self.start == self.open {
            return Err(MazeError::AmbiguousCharset(self.start));
        }
        if self.goal == self.open {
            return Err(MazeError::AmbiguousCharset(self.goal));
        }

        Ok(())
    }
}

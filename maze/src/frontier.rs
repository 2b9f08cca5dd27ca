use std::{collections::VecDeque, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::find::{MapStorage, MapTrait, Node};

/// Which end of the frontier the next node is taken from
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Last added, first removed (stack)
    #[default]
    DepthFirst,
    /// First added, first removed (queue)
    BreadthFirst,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strategy::DepthFirst => "depth-first",
                Strategy::BreadthFirst => "breadth-first",
            }
        )
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" | "depth-first" | "stack" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" | "queue" => Ok(Strategy::BreadthFirst),
            _ => Err(anyhow::anyhow!("Invalid strategy: {}", s)),
        }
    }
}

/// The nodes waiting to be expanded.
///
/// Nodes are always appended at the back; the [`Strategy`] decides whether [`Frontier::remove_next`]
/// takes from the back or the front. Duplicated states are allowed, membership is tracked per
/// cell so [`Frontier::contains_state`] does not scan the pending nodes.
pub struct Frontier<M: MapTrait> {
    strategy: Strategy,
    pending: VecDeque<Node<M::Reference, M::Action>>,
    queued: M::Storage<u32>,
}

impl<M: MapTrait> Frontier<M> {
    pub fn new(strategy: Strategy, map: &M) -> Self {
        Self {
            strategy,
            pending: VecDeque::new(),
            queued: map.create_storage(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn add(&mut self, node: Node<M::Reference, M::Action>) {
        *self.queued.get_mut(node.state) += 1;
        self.pending.push_back(node);
    }

    /// True if a node with this state was added and has not been removed yet
    pub fn contains_state(&self, state: M::Reference) -> bool {
        self.queued.is_valid(state) && self.queued.get(state) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn remove_next(&mut self) -> Result<Node<M::Reference, M::Action>, SearchError> {
        let node = match self.strategy {
            Strategy::DepthFirst => self.pending.pop_back(),
            Strategy::BreadthFirst => self.pending.pop_front(),
        }
        .ok_or(SearchError::EmptyFrontier)?;

        *self.queued.get_mut(node.state) -= 1;

        Ok(node)
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::find::NodeId;
    use crate::grid::{Cell, Direction, Grid, Point};

    fn grid() -> Grid {
        Grid::new(
            vec![vec![Cell::Open; 4]; 2],
            Point::new(0, 0),
            Point::new(1, 3),
        )
        .unwrap()
    }

    fn node(row: usize, col: usize) -> Node<Point, Direction> {
        Node {
            state: Point::new(row, col),
            parent: Some(NodeId(0)),
            action: Some(Direction::Right),
        }
    }

    #[test]
    fn test_stack_is_last_in_first_out() {
        let grid = grid();
        let mut frontier = Frontier::new(Strategy::DepthFirst, &grid);

        frontier.add(node(0, 1));
        frontier.add(node(0, 2));
        frontier.add(node(0, 3));

        assert_eq!(frontier.remove_next().unwrap().state, Point::new(0, 3));
        assert_eq!(frontier.remove_next().unwrap().state, Point::new(0, 2));
        assert_eq!(frontier.remove_next().unwrap().state, Point::new(0, 1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_queue_is_first_in_first_out() {
        let grid = grid();
        let mut frontier = Frontier::new(Strategy::BreadthFirst, &grid);

        frontier.add(node(0, 1));
        frontier.add(node(0, 2));
        frontier.add(node(0, 3));

        assert_eq!(frontier.remove_next().unwrap().state, Point::new(0, 1));
        assert_eq!(frontier.remove_next().unwrap().state, Point::new(0, 2));
        assert_eq!(frontier.remove_next().unwrap().state, Point::new(0, 3));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_remove_from_empty() {
        let grid = grid();

        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let mut frontier = Frontier::new(strategy, &grid);
            assert!(frontier.is_empty());
            assert_eq!(
                frontier.remove_next().unwrap_err(),
                SearchError::EmptyFrontier
            );
        }
    }

    #[test]
    fn test_contains_state_with_duplicates() {
        let grid = grid();
        let mut frontier = Frontier::new(Strategy::BreadthFirst, &grid);

        assert!(!frontier.contains_state(Point::new(0, 1)));

        frontier.add(node(0, 1));
        frontier.add(node(0, 1));
        frontier.add(node(1, 1));
        assert_eq!(frontier.len(), 3);
        assert!(frontier.contains_state(Point::new(0, 1)));
        assert!(!frontier.contains_state(Point::new(1, 0)));

        // one copy left
        frontier.remove_next().unwrap();
        assert!(frontier.contains_state(Point::new(0, 1)));

        frontier.remove_next().unwrap();
        assert!(!frontier.contains_state(Point::new(0, 1)));
        assert!(frontier.contains_state(Point::new(1, 1)));

        // states outside the map are never queued
        assert!(!frontier.contains_state(Point::new(5, 5)));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("dfs".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("queue".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!(
            Strategy::BreadthFirst
                .to_string()
                .parse::<Strategy>()
                .unwrap(),
            Strategy::BreadthFirst
        );
        assert!("astar".parse::<Strategy>().is_err());
    }
}

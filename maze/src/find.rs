use std::fmt::Debug;

use log::{debug, trace};
use serde::Serialize;

use crate::error::SearchError;
use crate::frontier::{Frontier, Strategy};
use crate::grid::{CellStorage, Direction, Grid, Point};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, comparable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The label of the move that leads from a node to one of its neighbors
    type Action: Copy + Eq + Debug + 'static;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is valid
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the reachable neighbors of the provided node and the action
    /// required to go there. The order of the iterator is the order they get expanded in.
    fn neighbors_of(
        &self,
        node: Self::Reference,
    ) -> impl Iterator<Item = (Self::Reference, Self::Action)>;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn is_valid(&self, node: Self::Reference) -> bool;
    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

/// Handle of a node inside the search tree of a [`PathFinder`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NodeId(pub usize);

/// A node in the search tree. Children point to their parent, the root has no parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Node<R, A> {
    pub state: R,
    pub parent: Option<NodeId>,
    pub action: Option<A>,
}

/// A path from start to goal. `path` leaves out the start and ends with the goal, `actions[i]`
/// is the move that leads into `path[i]`.
#[derive(Debug, PartialEq, Clone, Eq, Serialize)]
pub struct PathResult<R, A> {
    pub path: Vec<R>,
    pub actions: Vec<A>,
    pub start: R,
    pub goal: R,
    pub explored: usize,
}

impl<R, A> PathResult<R, A> {
    /// Number of moves from start to goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

pub type Solution = PathResult<Point, Direction>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R, A> {
    Computing,
    NoPathFound,
    PathFound(PathResult<R, A>),
}

impl<R, A> PathFinderState<R, A> {
    fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// Uninformed search from `start` to `goal` that can be advanced one expansion at a time.
pub struct PathFinder<M: MapTrait> {
    start: M::Reference,
    goal: M::Reference,
    frontier: Frontier<M>,
    explored: M::Storage<bool>,
    explored_count: usize,
    nodes: Vec<Node<M::Reference, M::Action>>,
    state: PathFinderState<M::Reference, M::Action>,
}

impl<M: MapTrait> PathFinder<M> {
    /// Fails with [`SearchError::OutOfMap`] if `start` or `goal` is not valid in `map`.
    pub fn new(
        start: M::Reference,
        goal: M::Reference,
        strategy: Strategy,
        map: &M,
    ) -> Result<Self, SearchError> {
        if !map.is_valid(start) || !map.is_valid(goal) {
            return Err(SearchError::OutOfMap);
        }

        let mut frontier = Frontier::new(strategy, map);
        frontier.add(Node {
            state: start,
            parent: None,
            action: None,
        });

        Ok(Self {
            start,
            goal,
            frontier,
            explored: map.create_storage(),
            explored_count: 0,
            nodes: Vec::new(),
            state: PathFinderState::Computing,
        })
    }

    /// Step until a terminal state is reached. Returns that state and the explored cells.
    pub fn finish(
        mut self,
        map: &M,
    ) -> (PathFinderState<M::Reference, M::Action>, M::Storage<bool>) {
        loop {
            match self.step(map) {
                PathFinderState::Computing => {}
                s => return (s, self.explored),
            }
        }
    }

    pub fn step(&mut self, map: &M) -> PathFinderState<M::Reference, M::Action> {
        if self.state.is_done() {
            return self.state.clone();
        }

        let node = match self.frontier.remove_next() {
            Ok(node) => node,
            Err(_) => {
                debug!(
                    "frontier exhausted after exploring {} states",
                    self.explored_count
                );
                self.state = PathFinderState::NoPathFound;
                return self.state.clone();
            }
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);

        if node.state == self.goal {
            debug!(
                "found goal {:?} after exploring {} states",
                self.goal, self.explored_count
            );

            let (path, actions) = self.backtrack(id);

            self.state = PathFinderState::PathFound(PathResult {
                path,
                actions,
                start: self.start,
                goal: self.goal,
                explored: self.explored_count,
            });

            return self.state.clone();
        }

        trace!("expanding {:?}", node.state);
        *self.explored.get_mut(node.state) = true;
        self.explored_count += 1;

        for (state, action) in map.neighbors_of(node.state) {
            if !self.frontier.contains_state(state) && !self.explored.get(state) {
                self.frontier.add(Node {
                    state,
                    parent: Some(id),
                    action: Some(action),
                });
            }
        }

        self.state.clone()
    }

    /// Walk the parent links from `id` up to the root. The root itself is not part of the path.
    fn backtrack(&self, mut id: NodeId) -> (Vec<M::Reference>, Vec<M::Action>) {
        let mut path = Vec::new();
        let mut actions = Vec::new();

        while let Some(parent) = self.nodes[id.0].parent {
            let node = &self.nodes[id.0];
            path.push(node.state);
            actions.extend(node.action);
            id = parent;
        }

        path.reverse();
        actions.reverse();

        (path, actions)
    }

    pub fn state(&self) -> &PathFinderState<M::Reference, M::Action> {
        &self.state
    }

    pub fn strategy(&self) -> Strategy {
        self.frontier.strategy()
    }

    pub fn get_explored(&self) -> &M::Storage<bool> {
        &self.explored
    }

    /// Number of states expanded so far
    pub fn explored_count(&self) -> usize {
        self.explored_count
    }

    /// Number of nodes waiting in the frontier
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    pub fn start(&self) -> M::Reference {
        self.start
    }

    pub fn goal(&self) -> M::Reference {
        self.goal
    }
}

/// Solves grids with a fixed frontier strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    strategy: Strategy,
}

impl Solver {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Find a path from the start to the goal of `grid`.
    ///
    /// Every call starts from a fresh search, so solving the same grid twice gives the same path.
    pub fn solve(&self, grid: &Grid) -> Result<Solution, SearchError> {
        self.solve_explored(grid).map(|(solution, _)| solution)
    }

    /// Like [`Solver::solve`], also returning which cells were expanded on the way.
    pub fn solve_explored(
        &self,
        grid: &Grid,
    ) -> Result<(Solution, CellStorage<bool>), SearchError> {
        debug!(
            "solving {}x{} maze from {} to {} ({})",
            grid.rows(),
            grid.columns(),
            grid.start(),
            grid.goal(),
            self.strategy
        );

        match PathFinder::new(grid.start(), grid.goal(), self.strategy, grid)?.finish(grid) {
            (PathFinderState::PathFound(solution), explored) => Ok((solution, explored)),
            _ => Err(SearchError::NoSolution),
        }
    }
}

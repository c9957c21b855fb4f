//! Ready-made strategies for searches over 4-connected [`Point`] grids.

use std::collections::HashSet;
use std::hash::BuildHasher;

use num::{One, Zero};
use wayfind_core::{Direction, Point, Range};

use crate::PathMap;
use crate::distance::manhattan;
use crate::traits::{Cost, Heuristic, Neighbors};

/// Manhattan distance to the goal. Admissible whenever every step costs at
/// least one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl<C: From<u32>> Heuristic<Point, C> for ManhattanHeuristic {
    #[inline]
    fn estimate(&self, state: &Point, goal: &Point) -> C {
        C::from(manhattan(*state, *goal))
    }
}

/// Always zero, which turns the search into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S, C: Zero> Heuristic<S, C> for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _state: &S, _goal: &S) -> C {
        C::zero()
    }
}

/// Every step costs one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

impl<S, C: One> Cost<S, C> for UnitCost {
    #[inline]
    fn cost(&self, _paths: &PathMap<S>, _candidate: &S, _current: &S) -> C {
        C::one()
    }
}

/// Step cost that depends on whether the move keeps the current heading.
///
/// The heading at `current` is the direction of the link from its
/// predecessor, or `initial_facing` when `current` has none (the start).
/// A step along that heading costs `straight`; any other step (including
/// the first move of a search that starts facing elsewhere) costs `turn`.
#[derive(Debug, Clone, Copy)]
pub struct TurnPenaltyCost<C> {
    pub straight: C,
    pub turn: C,
    pub initial_facing: Direction,
}

impl<C> TurnPenaltyCost<C> {
    pub fn new(straight: C, turn: C, initial_facing: Direction) -> Self {
        Self {
            straight,
            turn,
            initial_facing,
        }
    }
}

impl<C: Copy> Cost<Point, C> for TurnPenaltyCost<C> {
    fn cost(&self, paths: &PathMap<Point>, candidate: &Point, current: &Point) -> C {
        let facing = match paths.predecessor(current) {
            Some(prev) => Direction::from_delta(*current - *prev),
            None => Some(self.initial_facing),
        };
        let heading = Direction::from_delta(*candidate - *current);
        if heading.is_some() && heading == facing {
            self.straight
        } else {
            self.turn
        }
    }
}

/// Cardinal neighbors inside `bounds` that are not walls.
///
/// With [`skip_visited`](Self::skip_visited) enabled, states that already
/// have a predecessor in the path map are not offered again. That keeps
/// maze searches from re-relaxing cells, but it is only safe when every
/// step costs the same.
#[derive(Debug, Clone)]
pub struct GridNeighbors<'a, B> {
    bounds: Range,
    walls: &'a HashSet<Point, B>,
    skip_visited: bool,
}

impl<'a, B: BuildHasher> GridNeighbors<'a, B> {
    pub fn new(bounds: Range, walls: &'a HashSet<Point, B>) -> Self {
        Self {
            bounds,
            walls,
            skip_visited: false,
        }
    }

    pub fn skip_visited(mut self, skip: bool) -> Self {
        self.skip_visited = skip;
        self
    }

    /// Whether `p` is inside the bounds and not a wall.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.bounds.contains(p) && !self.walls.contains(&p)
    }
}

impl<B: BuildHasher> Neighbors<Point> for GridNeighbors<'_, B> {
    fn neighbors(&self, current: &Point, paths: &PathMap<Point>, buf: &mut Vec<Point>) {
        for n in Direction::ALL.into_iter().filter_map(|d| current.checked_step(d)) {
            if !self.passable(n) {
                continue;
            }
            if self.skip_visited && paths.contains(&n) {
                continue;
            }
            buf.push(n);
        }
    }
}

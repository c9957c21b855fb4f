//! Generic best-first (A\*) search with pluggable strategies.
//!
//! [`search`] finds a minimum-cost path between two states of any
//! `Clone + Eq + Hash` type. The state space is described by three
//! independent strategies passed into each call:
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Heuristic`] | admissible estimate of the remaining cost |
//! | [`Cost`] | cost of one step, given the path taken so far |
//! | [`Neighbors`] | states reachable in one step |
//!
//! Plain closures of the matching shape implement the traits, and the
//! [`grid`] module has ready-made strategies for 4-connected
//! [`Point`](wayfind_core::Point) grids.
//!
//! An unreachable goal is reported as [`SearchError::Unreachable`], never as
//! a sentinel cost.

mod astar;
mod distance;
mod error;
pub mod grid;
mod path_map;
mod pathcost;
mod traits;

pub use astar::{SearchResult, search};
pub use distance::{chebyshev, manhattan};
pub use error::SearchError;
pub use path_map::PathMap;
pub use pathcost::path_cost;
pub use traits::{Cost, Heuristic, Neighbors};

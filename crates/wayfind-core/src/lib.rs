//! **wayfind-core** — grid geometry primitives.
//!
//! This crate provides the coordinate types that grid-based callers of
//! `wayfind-paths` use as search states: points, half-open rectangles used
//! as grid bounds, and the four cardinal headings.

pub mod geom;

pub use geom::{Direction, Point, Range, RangeIter};

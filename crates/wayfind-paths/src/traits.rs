use crate::PathMap;

/// Estimate of the remaining cost from a state to the goal.
///
/// Must never overestimate the true cost (admissible) for [`search`] to
/// return a minimum-cost path. This is not checked.
///
/// [`search`]: crate::search
pub trait Heuristic<S, C> {
    /// Estimated cost from `state` to `goal`. Must be non-negative.
    fn estimate(&self, state: &S, goal: &S) -> C;
}

/// Incremental cost of a single step.
pub trait Cost<S, C> {
    /// Cost of moving from `current` to its neighbor `candidate`.
    ///
    /// `paths` holds the predecessor links discovered so far, so the cost may
    /// depend on how `current` was reached (e.g. a turn penalty). Must be
    /// non-negative.
    fn cost(&self, paths: &PathMap<S>, candidate: &S, current: &S) -> C;
}

/// Neighbor enumeration.
pub trait Neighbors<S> {
    /// Append the states reachable in one step from `current` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, current: &S, paths: &PathMap<S>, buf: &mut Vec<S>);
}

impl<S, C, F> Heuristic<S, C> for F
where
    F: Fn(&S, &S) -> C,
{
    #[inline]
    fn estimate(&self, state: &S, goal: &S) -> C {
        self(state, goal)
    }
}

impl<S, C, F> Cost<S, C> for F
where
    F: Fn(&PathMap<S>, &S, &S) -> C,
{
    #[inline]
    fn cost(&self, paths: &PathMap<S>, candidate: &S, current: &S) -> C {
        self(paths, candidate, current)
    }
}

impl<S, I, F> Neighbors<S> for F
where
    F: Fn(&S, &PathMap<S>) -> I,
    I: IntoIterator<Item = S>,
{
    #[inline]
    fn neighbors(&self, current: &S, paths: &PathMap<S>, buf: &mut Vec<S>) {
        buf.extend(self(current, paths));
    }
}

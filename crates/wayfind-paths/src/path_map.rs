use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Predecessor links recorded during a single search.
///
/// Each discovered non-start state maps to the state it was reached from on
/// the best-known path. Strategies receive a shared view of the map so that
/// step costs and neighbor filters can depend on the path taken so far.
#[derive(Debug, Clone)]
pub struct PathMap<S> {
    links: FxHashMap<S, S>,
}

impl<S> Default for PathMap<S> {
    fn default() -> Self {
        Self {
            links: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash> PathMap<S> {
    /// Create an empty path map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the links of a concrete path: every state after the first
    /// points back at the one before it.
    pub fn from_path(path: &[S]) -> Self
    where
        S: Clone,
    {
        let mut map = Self::new();
        for w in path.windows(2) {
            map.insert(w[1].clone(), w[0].clone());
        }
        map
    }

    /// The state `s` was reached from, if any.
    #[inline]
    pub fn predecessor(&self, s: &S) -> Option<&S> {
        self.links.get(s)
    }

    /// Whether `s` has a recorded predecessor.
    #[inline]
    pub fn contains(&self, s: &S) -> bool {
        self.links.contains_key(s)
    }

    /// Number of states with a recorded predecessor.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub(crate) fn insert(&mut self, s: S, prev: S) {
        self.links.insert(s, prev);
    }

    /// Walk the links backward from `goal` and return the path in
    /// start-to-goal order.
    ///
    /// The walk stops at `start` or at the first state without a
    /// predecessor, so `reconstruct(s, s)` is just `[s]`.
    pub fn reconstruct(&self, start: &S, goal: &S) -> Vec<S>
    where
        S: Clone,
    {
        let mut path = vec![goal.clone()];
        let mut cur = goal;
        while cur != start {
            let Some(prev) = self.links.get(cur) else {
                break;
            };
            // A cycle can only come from negative step costs.
            if path.len() > self.links.len() {
                break;
            }
            path.push(prev.clone());
            cur = prev;
        }
        path.reverse();
        path
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use num::Zero;
use rustc_hash::FxHashMap;

use crate::error::SearchError;
use crate::path_map::PathMap;
use crate::traits::{Cost, Heuristic, Neighbors};

/// A minimum-cost path and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S, C> {
    /// States from start to goal, both included.
    pub path: Vec<S>,
    /// Sum of step costs along `path`.
    pub cost: C,
}

impl<S, C> SearchResult<S, C> {
    /// Number of steps taken (one less than the number of states).
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Frontier entry, ordered by `priority` for use in `BinaryHeap`.
struct Entry<S, C> {
    priority: C,
    seq: u64,
    g: C,
    state: S,
}

impl<S, C: Ord> PartialEq for Entry<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, C: Ord> Eq for Entry<S, C> {}

impl<S, C: Ord> Ord for Entry<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // earliest push first among equals.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, C: Ord> PartialOrd for Entry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute a minimum-cost path from `start` to `goal` using A*.
///
/// The frontier, the [`PathMap`] and the cost table live only for the
/// duration of the call. With an admissible `heuristic` and non-negative
/// step costs the returned path is optimal and its cost equals the sum of
/// `cost` along it (see [`path_cost`](crate::path_cost)).
///
/// Returns [`SearchError::Unreachable`] if the frontier empties before the
/// goal is reached. `start == goal` yields the single-state path `[start]`
/// with zero cost.
pub fn search<S, C, H, K, N>(
    start: S,
    goal: S,
    heuristic: &H,
    cost: &K,
    neighbors: &N,
) -> Result<SearchResult<S, C>, SearchError>
where
    S: Clone + Eq + Hash,
    C: Copy + Ord + Zero,
    H: Heuristic<S, C> + ?Sized,
    K: Cost<S, C> + ?Sized,
    N: Neighbors<S> + ?Sized,
{
    let mut paths: PathMap<S> = PathMap::new();
    // Lowest accumulated cost found so far. Absent means not discovered yet.
    let mut best: FxHashMap<S, C> = FxHashMap::default();
    best.insert(start.clone(), C::zero());

    let mut open: BinaryHeap<Entry<S, C>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    open.push(Entry {
        priority: heuristic.estimate(&start, &goal),
        seq,
        g: C::zero(),
        state: start.clone(),
    });

    let mut nbuf: Vec<S> = Vec::new();
    let mut expanded = 0usize;
    let mut peak = open.len();

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search None;
        };

        // Skip stale entries.
        if best.get(&current.state).is_some_and(|&g| current.g > g) {
            continue;
        }

        if current.state == goal {
            break 'search Some(current.g);
        }

        expanded += 1;
        log::trace!("expanding state {expanded}, frontier size {}", open.len());

        nbuf.clear();
        neighbors.neighbors(&current.state, &paths, &mut nbuf);

        for next in nbuf.drain(..) {
            let tentative = current.g + cost.cost(&paths, &next, &current.state);
            if best.get(&next).is_some_and(|&g| tentative >= g) {
                continue;
            }

            paths.insert(next.clone(), current.state.clone());
            best.insert(next.clone(), tentative);
            seq += 1;
            open.push(Entry {
                priority: tentative + heuristic.estimate(&next, &goal),
                seq,
                g: tentative,
                state: next,
            });
        }
        peak = peak.max(open.len());
    };

    let Some(total) = found else {
        log::debug!("search exhausted: expanded {expanded} states, peak frontier {peak}");
        return Err(SearchError::Unreachable { expanded });
    };

    let path = paths.reconstruct(&start, &goal);
    log::debug!(
        "search reached goal: {} steps, expanded {expanded} states, peak frontier {peak}",
        path.len() - 1
    );
    Ok(SearchResult { path, cost: total })
}

use std::hash::Hash;

use num::Zero;

use crate::path_map::PathMap;
use crate::traits::Cost;

/// Total cost of walking `path` under `cost`.
///
/// Each step is priced with the links of the path walked so far, the same
/// view [`search`](crate::search) gives the cost strategy when it relaxes
/// that step. Paths with fewer than two states cost zero.
pub fn path_cost<S, C, K>(path: &[S], cost: &K) -> C
where
    S: Clone + Eq + Hash,
    C: Copy + Zero,
    K: Cost<S, C> + ?Sized,
{
    let mut paths = PathMap::new();
    let mut total = C::zero();
    for w in path.windows(2) {
        let (prev, next) = (&w[0], &w[1]);
        total = total + cost.cost(&paths, next, prev);
        paths.insert(next.clone(), prev.clone());
    }
    total
}

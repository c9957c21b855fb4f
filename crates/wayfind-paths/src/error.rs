use thiserror::Error;

/// Error returned by [`search`](crate::search).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier ran empty before the goal was popped.
    #[error("no path exists: frontier exhausted after expanding {expanded} states")]
    Unreachable { expanded: usize },
}

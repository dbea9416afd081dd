use thiserror::Error;

/// Errors from [`crate::RoadGraph`] mutations.
///
/// Read queries never fail; only inputs that would break the graph's
/// invariants are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A node identifier was empty.
    #[error("node identifier must not be empty")]
    EmptyNodeId,
    /// An edge weight was negative, infinite or NaN.
    ///
    /// Weights are travel times in minutes and feed the weighted searches,
    /// which require finite non-negative costs.
    #[error("road {from} -> {to} has invalid travel time {weight}")]
    InvalidWeight {
        /// First endpoint of the rejected edge.
        from: String,
        /// Second endpoint of the rejected edge.
        to: String,
        /// The rejected weight.
        weight: f64,
    },
}

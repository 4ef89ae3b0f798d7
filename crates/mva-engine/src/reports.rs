use serde::{Deserialize, Serialize};

/// Serializable snapshot of a session's bookkeeping, returned by the engine's
/// command operations and consumed by external drivers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Simulation time accumulated so far.
    pub time: f64,
    /// Total number of branches in the registry, root included.
    pub branch_count: usize,
    /// Registry index of the currently selected branch.
    pub current_branch: usize,
}

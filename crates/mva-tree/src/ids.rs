use serde::{Deserialize, Serialize};

/// Identifier for a branch within a [`crate::BranchArena`].
///
/// Wraps the branch's position in the creation-ordered registry; ids are
/// append-only and stay valid for the lifetime of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BranchId(usize);

impl BranchId {
    /// Creates an identifier from its raw registry index.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw registry index of the identifier.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}

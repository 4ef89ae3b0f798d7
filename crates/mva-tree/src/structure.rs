use serde::{Deserialize, Serialize};

use mva_core::{ErrorInfo, MvaError};

use crate::arena::{BranchArena, BranchNode};
use crate::ids::BranchId;

/// Read-only projection of the branching tree for external consumers.
///
/// Mirrors the node structure: each entry carries the branch's absolute
/// probability and the projections of its children in child order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchStructure {
    /// Absolute probability of the branch.
    pub probability: f64,
    /// Child projections in creation order.
    pub children: Vec<BranchStructure>,
}

impl BranchArena {
    /// Builds the probability projection of the whole tree from the root.
    pub fn structure(&self) -> BranchStructure {
        self.project(&self[self.root()])
    }

    /// Builds the probability projection rooted at an arbitrary branch.
    pub fn structure_from(&self, id: BranchId) -> Result<BranchStructure, MvaError> {
        let node = self.get(id).ok_or_else(|| {
            MvaError::Index(
                ErrorInfo::new("tree.bad-branch", "branch is not in the registry")
                    .with_context("branch", id.as_raw().to_string())
                    .with_context("registry_len", self.len().to_string()),
            )
        })?;
        Ok(self.project(node))
    }

    /// Recursive projection. Child ids are always present in the arena
    /// (append-only, never removed), and depth is bounded by the number of
    /// branching events, not by external input.
    fn project(&self, node: &BranchNode) -> BranchStructure {
        BranchStructure {
            probability: node.absolute_probability(),
            children: node
                .children()
                .iter()
                .filter_map(|&child| self.get(child))
                .map(|child| self.project(child))
                .collect(),
        }
    }
}

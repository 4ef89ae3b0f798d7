#![deny(missing_docs)]

//! Branching tree for the multiverse simulation.
//!
//! A single [`BranchArena`] owns every [`BranchNode`] ever created and doubles
//! as the creation-ordered registry: a [`BranchId`] is a stable index into the
//! arena, parent and child links are non-owning ids, and nodes are never
//! removed or reordered.

mod arena;
mod ids;
mod structure;

pub use arena::{BranchArena, BranchNode};
pub use ids::BranchId;
pub use structure::BranchStructure;

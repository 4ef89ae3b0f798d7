use mva_core::{BasisKind, Bounds, Dimensionality, ErrorInfo, MvaError};
use mva_field::WaveFunction;
use mva_tree::{BranchArena, BranchId, BranchNode, BranchStructure};

use crate::reports::SessionState;

/// Orchestrates one simulation session: the branch tree, the selection
/// cursor, and the global clock.
///
/// The registry is the arena's creation order; `current` always refers to a
/// registry entry; `time` only moves forward. Every command either fully
/// applies or leaves the session exactly as it was.
#[derive(Debug, Clone)]
pub struct MultiverseEngine {
    arena: BranchArena,
    current: BranchId,
    time: f64,
}

impl MultiverseEngine {
    /// Creates a session whose root wraps the default wave function
    /// (1D, 100 samples, bounds [-5, 5], ground state).
    pub fn new() -> Self {
        let arena = BranchArena::new(WaveFunction::default());
        let current = arena.root();
        Self {
            arena,
            current,
            time: 0.0,
        }
    }

    /// Discards the session and starts over from a freshly initialized root.
    ///
    /// The replacement wave is built and initialized before the old tree is
    /// touched, so a parameter failure leaves the running session intact.
    /// On success the registry shrinks back to the root, the cursor points at
    /// it, and the clock returns to zero.
    pub fn initialize_with(
        &mut self,
        dimensionality: Dimensionality,
        resolution: usize,
        kind: BasisKind,
        bounds: Bounds,
    ) -> Result<SessionState, MvaError> {
        let mut wave = WaveFunction::new(dimensionality, resolution, bounds)?;
        wave.initialize(kind);
        self.arena = BranchArena::new(wave);
        self.current = self.arena.root();
        self.time = 0.0;
        Ok(self.state())
    }

    /// Triggers a branching event on the current branch.
    ///
    /// The new branches join the registry in creation order; the cursor does
    /// not move (selection is a separate, explicit operation).
    pub fn trigger_event(&mut self, num_branches: usize) -> Result<Vec<BranchId>, MvaError> {
        self.trigger_event_on(self.current, num_branches)
    }

    /// Triggers a branching event on an explicit branch.
    pub fn trigger_event_on(
        &mut self,
        branch: BranchId,
        num_branches: usize,
    ) -> Result<Vec<BranchId>, MvaError> {
        self.arena.branch(branch, num_branches)
    }

    /// Advances the clock and evolves every branch by the same step.
    ///
    /// Branches evolve in registry order with no per-branch time skew. The
    /// per-branch renormalization can only fail on a degenerate field, which
    /// none of the engine's own operations can produce; the error path is
    /// still propagated rather than swallowed.
    pub fn evolve_all(&mut self, time_step: f64) -> Result<SessionState, MvaError> {
        self.time += time_step;
        for (_, node) in self.arena.iter_mut() {
            node.wave_mut().evolve(time_step)?;
        }
        Ok(self.state())
    }

    /// Moves the cursor to the branch at `index` in the registry.
    ///
    /// Fails, leaving the session untouched, when the index is outside the
    /// registry.
    pub fn select_branch(&mut self, index: usize) -> Result<BranchId, MvaError> {
        if index >= self.arena.len() {
            return Err(MvaError::Index(
                ErrorInfo::new(
                    "engine.bad-branch-index",
                    format!("branch index {index} is outside the registry"),
                )
                .with_context("index", index.to_string())
                .with_context("branch_count", self.arena.len().to_string()),
            ));
        }
        self.current = BranchId::from_raw(index);
        Ok(self.current)
    }

    /// Snapshot of the session bookkeeping.
    pub fn state(&self) -> SessionState {
        SessionState {
            time: self.time,
            branch_count: self.arena.len(),
            current_branch: self.current.as_raw(),
        }
    }

    /// Probability projection of the whole tree, for external renderers.
    pub fn branch_structure(&self) -> BranchStructure {
        self.arena.structure()
    }

    /// Probability density of the branch at `index` in the registry.
    pub fn probability_density(&self, index: usize) -> Result<Vec<f64>, MvaError> {
        let node = self.arena.get(BranchId::from_raw(index)).ok_or_else(|| {
            MvaError::Index(
                ErrorInfo::new(
                    "engine.bad-branch-index",
                    format!("branch index {index} is outside the registry"),
                )
                .with_context("index", index.to_string())
                .with_context("branch_count", self.arena.len().to_string()),
            )
        })?;
        Ok(node.wave().probability_density())
    }

    /// Probability density of the currently selected branch.
    pub fn current_density(&self) -> Vec<f64> {
        self.current_branch().wave().probability_density()
    }

    /// The currently selected branch.
    pub fn current_branch(&self) -> &BranchNode {
        &self.arena[self.current]
    }

    /// Registry index of the currently selected branch.
    pub fn current_index(&self) -> usize {
        self.current.as_raw()
    }

    /// Simulation time accumulated by [`MultiverseEngine::evolve_all`].
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Total number of branches ever created in this session.
    pub fn branch_count(&self) -> usize {
        self.arena.len()
    }

    /// Looks up a branch by id.
    pub fn branch(&self, id: BranchId) -> Option<&BranchNode> {
        self.arena.get(id)
    }

    /// The underlying arena, for read-only traversal.
    pub fn arena(&self) -> &BranchArena {
        &self.arena
    }
}

impl Default for MultiverseEngine {
    fn default() -> Self {
        Self::new()
    }
}

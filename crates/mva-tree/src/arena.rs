use mva_core::{BasisKind, ErrorInfo, MvaError};
use mva_field::WaveFunction;

use crate::ids::BranchId;

/// One node of the branching tree.
///
/// A node exclusively owns its wave function; tree links are non-owning
/// [`BranchId`]s resolved through the arena.
#[derive(Debug, Clone)]
pub struct BranchNode {
    wave: WaveFunction,
    parent: Option<BranchId>,
    children: Vec<BranchId>,
    branch_probability: f64,
    absolute_probability: f64,
}

impl BranchNode {
    /// The wave function carried by this branch.
    pub fn wave(&self) -> &WaveFunction {
        &self.wave
    }

    /// Mutable access to the wave function for initialization and evolution.
    pub fn wave_mut(&mut self) -> &mut WaveFunction {
        &mut self.wave
    }

    /// Parent branch, `None` for the root.
    pub fn parent(&self) -> Option<BranchId> {
        self.parent
    }

    /// Children in creation order; append-only.
    pub fn children(&self) -> &[BranchId] {
        &self.children
    }

    /// Probability weight relative to the parent.
    ///
    /// Taken as given: the weight is not clamped to [0, 1] and siblings are
    /// not required to sum to one.
    pub fn branch_probability(&self) -> f64 {
        self.branch_probability
    }

    /// Product of the relative weights along the path from the root.
    ///
    /// Computed once when the node is attached and never recomputed.
    pub fn absolute_probability(&self) -> f64 {
        self.absolute_probability
    }
}

/// Owned storage for every branch of a simulation session.
///
/// The backing `Vec` is simultaneously the ownership store and the
/// creation-ordered registry: index 0 is always the root, new nodes are
/// appended, and nothing is ever removed or reordered.
#[derive(Debug, Clone)]
pub struct BranchArena {
    nodes: Vec<BranchNode>,
}

impl BranchArena {
    /// Creates an arena holding a single root branch around `root_wave`.
    ///
    /// The root carries relative and absolute probability 1.
    pub fn new(root_wave: WaveFunction) -> Self {
        Self {
            nodes: vec![BranchNode {
                wave: root_wave,
                parent: None,
                children: Vec::new(),
                branch_probability: 1.0,
                absolute_probability: 1.0,
            }],
        }
    }

    /// Identifier of the root branch.
    pub fn root(&self) -> BranchId {
        BranchId::from_raw(0)
    }

    /// Number of branches created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: an arena holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true when `id` refers to a branch in the registry.
    pub fn contains(&self, id: BranchId) -> bool {
        id.as_raw() < self.nodes.len()
    }

    /// Looks up a branch by id.
    pub fn get(&self, id: BranchId) -> Option<&BranchNode> {
        self.nodes.get(id.as_raw())
    }

    /// Looks up a branch by id for mutation.
    pub fn get_mut(&mut self, id: BranchId) -> Option<&mut BranchNode> {
        self.nodes.get_mut(id.as_raw())
    }

    /// Iterates branches in registry (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = (BranchId, &BranchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (BranchId::from_raw(index), node))
    }

    /// Iterates branches mutably in registry (creation) order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BranchId, &mut BranchNode)> {
        self.nodes
            .iter_mut()
            .enumerate()
            .map(|(index, node)| (BranchId::from_raw(index), node))
    }

    /// Attaches a new child branch under `parent` and returns its id.
    ///
    /// The child's absolute probability is fixed here as
    /// `parent.absolute_probability * branch_probability`.
    pub fn add_child(
        &mut self,
        parent: BranchId,
        wave: WaveFunction,
        branch_probability: f64,
    ) -> Result<BranchId, MvaError> {
        let parent_node = self.nodes.get(parent.as_raw()).ok_or_else(|| {
            MvaError::Index(
                ErrorInfo::new("tree.bad-parent", "parent branch is not in the registry")
                    .with_context("parent", parent.as_raw().to_string())
                    .with_context("registry_len", self.nodes.len().to_string()),
            )
        })?;
        let absolute_probability = parent_node.absolute_probability * branch_probability;

        let id = BranchId::from_raw(self.nodes.len());
        self.nodes.push(BranchNode {
            wave,
            parent: Some(parent),
            children: Vec::new(),
            branch_probability,
            absolute_probability,
        });
        self.nodes[parent.as_raw()].children.push(id);
        Ok(id)
    }

    /// Splits `parent` into `num_branches` equally weighted children.
    ///
    /// Each child wraps a fresh wave function sharing the parent's grid
    /// geometry, initialized by ordinal position: the first child ground, the
    /// second excited, every further child superposition. Returns the new ids
    /// in creation order. Fails before any mutation when `num_branches` is
    /// zero or `parent` is dangling.
    pub fn branch(
        &mut self,
        parent: BranchId,
        num_branches: usize,
    ) -> Result<Vec<BranchId>, MvaError> {
        if num_branches == 0 {
            return Err(MvaError::Parameter(
                ErrorInfo::new("tree.bad-branch-count", "cannot branch into zero children")
                    .with_context("num_branches", "0")
                    .with_hint("request at least one branch"),
            ));
        }
        let (dimensionality, resolution, bounds) = {
            let node = self.get(parent).ok_or_else(|| {
                MvaError::Index(
                    ErrorInfo::new("tree.bad-parent", "parent branch is not in the registry")
                        .with_context("parent", parent.as_raw().to_string())
                        .with_context("registry_len", self.nodes.len().to_string()),
                )
            })?;
            let wave = node.wave();
            (wave.dimensionality(), wave.resolution(), wave.bounds())
        };

        // Build every child wave before touching the tree so a failure cannot
        // leave a partial split behind.
        let mut waves = Vec::with_capacity(num_branches);
        for ordinal in 0..num_branches {
            let mut wave = WaveFunction::new(dimensionality, resolution, bounds)?;
            wave.initialize(basis_for_ordinal(ordinal));
            waves.push(wave);
        }

        let probability = 1.0 / num_branches as f64;
        let mut created = Vec::with_capacity(num_branches);
        for wave in waves {
            created.push(self.add_child(parent, wave, probability)?);
        }
        Ok(created)
    }
}

impl std::ops::Index<BranchId> for BranchArena {
    type Output = BranchNode;

    fn index(&self, id: BranchId) -> &BranchNode {
        &self.nodes[id.as_raw()]
    }
}

/// Positional basis rule for freshly split children.
fn basis_for_ordinal(ordinal: usize) -> BasisKind {
    match ordinal {
        0 => BasisKind::Ground,
        1 => BasisKind::Excited,
        _ => BasisKind::Superposition,
    }
}

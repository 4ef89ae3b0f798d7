use mva_core::{Bounds, Dimensionality};
use mva_field::WaveFunction;
use mva_tree::{BranchArena, BranchId};
use proptest::prelude::*;

/// Stable per-node fingerprint: parent link and both probabilities never
/// change once a node is attached.
fn fingerprints(arena: &BranchArena) -> Vec<(Option<BranchId>, f64, f64)> {
    arena
        .iter()
        .map(|(_, node)| {
            (
                node.parent(),
                node.branch_probability(),
                node.absolute_probability(),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn events_never_disturb_existing_registry_entries(
        events in proptest::collection::vec((any::<u16>(), 1usize..4), 1..12)
    ) {
        let wave = WaveFunction::new(Dimensionality::One, 16, Bounds::default()).unwrap();
        let mut arena = BranchArena::new(wave);

        for (target, num_branches) in events {
            let before = fingerprints(&arena);
            let parent = BranchId::from_raw(target as usize % arena.len());
            let created = arena.branch(parent, num_branches).unwrap();

            // New ids extend the registry contiguously, in creation order.
            prop_assert_eq!(created.len(), num_branches);
            for (offset, id) in created.iter().enumerate() {
                prop_assert_eq!(id.as_raw(), before.len() + offset);
            }

            // Every previously valid index still resolves to the same node.
            let after = fingerprints(&arena);
            prop_assert_eq!(&after[..before.len()], &before[..]);
        }
    }
}

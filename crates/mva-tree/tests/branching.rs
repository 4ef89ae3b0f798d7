use mva_core::{BasisKind, Bounds, Dimensionality};
use mva_field::WaveFunction;
use mva_tree::{BranchArena, BranchId};

fn arena_1d(resolution: usize) -> BranchArena {
    let wave = WaveFunction::new(Dimensionality::One, resolution, Bounds::default()).unwrap();
    BranchArena::new(wave)
}

#[test]
fn branch_produces_an_equal_split() {
    let mut arena = arena_1d(100);
    let root = arena.root();
    let children = arena.branch(root, 4).unwrap();

    assert_eq!(children.len(), 4);
    let mut sum = 0.0;
    for &child in &children {
        let node = arena.get(child).unwrap();
        assert!((node.branch_probability() - 0.25).abs() <= 1e-12);
        assert_eq!(node.parent(), Some(root));
        sum += node.absolute_probability();
    }
    let parent_abs = arena.get(root).unwrap().absolute_probability();
    assert!((sum - parent_abs).abs() <= 1e-12);
}

#[test]
fn children_follow_the_positional_basis_rule() {
    let resolution = 80;
    let mut arena = arena_1d(resolution);
    let root = arena.root();
    let children = arena.branch(root, 4).unwrap();

    let expected_kinds = [
        BasisKind::Ground,
        BasisKind::Excited,
        BasisKind::Superposition,
        BasisKind::Superposition,
    ];
    for (&child, kind) in children.iter().zip(expected_kinds) {
        let mut reference =
            WaveFunction::new(Dimensionality::One, resolution, Bounds::default()).unwrap();
        reference.initialize(kind);
        let child_wave = arena.get(child).unwrap().wave();
        for (value, expected) in child_wave.psi().iter().zip(reference.psi()) {
            assert!(
                (value - expected).norm() <= 1e-12,
                "child does not match standalone {kind} state"
            );
        }
    }
}

#[test]
fn split_children_inherit_the_parent_grid_geometry() {
    let wave = WaveFunction::new(Dimensionality::Two, 32, Bounds::new(-3.0, 3.0).unwrap()).unwrap();
    let mut arena = BranchArena::new(wave);
    let root = arena.root();
    for &child in &arena.branch(root, 2).unwrap() {
        let child_wave = arena.get(child).unwrap().wave();
        assert_eq!(child_wave.dimensionality(), Dimensionality::Two);
        assert_eq!(child_wave.resolution(), 32);
        assert_eq!(child_wave.bounds(), Bounds::new(-3.0, 3.0).unwrap());
    }
}

#[test]
fn zero_branch_count_is_rejected_before_mutation() {
    let mut arena = arena_1d(50);
    let root = arena.root();
    let err = arena.branch(root, 0).unwrap_err();
    assert_eq!(err.code(), "tree.bad-branch-count");
    assert_eq!(arena.len(), 1);
    assert!(arena.get(root).unwrap().children().is_empty());
}

#[test]
fn dangling_parent_is_rejected() {
    let mut arena = arena_1d(50);
    let wave = WaveFunction::new(Dimensionality::One, 50, Bounds::default()).unwrap();
    let err = arena
        .add_child(BranchId::from_raw(7), wave, 0.5)
        .unwrap_err();
    assert_eq!(err.code(), "tree.bad-parent");
    assert_eq!(arena.len(), 1);
}

#[test]
fn new_ids_are_appended_in_creation_order() {
    let mut arena = arena_1d(50);
    let root = arena.root();
    let first = arena.branch(root, 2).unwrap();
    assert_eq!(first.iter().map(BranchId::as_raw).collect::<Vec<_>>(), [1, 2]);
    let second = arena.branch(first[0], 3).unwrap();
    assert_eq!(
        second.iter().map(BranchId::as_raw).collect::<Vec<_>>(),
        [3, 4, 5]
    );
    assert_eq!(arena.len(), 6);
}

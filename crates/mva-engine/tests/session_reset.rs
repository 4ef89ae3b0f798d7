use mva_core::{BasisKind, Bounds, Dimensionality};
use mva_engine::MultiverseEngine;

#[test]
fn a_fresh_engine_wraps_the_default_grid() {
    let engine = MultiverseEngine::new();
    assert_eq!(engine.branch_count(), 1);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.time(), 0.0);

    let wave = engine.current_branch().wave();
    assert_eq!(wave.dimensionality(), Dimensionality::One);
    assert_eq!(wave.resolution(), 100);
    assert_eq!(wave.bounds(), Bounds::default());
}

#[test]
fn initialize_discards_the_previous_tree() {
    let mut engine = MultiverseEngine::new();
    engine.trigger_event(3).unwrap();
    engine.evolve_all(0.5).unwrap();
    engine.select_branch(2).unwrap();

    let state = engine
        .initialize_with(
            Dimensionality::Two,
            64,
            BasisKind::Superposition,
            Bounds::default(),
        )
        .unwrap();
    assert_eq!(state.time, 0.0);
    assert_eq!(state.branch_count, 1);
    assert_eq!(state.current_branch, 0);

    let wave = engine.current_branch().wave();
    assert_eq!(wave.dimensionality(), Dimensionality::Two);
    assert_eq!(wave.resolution(), 64);
    assert_eq!(wave.grid_len(), 64 * 64);
}

#[test]
fn rejected_initialization_leaves_the_session_running() {
    let mut engine = MultiverseEngine::new();
    engine.trigger_event(2).unwrap();
    engine.evolve_all(0.1).unwrap();
    engine.select_branch(1).unwrap();
    let before = engine.state();

    let err = engine
        .initialize_with(
            Dimensionality::One,
            100,
            BasisKind::Ground,
            Bounds { min: 5.0, max: -5.0 },
        )
        .unwrap_err();
    assert_eq!(err.code(), "core.bad-bounds");
    assert_eq!(engine.state(), before);

    let err = engine
        .initialize_with(Dimensionality::One, 1, BasisKind::Ground, Bounds::default())
        .unwrap_err();
    assert_eq!(err.code(), "field.bad-resolution");
    assert_eq!(engine.state(), before);
}

#[test]
fn time_accumulates_monotonically() {
    let mut engine = MultiverseEngine::new();
    engine.evolve_all(0.1).unwrap();
    engine.evolve_all(0.25).unwrap();
    let state = engine.evolve_all(0.05).unwrap();
    assert!((state.time - 0.4).abs() <= 1e-12);
}

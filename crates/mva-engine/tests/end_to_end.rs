use mva_core::{BasisKind, Bounds, Dimensionality};
use mva_engine::MultiverseEngine;
use mva_field::WaveFunction;

fn total_probability(wave: &WaveFunction) -> f64 {
    let spacing = wave.bounds().width() / wave.resolution() as f64;
    let measure = match wave.dimensionality() {
        Dimensionality::One => spacing,
        Dimensionality::Two => spacing * spacing,
    };
    wave.probability_density().iter().sum::<f64>() * measure
}

#[test]
fn full_session_walkthrough() {
    let mut engine = MultiverseEngine::new();

    let state = engine
        .initialize_with(
            Dimensionality::One,
            100,
            BasisKind::Ground,
            Bounds::default(),
        )
        .unwrap();
    assert_eq!(state.time, 0.0);
    assert_eq!(state.branch_count, 1);
    assert_eq!(state.current_branch, 0);

    let created = engine.trigger_event(2).unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(engine.branch_count(), 3);
    assert_eq!(engine.time(), 0.0);
    assert_eq!(engine.current_index(), 0, "branching must not move the cursor");

    let state = engine.evolve_all(0.5).unwrap();
    assert_eq!(state.time, 0.5);
    assert_eq!(state.branch_count, 3);
    for index in 0..engine.branch_count() {
        let node = engine.branch(mva_tree::BranchId::from_raw(index)).unwrap();
        let total = total_probability(node.wave());
        assert!(
            (total - 1.0).abs() <= 1e-6,
            "branch {index} drifted to total probability {total}"
        );
    }

    let selected = engine.select_branch(1).unwrap();
    assert_eq!(selected.as_raw(), 1);
    assert_eq!(engine.current_index(), 1);

    let err = engine.select_branch(99).unwrap_err();
    assert_eq!(err.code(), "engine.bad-branch-index");
    let state = engine.state();
    assert_eq!(state.time, 0.5);
    assert_eq!(state.branch_count, 3);
    assert_eq!(state.current_branch, 1);
}

#[test]
fn events_target_the_selected_branch() {
    let mut engine = MultiverseEngine::new();
    engine.trigger_event(2).unwrap();
    engine.select_branch(1).unwrap();
    let created = engine.trigger_event(3).unwrap();

    for id in created {
        let node = engine.branch(id).unwrap();
        assert_eq!(node.parent().map(|p| p.as_raw()), Some(1));
    }
    assert_eq!(engine.branch_count(), 6);
}

#[test]
fn structure_projection_tracks_the_session_tree() {
    let mut engine = MultiverseEngine::new();
    let children = engine.trigger_event(2).unwrap();
    engine.trigger_event_on(children[0], 2).unwrap();

    let structure = engine.branch_structure();
    assert_eq!(structure.probability, 1.0);
    assert_eq!(structure.children.len(), 2);
    assert_eq!(structure.children[0].children.len(), 2);
    for grandchild in &structure.children[0].children {
        assert!((grandchild.probability - 0.25).abs() <= 1e-12);
    }
}

#[test]
fn density_lookup_is_bounds_checked() {
    let engine = MultiverseEngine::new();
    let density = engine.probability_density(0).unwrap();
    assert_eq!(density.len(), engine.current_branch().wave().grid_len());

    let err = engine.probability_density(5).unwrap_err();
    assert_eq!(err.code(), "engine.bad-branch-index");
}

#[test]
fn session_state_round_trips_through_json() {
    let mut engine = MultiverseEngine::new();
    engine.trigger_event(2).unwrap();
    let state = engine.evolve_all(0.25).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: mva_engine::SessionState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}

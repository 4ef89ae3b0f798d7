use std::error::Error;

use clap::Args;
use mva_core::SchemaVersion;
use mva_engine::{MultiverseEngine, SessionState};
use mva_tree::BranchStructure;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Time step applied after each branching event.
    #[arg(long, default_value_t = 0.5)]
    pub time_step: f64,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    schema_version: SchemaVersion,
    state: SessionState,
    structure: BranchStructure,
}

/// Built-in session: split the root in two, evolve, move to the first child,
/// split it in three, evolve again.
pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let report = build_demo_report(args.time_step)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_demo_report(time_step: f64) -> Result<DemoReport, Box<dyn Error>> {
    let mut engine = MultiverseEngine::new();
    engine.trigger_event(2)?;
    engine.evolve_all(time_step)?;
    engine.select_branch(1)?;
    engine.trigger_event(3)?;
    engine.evolve_all(time_step)?;

    Ok(DemoReport {
        schema_version: SchemaVersion::default(),
        state: engine.state(),
        structure: engine.branch_structure(),
    })
}

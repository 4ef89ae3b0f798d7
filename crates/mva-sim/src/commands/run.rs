use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use csv::WriterBuilder;
use mva_core::{Dimensionality, MvaError, SchemaVersion};
use mva_engine::{MultiverseEngine, SessionState};
use mva_tree::{BranchId, BranchStructure};
use serde::Serialize;

use crate::scenario::{ScenarioConfig, Step};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML scenario describing the session.
    #[arg(long)]
    pub scenario: PathBuf,
    /// Output directory for session reports.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Serialize)]
struct StateReport {
    schema_version: SchemaVersion,
    state: SessionState,
}

#[derive(Debug, Serialize)]
struct StructureReport {
    schema_version: SchemaVersion,
    structure: BranchStructure,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config: ScenarioConfig = serde_yaml::from_str(&fs::read_to_string(&args.scenario)?)?;
    let engine = execute(&config)?;
    fs::create_dir_all(&args.out)?;
    write_reports(&engine, &args.out)?;
    Ok(())
}

/// Replays a scenario against a fresh engine.
pub(crate) fn execute(config: &ScenarioConfig) -> Result<MultiverseEngine, MvaError> {
    let mut engine = MultiverseEngine::new();
    engine.initialize_with(
        config.initialize.dimensions,
        config.initialize.resolution,
        config.initialize.state,
        config.initialize.bounds,
    )?;
    for step in &config.steps {
        match step {
            Step::Event {
                num_branches,
                branch,
            } => {
                match branch {
                    Some(index) => {
                        engine.trigger_event_on(BranchId::from_raw(*index), *num_branches)?
                    }
                    None => engine.trigger_event(*num_branches)?,
                };
            }
            Step::Evolve { time_step } => {
                engine.evolve_all(*time_step)?;
            }
            Step::Select { index } => {
                engine.select_branch(*index)?;
            }
        }
    }
    Ok(engine)
}

fn write_reports(engine: &MultiverseEngine, out: &Path) -> Result<(), Box<dyn Error>> {
    write_json(
        out.join("state.json"),
        &StateReport {
            schema_version: SchemaVersion::default(),
            state: engine.state(),
        },
    )?;
    write_json(
        out.join("structure.json"),
        &StructureReport {
            schema_version: SchemaVersion::default(),
            structure: engine.branch_structure(),
        },
    )?;
    write_density_csv(out.join("density.csv"), engine)?;
    Ok(())
}

fn write_json<T: Serialize>(path: PathBuf, payload: &T) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(payload)?)?;
    Ok(())
}

/// Dumps the current branch's probability density with its axis coordinates.
fn write_density_csv(path: PathBuf, engine: &MultiverseEngine) -> Result<(), Box<dyn Error>> {
    let wave = engine.current_branch().wave();
    let density = engine.current_density();
    let mut writer = WriterBuilder::new().from_path(path)?;
    match wave.dimensionality() {
        Dimensionality::One => {
            writer.write_record(["x", "density"])?;
            for (&x, value) in wave.axis().iter().zip(&density) {
                writer.write_record([x.to_string(), value.to_string()])?;
            }
        }
        Dimensionality::Two => {
            writer.write_record(["x", "y", "density"])?;
            let resolution = wave.resolution();
            for (iy, &y) in wave.axis().iter().enumerate() {
                for (ix, &x) in wave.axis().iter().enumerate() {
                    let value = density[iy * resolution + ix];
                    writer.write_record([x.to_string(), y.to_string(), value.to_string()])?;
                }
            }
        }
    }
    writer.flush()?;
    Ok(())
}

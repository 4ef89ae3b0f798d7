//! YAML scenario schema and defaults.

use mva_core::{BasisKind, Bounds, Dimensionality};
use serde::{Deserialize, Serialize};

/// YAML-configurable scenario executed against a fresh engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Root initialization parameters.
    #[serde(default)]
    pub initialize: InitializeConfig,
    /// Ordered steps applied after initialization.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Root wave function parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeConfig {
    /// Grid dimensionality (1 or 2).
    #[serde(default = "default_dimensions")]
    pub dimensions: Dimensionality,
    /// Samples per axis.
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    /// Basis state for the root branch.
    #[serde(default = "default_state")]
    pub state: BasisKind,
    /// Coordinate bounds shared by every axis.
    #[serde(default)]
    pub bounds: Bounds,
}

fn default_dimensions() -> Dimensionality {
    Dimensionality::One
}

fn default_resolution() -> usize {
    100
}

fn default_state() -> BasisKind {
    BasisKind::Ground
}

impl Default for InitializeConfig {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
            resolution: default_resolution(),
            state: default_state(),
            bounds: Bounds::default(),
        }
    }
}

/// One scripted session operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Step {
    /// Trigger a branching event.
    Event {
        /// Number of children to split into.
        #[serde(default = "default_num_branches")]
        num_branches: usize,
        /// Registry index of the branch to split; the current branch when absent.
        #[serde(default)]
        branch: Option<usize>,
    },
    /// Advance every branch by one time step.
    Evolve {
        /// Step size added to the session clock.
        #[serde(default = "default_time_step")]
        time_step: f64,
    },
    /// Move the cursor to a registry index.
    Select {
        /// Target registry index.
        index: usize,
    },
}

fn default_num_branches() -> usize {
    2
}

fn default_time_step() -> f64 {
    0.1
}

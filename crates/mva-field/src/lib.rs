#![deny(missing_docs)]

//! Discretized complex-valued wave functions over 1D and 2D grids.

mod grid;
mod wave;

pub use wave::{WaveFunction, DEFAULT_RESOLUTION};

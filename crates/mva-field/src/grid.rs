//! Coordinate sampling and precomputed energy-factor fields.

use mva_core::Bounds;

/// Upper end of the linear energy ramp applied to 1D grids.
const RAMP_TOP: f64 = 5.0;

/// Samples `[min, max]` inclusively into `resolution` evenly spaced points.
///
/// Requires `resolution >= 2`; the caller validates before building a grid.
pub(crate) fn sample_axis(bounds: Bounds, resolution: usize) -> Vec<f64> {
    let step = bounds.width() / (resolution - 1) as f64;
    (0..resolution)
        .map(|index| bounds.min + step * index as f64)
        .collect()
}

/// Per-point spacing used by the discrete normalization sum.
///
/// This divides by `resolution`, not `resolution - 1`: the normalization
/// measure deliberately differs from the inclusive-endpoint axis sampling.
pub(crate) fn norm_spacing(bounds: Bounds, resolution: usize) -> f64 {
    bounds.width() / resolution as f64
}

/// Linear energy ramp from 0 to 5 across sample positions.
///
/// The ramp is indexed by sample position, not by physical coordinate.
pub(crate) fn ramp_energy(resolution: usize) -> Vec<f64> {
    let step = RAMP_TOP / (resolution - 1) as f64;
    (0..resolution).map(|index| step * index as f64).collect()
}

/// Radial energy factor `x^2 + y^2` over the outer-product grid, row-major
/// with x varying fastest.
pub(crate) fn radial_energy(axis: &[f64]) -> Vec<f64> {
    let mut energy = Vec::with_capacity(axis.len() * axis.len());
    for &y in axis {
        for &x in axis {
            energy.push(x * x + y * y);
        }
    }
    energy
}

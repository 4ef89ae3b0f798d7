use std::f64::consts::{FRAC_1_SQRT_2, PI};

use mva_core::{BasisKind, Bounds, Dimensionality, ErrorInfo, MvaError};
use num_complex::Complex64;

use crate::grid;

/// Default per-axis sample count for a wave function.
pub const DEFAULT_RESOLUTION: usize = 100;

/// A discretized complex-valued wave function over a 1D or 2D grid.
///
/// The grid geometry (dimensionality, resolution, bounds) is fixed at
/// construction; only the amplitude field `psi` is mutated, in place, by
/// [`WaveFunction::initialize`] and [`WaveFunction::evolve`]. Both axes of a
/// 2D grid share the same sampling; the field is stored row-major with x
/// varying fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveFunction {
    dimensionality: Dimensionality,
    resolution: usize,
    bounds: Bounds,
    axis: Vec<f64>,
    energy: Vec<f64>,
    psi: Vec<Complex64>,
}

impl WaveFunction {
    /// Creates a grid with the given geometry, initialized to the ground state.
    ///
    /// Fails if the bounds are malformed or the resolution is below two
    /// samples (the inclusive-endpoint axis is undefined at a single sample).
    pub fn new(
        dimensionality: Dimensionality,
        resolution: usize,
        bounds: Bounds,
    ) -> Result<Self, MvaError> {
        bounds.validate()?;
        if resolution < 2 {
            return Err(MvaError::Parameter(
                ErrorInfo::new(
                    "field.bad-resolution",
                    format!("resolution {resolution} is too small to span the bounds"),
                )
                .with_context("resolution", resolution.to_string())
                .with_hint("at least 2 samples per axis are required"),
            ));
        }
        Ok(Self::from_parts(dimensionality, resolution, bounds))
    }

    /// Builds the grid from already validated parameters.
    fn from_parts(dimensionality: Dimensionality, resolution: usize, bounds: Bounds) -> Self {
        let axis = grid::sample_axis(bounds, resolution);
        let (energy, grid_len) = match dimensionality {
            Dimensionality::One => (grid::ramp_energy(resolution), resolution),
            Dimensionality::Two => (grid::radial_energy(&axis), resolution * resolution),
        };
        let mut wave = Self {
            dimensionality,
            resolution,
            bounds,
            axis,
            energy,
            psi: vec![Complex64::new(0.0, 0.0); grid_len],
        };
        wave.initialize(BasisKind::Ground);
        wave
    }

    /// Overwrites the amplitude field with the named basis state.
    ///
    /// The superposition state is built compositionally: the ground field is
    /// generated and retained, the excited field is generated over it, and the
    /// two are combined as `(ground + i * excited) / sqrt(2)`.
    pub fn initialize(&mut self, kind: BasisKind) {
        match kind {
            BasisKind::Ground => self.fill_ground(),
            BasisKind::Excited => self.fill_excited(),
            BasisKind::Superposition => {
                self.initialize(BasisKind::Ground);
                let ground = self.psi.clone();
                self.initialize(BasisKind::Excited);
                for (value, ground) in self.psi.iter_mut().zip(ground) {
                    *value = (ground + Complex64::i() * *value) * FRAC_1_SQRT_2;
                }
            }
        }
    }

    fn fill_ground(&mut self) {
        let inv_sqrt_pi = PI.sqrt().recip();
        let resolution = self.resolution;
        let dimensionality = self.dimensionality;
        let Self { axis, psi, .. } = self;
        match dimensionality {
            Dimensionality::One => {
                for (value, &x) in psi.iter_mut().zip(axis.iter()) {
                    *value = Complex64::new((-0.5 * x * x).exp() * inv_sqrt_pi, 0.0);
                }
            }
            Dimensionality::Two => {
                for (iy, &y) in axis.iter().enumerate() {
                    for (ix, &x) in axis.iter().enumerate() {
                        let r2 = x * x + y * y;
                        psi[iy * resolution + ix] =
                            Complex64::new((-0.5 * r2).exp() * inv_sqrt_pi, 0.0);
                    }
                }
            }
        }
    }

    fn fill_excited(&mut self) {
        let inv_sqrt_pi = PI.sqrt().recip();
        let resolution = self.resolution;
        let dimensionality = self.dimensionality;
        let Self { axis, psi, .. } = self;
        match dimensionality {
            Dimensionality::One => {
                for (value, &x) in psi.iter_mut().zip(axis.iter()) {
                    *value = Complex64::new(x * (-0.5 * x * x).exp() * inv_sqrt_pi, 0.0);
                }
            }
            Dimensionality::Two => {
                for (iy, &y) in axis.iter().enumerate() {
                    for (ix, &x) in axis.iter().enumerate() {
                        let r2 = x * x + y * y;
                        psi[iy * resolution + ix] =
                            Complex64::new(r2 * (-0.5 * r2).exp() * inv_sqrt_pi, 0.0);
                    }
                }
            }
        }
    }

    /// Returns the squared magnitude of the field at every grid point.
    pub fn probability_density(&self) -> Vec<f64> {
        self.psi.iter().map(|value| value.norm_sqr()).collect()
    }

    /// Rescales the field so the discrete total probability equals one.
    ///
    /// The discrete total is `sum(|psi|^2) * spacing^d` with
    /// `spacing = (max - min) / resolution`. Fails, without touching the
    /// field, when the norm is zero or non-finite.
    pub fn normalize(&mut self) -> Result<(), MvaError> {
        let spacing = grid::norm_spacing(self.bounds, self.resolution);
        let measure = match self.dimensionality {
            Dimensionality::One => spacing,
            Dimensionality::Two => spacing * spacing,
        };
        let total: f64 = self.psi.iter().map(|value| value.norm_sqr()).sum();
        let norm = (total * measure).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return Err(MvaError::Degenerate(
                ErrorInfo::new(
                    "field.zero-norm",
                    format!("cannot renormalize a field with norm {norm}"),
                )
                .with_hint("initialize the field to a basis state before normalizing"),
            ));
        }
        for value in &mut self.psi {
            *value /= norm;
        }
        Ok(())
    }

    /// Advances the field by one time step of the phase-rotation evolution.
    ///
    /// Each point is rotated by the unit phasor `exp(-i * energy * dt)` from
    /// the precomputed energy-factor field, so the rotation itself never
    /// changes magnitudes; the renormalization pass that follows is part of
    /// the observable contract and is kept even though it is a no-op on an
    /// already normalized field.
    pub fn evolve(&mut self, time_step: f64) -> Result<(), MvaError> {
        for (value, &energy) in self.psi.iter_mut().zip(self.energy.iter()) {
            *value *= Complex64::from_polar(1.0, -energy * time_step);
        }
        self.normalize()
    }

    /// Dimensionality of the grid.
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Number of samples per axis.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Coordinate bounds shared by every axis.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Per-axis sample coordinates (both 2D axes use the same sampling).
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// The complex amplitude field, row-major with x varying fastest in 2D.
    pub fn psi(&self) -> &[Complex64] {
        &self.psi
    }

    /// Total number of grid points.
    pub fn grid_len(&self) -> usize {
        self.psi.len()
    }
}

impl Default for WaveFunction {
    /// The default grid: 1D, 100 samples, bounds [-5, 5], ground state.
    fn default() -> Self {
        Self::from_parts(Dimensionality::One, DEFAULT_RESOLUTION, Bounds::default())
    }
}

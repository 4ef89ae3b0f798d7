use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MvaError};

/// Spatial dimensionality of a wave function grid.
///
/// Only one and two dimensional grids are defined; every other raw value is
/// rejected at the conversion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensionality {
    /// A single spatial axis.
    One,
    /// Two spatial axes sharing resolution and bounds.
    Two,
}

impl Dimensionality {
    /// Converts a raw dimension count into a descriptor.
    pub fn from_raw(raw: u8) -> Result<Self, MvaError> {
        match raw {
            1 => Ok(Dimensionality::One),
            2 => Ok(Dimensionality::Two),
            other => Err(MvaError::Parameter(
                ErrorInfo::new(
                    "core.bad-dimensionality",
                    format!("dimensionality {other} is not supported"),
                )
                .with_context("dimensionality", other.to_string())
                .with_hint("only 1 and 2 dimensional grids are defined"),
            )),
        }
    }

    /// Returns the raw dimension count.
    pub fn as_raw(&self) -> u8 {
        match self {
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
        }
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = MvaError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Dimensionality::from_raw(raw)
    }
}

impl From<Dimensionality> for u8 {
    fn from(value: Dimensionality) -> Self {
        value.as_raw()
    }
}

/// Coordinate bounds shared by every axis of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower coordinate bound.
    pub min: f64,
    /// Upper coordinate bound, strictly greater than `min`.
    pub max: f64,
}

impl Bounds {
    /// Creates a validated bounds descriptor.
    pub fn new(min: f64, max: f64) -> Result<Self, MvaError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks that both bounds are finite and ordered.
    ///
    /// Deserialized bounds bypass [`Bounds::new`], so consumers re-validate at
    /// the point of use.
    pub fn validate(&self) -> Result<(), MvaError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(MvaError::Parameter(
                ErrorInfo::new(
                    "core.bad-bounds",
                    format!("bounds [{}, {}] are malformed", self.min, self.max),
                )
                .with_context("min", self.min.to_string())
                .with_context("max", self.max.to_string())
                .with_hint("bounds must be finite with min < max"),
            ));
        }
        Ok(())
    }

    /// Returns the coordinate extent `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: -5.0,
            max: 5.0,
        }
    }
}

/// Named initialization pattern for a wave function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasisKind {
    /// Normalized Gaussian centred at the origin.
    Ground,
    /// First excited shape: the Gaussian weighted by `x` (1D) or `r^2` (2D).
    Excited,
    /// Equal-weight complex combination of ground and excited.
    Superposition,
}

impl BasisKind {
    /// Returns the canonical lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BasisKind::Ground => "ground",
            BasisKind::Excited => "excited",
            BasisKind::Superposition => "superposition",
        }
    }
}

impl fmt::Display for BasisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BasisKind {
    type Err = MvaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ground" => Ok(BasisKind::Ground),
            "excited" => Ok(BasisKind::Excited),
            "superposition" => Ok(BasisKind::Superposition),
            other => Err(MvaError::Parameter(
                ErrorInfo::new(
                    "core.bad-basis-kind",
                    format!("unrecognized basis state kind `{other}`"),
                )
                .with_context("kind", other.to_string())
                .with_hint("expected one of: ground, excited, superposition"),
            )),
        }
    }
}

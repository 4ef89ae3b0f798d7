#![deny(missing_docs)]
#![doc = "Core error surface and shared domain vocabulary for the MVA engine."]

pub mod errors;
pub mod provenance;
mod types;

pub use errors::{ErrorInfo, MvaError};
pub use provenance::SchemaVersion;
pub use types::{BasisKind, Bounds, Dimensionality};

//! Core bending model machinery.
//!
//! Everything here is consumed through the thin public adapter in
//! [`bend`](super); see that module for the API surface.

mod config;
mod error;
mod invert;
mod model;
mod terms;
mod variant;

pub use config::{ModelSpec, ParameterPayload, PriorSummary};
pub use error::BendError;
pub use invert::{Inversion, Inverter, InverterConfig};
pub use model::BendModel;
pub use variant::ModelVariant;

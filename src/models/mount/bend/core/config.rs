//! Configuration payload for bending models.
//!
//! Fitted parameter sets arrive from external calibration tooling in one of
//! three equivalent shapes, all resolving to the same flat name-to-value map:
//!
//! ```json
//! {"name": "CTBendBasic4", "model": {"mean": {"IA": 0.1, ...}}}
//! {"name": "CTBendBasic4", "mean": {"IA": 0.1, ...}}
//! {"name": "CTBendBasic4", "IA": 0.1, ...}
//! ```
//!
//! Unknown or extra keys (posterior covariances, fit diagnostics, and so on)
//! are ignored. Parameter values are point estimates in degrees.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A model request: the registered variant name plus its parameter payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    /// Registered variant name, e.g. `"CTBendBasic8"`.
    pub name: String,

    /// Parameter payload in any of the accepted shapes.
    #[serde(flatten)]
    pub parameters: ParameterPayload,
}

/// The accepted parameter payload shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParameterPayload {
    /// Nested prior structure carrying a point estimate: `{"model": {"mean": {...}}}`.
    Prior {
        /// The prior block; only its mean is used here.
        model: PriorSummary,
    },
    /// Point estimate only: `{"mean": {...}}`.
    Mean {
        /// Flat name-to-value map in degrees.
        mean: BTreeMap<String, f64>,
    },
    /// Flat name-to-value map with no wrapper.
    ///
    /// Holds raw JSON values so that non-numeric extra keys (notes, fit
    /// diagnostics) can ride along and be dropped during resolution.
    Flat(BTreeMap<String, serde_json::Value>),
}

/// Summary of a fitted prior; fields other than the mean are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorSummary {
    /// Point estimate of each parameter, in degrees.
    pub mean: BTreeMap<String, f64>,
}

impl ParameterPayload {
    /// Resolves the payload to its flat name-to-value map.
    #[must_use]
    pub fn into_mean(self) -> BTreeMap<String, f64> {
        match self {
            ParameterPayload::Prior { model } => model.mean,
            ParameterPayload::Mean { mean } => mean,
            ParameterPayload::Flat(values) => values
                .into_iter()
                .filter_map(|(name, value)| value.as_f64().map(|number| (name, number)))
                .collect(),
        }
    }
}

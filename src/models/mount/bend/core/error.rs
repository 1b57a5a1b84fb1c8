use thiserror::Error;

/// Errors from bending model construction, evaluation, and inversion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BendError {
    /// The requested model name is not in the registered variant set.
    #[error("unknown bending model: {name:?}")]
    UnknownModel {
        /// Name that failed to resolve.
        name: String,
    },

    /// A term table references a parameter absent from the resolved mapping.
    ///
    /// Surfaces on the first evaluation that needs the parameter, never at
    /// construction time.
    #[error("bending model parameter {name:?} is missing from the resolved parameter set")]
    MissingParameter {
        /// The parameter the term table needed.
        name: &'static str,
    },

    /// The configuration payload could not be deserialized.
    #[error("invalid bending model payload")]
    InvalidPayload(#[from] serde_json::Error),

    /// The inversion inputs are not two equal-length sequences.
    #[error("inversion needs equal-length inputs, got {azimuths} azimuths and {elevations} elevations")]
    LengthMismatch {
        /// Number of azimuth values supplied.
        azimuths: usize,
        /// Number of elevation values supplied.
        elevations: usize,
    },

    /// An optimizer run aborted before producing a best point.
    ///
    /// Plain non-convergence is not an error; it is reported through the
    /// per-pair convergence flags instead.
    #[error("inversion optimizer failed: {0}")]
    Optimizer(String),
}

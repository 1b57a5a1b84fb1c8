//! Mount bending models.
//!
//! A bending model predicts the systematic pointing error of a steerable
//! mount as an additive azimuth/elevation offset, from a small set of fitted
//! physical parameters (index errors, axis misalignment, non-perpendicularity,
//! flexure). The model family shares one contract: a scalar correction per
//! axis plus its exact partial derivatives with respect to both axes.
//!
//! Calibration fits the parameters externally and hands them over as a
//! [`ModelSpec`] payload; [`resolve`] turns that into a ready [`BendModel`].
//!
//! ```
//! use pointing_models::models::mount::bend;
//! use uom::si::{angle::degree, f64::Angle};
//!
//! let model = bend::from_json(
//!     r#"{"name": "CTBendBasic4",
//!         "model": {"mean": {"IA": 0.1, "AW": 0.0, "AN": 0.0, "IE": 0.0}}}"#,
//! )?;
//!
//! let delta = model.delta_azimuth(
//!     Angle::new::<degree>(0.0),
//!     Angle::new::<degree>(45.0),
//! )?;
//! assert!((delta.get::<degree>() + 0.1).abs() < 1e-12);
//! # Ok::<(), bend::BendError>(())
//! ```
//!
//! The inverse problem (which uncorrected coordinates should be commanded so
//! that the corrected direction lands on a desired one) is solved numerically
//! by [`Inverter`].

pub(crate) mod core;

pub use self::core::{
    BendError, BendModel, Inversion, Inverter, InverterConfig, ModelSpec, ModelVariant,
    ParameterPayload, PriorSummary,
};

/// Builds the bending model a [`ModelSpec`] requests.
///
/// The name must exactly match a registered variant; the parameter payload
/// passes through untouched for the model to unpack.
///
/// # Errors
///
/// Returns [`BendError::UnknownModel`] if the name matches no registered
/// variant. Nothing is constructed in that case.
pub fn resolve(spec: ModelSpec) -> Result<BendModel, BendError> {
    let variant = ModelVariant::from_name(&spec.name).ok_or(BendError::UnknownModel {
        name: spec.name.clone(),
    })?;
    Ok(BendModel::new(variant, spec.parameters.into_mean()))
}

/// Deserializes a raw JSON payload and resolves it.
///
/// # Errors
///
/// Returns [`BendError::InvalidPayload`] if the payload does not deserialize,
/// or [`BendError::UnknownModel`] for an unregistered name.
pub fn from_json(payload: &str) -> Result<BendModel, BendError> {
    resolve(serde_json::from_str(payload)?)
}

/// Resolves an already-parsed JSON payload.
///
/// # Errors
///
/// Same conditions as [`from_json`].
pub fn from_value(payload: serde_json::Value) -> Result<BendModel, BendError> {
    resolve(serde_json::from_value(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn resolves_every_registered_variant() {
        for variant in ModelVariant::REGISTERED {
            let model = from_value(json!({"name": variant.name(), "mean": {}})).unwrap();
            assert_eq!(model.variant(), variant);
            assert_eq!(model.name(), variant.name());
        }
    }

    #[test]
    fn unknown_model_name_is_rejected() {
        let err = from_value(json!({"name": "Bogus", "mean": {"IA": 0.1}})).unwrap_err();
        assert!(matches!(err, BendError::UnknownModel { name } if name == "Bogus"));
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let err = from_json(r#"{"mean": {"IA": 0.1}}"#).unwrap_err();
        assert!(matches!(err, BendError::InvalidPayload(_)));
    }

    #[test]
    fn resolved_model_keeps_the_payload_parameters() {
        let model = from_value(json!({
            "name": "CTBendBasic8",
            "model": {"mean": {"IA": 0.1, "NPAE": -0.05}}
        }))
        .unwrap();

        assert_eq!(model.parameters().len(), 2);
        assert_eq!(model.parameters()["NPAE"], -0.05);
    }
}

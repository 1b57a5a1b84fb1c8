use std::collections::BTreeMap;

use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Ratio},
    ratio::ratio,
};

use super::{BendError, ModelVariant, terms::TermSet};

/// A configured bending model: a registered variant plus its fitted
/// parameter values.
///
/// Instances are immutable. Each owns its own resolved parameter map, so two
/// models never alias parameter storage. Corrections are additive offsets in
/// the mount's mechanical frame; the four derivative accessors report the
/// dimensionless local slope of each correction with respect to each axis.
///
/// Parameter values are in degrees. A parameter referenced by a term table
/// but absent from the map surfaces as [`BendError::MissingParameter`] on the
/// first evaluation that needs it, never at construction.
#[derive(Debug, Clone)]
pub struct BendModel {
    variant: ModelVariant,
    parameters: BTreeMap<String, f64>,
}

impl BendModel {
    /// Creates a model from a variant and a flat parameter map in degrees.
    ///
    /// No validation happens here; a short map is only detected when an
    /// evaluation first needs a missing name.
    #[must_use]
    pub fn new(variant: ModelVariant, parameters: BTreeMap<String, f64>) -> Self {
        Self {
            variant,
            parameters,
        }
    }

    /// The variant this model evaluates.
    #[must_use]
    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    /// The registered name of the variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    /// Sorted unique parameter names the variant's term tables reference.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&'static str> {
        self.variant.parameter_names()
    }

    /// The resolved parameter map, in degrees.
    #[must_use]
    pub fn parameters(&self) -> &BTreeMap<String, f64> {
        &self.parameters
    }

    /// Pointing correction in azimuth for a commanded direction.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::MissingParameter`] if a term references a
    /// parameter absent from the resolved map.
    pub fn delta_azimuth(&self, azimuth: Angle, elevation: Angle) -> Result<Angle, BendError> {
        let terms = self
            .variant
            .azimuth_terms(azimuth.get::<radian>(), elevation.get::<radian>());
        Ok(Angle::new::<degree>(self.weighted_sum(&terms)?))
    }

    /// Pointing correction in elevation for a commanded direction.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::MissingParameter`] if a term references a
    /// parameter absent from the resolved map.
    pub fn delta_elevation(&self, azimuth: Angle, elevation: Angle) -> Result<Angle, BendError> {
        let terms = self
            .variant
            .elevation_terms(azimuth.get::<radian>(), elevation.get::<radian>());
        Ok(Angle::new::<degree>(self.weighted_sum(&terms)?))
    }

    /// Slope of the azimuth correction with respect to azimuth.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::MissingParameter`] if a term references a
    /// parameter absent from the resolved map.
    pub fn azimuth_derivative_phi(
        &self,
        azimuth: Angle,
        elevation: Angle,
    ) -> Result<Ratio, BendError> {
        let terms = self
            .variant
            .azimuth_d_phi(azimuth.get::<radian>(), elevation.get::<radian>());
        self.derivative_sum(&terms)
    }

    /// Slope of the azimuth correction with respect to elevation.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::MissingParameter`] if a term references a
    /// parameter absent from the resolved map.
    pub fn azimuth_derivative_theta(
        &self,
        azimuth: Angle,
        elevation: Angle,
    ) -> Result<Ratio, BendError> {
        let terms = self
            .variant
            .azimuth_d_theta(azimuth.get::<radian>(), elevation.get::<radian>());
        self.derivative_sum(&terms)
    }

    /// Slope of the elevation correction with respect to azimuth.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::MissingParameter`] if a term references a
    /// parameter absent from the resolved map.
    pub fn elevation_derivative_phi(
        &self,
        azimuth: Angle,
        elevation: Angle,
    ) -> Result<Ratio, BendError> {
        let terms = self
            .variant
            .elevation_d_phi(azimuth.get::<radian>(), elevation.get::<radian>());
        self.derivative_sum(&terms)
    }

    /// Slope of the elevation correction with respect to elevation.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::MissingParameter`] if a term references a
    /// parameter absent from the resolved map.
    pub fn elevation_derivative_theta(
        &self,
        azimuth: Angle,
        elevation: Angle,
    ) -> Result<Ratio, BendError> {
        let terms = self
            .variant
            .elevation_d_theta(azimuth.get::<radian>(), elevation.get::<radian>());
        self.derivative_sum(&terms)
    }

    /// `Σ parameters[name] · coefficient[name]`, in degrees.
    fn weighted_sum(&self, terms: &TermSet) -> Result<f64, BendError> {
        let mut delta = 0.0;
        for (&name, coefficient) in terms {
            let value = self
                .parameters
                .get(name)
                .ok_or(BendError::MissingParameter { name })?;
            delta += value * coefficient;
        }
        Ok(delta)
    }

    /// Weighted sum over a derivative table, as a dimensionless slope.
    ///
    /// Parameters are degree-valued, so the raw sum is a slope in degrees per
    /// radian; the degrees-to-radians conversion makes it a natural ratio.
    fn derivative_sum(&self, terms: &TermSet) -> Result<Ratio, BendError> {
        Ok(Ratio::new::<ratio>(self.weighted_sum(terms)?.to_radians()))
    }
}

//! Registered bending model variants.

use super::terms::{TermSet, basic4, basic8};

/// A registered bending model variant.
///
/// Each variant provides six analytic term tables: the value coefficients for
/// the azimuth and elevation corrections, and the exact partial derivatives of
/// each with respect to azimuth (`phi`) and elevation (`theta`). Adding a
/// variant means adding one enum case, one terms module, and one registry
/// entry; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// Index errors plus two axis-misalignment components.
    Basic4,
    /// [`Basic4`](Self::Basic4) plus non-perpendicularity, encoder
    /// collimation, and tube flexure.
    Basic8,
}

impl ModelVariant {
    /// All variants the factory can resolve, in registration order.
    pub const REGISTERED: [ModelVariant; 2] = [ModelVariant::Basic4, ModelVariant::Basic8];

    /// The exact name the factory matches against.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ModelVariant::Basic4 => "CTBendBasic4",
            ModelVariant::Basic8 => "CTBendBasic8",
        }
    }

    /// Looks up a variant by its registered name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::REGISTERED.into_iter().find(|v| v.name() == name)
    }

    /// Sorted unique union of the parameter names used by the azimuth and
    /// elevation value tables.
    ///
    /// This is a structural property of the variant. The tables are evaluated
    /// at the fixed reference pair (0, 0); every variant must return the same
    /// key set at any angle pair.
    #[must_use]
    pub fn parameter_names(self) -> Vec<&'static str> {
        let mut names = self.azimuth_terms(0.0, 0.0);
        names.extend(self.elevation_terms(0.0, 0.0));
        names.into_keys().collect()
    }

    pub(super) fn azimuth_terms(self, az_rad: f64, el_rad: f64) -> TermSet {
        match self {
            ModelVariant::Basic4 => basic4::azimuth(az_rad, el_rad),
            ModelVariant::Basic8 => basic8::azimuth(az_rad, el_rad),
        }
    }

    pub(super) fn azimuth_d_phi(self, az_rad: f64, el_rad: f64) -> TermSet {
        match self {
            ModelVariant::Basic4 => basic4::azimuth_d_phi(az_rad, el_rad),
            ModelVariant::Basic8 => basic8::azimuth_d_phi(az_rad, el_rad),
        }
    }

    pub(super) fn azimuth_d_theta(self, az_rad: f64, el_rad: f64) -> TermSet {
        match self {
            ModelVariant::Basic4 => basic4::azimuth_d_theta(az_rad, el_rad),
            ModelVariant::Basic8 => basic8::azimuth_d_theta(az_rad, el_rad),
        }
    }

    pub(super) fn elevation_terms(self, az_rad: f64, el_rad: f64) -> TermSet {
        match self {
            ModelVariant::Basic4 => basic4::elevation(az_rad, el_rad),
            ModelVariant::Basic8 => basic8::elevation(az_rad, el_rad),
        }
    }

    pub(super) fn elevation_d_phi(self, az_rad: f64, el_rad: f64) -> TermSet {
        match self {
            ModelVariant::Basic4 => basic4::elevation_d_phi(az_rad, el_rad),
            ModelVariant::Basic8 => basic8::elevation_d_phi(az_rad, el_rad),
        }
    }

    pub(super) fn elevation_d_theta(self, az_rad: f64, el_rad: f64) -> TermSet {
        match self {
            ModelVariant::Basic4 => basic4::elevation_d_theta(az_rad, el_rad),
            ModelVariant::Basic8 => basic8::elevation_d_theta(az_rad, el_rad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_exact_names() {
        assert_eq!(
            ModelVariant::from_name("CTBendBasic4"),
            Some(ModelVariant::Basic4)
        );
        assert_eq!(
            ModelVariant::from_name("CTBendBasic8"),
            Some(ModelVariant::Basic8)
        );
        assert_eq!(ModelVariant::from_name("ctbendbasic4"), None);
        assert_eq!(ModelVariant::from_name("Bogus"), None);
    }

    #[test]
    fn parameter_names_are_sorted_and_unique() {
        assert_eq!(ModelVariant::Basic4.parameter_names(), ["AN", "AW", "IA", "IE"]);
        assert_eq!(
            ModelVariant::Basic8.parameter_names(),
            ["ACEC", "ACES", "AN", "AW", "IA", "IE", "NPAE", "TF"]
        );
    }

    #[test]
    fn parameter_names_do_not_depend_on_the_reference_angle() {
        for variant in ModelVariant::REGISTERED {
            let (az, el) = (37.0_f64.to_radians(), 52.0_f64.to_radians());
            let mut names = variant.azimuth_terms(az, el);
            names.extend(variant.elevation_terms(az, el));
            let at_angle: Vec<_> = names.into_keys().collect();

            assert_eq!(variant.parameter_names(), at_angle);
        }
    }
}

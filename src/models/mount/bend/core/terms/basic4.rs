//! Four-parameter bending model terms.
//!
//! Models azimuth/elevation index errors (`IA`, `IE`) and the two components
//! of azimuth-axis misalignment (`AW` toward west, `AN` toward north). The
//! misalignment terms are shared between the two axes.

use super::TermSet;

pub(crate) fn azimuth(az_rad: f64, el_rad: f64) -> TermSet {
    TermSet::from([
        ("IA", -1.0),
        ("AW", -az_rad.cos() * el_rad.tan()),
        ("AN", -az_rad.sin() * el_rad.tan()),
    ])
}

pub(crate) fn azimuth_d_phi(az_rad: f64, el_rad: f64) -> TermSet {
    TermSet::from([
        ("IA", 0.0),
        ("AW", az_rad.sin() * el_rad.tan()),
        ("AN", -az_rad.cos() * el_rad.tan()),
    ])
}

pub(crate) fn azimuth_d_theta(az_rad: f64, el_rad: f64) -> TermSet {
    let sec_sq = 1.0 / (el_rad.cos() * el_rad.cos());
    TermSet::from([
        ("IA", 0.0),
        ("AW", -az_rad.cos() * sec_sq),
        ("AN", -az_rad.sin() * sec_sq),
    ])
}

pub(crate) fn elevation(az_rad: f64, _el_rad: f64) -> TermSet {
    TermSet::from([
        ("IE", 1.0),
        ("AW", -az_rad.sin()),
        ("AN", -az_rad.cos()),
    ])
}

pub(crate) fn elevation_d_phi(az_rad: f64, _el_rad: f64) -> TermSet {
    TermSet::from([
        ("IE", 0.0),
        ("AW", -az_rad.cos()),
        ("AN", az_rad.sin()),
    ])
}

pub(crate) fn elevation_d_theta(_az_rad: f64, _el_rad: f64) -> TermSet {
    TermSet::from([("IE", 0.0), ("AW", 0.0), ("AN", 0.0)])
}

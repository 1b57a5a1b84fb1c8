//! Eight-parameter bending model terms.
//!
//! Extends the four-parameter tables with azimuth/elevation axis
//! non-perpendicularity (`NPAE`), the sine and cosine components of the
//! azimuth encoder/collimation error (`ACES`, `ACEC`), and tube flexure
//! (`TF`), which scales with the cosine of elevation.
//!
//! Building on the [`basic4`](super::basic4) tables keeps the superset
//! relationship structural: zeroing the four extra parameters reproduces the
//! four-parameter model exactly.

use super::{TermSet, basic4};

pub(crate) fn azimuth(az_rad: f64, el_rad: f64) -> TermSet {
    let mut terms = basic4::azimuth(az_rad, el_rad);
    terms.insert("NPAE", -el_rad.tan());
    terms.insert("ACES", az_rad.sin());
    terms.insert("ACEC", az_rad.cos());
    terms
}

pub(crate) fn azimuth_d_phi(az_rad: f64, el_rad: f64) -> TermSet {
    let mut terms = basic4::azimuth_d_phi(az_rad, el_rad);
    terms.insert("NPAE", 0.0);
    terms.insert("ACES", az_rad.cos());
    terms.insert("ACEC", -az_rad.sin());
    terms
}

pub(crate) fn azimuth_d_theta(az_rad: f64, el_rad: f64) -> TermSet {
    let mut terms = basic4::azimuth_d_theta(az_rad, el_rad);
    terms.insert("NPAE", -1.0 / (el_rad.cos() * el_rad.cos()));
    terms.insert("ACES", 0.0);
    terms.insert("ACEC", 0.0);
    terms
}

pub(crate) fn elevation(az_rad: f64, el_rad: f64) -> TermSet {
    let mut terms = basic4::elevation(az_rad, el_rad);
    terms.insert("TF", el_rad.cos());
    terms
}

pub(crate) fn elevation_d_phi(az_rad: f64, el_rad: f64) -> TermSet {
    let mut terms = basic4::elevation_d_phi(az_rad, el_rad);
    terms.insert("TF", 0.0);
    terms
}

pub(crate) fn elevation_d_theta(az_rad: f64, el_rad: f64) -> TermSet {
    let mut terms = basic4::elevation_d_theta(az_rad, el_rad);
    terms.insert("TF", -el_rad.sin());
    terms
}

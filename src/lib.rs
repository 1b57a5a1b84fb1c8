//! # Pointing Models
//!
//! Parametric models of the systematic pointing errors of steerable
//! instruments (telescope mounts and similar), together with the numerical
//! inversion that tracking needs.
//!
//! Given a commanded azimuth/elevation, a model predicts the additive angular
//! offset caused by mechanical imperfections: axis tilt, axis
//! non-perpendicularity, tube flexure, encoder offsets. Each model also
//! provides the exact partial derivatives of its corrections with respect to
//! both axes, and the inverse mapping (the coordinates to command so that the
//! corrected direction lands on a desired one) is recovered by per-pair
//! numerical minimization.
//!
//! ## Crate layout
//!
//! - [`models`]: The pointing model families; start at
//!   [`models::mount::bend`].
//! - [`support`]: Supporting utilities used by models.
//!
//! Parameter fitting against observational data, parameter-set persistence,
//! instrument control, and coordinate-frame transformations are external
//! concerns; this crate operates purely on angles already in the mount's
//! mechanical frame.

pub mod models;
pub mod support;

//! Mount-system models.
//!
//! Models for the mechanical behavior of steerable instrument mounts. All
//! angles live in the mount's own mechanical azimuth/elevation frame;
//! transforming to or from celestial frames is a separate concern.

pub mod bend;

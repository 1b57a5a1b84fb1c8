//! Public pointing models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`mount`]) based on an opinionated taxonomy. This organization may evolve
//! as more models are added.
//!
//! # Model structure
//!
//! Each model family lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The public
//! module is a thin adapter over the core API: factory functions plus
//! re-exports of the core types.

pub mod mount;

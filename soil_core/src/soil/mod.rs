//! # Soil Model
//!
//! Layered soil column used by every liquefaction method.
//!
//! - [`SoilLayer`] - one stratum with unit weights, fines and plasticity
//! - [`IndexProperties`] - optional index properties carried with a layer
//! - [`SoilProfile`] - validated layer stack with a water table and stress integration

pub mod layer;
pub mod profile;

pub use layer::{IndexProperties, SoilLayer};
pub use profile::{SoilProfile, WATER_UNIT_WEIGHT};

//! # soil_core - Soil Liquefaction Triggering Engine
//!
//! `soil_core` evaluates whether a layered soil profile liquefies under a
//! design earthquake and estimates the resulting settlement. Three in-situ
//! tests are supported, each with its own empirical triggering procedure:
//! CPT (Boulanger-Idriss), SPT (Idriss) and MASW (Andrus-Stokoe).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable profiles and logs
//! - **JSON-First**: All data types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types carrying depth, method and value
//! - **Auditable**: Every formula is registered with its literature reference
//!
//! ## Quick Start
//!
//! ```rust
//! use soil_core::experiments::{SptExp, SptLog};
//! use soil_core::liquefaction::spt;
//! use soil_core::soil::{SoilLayer, SoilProfile};
//!
//! let profile = SoilProfile::new(
//!     vec![
//!         SoilLayer::new(2.0, 16.0, 18.0),
//!         SoilLayer::new(5.0, 16.0, 18.0).with_fine_content(15.0),
//!     ],
//!     1.0,
//! ).unwrap();
//!
//! let log = SptLog::new(vec![
//!     SptExp::new(2.0, 9).with_corrected(9.0, 6.0, 11.0, 13.0),
//!     SptExp::new(7.0, 12).with_corrected(11.0, 8.0, 12.0, 16.0),
//! ]).unwrap();
//!
//! for result in spt::analyse_liquefaction(&profile, &log, 7.5, 0.3).unwrap() {
//!     println!("{:>5.1} m  FS = {:.2}  safe = {}", result.depth, result.safety_factor, result.is_safe);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`soil`] - Soil layers, profiles and the vertical stress model
//! - [`experiments`] - CPT, SPT and MASW records and depth-sorted logs
//! - [`equations`] - Pure formula functions and the equation registry
//! - [`liquefaction`] - Triggering procedures and the analysis driver
//! - [`settings`] - Analysis settings and earthquake parameters
//! - [`errors`] - Structured error types
//!
//! ## Features
//!
//! - `parallel` (default) - evaluate analysed depths on the rayon thread pool
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.

pub mod equations;
pub mod errors;
pub mod experiments;
pub mod liquefaction;
pub mod settings;
pub mod soil;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use experiments::{CptExp, CptLog, ExperimentLog, MaswExp, MaswLog, SptExp, SptLog};
pub use liquefaction::{LiquefactionResult, TriggeringMethod};
pub use settings::{AnalysisSettings, SeismicEvent};
pub use soil::{SoilLayer, SoilProfile};

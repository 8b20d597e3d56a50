//! # Liquefaction Triggering Analysis
//!
//! Evaluates, depth by depth, whether an earthquake triggers liquefaction in
//! a soil profile and how much the profile settles if it does. Three
//! triggering procedures are available, one per in-situ test:
//!
//! | Module | Test | Procedure | Safety factor |
//! |--------|------|-----------|---------------|
//! | [`cpt`] | CPT | Boulanger & Idriss (2014) | CSR / CRR |
//! | [`spt`] | SPT | Idriss (Youd et al. 2001) | CRR / CSR |
//! | [`masw`] | MASW | Andrus & Stokoe (2000) | CRR / CSR |
//!
//! Analysed depths are the sorted union of layer bottoms and measurement
//! depths. Each depth is independent, so depths may be evaluated in
//! parallel; results always come back in ascending depth order.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::experiments::{SptExp, SptLog};
//! use soil_core::liquefaction::spt;
//! use soil_core::soil::{SoilLayer, SoilProfile};
//!
//! let profile = SoilProfile::new(
//!     vec![SoilLayer::new(2.0, 16.0, 18.0), SoilLayer::new(5.0, 16.0, 18.0)],
//!     1.0,
//! ).unwrap();
//! let log = SptLog::new(vec![
//!     SptExp::new(2.0, 8).with_corrected(8.0, 6.0, 10.0, 12.0),
//!     SptExp::new(7.0, 14).with_corrected(13.0, 10.0, 15.0, 17.0),
//! ]).unwrap();
//!
//! let results = spt::analyse_liquefaction(&profile, &log, 7.5, 0.3).unwrap();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].depth, 7.0);
//! ```

pub mod cpt;
pub mod engine;
pub mod masw;
pub mod spt;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::experiments::Experiment;
use crate::settings::{AnalysisSettings, SeismicEvent};
use crate::soil::SoilProfile;

pub use cpt::BoulangerIdriss;
pub use engine::{check_safety, get_all_depths, DepthOutcome};
pub use masw::AndrusStokoe;
pub use spt::Idriss;

/// Outcome of the triggering analysis at one depth.
///
/// Stresses are in the units of the profile's unit weights times metres.
/// `settlement` is in the units of layer thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquefactionResult {
    /// Analysed depth (m)
    pub depth: f64,

    /// Cyclic stress ratio
    pub csr: f64,

    /// Cyclic resistance ratio at Mw 7.5
    pub crr75: f64,

    /// Cyclic resistance ratio at the design magnitude
    pub crr: f64,

    /// Stress reduction coefficient
    pub rd: f64,

    /// Total vertical stress
    pub normal_stress: f64,

    /// Effective vertical stress
    pub effective_stress: f64,

    /// Factor of safety against liquefaction (convention depends on method)
    pub safety_factor: f64,

    /// Liquefaction verdict
    pub is_safe: bool,

    /// Post-liquefaction settlement of the governing layer
    pub settlement: f64,
}

/// A triggering procedure tied to one type of in-situ test.
///
/// Implementors evaluate a single depth; [`engine`] drives them over every
/// analysed depth of a profile.
pub trait TriggeringMethod: Sync {
    /// Record type read from the experiment log
    type Exp: Experiment + Sync;

    /// Display name used in logs and errors
    fn name(&self) -> &'static str;

    /// Equations this procedure evaluates, for audit trails
    fn equations(&self) -> Vec<Equation>;

    /// Evaluate one depth.
    ///
    /// `msf` is the magnitude scaling factor computed once per analysis from
    /// the event magnitude.
    fn analyse_for_layer(
        &self,
        profile: &SoilProfile,
        exp: &Self::Exp,
        depth: f64,
        msf: f64,
        event: &SeismicEvent,
        settings: &AnalysisSettings,
    ) -> CalcResult<LiquefactionResult>;
}

//! # Liquefaction Equations
//!
//! Pure formula functions used by the triggering procedures and the
//! settlement estimator. Keeping them in one place enables:
//! - Verification against the published references
//! - Documentation of branch boundaries and clamps
//! - Consistent implementation across the CPT, SPT and MASW pipelines
//!
//! ## Modules
//!
//! - [`seismic`] - MSF, four-branch rd and CSR shared by SPT and MASW
//! - [`boulanger_idriss`] - CPT normalization, clean-sand correction and CRR
//! - [`idriss`] - SPT cyclic resistance
//! - [`andrus_stokoe`] - Shear-wave velocity normalization and CRR
//! - [`settlement`] - Post-liquefaction volumetric strain
//! - [`interpolation`] - Clamped table lookup
//! - [`registry`] - Equation metadata for audit trails
//!
//! ## Units
//!
//! Depths and thicknesses in m, accelerations in g. Stresses carry the units
//! of the profile's unit weights times metres. The built-in constants
//! (water unit weight 0.981, atmospheric pressure 10.132) are expressed in
//! t/m³ and t/m², so profiles should be given in t/m³.

pub mod andrus_stokoe;
pub mod boulanger_idriss;
pub mod idriss;
pub mod interpolation;
pub mod registry;
pub mod seismic;
pub mod settlement;

pub use seismic::{calc_csr, calc_msf, calc_rd};

pub use settlement::{
    calc_relative_density,
    calc_settlement_via_n90,
    calc_settlement_via_qci,
    calc_settlement_via_vs1c,
    calc_volumetric_strain,
    dr_to_qci,
    n90_to_qci,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    cpt_equations,
    generate_equations_markdown,
    masw_equations,
    spt_equations,
};

//! # Post-Liquefaction Settlement
//!
//! Volumetric strain as a function of the factor of safety against
//! liquefaction and a normalized penetration index `qci`, fitted to the
//! Ishihara & Yoshimine (1992) strain curves. Settlement is the strain
//! applied over the governing layer thickness.
//!
//! ## Notation
//!
//! - `FS` = Factor of safety against liquefaction
//! - `qci` = Normalized cone resistance (or an equivalent derived from N90 or Dr)
//! - `x` = ln(qci)
//! - `εv` = Volumetric strain
//!
//! ## Curve Fit
//!
//! ```text
//! FS > 2                               εv = 0
//! 2 − 1/(a2 + a3·x) < FS < 2           εv = min(s1, s2)
//! otherwise                            εv = s2
//!
//! s1 = (a0 + a1·x) / (1/(2 − FS) − (a2 + a3·x))
//! s2 = b0 + b1·x + b2·x²
//! ```
//!
//! ## Index Conversions
//!
//! All three conversions share one `qci` table:
//!
//! | qci | N90 | Dr (%) |
//! |-----|-----|--------|
//! | 33  | 3   | 30     |
//! | 45  | 6   | 40     |
//! | 60  | 10  | 50     |
//! | 80  | 14  | 60     |
//! | 147 | 25  | 70     |
//! | 200 | 30  | 80     |
//!
//! Relative densities above 80% hold the last qci value.

use super::interpolation::interp;

const A0: f64 = 0.3773;
const A1: f64 = -0.0337;
const A2: f64 = 1.5672;
const A3: f64 = -0.1833;
const B0: f64 = 28.45;
const B1: f64 = -9.3372;
const B2: f64 = 0.7975;

/// Normalized cone resistance knots
pub const QCI_TABLE: [f64; 6] = [33.0, 45.0, 60.0, 80.0, 147.0, 200.0];

/// N90 knots matching [`QCI_TABLE`]
pub const N90_TABLE: [f64; 6] = [3.0, 6.0, 10.0, 14.0, 25.0, 30.0];

/// Relative density knots (%) matched against [`QCI_TABLE`]
pub const RELATIVE_DENSITY_TABLE: [f64; 7] = [30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// Safety factor above which no volumetric strain develops
pub const NO_STRAIN_SAFETY_FACTOR: f64 = 2.0;

/// Convert a blow count N90 to qci.
///
/// N90 is clamped to [3, 30] and truncated to a whole blow count before
/// the lookup.
pub fn n90_to_qci(n90: f64) -> f64 {
    let n90 = n90.clamp(N90_TABLE[0], N90_TABLE[N90_TABLE.len() - 1]).trunc();
    interp(n90, &N90_TABLE, &QCI_TABLE)
}

/// Relative density from limiting shear-wave velocity
///
/// # Formula
/// Dr = 17.974 · (vs1c / 100)^1.976
#[inline]
pub fn calc_relative_density(vs1c: f64) -> f64 {
    17.974 * (vs1c / 100.0).powf(1.976)
}

/// Convert a relative density (%) to qci.
///
/// Dr is clamped to [30, 90] before the lookup.
pub fn dr_to_qci(relative_density: f64) -> f64 {
    let dr = relative_density.clamp(30.0, 90.0);
    interp(dr, &RELATIVE_DENSITY_TABLE, &QCI_TABLE)
}

/// Volumetric strain for a normalized index and safety factor
pub fn calc_volumetric_strain(qci: f64, safety_factor: f64) -> f64 {
    if safety_factor > NO_STRAIN_SAFETY_FACTOR {
        return 0.0;
    }

    let x = qci.ln();
    let slope = A2 + A3 * x;
    let s2 = B0 + B1 * x + B2 * x.powi(2);

    let lower = NO_STRAIN_SAFETY_FACTOR - 1.0 / slope;
    if lower < safety_factor && safety_factor < NO_STRAIN_SAFETY_FACTOR {
        let s1 = (A0 + A1 * x) / (1.0 / (NO_STRAIN_SAFETY_FACTOR - safety_factor) - slope);
        s1.min(s2)
    } else {
        s2
    }
}

/// Settlement from a blow count N90
pub fn calc_settlement_via_n90(safety_factor: f64, layer_thickness: f64, n90: f64) -> f64 {
    calc_volumetric_strain(n90_to_qci(n90), safety_factor) * layer_thickness
}

/// Settlement from a limiting normalized shear-wave velocity vs1c
pub fn calc_settlement_via_vs1c(safety_factor: f64, layer_thickness: f64, vs1c: f64) -> f64 {
    let qci = dr_to_qci(calc_relative_density(vs1c));
    calc_volumetric_strain(qci, safety_factor) * layer_thickness
}

/// Settlement from a corrected cone resistance used directly as qci
pub fn calc_settlement_via_qci(safety_factor: f64, layer_thickness: f64, qci: f64) -> f64 {
    calc_volumetric_strain(qci, safety_factor) * layer_thickness
}

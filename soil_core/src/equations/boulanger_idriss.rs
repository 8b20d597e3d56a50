//! # CPT Liquefaction Triggering (Boulanger & Idriss)
//!
//! Formulas for the cone-resistance based procedure: stress normalization of
//! the cone resistance with an iteratively solved exponent, the equivalent
//! clean-sand correction, and the resistance curve.
//!
//! ## Notation
//!
//! - `qcN` = Normalized cone tip resistance
//! - `qc1N` = Overburden-corrected resistance, CN · qcN
//! - `qc1Ncs` = Equivalent clean-sand resistance, qc1N + Δqc1N
//! - `FC` = Fines content (%)
//! - `m` = Stress exponent of CN
//! - `Pa` = Atmospheric pressure in stress units of the profile
//! - `Cσ`, `Kσ` = Overburden correction coefficient and factor
//!
//! ## References
//!
//! - Boulanger & Idriss (2014), CPT and SPT based liquefaction triggering
//!   procedures, Report UCD/CGM-14/01
//! - Idriss & Boulanger (2008), Soil liquefaction during earthquakes, EERI MNO-12

use tracing::trace;

use crate::errors::{CalcError, CalcResult};

/// Atmospheric pressure used by the CN normalization (t/m²)
pub const ATMOSPHERIC_PRESSURE: f64 = 10.132;

/// Reference stress of the Kσ correction
pub const KSIGMA_REFERENCE_STRESS: f64 = 101.32;

/// Floor applied to effective stress before normalization
pub const MIN_EFFECTIVE_STRESS: f64 = 0.1;

/// Upper bound on CN
pub const CN_MAX: f64 = 1.7;

/// Starting stress exponent of the CN iteration
pub const INITIAL_STRESS_EXPONENT: f64 = 0.5;

/// Bounds on qc1Ncs
pub const QC1NCS_MIN: f64 = 21.0;
pub const QC1NCS_MAX: f64 = 254.0;

/// Clean-sand correction Δqc1N
///
/// # Formula
/// Δqc1N = (11.9 + qc1N/14.6) · exp(1.63 − 9.7/(FC + 2) − (15.7/(FC + 2))²)
#[inline]
pub fn calc_fines_increment(qc1n: f64, fine_content: f64) -> f64 {
    let fc = fine_content + 2.0;
    (11.9 + qc1n / 14.6) * (1.63 - 9.7 / fc - (15.7 / fc).powi(2)).exp()
}

/// Overburden correction factor CN by fixed-point iteration on m
///
/// # Iteration
/// ```text
/// m₀ = 0.5
/// CN = (Pa / σ'v)^m
/// qc1Ncs = CN·qcN + Δqc1N(CN·qcN, FC)
/// m_new = 1.338 − 0.249 · qc1Ncs^0.264
/// repeat until |m_new − m| ≤ tolerance, then CN = min(1.7, (Pa / σ'v)^m)
/// ```
///
/// σ'v is floored at 0.1 before use.
///
/// # Errors
/// * `CalcError::NonConvergence` - `max_iterations` passes without meeting
///   the tolerance
pub fn calc_cn(
    qcn: f64,
    effective_stress: f64,
    fine_content: f64,
    tolerance: f64,
    max_iterations: usize,
) -> CalcResult<f64> {
    let stress = effective_stress.max(MIN_EFFECTIVE_STRESS);
    let mut m = INITIAL_STRESS_EXPONENT;
    let mut change = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let cn = (ATMOSPHERIC_PRESSURE / stress).powf(m);
        let qc1n = qcn * cn;
        let qc1ncs = qc1n + calc_fines_increment(qc1n, fine_content);
        let m_new = 1.338 - 0.249 * qc1ncs.powf(0.264);

        change = (m_new - m).abs();
        trace!(iteration, m, m_new, cn, "CN iteration");

        if change <= tolerance {
            return Ok(cn.min(CN_MAX));
        }
        m = m_new;
    }

    Err(CalcError::non_convergence("CPT (Boulanger-Idriss) CN", max_iterations, change))
}

/// Equivalent clean-sand cone resistance, clamped to [21, 254]
///
/// # Formula
/// qc1Ncs = CN·qcN + Δqc1N(CN·qcN, FC)
#[inline]
pub fn calc_qc1ncs(qcn: f64, fine_content: f64, cn: f64) -> f64 {
    let qc1n = cn * qcn;
    (qc1n + calc_fines_increment(qc1n, fine_content)).clamp(QC1NCS_MIN, QC1NCS_MAX)
}

/// Stress reduction factor rd, depth and magnitude dependent
///
/// # Formulas
/// For z ≤ 34 m:
/// - α(z) = −1.012 − 1.126·sin(z/11.73 + 5.133)
/// - β(z) = 0.106 + 0.118·sin(z/11.28 + 5.142)
/// - rd = exp(α + β·Mw)
///
/// For z > 34 m: rd = 0.12·exp(0.22·Mw)
#[inline]
pub fn calc_rd(depth: f64, mw: f64) -> f64 {
    if depth <= 34.0 {
        let alpha = -1.012 - 1.126 * (depth / 11.73 + 5.133).sin();
        let beta = 0.106 + 0.118 * (depth / 11.28 + 5.142).sin();
        (alpha + beta * mw).exp()
    } else {
        0.12 * (0.22 * mw).exp()
    }
}

/// Magnitude scaling factor dependent on soil resistance
///
/// # Formulas
/// - MSFmax = min(2.2, 1.09 + (qc1Ncs/180)³)
/// - MSF = 1 + (MSFmax − 1)·(8.64·exp(−Mw/4) − 1.325)
#[inline]
pub fn calc_msf(mw: f64, qc1ncs: f64) -> f64 {
    let msf_max = (1.09 + (qc1ncs / 180.0).powi(3)).min(2.2);
    1.0 + (msf_max - 1.0) * (8.64 * (-mw / 4.0).exp() - 1.325)
}

/// Overburden correction coefficient Cσ, capped at 0.3
///
/// # Formula
/// Cσ = 1 / (37.3 − 8.27·qc1Ncs^0.264)
#[inline]
pub fn calc_cg(qc1ncs: f64) -> f64 {
    (1.0 / (37.3 - 8.27 * qc1ncs.powf(0.264))).min(0.3)
}

/// Overburden correction factor Kσ, capped at 1.1
///
/// # Formula
/// Kσ = 1 − Cσ·ln(σ'v / 101.32)
#[inline]
pub fn calc_kg(cg: f64, effective_stress: f64) -> f64 {
    (1.0 - cg * (effective_stress / KSIGMA_REFERENCE_STRESS).ln()).min(1.1)
}

/// Cyclic resistance ratio at Mw 7.5 and at the design magnitude
///
/// # Formulas
/// - CRR7.5 = Kσ · exp(q/113 + (q/1000)² − (q/140)³ + (q/137)⁴ − 2.8) · σ'v
/// - CRR = MSF · CRR7.5
///
/// where q = qc1Ncs
#[inline]
pub fn calc_crr(kg: f64, qc1ncs: f64, msf: f64, effective_stress: f64) -> (f64, f64) {
    let q = qc1ncs;
    let curve = (q / 113.0 + (q / 1000.0).powi(2) - (q / 140.0).powi(3) + (q / 137.0).powi(4) - 2.8).exp();
    let crr75 = kg * curve * effective_stress;
    (crr75, msf * crr75)
}

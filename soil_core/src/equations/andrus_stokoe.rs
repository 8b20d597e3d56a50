//! # Shear-Wave Velocity Liquefaction Resistance (Andrus & Stokoe)
//!
//! ## Notation
//!
//! - `Vs` = Measured shear-wave velocity (m/s)
//! - `Vs1` = Overburden-corrected velocity, CN · Vs
//! - `Vs1c` = Limiting upper value of Vs1 for liquefaction occurrence
//! - `FC` = Fines content (%)
//!
//! ## References
//!
//! - Andrus & Stokoe (2000), Liquefaction resistance of soils from shear-wave
//!   velocity, J. Geotech. Geoenviron. Eng. 126(11)

/// Upper bound on CN
pub const CN_MAX: f64 = 1.7;

/// Vs1c for clean sands (FC ≤ 5%)
pub const VS1C_CLEAN: f64 = 215.0;

/// Vs1c for fines content above 35%
pub const VS1C_FINE: f64 = 200.0;

/// Overburden correction factor
///
/// # Formula
/// CN = min(1.7, 3.16 · (1/σ'v)^0.5)
#[inline]
pub fn calc_cn(effective_stress: f64) -> f64 {
    (3.16 * (1.0 / effective_stress).sqrt()).min(CN_MAX)
}

/// Limiting velocity Vs1c from fines content
///
/// # Formula
/// - Vs1c = 215                    for FC ≤ 5
/// - Vs1c = 215 − 0.5·(FC − 5)     for 5 < FC ≤ 35
/// - Vs1c = 200                    for FC > 35
#[inline]
pub fn calc_vs1c(fine_content: f64) -> f64 {
    if fine_content <= 5.0 {
        VS1C_CLEAN
    } else if fine_content <= 35.0 {
        VS1C_CLEAN - 0.5 * (fine_content - 5.0)
    } else {
        VS1C_FINE
    }
}

/// Cyclic resistance ratio at Mw 7.5 and at the design magnitude
///
/// # Formulas
/// - CRR7.5 = σ'v · (0.03·(Vs1/100)² + 0.09·(Vs1c − Vs1) − 0.09/Vs1c)
/// - CRR = CRR7.5 · MSF
///
/// Only meaningful for Vs1 < Vs1c; the caller handles the non-liquefiable case.
#[inline]
pub fn calc_crr(vs1: f64, vs1c: f64, effective_stress: f64, msf: f64) -> (f64, f64) {
    let crr75 = effective_stress * (0.03 * (vs1 / 100.0).powi(2) + 0.09 * (vs1c - vs1) - 0.09 / vs1c);
    (crr75, crr75 * msf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn() {
        assert!((calc_cn(100.0) - 0.316).abs() < 1e-12);
        assert_eq!(calc_cn(1.0), CN_MAX);
        assert_eq!(calc_cn(0.0), CN_MAX);
    }

    #[test]
    fn test_vs1c_bands() {
        assert_eq!(calc_vs1c(0.0), 215.0);
        assert_eq!(calc_vs1c(5.0), 215.0);
        assert_eq!(calc_vs1c(15.0), 210.0);
        assert_eq!(calc_vs1c(35.0), 200.0);
        assert_eq!(calc_vs1c(60.0), 200.0);
    }

    #[test]
    fn test_crr() {
        // σ'v = 10, Vs1 = 150, Vs1c = 210
        let (crr75, crr) = calc_crr(150.0, 210.0, 10.0, 1.0);
        let expected = 10.0 * (0.03 * 2.25 + 0.09 * 60.0 - 0.09 / 210.0);
        assert!((crr75 - expected).abs() < 1e-9);
        assert_eq!(crr, crr75);

        let (_, crr) = calc_crr(150.0, 210.0, 10.0, 1.5);
        assert!((crr - 1.5 * expected).abs() < 1e-9);
    }
}

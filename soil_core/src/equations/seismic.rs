//! # Seismic Demand Formulas
//!
//! Formulas shared by the simplified (stress-based) triggering procedure.
//!
//! ## Notation
//!
//! - `Mw` = Moment magnitude
//! - `amax` = Peak ground acceleration (g)
//! - `σv` = Total (normal) vertical stress
//! - `rd` = Shear stress reduction factor with depth
//! - `z` = Depth below the surface (m)
//!
//! ## References
//!
//! - Youd et al. (2001), NCEER/NSF workshop summary, J. Geotech. Geoenviron. Eng. 127(10)
//! - Idriss (1999), magnitude scaling factor

/// Depth at or below which the first rd branch applies (m)
pub const RD_FIRST_BREAK_M: f64 = 9.15;

/// Magnitude scaling factor
///
/// # Formula
/// MSF = 10^2.24 / Mw^2.56
///
/// # Example
/// ```rust
/// use soil_core::equations::seismic::calc_msf;
///
/// // ≈ 1.0 at the reference magnitude
/// assert!((calc_msf(7.5) - 1.0).abs() < 0.001);
/// ```
#[inline]
pub fn calc_msf(mw: f64) -> f64 {
    10f64.powf(2.24) / mw.powf(2.56)
}

/// Stress reduction factor rd, Idriss simplified four-branch form
///
/// # Formulas
/// - rd = 1 − 0.00765·z        for z ≤ 9.15
/// - rd = 1.174 − 0.0267·z     for 9.15 < z < 23
/// - rd = 0.744 − 0.008·z      for 23 ≤ z < 30
/// - rd = 0.5                  for z ≥ 30
///
/// The branches are not continuous at 9.15 m.
#[inline]
pub fn calc_rd(depth: f64) -> f64 {
    if depth <= RD_FIRST_BREAK_M {
        1.0 - 0.00765 * depth
    } else if depth < 23.0 {
        1.174 - 0.0267 * depth
    } else if depth < 30.0 {
        0.744 - 0.008 * depth
    } else {
        0.5
    }
}

/// Cyclic stress ratio
///
/// # Formula
/// CSR = 0.65 · amax · σv · rd
///
/// Uses the total (normal) stress.
#[inline]
pub fn calc_csr(pga: f64, normal_stress: f64, rd: f64) -> f64 {
    0.65 * pga * normal_stress * rd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_rd_table() {
        let cases = [
            (0.0, 1.0),
            (5.0, 0.96175),
            (9.15, 0.9300025),
            (10.0, 0.907),
            (15.0, 0.7735),
            (22.99, 0.560167),
            (23.0, 0.56),
            (25.0, 0.544),
            (29.99, 0.50408),
            (30.0, 0.5),
            (35.0, 0.5),
            (100.0, 0.5),
        ];
        for (depth, expected) in cases {
            let rd = calc_rd(depth);
            assert!((rd - expected).abs() < 1e-5, "rd({depth}) = {rd}, expected {expected}");
        }
    }

    #[test]
    fn test_calc_rd_first_break() {
        // first branch at the break, second just past it
        assert!((calc_rd(9.15) - (1.0 - 0.00765 * 9.15)).abs() < 1e-12);
        assert!((calc_rd(9.150001) - (1.174 - 0.0267 * 9.150001)).abs() < 1e-12);
        assert_eq!(calc_rd(30.0), 0.5);
    }

    #[test]
    fn test_calc_msf() {
        // 10^2.24 / 6^2.56
        assert!((calc_msf(6.0) - 1.7699).abs() < 0.001);
        assert!(calc_msf(8.0) < calc_msf(7.5));
    }

    #[test]
    fn test_calc_csr() {
        assert!((calc_csr(0.3, 34.0, 0.9847) - 0.65 * 0.3 * 34.0 * 0.9847).abs() < 1e-12);
        assert_eq!(calc_csr(0.0, 100.0, 1.0), 0.0);
    }
}

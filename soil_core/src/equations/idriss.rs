//! # SPT Cyclic Resistance (Idriss)
//!
//! Cyclic resistance from the fines-corrected blow count (N1)60f.
//!
//! ## Notation
//!
//! - `N` = (N1)60f, fines-corrected normalized blow count
//! - `σ'v` = Effective vertical stress
//! - `MSF` = Magnitude scaling factor
//!
//! ## References
//!
//! - Youd et al. (2001), Eq. 4 (after Idriss & Seed)

use crate::errors::{CalcError, CalcResult};

/// Blow count at which the resistance curve becomes vertical
pub const N160F_LIMIT: f64 = 34.0;

/// (N1)60 at or above which a layer is too dense to liquefy
pub const N160_DENSE_LIMIT: f64 = 30.0;

/// Cyclic resistance ratio at Mw 7.5 and at the design magnitude
///
/// # Formulas
/// - CRR7.5 = σ'v · (1/(34 − N) + N/135 + 50/(10N + 45)² − 1/200)
/// - CRR = CRR7.5 · MSF
///
/// # Errors
/// * `CalcError::DomainError` - N ≥ 34, where the curve is undefined
///
/// # Example
/// ```rust
/// use soil_core::equations::idriss::calc_crr;
///
/// let (crr75, crr) = calc_crr(10.0, 100.0, 7.5).unwrap();
/// assert!((crr75 - 11.3118).abs() < 0.001);
/// assert!((crr - crr75 * 7.5).abs() < 1e-9);
/// assert!(calc_crr(34.0, 100.0, 1.0).is_err());
/// ```
pub fn calc_crr(n160f: f64, effective_stress: f64, msf: f64) -> CalcResult<(f64, f64)> {
    if n160f >= N160F_LIMIT {
        return Err(CalcError::domain(
            "SPT (Idriss)",
            "n160f",
            n160f,
            "The corrected N160 value should be less than 34",
        ));
    }

    let crr75 = effective_stress
        * (1.0 / (N160F_LIMIT - n160f) + n160f / 135.0 + 50.0 / (10.0 * n160f + 45.0).powi(2) - 0.005);
    Ok((crr75, crr75 * msf))
}

//! # MASW Triggering (Andrus & Stokoe)
//!
//! Shear-wave velocity procedure. The reported safety factor is CRR / CSR.
//! When the normalized velocity Vs1 reaches the limiting velocity Vs1c the
//! soil is treated as too stiff to liquefy: resistance, safety factor and
//! settlement are reported as zero and the depth is safe.

use crate::equations::andrus_stokoe::{calc_cn, calc_crr, calc_vs1c};
use crate::equations::registry::{masw_equations, Equation};
use crate::equations::seismic::{calc_csr, calc_rd};
use crate::equations::settlement::calc_settlement_via_vs1c;
use crate::errors::CalcResult;
use crate::experiments::{MaswExp, MaswLog};
use crate::settings::{AnalysisSettings, SeismicEvent};
use crate::soil::SoilProfile;

use super::engine::{check_safety, run_analysis, run_each_depth, safety_ratio, DepthOutcome};
use super::{LiquefactionResult, TriggeringMethod};

/// Andrus & Stokoe shear-wave velocity procedure
#[derive(Debug, Clone, Copy, Default)]
pub struct AndrusStokoe;

impl TriggeringMethod for AndrusStokoe {
    type Exp = MaswExp;

    fn name(&self) -> &'static str {
        "MASW (Andrus-Stokoe)"
    }

    fn equations(&self) -> Vec<Equation> {
        masw_equations()
    }

    fn analyse_for_layer(
        &self,
        profile: &SoilProfile,
        exp: &MaswExp,
        depth: f64,
        msf: f64,
        event: &SeismicEvent,
        settings: &AnalysisSettings,
    ) -> CalcResult<LiquefactionResult> {
        analyse_for_layer(profile, exp, depth, msf, event.peak_ground_acceleration, settings)
    }
}

/// Evaluate one depth against its governing MASW record.
///
/// # Errors
/// * `CalcError::NegativeEffectiveStress` - pore pressure exceeds total stress
pub fn analyse_for_layer(
    profile: &SoilProfile,
    exp: &MaswExp,
    depth: f64,
    msf: f64,
    pga: f64,
    settings: &AnalysisSettings,
) -> CalcResult<LiquefactionResult> {
    let layer = profile.get_layer_at_depth(depth);

    // rd is taken at the bottom of the governing layer
    let rd = calc_rd(layer.depth());
    let effective_stress = profile.calc_effective_stress(depth)?;
    let normal_stress = profile.calc_normal_stress(depth);

    let vs1 = exp.shear_wave_velocity * calc_cn(effective_stress);
    let vs1c = calc_vs1c(layer.fine_content);

    let csr = calc_csr(pga, normal_stress, rd);

    if vs1 >= vs1c {
        return Ok(LiquefactionResult {
            depth,
            csr,
            crr75: 0.0,
            crr: 0.0,
            rd,
            normal_stress,
            effective_stress,
            safety_factor: 0.0,
            is_safe: true,
            settlement: 0.0,
        });
    }

    let (crr75, crr) = calc_crr(vs1, vs1c, effective_stress, msf);
    let safety_factor = safety_ratio(crr, csr);
    let is_safe = check_safety(profile, depth, safety_factor, settings);
    let settlement = calc_settlement_via_vs1c(safety_factor, layer.thickness, vs1c);

    Ok(LiquefactionResult {
        depth,
        csr,
        crr75,
        crr,
        rd,
        normal_stress,
        effective_stress,
        safety_factor,
        is_safe,
        settlement,
    })
}

/// Analyse a profile against a MASW log with default settings.
///
/// Returns one result per analysed depth in ascending order, or the first
/// error encountered.
pub fn analyse_liquefaction(
    profile: &SoilProfile,
    log: &MaswLog,
    moment_magnitude: f64,
    peak_ground_acceleration: f64,
) -> CalcResult<Vec<LiquefactionResult>> {
    let event = SeismicEvent::new(moment_magnitude, peak_ground_acceleration)?;
    run_analysis(&AndrusStokoe, profile, log, &event, &AnalysisSettings::default())
}

/// Analyse with explicit settings.
pub fn analyse_liquefaction_with(
    profile: &SoilProfile,
    log: &MaswLog,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<LiquefactionResult>> {
    run_analysis(&AndrusStokoe, profile, log, event, settings)
}

/// Analyse keeping each depth's outcome, so one failing depth does not hide the rest.
pub fn analyse_each_depth(
    profile: &SoilProfile,
    log: &MaswLog,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<DepthOutcome>> {
    run_each_depth(&AndrusStokoe, profile, log, event, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilLayer;

    fn profile() -> SoilProfile {
        SoilProfile::new(
            vec![
                SoilLayer::new(2.0, 16.0, 18.0).with_fine_content(3.0),
                SoilLayer::new(5.0, 16.0, 18.0).with_fine_content(15.0),
                SoilLayer::new(15.0, 16.0, 18.0).with_fine_content(40.0),
            ],
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_stiff_soil_short_circuits() {
        // σ'v = 118.114 gives CN ≈ 0.291, Vs1 ≈ 233 > Vs1c = 210
        let result = analyse_for_layer(&profile(), &MaswExp::new(7.0, 800.0), 7.0, 1.0, 0.3, &AnalysisSettings::default()).unwrap();
        assert_eq!(result.crr75, 0.0);
        assert_eq!(result.crr, 0.0);
        assert_eq!(result.safety_factor, 0.0);
        assert_eq!(result.settlement, 0.0);
        assert!(result.is_safe);
        assert!(result.csr > 0.0);
    }

    #[test]
    fn test_soft_soil_resistance() {
        let profile = profile();
        let result = analyse_for_layer(&profile, &MaswExp::new(7.0, 300.0), 7.0, 1.2, 0.3, &AnalysisSettings::default()).unwrap();

        let vs1 = 300.0 * calc_cn(result.effective_stress);
        let (crr75, crr) = calc_crr(vs1, 210.0, result.effective_stress, 1.2);
        assert!((result.crr75 - crr75).abs() < 1e-9);
        assert!((result.crr - crr).abs() < 1e-9);
        assert!((result.safety_factor - crr / result.csr).abs() < 1e-12);
        assert!(result.settlement >= 0.0);
    }

    #[test]
    fn test_rd_at_governing_layer_bottom() {
        let profile = SoilProfile::new(
            vec![SoilLayer::new(2.0, 16.0, 18.0), SoilLayer::new(20.0, 16.0, 18.0).with_fine_content(10.0)],
            1.0,
        )
        .unwrap();
        let result = analyse_for_layer(&profile, &MaswExp::new(5.0, 150.0), 5.0, 1.0, 0.3, &AnalysisSettings::default()).unwrap();

        assert_eq!(result.rd, calc_rd(22.0));
        assert!(result.rd < calc_rd(5.0));
        // stresses still come from the analysed depth
        assert_eq!(result.normal_stress, profile.calc_normal_stress(5.0));
        assert!((result.csr - calc_csr(0.3, result.normal_stress, calc_rd(22.0))).abs() < 1e-12);
    }

    #[test]
    fn test_analyse_liquefaction_order() {
        let log = MaswLog::new(vec![
            MaswExp::new(20.0, 350.0),
            MaswExp::new(1.0, 150.0),
            MaswExp::new(5.0, 200.0),
        ])
        .unwrap();
        let results = analyse_liquefaction(&profile(), &log, 7.5, 0.3).unwrap();
        let depths: Vec<f64> = results.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![1.0, 2.0, 5.0, 7.0, 20.0, 22.0]);
        for result in &results {
            assert!(result.settlement.is_finite() && result.settlement >= 0.0);
        }
    }

    #[test]
    fn test_method_metadata() {
        assert_eq!(AndrusStokoe.name(), "MASW (Andrus-Stokoe)");
        assert!(AndrusStokoe.equations().contains(&Equation::MaswLimitingVelocity));
    }
}

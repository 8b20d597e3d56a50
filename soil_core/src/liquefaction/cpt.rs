//! # CPT Triggering (Boulanger & Idriss)
//!
//! Cone-resistance based procedure with a magnitude-dependent rd and a
//! resistance-dependent MSF. The reported safety factor is CSR / CRR.
//! Settlement uses qc1Ncs directly as the normalized index.

use crate::equations::boulanger_idriss::{calc_cg, calc_cn, calc_crr, calc_kg, calc_msf, calc_qc1ncs, calc_rd};
use crate::equations::registry::{cpt_equations, Equation};
use crate::equations::seismic::calc_csr;
use crate::equations::settlement::calc_settlement_via_qci;
use crate::errors::CalcResult;
use crate::experiments::{CptExp, CptLog};
use crate::settings::{AnalysisSettings, SeismicEvent};
use crate::soil::SoilProfile;

use super::engine::{check_safety, run_analysis, run_each_depth, safety_ratio, DepthOutcome};
use super::{LiquefactionResult, TriggeringMethod};

/// Boulanger & Idriss (2014) CPT procedure
#[derive(Debug, Clone, Copy, Default)]
pub struct BoulangerIdriss;

impl TriggeringMethod for BoulangerIdriss {
    type Exp = CptExp;

    fn name(&self) -> &'static str {
        "CPT (Boulanger-Idriss)"
    }

    fn equations(&self) -> Vec<Equation> {
        cpt_equations()
    }

    /// The shared `msf` is not used; CRR is scaled by the qc1Ncs-dependent MSF.
    fn analyse_for_layer(
        &self,
        profile: &SoilProfile,
        exp: &CptExp,
        depth: f64,
        _msf: f64,
        event: &SeismicEvent,
        settings: &AnalysisSettings,
    ) -> CalcResult<LiquefactionResult> {
        analyse_for_layer(profile, exp, depth, event, settings)
    }
}

/// Evaluate one depth against its governing CPT record.
///
/// # Errors
/// * `CalcError::NonConvergence` - the CN iteration exceeds `settings.max_cn_iterations`
/// * `CalcError::NegativeEffectiveStress` - pore pressure exceeds total stress
pub fn analyse_for_layer(
    profile: &SoilProfile,
    exp: &CptExp,
    depth: f64,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<LiquefactionResult> {
    let rd = calc_rd(depth, event.moment_magnitude);
    let effective_stress = profile.calc_effective_stress(depth)?;
    let normal_stress = profile.calc_normal_stress(depth);

    let layer = profile.get_layer_at_depth(depth);

    let cn = calc_cn(
        exp.cone_resistance,
        effective_stress,
        layer.fine_content,
        settings.cn_tolerance,
        settings.max_cn_iterations,
    )?;
    let qc1ncs = calc_qc1ncs(exp.cone_resistance, layer.fine_content, cn);
    let kg = calc_kg(calc_cg(qc1ncs), effective_stress);
    let msf = calc_msf(event.moment_magnitude, qc1ncs);

    let csr = calc_csr(event.peak_ground_acceleration, normal_stress, rd);
    let (crr75, crr) = calc_crr(kg, qc1ncs, msf, effective_stress);

    let safety_factor = safety_ratio(csr, crr);
    let is_safe = check_safety(profile, depth, safety_factor, settings);
    let settlement = calc_settlement_via_qci(safety_factor, layer.thickness, qc1ncs);

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

/// Analyse a profile against a CPT log with default settings.
///
/// Returns one result per analysed depth in ascending order, or the first
/// error encountered.
pub fn analyse_liquefaction(
    profile: &SoilProfile,
    log: &CptLog,
    moment_magnitude: f64,
    peak_ground_acceleration: f64,
) -> CalcResult<Vec<LiquefactionResult>> {
    let event = SeismicEvent::new(moment_magnitude, peak_ground_acceleration)?;
    run_analysis(&BoulangerIdriss, profile, log, &event, &AnalysisSettings::default())
}

/// Analyse with explicit settings.
pub fn analyse_liquefaction_with(
    profile: &SoilProfile,
    log: &CptLog,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<LiquefactionResult>> {
    run_analysis(&BoulangerIdriss, profile, log, event, settings)
}

/// Analyse keeping each depth's outcome, so one failing depth does not hide the rest.
pub fn analyse_each_depth(
    profile: &SoilProfile,
    log: &CptLog,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<DepthOutcome>> {
    run_each_depth(&BoulangerIdriss, profile, log, event, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::soil::SoilLayer;

    fn profile() -> SoilProfile {
        SoilProfile::new(
            vec![
                SoilLayer::new(2.0, 16.0, 18.0).with_fine_content(10.0),
                SoilLayer::new(5.0, 16.0, 18.0).with_fine_content(20.0),
                SoilLayer::new(15.0, 17.0, 19.0).with_fine_content(5.0),
            ],
            1.0,
        )
        .unwrap()
    }

    fn log() -> CptLog {
        CptLog::new(vec![
            CptExp::new(2.0, 60.0),
            CptExp::new(7.0, 90.0),
            CptExp::new(22.0, 140.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_depth_components() {
        let profile = profile();
        let event = SeismicEvent::new(7.5, 0.3).unwrap();
        let result = analyse_for_layer(&profile, &CptExp::new(7.0, 90.0), 7.0, &event, &AnalysisSettings::default()).unwrap();

        assert_eq!(result.depth, 7.0);
        assert!((result.normal_stress - 124.0).abs() < 1e-9);
        assert!((result.effective_stress - 118.114).abs() < 1e-9);
        assert!((result.rd - calc_rd(7.0, 7.5)).abs() < 1e-12);
        assert!((result.csr - 0.65 * 0.3 * 124.0 * result.rd).abs() < 1e-9);
        // CSR / CRR convention
        assert!((result.safety_factor - result.csr / result.crr).abs() < 1e-12);
        assert!(result.crr75 > 0.0);
        assert!(result.settlement >= 0.0);
    }

    #[test]
    fn test_analyse_liquefaction_depths() {
        let results = analyse_liquefaction(&profile(), &log(), 7.5, 0.3).unwrap();
        let depths: Vec<f64> = results.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![2.0, 7.0, 22.0]);
        for result in &results {
            assert!(result.safety_factor.is_finite() && result.safety_factor > 0.0);
            assert!(result.settlement.is_finite() && result.settlement >= 0.0);
        }
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let event = SeismicEvent::new(6.5, 0.25).unwrap();
        let parallel = analyse_liquefaction_with(&profile(), &log(), &event, &AnalysisSettings::default()).unwrap();
        let sequential = analyse_liquefaction_with(
            &profile(),
            &log(),
            &event,
            &AnalysisSettings::default().with_parallel(false),
        )
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_non_convergence_reports_depth() {
        let settings = AnalysisSettings {
            cn_tolerance: 1e-15,
            max_cn_iterations: 1,
            ..AnalysisSettings::default()
        };
        let event = SeismicEvent::new(7.5, 0.3).unwrap();
        let err = analyse_liquefaction_with(&profile(), &log(), &event, &settings).unwrap_err();
        assert!(matches!(err, CalcError::NonConvergence { depth: Some(d), .. } if d == 2.0));

        let outcomes = analyse_each_depth(&profile(), &log(), &event, &settings).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|(_, outcome)| outcome.is_err()));
    }

    #[test]
    fn test_invalid_event_rejected() {
        let err = analyse_liquefaction(&profile(), &log(), 0.0, 0.3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_method_metadata() {
        assert_eq!(BoulangerIdriss.name(), "CPT (Boulanger-Idriss)");
        assert!(BoulangerIdriss.equations().contains(&Equation::CptCyclicResistance));
    }
}

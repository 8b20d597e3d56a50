//! # SPT Triggering (Idriss)
//!
//! Blow-count based procedure using the fines-corrected (N1)60f. The
//! reported safety factor is CRR / CSR. Settlement uses N90.
//!
//! A record with (N1)60f ≥ 34 falls outside the resistance curve and raises
//! a domain error for its depth.

use crate::equations::idriss::{calc_crr, N160F_LIMIT, N160_DENSE_LIMIT};
use crate::equations::registry::{spt_equations, Equation};
use crate::equations::seismic::{calc_csr, calc_rd};
use crate::equations::settlement::calc_settlement_via_n90;
use crate::errors::CalcResult;
use crate::experiments::{SptExp, SptLog};
use crate::settings::{AnalysisSettings, SeismicEvent};
use crate::soil::SoilProfile;

use super::engine::{check_safety, run_analysis, run_each_depth, safety_ratio, DepthOutcome};
use super::{LiquefactionResult, TriggeringMethod};

/// Idriss SPT procedure
#[derive(Debug, Clone, Copy, Default)]
pub struct Idriss;

impl TriggeringMethod for Idriss {
    type Exp = SptExp;

    fn name(&self) -> &'static str {
        "SPT (Idriss)"
    }

    fn equations(&self) -> Vec<Equation> {
        spt_equations()
    }

    fn analyse_for_layer(
        &self,
        profile: &SoilProfile,
        exp: &SptExp,
        depth: f64,
        msf: f64,
        event: &SeismicEvent,
        settings: &AnalysisSettings,
    ) -> CalcResult<LiquefactionResult> {
        analyse_for_layer(profile, exp, depth, msf, event.peak_ground_acceleration, settings)
    }
}

/// Evaluate one depth against its governing SPT record.
///
/// # Errors
/// * `CalcError::DomainError` - the record's (N1)60f is 34 or more
/// * `CalcError::NegativeEffectiveStress` - pore pressure exceeds total stress
pub fn analyse_for_layer(
    profile: &SoilProfile,
    exp: &SptExp,
    depth: f64,
    msf: f64,
    pga: f64,
    settings: &AnalysisSettings,
) -> CalcResult<LiquefactionResult> {
    let rd = calc_rd(depth);
    let effective_stress = profile.calc_effective_stress(depth)?;
    let normal_stress = profile.calc_normal_stress(depth);

    let csr = calc_csr(pga, normal_stress, rd);
    let (crr75, crr) = calc_crr(exp.n160f, effective_stress, msf)?;

    let safety_factor = safety_ratio(crr, csr);
    let is_safe = check_safety(profile, depth, safety_factor, settings)
        || exp.n160 >= N160_DENSE_LIMIT
        || exp.n160f >= N160F_LIMIT;

    let layer = profile.get_layer_at_depth(depth);
    let settlement = calc_settlement_via_n90(safety_factor, layer.thickness, exp.n90);

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

/// Analyse a profile against an SPT log with default settings.
///
/// Returns one result per analysed depth in ascending order, or the first
/// error encountered.
pub fn analyse_liquefaction(
    profile: &SoilProfile,
    log: &SptLog,
    moment_magnitude: f64,
    peak_ground_acceleration: f64,
) -> CalcResult<Vec<LiquefactionResult>> {
    let event = SeismicEvent::new(moment_magnitude, peak_ground_acceleration)?;
    run_analysis(&Idriss, profile, log, &event, &AnalysisSettings::default())
}

/// Analyse with explicit settings.
pub fn analyse_liquefaction_with(
    profile: &SoilProfile,
    log: &SptLog,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<LiquefactionResult>> {
    run_analysis(&Idriss, profile, log, event, settings)
}

/// Analyse keeping each depth's outcome, so one failing depth does not hide the rest.
pub fn analyse_each_depth(
    profile: &SoilProfile,
    log: &SptLog,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<DepthOutcome>> {
    run_each_depth(&Idriss, profile, log, event, settings)
}

//! # Analysis Driver
//!
//! Shared machinery for every triggering procedure: the analysed depth set,
//! the safety verdict, and the per-depth loop.
//!
//! The magnitude scaling factor is computed once per analysis. Each depth is
//! then evaluated against its governing layer and governing record, either
//! sequentially or across the rayon pool when the `parallel` feature is
//! enabled and [`AnalysisSettings::parallel`] is set. Output order is always
//! ascending depth.

use tracing::{debug, info, warn};

use super::{LiquefactionResult, TriggeringMethod};
use crate::equations::seismic::calc_msf;
use crate::errors::CalcResult;
use crate::experiments::{Experiment, ExperimentLog};
use crate::settings::{AnalysisSettings, SeismicEvent};
use crate::soil::SoilProfile;

/// Analysed depth paired with its outcome
pub type DepthOutcome = (f64, CalcResult<LiquefactionResult>);

/// Sorted, de-duplicated union of layer bottoms and measurement depths.
///
/// ```rust
/// use soil_core::experiments::{MaswExp, MaswLog};
/// use soil_core::liquefaction::get_all_depths;
/// use soil_core::soil::{SoilLayer, SoilProfile};
///
/// let profile = SoilProfile::new(
///     vec![SoilLayer::new(2.0, 16.0, 18.0), SoilLayer::new(3.0, 17.0, 19.0)],
///     1.0,
/// ).unwrap();
/// let log = MaswLog::new(vec![MaswExp::new(2.0, 150.0), MaswExp::new(3.5, 180.0)]).unwrap();
///
/// assert_eq!(get_all_depths(&profile, &log), vec![2.0, 3.5, 5.0]);
/// ```
pub fn get_all_depths<E: Experiment>(profile: &SoilProfile, log: &ExperimentLog<E>) -> Vec<f64> {
    let mut depths: Vec<f64> = profile.layer_depths().chain(log.depths()).collect();
    depths.sort_by(f64::total_cmp);
    depths.dedup();
    depths
}

/// Liquefaction verdict at a depth.
///
/// Safe when any of these holds:
/// - safety factor ≥ `settings.limit_safety_factor`
/// - water table strictly below the depth (unsaturated soil)
/// - plasticity index of the governing layer > `settings.plasticity_index_limit`
pub fn check_safety(profile: &SoilProfile, depth: f64, safety_factor: f64, settings: &AnalysisSettings) -> bool {
    let plasticity = profile.get_layer_at_depth(depth).plasticity_index;

    safety_factor >= settings.limit_safety_factor
        || profile.ground_water_level() > depth
        || plasticity > settings.plasticity_index_limit
}

/// Ratio of two stress ratios used as a safety factor.
///
/// 0/0 occurs at the surface, where there is neither demand nor resistance,
/// and is reported as infinitely safe.
pub(crate) fn safety_ratio(numerator: f64, denominator: f64) -> f64 {
    if numerator == 0.0 && denominator == 0.0 {
        f64::INFINITY
    } else {
        numerator / denominator
    }
}

/// Evaluate every analysed depth, keeping each depth's outcome.
///
/// Fails early only for invalid event or settings; per-depth errors are
/// returned alongside their depth with the depth filled in.
pub fn run_each_depth<M: TriggeringMethod>(
    method: &M,
    profile: &SoilProfile,
    log: &ExperimentLog<M::Exp>,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<DepthOutcome>> {
    event.validate()?;
    settings.validate()?;

    let msf = calc_msf(event.moment_magnitude);
    let depths = get_all_depths(profile, log);

    info!(
        method = method.name(),
        depths = depths.len(),
        moment_magnitude = event.moment_magnitude,
        pga = event.peak_ground_acceleration,
        "Starting liquefaction analysis"
    );

    let evaluate = |depth: f64| -> DepthOutcome {
        let exp = log.get_exp_at_depth(depth);
        let outcome = method
            .analyse_for_layer(profile, exp, depth, msf, event, settings)
            .map_err(|err| err.at_depth(depth));

        match &outcome {
            Ok(result) => debug!(
                depth,
                safety_factor = result.safety_factor,
                is_safe = result.is_safe,
                settlement = result.settlement,
                "Depth analysed"
            ),
            Err(err) => warn!(depth, code = err.error_code(), %err, "Depth analysis failed"),
        }

        (depth, outcome)
    };

    let outcomes = evaluate_depths(&depths, settings.parallel, evaluate);

    let failed = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();
    info!(method = method.name(), analysed = outcomes.len(), failed, "Liquefaction analysis finished");

    Ok(outcomes)
}

/// Evaluate every analysed depth; the first failing depth fails the analysis.
pub fn run_analysis<M: TriggeringMethod>(
    method: &M,
    profile: &SoilProfile,
    log: &ExperimentLog<M::Exp>,
    event: &SeismicEvent,
    settings: &AnalysisSettings,
) -> CalcResult<Vec<LiquefactionResult>> {
    run_each_depth(method, profile, log, event, settings)?
        .into_iter()
        .map(|(_, outcome)| outcome)
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_depths<F>(depths: &[f64], parallel: bool, evaluate: F) -> Vec<DepthOutcome>
where
    F: Fn(f64) -> DepthOutcome + Sync + Send,
{
    use rayon::prelude::*;

    if parallel {
        depths.par_iter().map(|&depth| evaluate(depth)).collect()
    } else {
        depths.iter().map(|&depth| evaluate(depth)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_depths<F>(depths: &[f64], _parallel: bool, evaluate: F) -> Vec<DepthOutcome>
where
    F: Fn(f64) -> DepthOutcome,
{
    depths.iter().map(|&depth| evaluate(depth)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiments::{CptExp, CptLog};
    use crate::soil::SoilLayer;

    fn profile(gwl: f64) -> SoilProfile {
        SoilProfile::new(
            vec![
                SoilLayer::new(2.0, 16.0, 18.0),
                SoilLayer::new(5.0, 16.0, 18.0).with_plasticity_index(20.0),
                SoilLayer::new(15.0, 16.0, 18.0),
            ],
            gwl,
        )
        .unwrap()
    }

    #[test]
    fn test_all_depths_union() {
        let log = CptLog::new(vec![
            CptExp::new(7.0, 80.0),
            CptExp::new(1.5, 60.0),
            CptExp::new(30.0, 120.0),
        ])
        .unwrap();

        assert_eq!(get_all_depths(&profile(1.0), &log), vec![1.5, 2.0, 7.0, 22.0, 30.0]);
    }

    #[test]
    fn test_check_safety_conditions() {
        let settings = AnalysisSettings::default();
        let profile = profile(1.0);

        // safety factor alone
        assert!(check_safety(&profile, 20.0, 1.1, &settings));
        assert!(!check_safety(&profile, 20.0, 1.09, &settings));

        // plastic layer between 2 and 7 m
        assert!(check_safety(&profile, 5.0, 0.5, &settings));

        // water table below the depth
        let dry = self::profile(10.0);
        assert!(check_safety(&dry, 9.0, 0.5, &settings));
        // water table exactly at the depth does not count
        assert!(!check_safety(&dry, 10.0, 0.5, &settings));
    }

    #[test]
    fn test_plasticity_limit_is_strict() {
        let settings = AnalysisSettings {
            plasticity_index_limit: 20.0,
            ..AnalysisSettings::default()
        };
        assert!(!check_safety(&profile(1.0), 5.0, 0.5, &settings));
    }

    #[test]
    fn test_safety_ratio() {
        assert_eq!(safety_ratio(0.0, 0.0), f64::INFINITY);
        assert_eq!(safety_ratio(3.0, 2.0), 1.5);
        assert_eq!(safety_ratio(0.0, 2.0), 0.0);
    }
}

//! # In-Situ Experiment Logs
//!
//! Depth-sorted point measurements from one field test. Three record types
//! are supported:
//!
//! - [`CptExp`] - cone penetration test (cone resistance)
//! - [`SptExp`] - standard penetration test (raw and corrected blow counts)
//! - [`MaswExp`] - multichannel analysis of surface waves (shear-wave velocity)
//!
//! A log answers "which reading governs depth z" with a step lookup: the
//! deepest reading at or above z holds until the next reading.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::experiments::{CptExp, CptLog};
//!
//! let log = CptLog::new(vec![
//!     CptExp::new(4.0, 90.0),
//!     CptExp::new(1.0, 60.0),
//! ]).unwrap();
//!
//! // records are sorted on construction
//! assert_eq!(log.exps()[0].depth, 1.0);
//! assert_eq!(log.get_exp_at_depth(3.0).cone_resistance, 60.0);
//! assert_eq!(log.get_exp_at_depth(4.0).cone_resistance, 90.0);
//! ```

pub mod cpt;
pub mod masw;
pub mod spt;

pub use cpt::CptExp;
pub use masw::MaswExp;
pub use spt::SptExp;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single measurement at a depth.
pub trait Experiment {
    /// Depth of the measurement below the surface (m)
    fn depth(&self) -> f64;

    /// Range-check the measured values.
    fn validate(&self) -> CalcResult<()>;
}

/// Validate the depth shared by every record type
pub(crate) fn validate_depth(depth: f64) -> CalcResult<()> {
    if !depth.is_finite() || depth < 0.0 {
        return Err(CalcError::invalid_input(
            "depth",
            depth.to_string(),
            "Measurement depth must be a non-negative number",
        ));
    }
    Ok(())
}

/// Ordered measurements of one test, shallowest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentLog<E> {
    exps: Vec<E>,
}

/// CPT sounding
pub type CptLog = ExperimentLog<CptExp>;
/// SPT boring log
pub type SptLog = ExperimentLog<SptExp>;
/// MASW velocity profile
pub type MaswLog = ExperimentLog<MaswExp>;

impl<E: Experiment> ExperimentLog<E> {
    /// Validate the records and sort them by depth.
    ///
    /// # Errors
    ///
    /// * `CalcError::MissingField` - no records
    /// * `CalcError::InvalidInput` - a record fails validation
    pub fn new(exps: Vec<E>) -> CalcResult<Self> {
        if exps.is_empty() {
            return Err(CalcError::missing_field("exps"));
        }
        for (i, exp) in exps.iter().enumerate() {
            exp.validate().map_err(|err| match err {
                CalcError::InvalidInput { field, value, reason } => {
                    CalcError::invalid_input(format!("exps[{i}].{field}"), value, reason)
                }
                other => other,
            })?;
        }

        let mut exps = exps;
        exps.sort_by(|a, b| a.depth().total_cmp(&b.depth()));
        Ok(ExperimentLog { exps })
    }

    /// Records, shallowest first
    pub fn exps(&self) -> &[E] {
        &self.exps
    }

    /// Number of records (always at least one)
    pub fn len(&self) -> usize {
        self.exps.len()
    }

    /// Always false; a log holds at least one record
    pub fn is_empty(&self) -> bool {
        self.exps.is_empty()
    }

    /// Measurement depths, shallowest first
    pub fn depths(&self) -> impl Iterator<Item = f64> + '_ {
        self.exps.iter().map(Experiment::depth)
    }

    /// Record governing `depth`: the last record at or above it.
    ///
    /// Depths shallower than the first reading take the first reading.
    pub fn get_exp_at_depth(&self, depth: f64) -> &E {
        let after = self.exps.partition_point(|exp| exp.depth() <= depth);
        &self.exps[after.saturating_sub(1)]
    }
}

impl<'de, E> Deserialize<'de> for ExperimentLog<E>
where
    E: Experiment + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct LogInput<E> {
            exps: Vec<E>,
        }

        let input = LogInput::<E>::deserialize(deserializer)?;
        ExperimentLog::new(input.exps).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masw_log() -> MaswLog {
        MaswLog::new(vec![
            MaswExp::new(2.0, 150.0),
            MaswExp::new(7.0, 180.0),
            MaswExp::new(22.0, 240.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_step_lookup() {
        let log = masw_log();
        assert_eq!(log.get_exp_at_depth(2.0).shear_wave_velocity, 150.0);
        assert_eq!(log.get_exp_at_depth(6.99).shear_wave_velocity, 150.0);
        assert_eq!(log.get_exp_at_depth(7.0).shear_wave_velocity, 180.0);
        assert_eq!(log.get_exp_at_depth(21.0).shear_wave_velocity, 180.0);
        assert_eq!(log.get_exp_at_depth(50.0).shear_wave_velocity, 240.0);
    }

    #[test]
    fn test_lookup_above_first_reading() {
        let log = masw_log();
        assert_eq!(log.get_exp_at_depth(0.5).shear_wave_velocity, 150.0);
    }

    #[test]
    fn test_sorted_on_construction() {
        let log = MaswLog::new(vec![MaswExp::new(9.0, 200.0), MaswExp::new(3.0, 120.0)]).unwrap();
        assert_eq!(log.depths().collect::<Vec<_>>(), vec![3.0, 9.0]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_empty_log_rejected() {
        assert!(CptLog::new(vec![]).is_err());
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let err = CptLog::new(vec![CptExp::new(1.0, 50.0), CptExp::new(-2.0, 50.0)]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "exps[1].depth"));
    }

    #[test]
    fn test_log_deserialization_validates() {
        let json = r#"{ "exps": [ { "depth": 5.0, "shear_wave_velocity": 190.0 }, { "depth": 1.0, "shear_wave_velocity": 140.0 } ] }"#;
        let log: MaswLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.exps()[0].depth, 1.0);

        let bad = r#"{ "exps": [ { "depth": 5.0, "shear_wave_velocity": -1.0 } ] }"#;
        assert!(serde_json::from_str::<MaswLog>(bad).is_err());
    }
}

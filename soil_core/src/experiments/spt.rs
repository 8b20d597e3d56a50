//! Standard penetration test records.
//!
//! Raw field blow counts are stored alongside the corrected counts used by
//! the triggering and settlement formulas. Corrections are applied upstream.

use serde::{Deserialize, Serialize};

use super::{validate_depth, Experiment, ExperimentLog};
use crate::errors::{CalcError, CalcResult};

/// One SPT reading.
///
/// ## JSON Example
///
/// ```json
/// { "depth": 7.0, "n": 12, "n60": 11.0, "n90": 8.0, "n160": 14.0, "n160f": 18.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SptExp {
    /// Depth below the surface (m)
    pub depth: f64,

    /// Raw blow count N
    pub n: u32,

    /// Energy-corrected blow count N60
    #[serde(default)]
    pub n60: f64,

    /// Blow count at 90% energy ratio, drives the settlement estimate
    #[serde(default)]
    pub n90: f64,

    /// Overburden-corrected blow count (N1)60
    #[serde(default)]
    pub n160: f64,

    /// Fines-corrected blow count (N1)60f
    #[serde(default)]
    pub n160f: f64,
}

impl SptExp {
    /// Create a reading with only the raw blow count; corrected counts are zero.
    pub fn new(depth: f64, n: u32) -> Self {
        SptExp {
            depth,
            n,
            n60: 0.0,
            n90: 0.0,
            n160: 0.0,
            n160f: 0.0,
        }
    }

    /// Set the corrected blow counts
    pub fn with_corrected(mut self, n60: f64, n90: f64, n160: f64, n160f: f64) -> Self {
        self.n60 = n60;
        self.n90 = n90;
        self.n160 = n160;
        self.n160f = n160f;
        self
    }
}

impl Experiment for SptExp {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn validate(&self) -> CalcResult<()> {
        validate_depth(self.depth)?;
        for (field, value) in [
            ("n60", self.n60),
            ("n90", self.n90),
            ("n160", self.n160),
            ("n160f", self.n160f),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Blow count must be non-negative",
                ));
            }
        }
        Ok(())
    }
}

impl ExperimentLog<SptExp> {
    /// Mean raw blow count, truncated to an integer
    pub fn average_n(&self) -> u32 {
        let total: u64 = self.exps().iter().map(|exp| u64::from(exp.n)).sum();
        (total / self.len() as u64) as u32
    }
}

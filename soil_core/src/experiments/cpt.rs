//! Cone penetration test records.

use serde::{Deserialize, Serialize};

use super::{validate_depth, Experiment};
use crate::errors::{CalcError, CalcResult};

/// One CPT reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CptExp {
    /// Depth below the surface (m)
    pub depth: f64,

    /// Normalized cone tip resistance qcN
    pub cone_resistance: f64,
}

impl CptExp {
    pub fn new(depth: f64, cone_resistance: f64) -> Self {
        CptExp { depth, cone_resistance }
    }
}

impl Experiment for CptExp {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn validate(&self) -> CalcResult<()> {
        validate_depth(self.depth)?;
        if !(self.cone_resistance.is_finite() && self.cone_resistance > 0.0) {
            return Err(CalcError::invalid_input(
                "cone_resistance",
                self.cone_resistance.to_string(),
                "Cone resistance must be positive",
            ));
        }
        Ok(())
    }
}

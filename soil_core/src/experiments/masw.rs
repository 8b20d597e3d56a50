//! MASW shear-wave velocity records.

use serde::{Deserialize, Serialize};

use super::{validate_depth, Experiment};
use crate::errors::{CalcError, CalcResult};

/// One shear-wave velocity reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaswExp {
    /// Depth below the surface (m)
    pub depth: f64,

    /// Shear-wave velocity Vs (m/s)
    pub shear_wave_velocity: f64,
}

impl MaswExp {
    pub fn new(depth: f64, shear_wave_velocity: f64) -> Self {
        MaswExp {
            depth,
            shear_wave_velocity,
        }
    }
}

impl Experiment for MaswExp {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn validate(&self) -> CalcResult<()> {
        validate_depth(self.depth)?;
        if !(self.shear_wave_velocity.is_finite() && self.shear_wave_velocity > 0.0) {
            return Err(CalcError::invalid_input(
                "shear_wave_velocity",
                self.shear_wave_velocity.to_string(),
                "Shear-wave velocity must be positive",
            ));
        }
        Ok(())
    }
}

//! # Analysis Settings
//!
//! Tunable parameters for a liquefaction analysis, plus the earthquake
//! parameters shared by every triggering method.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_json(r#"{ "limit_safety_factor": 1.25 }"#).unwrap();
//! assert_eq!(settings.limit_safety_factor, 1.25);
//! assert_eq!(settings.max_cn_iterations, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Safety factor at or above which a layer is considered safe
pub const DEFAULT_LIMIT_SAFETY_FACTOR: f64 = 1.1;

/// Plasticity index above which soil is treated as cohesive (non-liquefiable)
pub const DEFAULT_PLASTICITY_INDEX_LIMIT: f64 = 12.0;

/// Convergence tolerance on the CPT stress exponent m
pub const DEFAULT_CN_TOLERANCE: f64 = 0.001;

/// Iteration cap for the CPT stress-normalization loop
pub const DEFAULT_MAX_CN_ITERATIONS: usize = 100;

/// Parameters controlling verdicts, iteration and execution of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Minimum safety factor for a "safe" verdict
    pub limit_safety_factor: f64,

    /// Layers with a plasticity index above this are non-liquefiable
    pub plasticity_index_limit: f64,

    /// Convergence tolerance for the CPT Cn iteration
    pub cn_tolerance: f64,

    /// Iteration cap for the CPT Cn iteration
    pub max_cn_iterations: usize,

    /// Evaluate depths in parallel (requires the `parallel` feature)
    pub parallel: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            limit_safety_factor: DEFAULT_LIMIT_SAFETY_FACTOR,
            plasticity_index_limit: DEFAULT_PLASTICITY_INDEX_LIMIT,
            cn_tolerance: DEFAULT_CN_TOLERANCE,
            max_cn_iterations: DEFAULT_MAX_CN_ITERATIONS,
            parallel: true,
        }
    }
}

impl AnalysisSettings {
    /// Parse settings from JSON. Missing keys take their default values.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Builder-style override of the safety factor threshold
    pub fn with_limit_safety_factor(mut self, limit: f64) -> Self {
        self.limit_safety_factor = limit;
        self
    }

    /// Builder-style toggle for parallel depth evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.limit_safety_factor.is_finite() && self.limit_safety_factor > 0.0) {
            return Err(CalcError::invalid_input(
                "limit_safety_factor",
                self.limit_safety_factor.to_string(),
                "Limit safety factor must be positive",
            ));
        }
        if !self.plasticity_index_limit.is_finite() || self.plasticity_index_limit < 0.0 {
            return Err(CalcError::invalid_input(
                "plasticity_index_limit",
                self.plasticity_index_limit.to_string(),
                "Plasticity index limit must be non-negative",
            ));
        }
        if !(self.cn_tolerance.is_finite() && self.cn_tolerance > 0.0) {
            return Err(CalcError::invalid_input(
                "cn_tolerance",
                self.cn_tolerance.to_string(),
                "Convergence tolerance must be positive",
            ));
        }
        if self.max_cn_iterations == 0 {
            return Err(CalcError::invalid_input(
                "max_cn_iterations",
                "0",
                "At least one iteration is required",
            ));
        }
        Ok(())
    }
}

/// Earthquake parameters for a triggering analysis.
///
/// ## JSON Example
///
/// ```json
/// { "moment_magnitude": 7.5, "peak_ground_acceleration": 0.3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    /// Moment magnitude Mw
    pub moment_magnitude: f64,

    /// Peak ground acceleration (g)
    pub peak_ground_acceleration: f64,
}

impl SeismicEvent {
    /// Create and validate an event.
    pub fn new(moment_magnitude: f64, peak_ground_acceleration: f64) -> CalcResult<Self> {
        let event = SeismicEvent {
            moment_magnitude,
            peak_ground_acceleration,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.moment_magnitude.is_finite() && self.moment_magnitude > 0.0) {
            return Err(CalcError::invalid_input(
                "moment_magnitude",
                self.moment_magnitude.to_string(),
                "Moment magnitude must be positive",
            ));
        }
        if !self.peak_ground_acceleration.is_finite() || self.peak_ground_acceleration < 0.0 {
            return Err(CalcError::invalid_input(
                "peak_ground_acceleration",
                self.peak_ground_acceleration.to_string(),
                "Peak ground acceleration cannot be negative",
            ));
        }
        Ok(())
    }
}

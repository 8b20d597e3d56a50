//! # Soil Layer
//!
//! One stratum of a soil column. Only thickness, unit weights, fines content
//! and plasticity index feed the liquefaction formulas; the remaining index
//! properties are carried through for reporting and for other analyses.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "thickness": 5.0,
//!   "dry_unit_weight": 1.6,
//!   "saturated_unit_weight": 1.8,
//!   "fine_content": 12.0,
//!   "plasticity_index": 4.0,
//!   "properties": { "soil_class": "SM", "friction_angle": 32.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single soil stratum.
///
/// `depth` and `center` are derived by [`SoilProfile`](super::SoilProfile)
/// when the layer is placed in a profile and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilLayer {
    /// Layer thickness (m)
    pub thickness: f64,

    /// Unit weight above the water table
    pub dry_unit_weight: f64,

    /// Unit weight below the water table
    pub saturated_unit_weight: f64,

    /// Fines content (%)
    #[serde(default)]
    pub fine_content: f64,

    /// Plasticity index (%)
    #[serde(default)]
    pub plasticity_index: f64,

    /// Optional index properties, not used by triggering
    #[serde(default)]
    pub properties: IndexProperties,

    /// Bottom of the layer measured from the surface (m)
    #[serde(default, skip_deserializing)]
    depth: f64,

    /// Mid-height of the layer measured from the surface (m)
    #[serde(default, skip_deserializing)]
    center: f64,
}

impl SoilLayer {
    /// Create a layer with zero fines and zero plasticity.
    ///
    /// ```rust
    /// use soil_core::soil::SoilLayer;
    ///
    /// let layer = SoilLayer::new(2.0, 1.6, 1.8)
    ///     .with_fine_content(15.0)
    ///     .with_plasticity_index(8.0);
    /// assert!(layer.validate().is_ok());
    /// ```
    pub fn new(thickness: f64, dry_unit_weight: f64, saturated_unit_weight: f64) -> Self {
        SoilLayer {
            thickness,
            dry_unit_weight,
            saturated_unit_weight,
            fine_content: 0.0,
            plasticity_index: 0.0,
            properties: IndexProperties::default(),
            depth: 0.0,
            center: 0.0,
        }
    }

    /// Set the fines content (%)
    pub fn with_fine_content(mut self, fine_content: f64) -> Self {
        self.fine_content = fine_content;
        self
    }

    /// Set the plasticity index (%)
    pub fn with_plasticity_index(mut self, plasticity_index: f64) -> Self {
        self.plasticity_index = plasticity_index;
        self
    }

    /// Attach index properties
    pub fn with_properties(mut self, properties: IndexProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Bottom depth of the layer (m). Zero until placed in a profile.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Center depth of the layer (m). Zero until placed in a profile.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Top depth of the layer (m)
    pub fn top(&self) -> f64 {
        self.depth - self.thickness
    }

    pub(crate) fn place(&mut self, top: f64) {
        self.center = top + self.thickness / 2.0;
        self.depth = top + self.thickness;
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(CalcError::invalid_input(
                "thickness",
                self.thickness.to_string(),
                "Layer thickness must be positive",
            ));
        }
        non_negative("dry_unit_weight", self.dry_unit_weight)?;
        non_negative("saturated_unit_weight", self.saturated_unit_weight)?;
        percentage("fine_content", self.fine_content)?;
        non_negative("plasticity_index", self.plasticity_index)?;
        self.properties.validate()
    }
}

/// Optional index properties of a layer.
///
/// Units follow the profile's convention: lengths in m, stresses in the same
/// unit as the unit weights times metres, angles in degrees, ratios in %.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexProperties {
    /// USCS class (e.g., "SM", "CL")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cohesive: Option<bool>,
    /// Damping ratio (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquid_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plastic_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undrained_shear_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohesion: Option<f64>,
    /// Friction angle (degrees, 0-90)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_angle: Option<f64>,
    /// Effective friction angle (degrees, 0-90)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_friction_angle: Option<f64>,
    /// Water content (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poissons_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elastic_modulus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recompression_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preconsolidation_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_compressibility_coefficient: Option<f64>,
    /// Shear-wave velocity (m/s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_wave_velocity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spt_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cone_resistance: Option<f64>,
    /// Rock quality designation (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rqd: Option<f64>,
    /// Point load strength index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is50: Option<f64>,
    /// Passive earth pressure coefficient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kp: Option<f64>,
}

impl IndexProperties {
    /// Validate the properties that are present.
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(phi) = self.friction_angle {
            angle("friction_angle", phi)?;
        }
        if let Some(phi) = self.effective_friction_angle {
            angle("effective_friction_angle", phi)?;
        }
        if let Some(ratio) = self.damping_ratio {
            percentage("damping_ratio", ratio)?;
        }
        if let Some(rqd) = self.rqd {
            percentage("rqd", rqd)?;
        }
        if let Some(nu) = self.poissons_ratio {
            if !(0.0..=0.5).contains(&nu) {
                return Err(CalcError::invalid_input(
                    "poissons_ratio",
                    nu.to_string(),
                    "Poisson's ratio must be between 0 and 0.5",
                ));
            }
        }
        for (field, value) in [
            ("liquid_limit", self.liquid_limit),
            ("plastic_limit", self.plastic_limit),
            ("undrained_shear_strength", self.undrained_shear_strength),
            ("cohesion", self.cohesion),
            ("water_content", self.water_content),
            ("elastic_modulus", self.elastic_modulus),
            ("void_ratio", self.void_ratio),
            ("shear_wave_velocity", self.shear_wave_velocity),
            ("cone_resistance", self.cone_resistance),
        ] {
            if let Some(value) = value {
                non_negative(field, value)?;
            }
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be non-negative"));
    }
    Ok(())
}

fn percentage(field: &str, value: f64) -> CalcResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be between 0 and 100"));
    }
    Ok(())
}

fn angle(field: &str, value: f64) -> CalcResult<()> {
    if !(0.0..=90.0).contains(&value) {
        return Err(CalcError::invalid_input(field, value.to_string(), "Angle must be between 0 and 90 degrees"));
    }
    Ok(())
}

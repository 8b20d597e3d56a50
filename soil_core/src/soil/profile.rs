//! # Soil Profile
//!
//! An ordered stack of [`SoilLayer`]s with a water table. The profile derives
//! each layer's bottom and center depth once, at construction, and integrates
//! vertical stress on demand.
//!
//! ## Stress Model
//!
//! ```text
//!   0 ─────────────────────── surface
//!       γ_dry                  layer 0
//!   gwl ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─  water table (may split a layer)
//!       γ_sat
//!   d0 ───────────────────────
//!       γ_sat                  layer 1
//!   d1 ───────────────────────
//! ```
//!
//! - σv(z) = Σ γ·Δz over the spanned increments, γ_dry above the water table
//!   and γ_sat below it
//! - σ'v(z) = σv(z) − γw·(z − gwl) for z below the water table
//!
//! ## Example
//!
//! ```rust
//! use soil_core::soil::{SoilLayer, SoilProfile};
//!
//! let profile = SoilProfile::new(
//!     vec![SoilLayer::new(2.0, 16.0, 18.0), SoilLayer::new(5.0, 16.0, 18.0)],
//!     1.0,
//! ).unwrap();
//!
//! // 1 m dry + 1 m saturated
//! assert!((profile.calc_normal_stress(2.0) - 34.0).abs() < 1e-9);
//! assert_eq!(profile.get_layer_index(2.5), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::layer::SoilLayer;
use crate::errors::{CalcError, CalcResult};

/// Unit weight of water (t/m³)
pub const WATER_UNIT_WEIGHT: f64 = 0.981;

/// A validated soil column.
///
/// Immutable after construction; use [`SoilProfile::with_ground_water_level`]
/// or build a new profile to model a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInput")]
pub struct SoilProfile {
    layers: Vec<SoilLayer>,
    ground_water_level: f64,
}

/// Unvalidated profile as it appears in JSON
#[derive(Deserialize)]
struct ProfileInput {
    layers: Vec<SoilLayer>,
    ground_water_level: f64,
}

impl TryFrom<ProfileInput> for SoilProfile {
    type Error = CalcError;

    fn try_from(input: ProfileInput) -> CalcResult<Self> {
        SoilProfile::new(input.layers, input.ground_water_level)
    }
}

impl SoilProfile {
    /// Build a profile, validating every layer and deriving depths.
    ///
    /// # Errors
    ///
    /// * `CalcError::MissingField` - the layer list is empty
    /// * `CalcError::InvalidInput` - a layer fails validation, or the water
    ///   table is negative or non-finite
    pub fn new(layers: Vec<SoilLayer>, ground_water_level: f64) -> CalcResult<Self> {
        if layers.is_empty() {
            return Err(CalcError::missing_field("layers"));
        }
        if !ground_water_level.is_finite() || ground_water_level < 0.0 {
            return Err(CalcError::invalid_input(
                "ground_water_level",
                ground_water_level.to_string(),
                "Water table depth must be a non-negative number",
            ));
        }

        let mut layers = layers;
        let mut bottom = 0.0;
        for (i, layer) in layers.iter_mut().enumerate() {
            layer.validate().map_err(|err| match err {
                CalcError::InvalidInput { field, value, reason } => {
                    CalcError::invalid_input(format!("layers[{i}].{field}"), value, reason)
                }
                other => other,
            })?;
            layer.place(bottom);
            bottom = layer.depth();
        }

        Ok(SoilProfile {
            layers,
            ground_water_level,
        })
    }

    /// Copy of this profile with a different water table.
    pub fn with_ground_water_level(&self, ground_water_level: f64) -> CalcResult<Self> {
        SoilProfile::new(self.layers.clone(), ground_water_level)
    }

    /// Layers from the surface down
    pub fn layers(&self) -> &[SoilLayer] {
        &self.layers
    }

    /// Depth of the water table below the surface (m)
    pub fn ground_water_level(&self) -> f64 {
        self.ground_water_level
    }

    /// Bottom depth of the deepest layer (m)
    pub fn total_depth(&self) -> f64 {
        self.layers.last().map_or(0.0, SoilLayer::depth)
    }

    /// Bottom depths of all layers, surface down
    pub fn layer_depths(&self) -> impl Iterator<Item = f64> + '_ {
        self.layers.iter().map(SoilLayer::depth)
    }

    /// Index of the first layer whose bottom is at or below `depth`.
    ///
    /// Depths below the profile resolve to the last layer.
    pub fn get_layer_index(&self, depth: f64) -> usize {
        self.layers
            .iter()
            .position(|layer| layer.depth() >= depth)
            .unwrap_or(self.layers.len() - 1)
    }

    /// Layer governing `depth` (see [`SoilProfile::get_layer_index`])
    pub fn get_layer_at_depth(&self, depth: f64) -> &SoilLayer {
        &self.layers[self.get_layer_index(depth)]
    }

    /// Total vertical (overburden) stress at `depth`.
    ///
    /// Integrates unit weight × thickness from the surface, splitting any
    /// increment crossed by the water table. Below the profile bottom the last
    /// layer is extended. Non-positive depths carry no overburden.
    pub fn calc_normal_stress(&self, depth: f64) -> f64 {
        let last = self.layers.len() - 1;
        let mut stress = 0.0;
        let mut top = 0.0;

        for (i, layer) in self.layers.iter().enumerate() {
            if depth <= top {
                break;
            }
            let bottom = if i == last { depth } else { layer.depth().min(depth) };
            stress += self.increment(layer, top, bottom);
            top = bottom;
        }

        stress
    }

    /// Effective vertical stress at `depth`.
    ///
    /// Equal to the normal stress at or above the water table.
    ///
    /// # Errors
    ///
    /// * `CalcError::NegativeEffectiveStress` - pore pressure exceeds the
    ///   overburden, which means the unit weights are inconsistent with
    ///   [`WATER_UNIT_WEIGHT`]
    pub fn calc_effective_stress(&self, depth: f64) -> CalcResult<f64> {
        let normal = self.calc_normal_stress(depth);
        if depth <= self.ground_water_level {
            return Ok(normal);
        }

        let pore_pressure = (depth - self.ground_water_level) * WATER_UNIT_WEIGHT;
        let effective = normal - pore_pressure;
        if effective < 0.0 {
            return Err(CalcError::NegativeEffectiveStress {
                depth,
                value: effective,
            });
        }
        Ok(effective)
    }

    /// Stress contributed by `layer` between `top` and `bottom`
    fn increment(&self, layer: &SoilLayer, top: f64, bottom: f64) -> f64 {
        let gwl = self.ground_water_level;
        if gwl >= bottom {
            layer.dry_unit_weight * (bottom - top)
        } else if gwl <= top {
            layer.saturated_unit_weight * (bottom - top)
        } else {
            layer.dry_unit_weight * (gwl - top) + layer.saturated_unit_weight * (bottom - gwl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_layers() -> Vec<SoilLayer> {
        vec![
            SoilLayer::new(2.0, 1.6, 1.8),
            SoilLayer::new(3.0, 1.7, 1.9),
            SoilLayer::new(1.5, 1.8, 2.0),
        ]
    }

    fn reference_profile() -> SoilProfile {
        SoilProfile::new(
            vec![
                SoilLayer::new(2.0, 16.0, 18.0),
                SoilLayer::new(5.0, 16.0, 18.0),
                SoilLayer::new(15.0, 16.0, 18.0),
            ],
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_calc_layer_depths() {
        let profile = SoilProfile::new(three_layers(), 1.0).unwrap();
        let layers = profile.layers();

        assert_eq!(layers[0].center(), 1.0);
        assert_eq!(layers[0].depth(), 2.0);
        assert_eq!(layers[1].center(), 3.5);
        assert_eq!(layers[1].depth(), 5.0);
        assert_eq!(layers[2].center(), 5.75);
        assert_eq!(layers[2].depth(), 6.5);
        assert_eq!(profile.total_depth(), 6.5);
    }

    #[test]
    fn test_single_layer() {
        let profile = SoilProfile::new(vec![SoilLayer::new(4.0, 1.6, 1.8)], 0.0).unwrap();
        assert_eq!(profile.layers()[0].center(), 2.0);
        assert_eq!(profile.layers()[0].depth(), 4.0);
    }

    #[test]
    fn test_get_layer_index() {
        let profile = SoilProfile::new(three_layers(), 1.0).unwrap();

        assert_eq!(profile.get_layer_index(1.0), 0);
        assert_eq!(profile.get_layer_index(2.5), 1);
        assert_eq!(profile.get_layer_index(6.0), 2);

        // layer bottoms belong to the layer above
        assert_eq!(profile.get_layer_index(2.0), 0);
        assert_eq!(profile.get_layer_index(5.0), 1);
        assert_eq!(profile.get_layer_index(6.5), 2);

        // below the profile clamps to the last layer
        assert_eq!(profile.get_layer_index(10.0), 2);
    }

    #[test]
    fn test_empty_profile_rejected() {
        let err = SoilProfile::new(vec![], 1.0).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_invalid_layer_reports_index() {
        let mut layers = three_layers();
        layers[1].thickness = 0.0;
        let err = SoilProfile::new(layers, 1.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "layers[1].thickness"));
    }

    #[test]
    fn test_normal_stress_with_water_table_split() {
        let profile = reference_profile();

        // dry 1 m + saturated 1 m
        assert!((profile.calc_normal_stress(2.0) - 34.0).abs() < 1e-9);
        // partial first layer above the water table
        assert!((profile.calc_normal_stress(0.5) - 8.0).abs() < 1e-9);
        // 34 + 5 * 18
        assert!((profile.calc_normal_stress(7.0) - 124.0).abs() < 1e-9);
        // 124 + 15 * 18
        assert!((profile.calc_normal_stress(22.0) - 394.0).abs() < 1e-9);
        assert_eq!(profile.calc_normal_stress(0.0), 0.0);
    }

    #[test]
    fn test_normal_stress_extends_last_layer() {
        let profile = reference_profile();
        assert!((profile.calc_normal_stress(23.0) - 412.0).abs() < 1e-9);
    }

    #[test]
    fn test_water_table_below_profile() {
        let profile = reference_profile().with_ground_water_level(30.0).unwrap();
        assert!((profile.calc_normal_stress(22.0) - 352.0).abs() < 1e-9);
        assert_eq!(
            profile.calc_effective_stress(22.0).unwrap(),
            profile.calc_normal_stress(22.0)
        );
    }

    #[test]
    fn test_effective_stress() {
        let profile = reference_profile();

        assert_eq!(profile.calc_effective_stress(0.8).unwrap(), profile.calc_normal_stress(0.8));
        assert_eq!(profile.calc_effective_stress(1.0).unwrap(), profile.calc_normal_stress(1.0));

        // 34 - 1 * 0.981
        assert!((profile.calc_effective_stress(2.0).unwrap() - 33.019).abs() < 1e-9);
        // 124 - 6 * 0.981
        assert!((profile.calc_effective_stress(7.0).unwrap() - 118.114).abs() < 1e-9);
    }

    #[test]
    fn test_negative_effective_stress_surfaces() {
        let profile = SoilProfile::new(vec![SoilLayer::new(5.0, 0.2, 0.3)], 0.0).unwrap();
        let err = profile.calc_effective_stress(4.0).unwrap_err();
        assert_eq!(err.error_code(), "NEGATIVE_EFFECTIVE_STRESS");
    }

    #[test]
    fn test_profile_deserialization_derives_depths() {
        let json = r#"{
            "layers": [
                { "thickness": 2.0, "dry_unit_weight": 16.0, "saturated_unit_weight": 18.0 },
                { "thickness": 5.0, "dry_unit_weight": 16.0, "saturated_unit_weight": 18.0, "fine_content": 20.0 }
            ],
            "ground_water_level": 1.0
        }"#;
        let profile: SoilProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.layers()[1].depth(), 7.0);
        assert_eq!(profile.layers()[1].center(), 4.5);
        assert_eq!(profile.layers()[1].fine_content, 20.0);

        let bad = r#"{ "layers": [], "ground_water_level": 1.0 }"#;
        assert!(serde_json::from_str::<SoilProfile>(bad).is_err());
    }

    #[test]
    fn test_modified_profile_is_new_copy() {
        let profile = reference_profile();
        let lowered = profile.with_ground_water_level(5.0).unwrap();
        assert_eq!(profile.ground_water_level(), 1.0);
        assert_eq!(lowered.ground_water_level(), 5.0);
        assert_eq!(lowered.layer_depths().collect::<Vec<_>>(), vec![2.0, 7.0, 22.0]);
    }
}

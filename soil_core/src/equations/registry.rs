//! # Equation Registry
//!
//! Central registry of the formulas evaluated by the liquefaction engine.
//! Each equation carries its literature reference, plain-text formula, and
//! variable definitions, so an analysis can list exactly what it applied.
//!
//! ## Usage
//!
//! ```rust
//! use soil_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::SptCyclicResistance.metadata();
//! assert_eq!(meta.category, EquationCategory::CyclicResistance);
//! println!("{} ({})", meta.formula_plain, meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Literature References
// ============================================================================

/// Published source of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Youd et al. (2001), NCEER/NSF workshop summary report
    Youd2001 { equation: &'static str },
    /// Boulanger & Idriss (2014), CPT and SPT based triggering procedures
    BoulangerIdriss2014 { equation: &'static str },
    /// Andrus & Stokoe (2000), liquefaction resistance from shear-wave velocity
    AndrusStokoe2000 { equation: &'static str },
    /// Ishihara & Yoshimine (1992), post-liquefaction volumetric strain
    IshiharaYoshimine1992,
    /// Soil mechanics fundamentals (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Youd2001 { equation } => format!("Youd et al. (2001), Eq. {}", equation),
            CodeReference::BoulangerIdriss2014 { equation } => {
                format!("Boulanger & Idriss (2014), Eq. {}", equation)
            }
            CodeReference::AndrusStokoe2000 { equation } => {
                format!("Andrus & Stokoe (2000), Eq. {}", equation)
            }
            CodeReference::IshiharaYoshimine1992 => "Ishihara & Yoshimine (1992)".to_string(),
            CodeReference::Mechanics => "Soil Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Youd2001 { .. } => "Youd 2001",
            CodeReference::BoulangerIdriss2014 { .. } => "B&I 2014",
            CodeReference::AndrusStokoe2000 { .. } => "A&S 2000",
            CodeReference::IshiharaYoshimine1992 => "I&Y 1992",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// In-situ vertical stresses
    Stresses,
    /// Earthquake loading (CSR, rd, MSF)
    SeismicDemand,
    /// Normalization of in-situ test indices
    IndexCorrections,
    /// Cyclic resistance curves
    CyclicResistance,
    /// Safety factor and verdict
    SafetyChecks,
    /// Post-liquefaction volumetric strain and settlement
    Settlement,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Stresses => "Stresses",
            EquationCategory::SeismicDemand => "Seismic Demand",
            EquationCategory::IndexCorrections => "Index Corrections",
            EquationCategory::CyclicResistance => "Cyclic Resistance",
            EquationCategory::SafetyChecks => "Safety Checks",
            EquationCategory::Settlement => "Settlement",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Stresses => 1,
            EquationCategory::SeismicDemand => 2,
            EquationCategory::IndexCorrections => 3,
            EquationCategory::CyclicResistance => 4,
            EquationCategory::SafetyChecks => 5,
            EquationCategory::Settlement => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one engine equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Literature reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations evaluated by the liquefaction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Stresses
    // -------------------------------------------------------------------------
    /// σv = Σ γ·h
    NormalStress,
    /// σ'v = σv − γw·(z − zw)
    EffectiveStress,

    // -------------------------------------------------------------------------
    // Seismic demand
    // -------------------------------------------------------------------------
    /// MSF = 10^2.24 / Mw^2.56
    MagnitudeScalingFactor,
    /// Four-branch rd(z)
    StressReductionIdriss,
    /// rd(z, Mw) = exp(α + β·Mw)
    StressReductionBoulangerIdriss,
    /// CSR = 0.65·amax·σv·rd
    CyclicStressRatio,

    // -------------------------------------------------------------------------
    // CPT
    // -------------------------------------------------------------------------
    /// CN = (Pa/σ'v)^m, iterated
    CptOverburdenCorrection,
    /// Δqc1N from fines content
    CptFinesCorrection,
    /// qc1Ncs = qc1N + Δqc1N
    CptCleanSandResistance,
    /// MSF dependent on qc1Ncs
    CptMagnitudeScalingFactor,
    /// Cσ and Kσ
    CptOverburdenFactor,
    /// CRR7.5 from qc1Ncs
    CptCyclicResistance,

    // -------------------------------------------------------------------------
    // SPT
    // -------------------------------------------------------------------------
    /// CRR7.5 from (N1)60f
    SptCyclicResistance,

    // -------------------------------------------------------------------------
    // MASW
    // -------------------------------------------------------------------------
    /// CN = min(1.7, 3.16·(1/σ'v)^0.5)
    MaswOverburdenCorrection,
    /// Vs1c from fines content
    MaswLimitingVelocity,
    /// CRR7.5 from Vs1
    MaswCyclicResistance,

    // -------------------------------------------------------------------------
    // Safety
    // -------------------------------------------------------------------------
    /// Safe / not safe verdict
    LiquefactionSafetyCheck,

    // -------------------------------------------------------------------------
    // Settlement
    // -------------------------------------------------------------------------
    /// εv(qci, FS)
    VolumetricStrain,
    /// qci from N90
    N90ToQci,
    /// Dr = 17.974·(Vs1c/100)^1.976
    RelativeDensity,
    /// qci from Dr
    RelativeDensityToQci,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::NormalStress => EquationMetadata {
                name: "Total Vertical Stress",
                description: "Overburden pressure integrated from the surface, dry above and saturated below the water table",
                formula_plain: "sigma_v = sum(gamma_dry * h_above_wt + gamma_sat * h_below_wt)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("gamma_dry", "Dry unit weight", "t/m^3"),
                    Variable::new("gamma_sat", "Saturated unit weight", "t/m^3"),
                    Variable::new("h", "Thickness of the spanned part of a layer", "m"),
                ],
                assumptions: vec!["Last layer extends below the profile bottom"],
                category: EquationCategory::Stresses,
                source_module: "soil/profile.rs",
                source_function: "calc_normal_stress",
            },

            Equation::EffectiveStress => EquationMetadata {
                name: "Effective Vertical Stress",
                description: "Total stress less hydrostatic pore pressure below the water table",
                formula_plain: "sigma'_v = sigma_v - 0.981 * (z - z_w) for z > z_w",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("z", "Depth", "m"),
                    Variable::new("z_w", "Ground water level", "m"),
                ],
                assumptions: vec!["Hydrostatic pore pressure", "Negative results are rejected"],
                category: EquationCategory::Stresses,
                source_module: "soil/profile.rs",
                source_function: "calc_effective_stress",
            },

            Equation::MagnitudeScalingFactor => EquationMetadata {
                name: "Magnitude Scaling Factor",
                description: "Scales resistance at Mw 7.5 to the design magnitude",
                formula_plain: "MSF = 10^2.24 / Mw^2.56",
                reference: CodeReference::Youd2001 { equation: "24" },
                variables: vec![Variable::new("Mw", "Moment magnitude", "-")],
                assumptions: vec!["Used by the SPT and MASW procedures"],
                category: EquationCategory::SeismicDemand,
                source_module: "equations/seismic.rs",
                source_function: "calc_msf",
            },

            Equation::StressReductionIdriss => EquationMetadata {
                name: "Stress Reduction Coefficient",
                description: "Depth reduction of cyclic shear stress, four-branch form",
                formula_plain: "rd = 1 - 0.00765z (z <= 9.15); 1.174 - 0.0267z (z < 23); 0.744 - 0.008z (z < 30); 0.5",
                reference: CodeReference::Youd2001 { equation: "2" },
                variables: vec![Variable::new("z", "Depth", "m")],
                assumptions: vec!["Branches are discontinuous at 9.15 m"],
                category: EquationCategory::SeismicDemand,
                source_module: "equations/seismic.rs",
                source_function: "calc_rd",
            },

            Equation::StressReductionBoulangerIdriss => EquationMetadata {
                name: "Magnitude-Dependent Stress Reduction",
                description: "Depth reduction of cyclic shear stress accounting for magnitude",
                formula_plain: "rd = exp(alpha(z) + beta(z) * Mw) for z <= 34; 0.12 * exp(0.22 * Mw)",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.14" },
                variables: vec![
                    Variable::new("alpha", "-1.012 - 1.126 sin(z/11.73 + 5.133)", "-"),
                    Variable::new("beta", "0.106 + 0.118 sin(z/11.28 + 5.142)", "-"),
                ],
                assumptions: vec!["Used by the CPT procedure"],
                category: EquationCategory::SeismicDemand,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_rd",
            },

            Equation::CyclicStressRatio => EquationMetadata {
                name: "Cyclic Stress Ratio",
                description: "Earthquake-induced cyclic shear demand",
                formula_plain: "CSR = 0.65 * a_max * sigma_v * rd",
                reference: CodeReference::Youd2001 { equation: "1" },
                variables: vec![
                    Variable::new("a_max", "Peak ground acceleration", "g"),
                    Variable::new("sigma_v", "Total vertical stress", "t/m^2"),
                ],
                assumptions: vec!["Multiplied by total stress, not divided by effective stress"],
                category: EquationCategory::SeismicDemand,
                source_module: "equations/seismic.rs",
                source_function: "calc_csr",
            },

            Equation::CptOverburdenCorrection => EquationMetadata {
                name: "CPT Overburden Correction",
                description: "Stress normalization factor solved by fixed-point iteration on m",
                formula_plain: "CN = min(1.7, (Pa / sigma'_v)^m), m = 1.338 - 0.249 * qc1Ncs^0.264",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.15" },
                variables: vec![
                    Variable::new("Pa", "Atmospheric pressure", "10.132"),
                    Variable::new("m", "Stress exponent", "-"),
                ],
                assumptions: vec!["m starts at 0.5", "sigma'_v floored at 0.1", "Bounded iteration count"],
                category: EquationCategory::IndexCorrections,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_cn",
            },

            Equation::CptFinesCorrection => EquationMetadata {
                name: "CPT Fines Content Correction",
                description: "Increment to the equivalent clean-sand cone resistance",
                formula_plain: "dqc1N = (11.9 + qc1N/14.6) * exp(1.63 - 9.7/(FC+2) - (15.7/(FC+2))^2)",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.22" },
                variables: vec![Variable::new("FC", "Fines content", "%")],
                assumptions: vec![],
                category: EquationCategory::IndexCorrections,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_fines_increment",
            },

            Equation::CptCleanSandResistance => EquationMetadata {
                name: "Equivalent Clean-Sand Cone Resistance",
                description: "Normalized, fines-corrected cone resistance",
                formula_plain: "qc1Ncs = clamp(CN * qc + dqc1N, 21, 254)",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.10" },
                variables: vec![Variable::new("qc", "Cone resistance", "-")],
                assumptions: vec!["Clamped to the calibrated range"],
                category: EquationCategory::IndexCorrections,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_qc1ncs",
            },

            Equation::CptMagnitudeScalingFactor => EquationMetadata {
                name: "CPT Magnitude Scaling Factor",
                description: "Resistance-dependent magnitude scaling",
                formula_plain: "MSF = 1 + (MSFmax - 1)(8.64 exp(-Mw/4) - 1.325), MSFmax = min(2.2, 1.09 + (qc1Ncs/180)^3)",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.18" },
                variables: vec![Variable::new("Mw", "Moment magnitude", "-")],
                assumptions: vec![],
                category: EquationCategory::SeismicDemand,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_msf",
            },

            Equation::CptOverburdenFactor => EquationMetadata {
                name: "Overburden Correction Factor",
                description: "Correction of resistance for confining stress",
                formula_plain: "K_sigma = min(1.1, 1 - C_sigma ln(sigma'_v / 101.32)), C_sigma = min(0.3, 1/(37.3 - 8.27 qc1Ncs^0.264))",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.16" },
                variables: vec![
                    Variable::new("C_sigma", "Overburden correction coefficient", "-"),
                    Variable::new("K_sigma", "Overburden correction factor", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::IndexCorrections,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_kg",
            },

            Equation::CptCyclicResistance => EquationMetadata {
                name: "CPT Cyclic Resistance Ratio",
                description: "Cyclic resistance from equivalent clean-sand cone resistance",
                formula_plain: "CRR7.5 = K_sigma exp(q/113 + (q/1000)^2 - (q/140)^3 + (q/137)^4 - 2.8) sigma'_v",
                reference: CodeReference::BoulangerIdriss2014 { equation: "2.24" },
                variables: vec![Variable::new("q", "qc1Ncs", "-")],
                assumptions: vec!["Safety factor reported as CSR / CRR"],
                category: EquationCategory::CyclicResistance,
                source_module: "equations/boulanger_idriss.rs",
                source_function: "calc_crr",
            },

            Equation::SptCyclicResistance => EquationMetadata {
                name: "SPT Cyclic Resistance Ratio",
                description: "Cyclic resistance from fines-corrected blow count",
                formula_plain: "CRR7.5 = sigma'_v (1/(34 - N) + N/135 + 50/(10N + 45)^2 - 1/200)",
                reference: CodeReference::Youd2001 { equation: "4" },
                variables: vec![Variable::new("N", "(N1)60f", "blows/0.3 m")],
                assumptions: vec!["Undefined for N >= 34"],
                category: EquationCategory::CyclicResistance,
                source_module: "equations/idriss.rs",
                source_function: "calc_crr",
            },

            Equation::MaswOverburdenCorrection => EquationMetadata {
                name: "Shear-Wave Velocity Overburden Correction",
                description: "Stress normalization of measured shear-wave velocity",
                formula_plain: "Vs1 = Vs * min(1.7, 3.16 (1/sigma'_v)^0.5)",
                reference: CodeReference::AndrusStokoe2000 { equation: "2" },
                variables: vec![Variable::new("Vs", "Shear-wave velocity", "m/s")],
                assumptions: vec![],
                category: EquationCategory::IndexCorrections,
                source_module: "equations/andrus_stokoe.rs",
                source_function: "calc_cn",
            },

            Equation::MaswLimitingVelocity => EquationMetadata {
                name: "Limiting Shear-Wave Velocity",
                description: "Upper Vs1 for liquefaction occurrence",
                formula_plain: "Vs1c = 215 (FC <= 5); 215 - 0.5(FC - 5) (FC <= 35); 200",
                reference: CodeReference::AndrusStokoe2000 { equation: "8" },
                variables: vec![Variable::new("FC", "Fines content", "%")],
                assumptions: vec!["Vs1 >= Vs1c is treated as non-liquefiable"],
                category: EquationCategory::IndexCorrections,
                source_module: "equations/andrus_stokoe.rs",
                source_function: "calc_vs1c",
            },

            Equation::MaswCyclicResistance => EquationMetadata {
                name: "MASW Cyclic Resistance Ratio",
                description: "Cyclic resistance from normalized shear-wave velocity",
                formula_plain: "CRR7.5 = sigma'_v (0.03 (Vs1/100)^2 + 0.09 (Vs1c - Vs1) - 0.09/Vs1c)",
                reference: CodeReference::AndrusStokoe2000 { equation: "7" },
                variables: vec![
                    Variable::new("Vs1", "Normalized shear-wave velocity", "m/s"),
                    Variable::new("Vs1c", "Limiting velocity", "m/s"),
                ],
                assumptions: vec!["Vs1 < Vs1c"],
                category: EquationCategory::CyclicResistance,
                source_module: "equations/andrus_stokoe.rs",
                source_function: "calc_crr",
            },

            Equation::LiquefactionSafetyCheck => EquationMetadata {
                name: "Liquefaction Safety Verdict",
                description: "A depth is safe when any non-liquefaction condition holds",
                formula_plain: "safe = FS >= FS_limit or z_w > z or PI > 12",
                reference: CodeReference::Youd2001 { equation: "-" },
                variables: vec![
                    Variable::new("FS_limit", "Limit safety factor", "1.1"),
                    Variable::new("PI", "Plasticity index", "%"),
                ],
                assumptions: vec!["SPT is also safe for (N1)60 >= 30 or (N1)60f >= 34"],
                category: EquationCategory::SafetyChecks,
                source_module: "liquefaction/engine.rs",
                source_function: "check_safety",
            },

            Equation::VolumetricStrain => EquationMetadata {
                name: "Post-Liquefaction Volumetric Strain",
                description: "Strain from safety factor and normalized penetration index",
                formula_plain: "ev = 0 (FS > 2); min(s1, s2) (2 - 1/(a2 + a3 x) < FS < 2); s2, x = ln(qci)",
                reference: CodeReference::IshiharaYoshimine1992,
                variables: vec![
                    Variable::new("s1", "(a0 + a1 x)/(1/(2 - FS) - (a2 + a3 x))", "-"),
                    Variable::new("s2", "b0 + b1 x + b2 x^2", "-"),
                ],
                assumptions: vec!["Settlement = strain * governing layer thickness"],
                category: EquationCategory::Settlement,
                source_module: "equations/settlement.rs",
                source_function: "calc_volumetric_strain",
            },

            Equation::N90ToQci => EquationMetadata {
                name: "Blow Count to Cone Resistance",
                description: "Table conversion of N90 to qci",
                formula_plain: "qci = interp(clamp(N90, 3, 30), [3, 6, 10, 14, 25, 30], [33, 45, 60, 80, 147, 200])",
                reference: CodeReference::IshiharaYoshimine1992,
                variables: vec![Variable::new("N90", "Blow count at 90% energy", "-")],
                assumptions: vec!["Linear interpolation between knots"],
                category: EquationCategory::Settlement,
                source_module: "equations/settlement.rs",
                source_function: "n90_to_qci",
            },

            Equation::RelativeDensity => EquationMetadata {
                name: "Relative Density from Shear-Wave Velocity",
                description: "Relative density correlated to limiting shear-wave velocity",
                formula_plain: "Dr = 17.974 (Vs1c/100)^1.976",
                reference: CodeReference::AndrusStokoe2000 { equation: "-" },
                variables: vec![Variable::new("Dr", "Relative density", "%")],
                assumptions: vec![],
                category: EquationCategory::Settlement,
                source_module: "equations/settlement.rs",
                source_function: "calc_relative_density",
            },

            Equation::RelativeDensityToQci => EquationMetadata {
                name: "Relative Density to Cone Resistance",
                description: "Table conversion of Dr to qci",
                formula_plain: "qci = interp(clamp(Dr, 30, 90), [30, 40, 50, 60, 70, 80, 90], [33, 45, 60, 80, 147, 200])",
                reference: CodeReference::IshiharaYoshimine1992,
                variables: vec![Variable::new("Dr", "Relative density", "%")],
                assumptions: vec!["Dr above 80% holds qci = 200"],
                category: EquationCategory::Settlement,
                source_module: "equations/settlement.rs",
                source_function: "dr_to_qci",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Stresses, SeismicDemand, IndexCorrections, CyclicResistance, SafetyChecks, Settlement];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::NormalStress,
    Equation::EffectiveStress,
    Equation::MagnitudeScalingFactor,
    Equation::StressReductionIdriss,
    Equation::StressReductionBoulangerIdriss,
    Equation::CyclicStressRatio,
    Equation::CptOverburdenCorrection,
    Equation::CptFinesCorrection,
    Equation::CptCleanSandResistance,
    Equation::CptMagnitudeScalingFactor,
    Equation::CptOverburdenFactor,
    Equation::CptCyclicResistance,
    Equation::SptCyclicResistance,
    Equation::MaswOverburdenCorrection,
    Equation::MaswLimitingVelocity,
    Equation::MaswCyclicResistance,
    Equation::LiquefactionSafetyCheck,
    Equation::VolumetricStrain,
    Equation::N90ToQci,
    Equation::RelativeDensity,
    Equation::RelativeDensityToQci,
];

// ============================================================================
// Per-method equation sets
// ============================================================================

const COMMON_EQUATIONS: [Equation; 4] = [
    Equation::NormalStress,
    Equation::EffectiveStress,
    Equation::CyclicStressRatio,
    Equation::LiquefactionSafetyCheck,
];

/// Equations evaluated by the CPT (Boulanger-Idriss) procedure
pub fn cpt_equations() -> Vec<Equation> {
    let mut equations = COMMON_EQUATIONS.to_vec();
    equations.extend([
        Equation::StressReductionBoulangerIdriss,
        Equation::CptOverburdenCorrection,
        Equation::CptFinesCorrection,
        Equation::CptCleanSandResistance,
        Equation::CptMagnitudeScalingFactor,
        Equation::CptOverburdenFactor,
        Equation::CptCyclicResistance,
        Equation::VolumetricStrain,
    ]);
    equations
}

/// Equations evaluated by the SPT (Idriss) procedure
pub fn spt_equations() -> Vec<Equation> {
    let mut equations = COMMON_EQUATIONS.to_vec();
    equations.extend([
        Equation::MagnitudeScalingFactor,
        Equation::StressReductionIdriss,
        Equation::SptCyclicResistance,
        Equation::N90ToQci,
        Equation::VolumetricStrain,
    ]);
    equations
}

/// Equations evaluated by the MASW (Andrus-Stokoe) procedure
pub fn masw_equations() -> Vec<Equation> {
    let mut equations = COMMON_EQUATIONS.to_vec();
    equations.extend([
        Equation::MagnitudeScalingFactor,
        Equation::StressReductionIdriss,
        Equation::MaswOverburdenCorrection,
        Equation::MaswLimitingVelocity,
        Equation::MaswCyclicResistance,
        Equation::RelativeDensity,
        Equation::RelativeDensityToQci,
        Equation::VolumetricStrain,
    ]);
    equations
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the equations reference document as markdown.
///
/// ```rust
/// use soil_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Liquefaction Equations Reference"));
/// assert!(markdown.contains("Cyclic Resistance"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Liquefaction Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations -- <output.md>`

Formulas evaluated by the CPT, SPT and MASW triggering procedures and the
settlement estimator, with their references and implementing functions.

## Units

| Quantity | Unit |
|----------|------|
| Depth, thickness | m |
| Unit weight | t/m^3 |
| Stress | t/m^2 (the unit-weight system of the profile) |
| Peak ground acceleration | g |
| Settlement | same as layer thickness |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 21);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let csr = Equation::CyclicStressRatio.metadata();
        assert!(csr.formula_plain.contains("0.65"));
    }

    #[test]
    fn test_code_reference_citation() {
        let youd = CodeReference::Youd2001 { equation: "4" };
        assert_eq!(youd.citation(), "Youd et al. (2001), Eq. 4");
        assert_eq!(CodeReference::IshiharaYoshimine1992.short_form(), "I&Y 1992");
    }

    #[test]
    fn test_method_sets_are_registered() {
        for set in [cpt_equations(), spt_equations(), masw_equations()] {
            for eq in &set {
                assert!(ALL_EQUATIONS.contains(eq), "{:?} missing from ALL_EQUATIONS", eq);
            }
            assert!(set.contains(&Equation::CyclicStressRatio));
            assert!(set.contains(&Equation::VolumetricStrain));
        }
        assert!(cpt_equations().contains(&Equation::StressReductionBoulangerIdriss));
        assert!(!cpt_equations().contains(&Equation::StressReductionIdriss));
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Liquefaction Equations Reference"));
        assert!(markdown.contains("## Seismic Demand"));
        assert!(markdown.contains("## Settlement"));
        assert!(markdown.contains("`CSR = 0.65 * a_max * sigma_v * rd`"));
        assert!(markdown.contains("Boulanger & Idriss (2014)"));
        assert!(markdown.contains("equations/idriss.rs"));
        assert!(markdown.contains("**Total Equations:** 21"));
        assert!(markdown.contains("**Categories:** 6"));
    }
}

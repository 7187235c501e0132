//! # Equation Registry
//!
//! Central registry of every formula the box column check applies.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for step-by-step reports and audit trails
//! - Usage tracking, so a result records exactly which branch of a
//!   piecewise formula was taken
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::ElasticBucklingStress, "x-axis");
//!
//! let meta = Equation::ElasticBucklingStress.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeReference {
    /// AISC 360 - Specification for Structural Steel Buildings
    AISC360 {
        year: u16,
        section: &'static str,
    },
    /// AISC Steel Construction Manual
    AISCManual {
        edition: u8,
        part: u8,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::AISC360 { year, section } => {
                format!("AISC 360-{} {}", year % 100, section)
            }
            CodeReference::AISCManual { edition, part } => {
                format!("AISC Manual {}th Ed, Part {}", edition, part)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::AISC360 { .. } => "AISC 360",
            CodeReference::AISCManual { .. } => "AISC Manual",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Section properties (A, I, r)
    SectionProperties,
    /// Local wall slenderness (b/t limits)
    ElementSlenderness,
    /// Member slenderness (KL/r)
    MemberSlenderness,
    /// Elastic and nominal buckling stresses
    BucklingStresses,
    /// Design strength and governing capacity
    DesignStrength,
}

impl EquationCategory {
    /// All categories, in report order
    pub const ALL: [EquationCategory; 5] = [
        EquationCategory::SectionProperties,
        EquationCategory::ElementSlenderness,
        EquationCategory::MemberSlenderness,
        EquationCategory::BucklingStresses,
        EquationCategory::DesignStrength,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::ElementSlenderness => "Element Slenderness",
            EquationCategory::MemberSlenderness => "Member Slenderness",
            EquationCategory::BucklingStresses => "Buckling Stresses",
            EquationCategory::DesignStrength => "Design Strength",
        }
    }

    /// Sort order (lower = earlier), following the calculation order
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionProperties => 1,
            EquationCategory::ElementSlenderness => 2,
            EquationCategory::MemberSlenderness => 3,
            EquationCategory::BucklingStresses => 4,
            EquationCategory::DesignStrength => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Fe", "KL/r")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "ksi", "in")
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

/// Complete metadata for a structural engineering equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Elastic Buckling Stress")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the box column compression check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Section Properties
    // -------------------------------------------------------------------------
    /// b1 = b - 2t, d1 = d - 2t
    ClearDimensions,
    /// A = bd - b1d1
    BoxArea,
    /// Ix = (bd^3 - b1d1^3)/12
    BoxMomentOfInertiaX,
    /// Iy = (db^3 - d1b1^3)/12
    BoxMomentOfInertiaY,
    /// r = sqrt(I/A)
    RadiusOfGyration,

    // -------------------------------------------------------------------------
    // Element Slenderness
    // -------------------------------------------------------------------------
    /// λ = b1/t, d1/t
    WallWidthToThickness,
    /// λr = 1.49 sqrt(E/Fy)
    WallSlendernessLimit,

    // -------------------------------------------------------------------------
    // Member Slenderness
    // -------------------------------------------------------------------------
    /// KL/r with L converted from meters
    EffectiveSlenderness,
    /// 4.71 sqrt(E/Fy)
    InelasticSlendernessLimit,

    // -------------------------------------------------------------------------
    // Buckling Stresses
    // -------------------------------------------------------------------------
    /// Fe = π²E/(KL/r)²
    ElasticBucklingStress,
    /// Fn = Fy
    NominalStressYield,
    /// Fn = Fy·0.658^(Fy/Fe)
    NominalStressInelastic,
    /// Fn = 0.877 Fe
    NominalStressElastic,

    // -------------------------------------------------------------------------
    // Design Strength
    // -------------------------------------------------------------------------
    /// φPn = Fn·A·φ
    DesignCompressiveStrength,
    /// φPn = min(φPnx, φPny)
    GoverningCapacity,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ClearDimensions => EquationMetadata {
                name: "Clear Interior Dimensions",
                description: "Inside width and depth of the box between opposite walls",
                formula_plain: "b1 = b - 2t, d1 = d - 2t",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Outer base", "in"),
                    Variable::new("d", "Outer depth", "in"),
                    Variable::new("t", "Wall thickness", "in"),
                    Variable::new("b1", "Clear base", "in"),
                    Variable::new("d1", "Clear depth", "in"),
                ],
                assumptions: vec!["Uniform wall thickness on all four sides", "Square corners (no corner radius)"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "clear_dimension",
            },

            Equation::BoxArea => EquationMetadata {
                name: "Box Section Area",
                description: "Gross area: outer rectangle minus clear interior rectangle",
                formula_plain: "A = b*d - b1*d1",
                reference: CodeReference::AISCManual { edition: 16, part: 1 },
                variables: vec![
                    Variable::new("A", "Gross cross-sectional area", "in^2"),
                    Variable::new("b, d", "Outer base and depth", "in"),
                    Variable::new("b1, d1", "Clear base and depth", "in"),
                ],
                assumptions: vec!["Square corners (no corner radius)"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "box_area",
            },

            Equation::BoxMomentOfInertiaX => EquationMetadata {
                name: "Box Moment of Inertia (X-Axis)",
                description: "Second moment of area about the centroidal x-axis",
                formula_plain: "Ix = (b*d^3 - b1*d1^3) / 12",
                reference: CodeReference::AISCManual { edition: 16, part: 1 },
                variables: vec![
                    Variable::new("Ix", "Moment of inertia about x-axis", "in^4"),
                    Variable::new("b, d", "Outer base and depth", "in"),
                    Variable::new("b1, d1", "Clear base and depth", "in"),
                ],
                assumptions: vec!["Doubly symmetric section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "box_moment_of_inertia_x",
            },

            Equation::BoxMomentOfInertiaY => EquationMetadata {
                name: "Box Moment of Inertia (Y-Axis)",
                description: "Second moment of area about the centroidal y-axis",
                formula_plain: "Iy = (d*b^3 - d1*b1^3) / 12",
                reference: CodeReference::AISCManual { edition: 16, part: 1 },
                variables: vec![
                    Variable::new("Iy", "Moment of inertia about y-axis", "in^4"),
                    Variable::new("b, d", "Outer base and depth", "in"),
                    Variable::new("b1, d1", "Clear base and depth", "in"),
                ],
                assumptions: vec!["Doubly symmetric section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "box_moment_of_inertia_y",
            },

            Equation::RadiusOfGyration => EquationMetadata {
                name: "Radius of Gyration",
                description: "Radius of gyration about the buckling axis",
                formula_plain: "r = sqrt(I / A)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("r", "Radius of gyration", "in"),
                    Variable::new("I", "Moment of inertia about the axis", "in^4"),
                    Variable::new("A", "Gross area", "in^2"),
                ],
                assumptions: vec![],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "radius_of_gyration",
            },

            Equation::WallWidthToThickness => EquationMetadata {
                name: "Wall Width-to-Thickness Ratio",
                description: "Slenderness of each pair of walls, measured on the clear dimension",
                formula_plain: "lambda = b1 / t, d1 / t",
                reference: CodeReference::AISC360 { year: 2016, section: "Section B4.1" },
                variables: vec![
                    Variable::new("lambda", "Width-to-thickness ratio", "-"),
                    Variable::new("b1, d1", "Clear base and depth", "in"),
                    Variable::new("t", "Wall thickness", "in"),
                ],
                assumptions: vec!["Walls are stiffened elements supported along both edges"],
                category: EquationCategory::ElementSlenderness,
                source_module: "calculations/box_column.rs",
                source_function: "classify",
            },

            Equation::WallSlendernessLimit => EquationMetadata {
                name: "Wall Slenderness Limit",
                description: "Limiting width-to-thickness ratio for walls of box sections in uniform compression",
                formula_plain: "lambda_r = 1.49 * sqrt(E / Fy)",
                reference: CodeReference::AISC360 { year: 2016, section: "Table B4.1a, Case 6" },
                variables: vec![
                    Variable::new("lambda_r", "Limiting width-to-thickness ratio", "-"),
                    Variable::new("E", "Modulus of elasticity", "ksi"),
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                ],
                assumptions: vec!["Either wall exceeding the limit makes the section slender; Chapter E7 is not covered"],
                category: EquationCategory::ElementSlenderness,
                source_module: "equations/compression.rs",
                source_function: "wall_slenderness_limit",
            },

            Equation::EffectiveSlenderness => EquationMetadata {
                name: "Effective Slenderness Ratio",
                description: "Member slenderness about one axis, with clear height converted from meters to inches",
                formula_plain: "KL/r = K * (L / 0.0254) / r",
                reference: CodeReference::AISC360 { year: 2016, section: "Section E2" },
                variables: vec![
                    Variable::new("K", "Effective length factor", "-"),
                    Variable::new("L", "Clear height", "m"),
                    Variable::new("r", "Radius of gyration about the axis", "in"),
                ],
                assumptions: vec!["1 in = 0.0254 m exactly"],
                category: EquationCategory::MemberSlenderness,
                source_module: "equations/compression.rs",
                source_function: "slenderness_ratio",
            },

            Equation::InelasticSlendernessLimit => EquationMetadata {
                name: "Inelastic Buckling Limit",
                description: "Slenderness separating inelastic from elastic flexural buckling",
                formula_plain: "4.71 * sqrt(E / Fy)",
                reference: CodeReference::AISC360 { year: 2016, section: "Section E3" },
                variables: vec![
                    Variable::new("E", "Modulus of elasticity", "ksi"),
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                ],
                assumptions: vec![],
                category: EquationCategory::MemberSlenderness,
                source_module: "equations/compression.rs",
                source_function: "inelastic_slenderness_limit",
            },

            Equation::ElasticBucklingStress => EquationMetadata {
                name: "Elastic Buckling Stress",
                description: "Euler flexural buckling stress",
                formula_plain: "Fe = pi^2 * E / (KL/r)^2",
                reference: CodeReference::AISC360 { year: 2016, section: "Eq. E3-4" },
                variables: vec![
                    Variable::new("Fe", "Elastic buckling stress", "ksi"),
                    Variable::new("E", "Modulus of elasticity", "ksi"),
                    Variable::new("KL/r", "Effective slenderness ratio", "-"),
                ],
                assumptions: vec!["Flexural buckling only; torsional modes do not govern closed box sections"],
                category: EquationCategory::BucklingStresses,
                source_module: "equations/compression.rs",
                source_function: "elastic_buckling_stress",
            },

            Equation::NominalStressYield => EquationMetadata {
                name: "Nominal Stress (Yielding)",
                description: "Short columns with KL/r <= 25 reach the yield stress",
                formula_plain: "Fn = Fy  (KL/r <= 25)",
                reference: CodeReference::AISC360 { year: 2016, section: "Section E3" },
                variables: vec![
                    Variable::new("Fn", "Nominal stress", "ksi"),
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                ],
                assumptions: vec!["Fixed cutoff at KL/r = 25"],
                category: EquationCategory::BucklingStresses,
                source_module: "equations/compression.rs",
                source_function: "nominal_stress_in_regime",
            },

            Equation::NominalStressInelastic => EquationMetadata {
                name: "Nominal Stress (Inelastic Buckling)",
                description: "Inelastic flexural buckling range",
                formula_plain: "Fn = Fy * 0.658^(Fy / Fe)  (25 < KL/r <= 4.71 sqrt(E/Fy))",
                reference: CodeReference::AISC360 { year: 2016, section: "Eq. E3-2" },
                variables: vec![
                    Variable::new("Fn", "Nominal stress", "ksi"),
                    Variable::new("Fy", "Specified minimum yield stress", "ksi"),
                    Variable::new("Fe", "Elastic buckling stress", "ksi"),
                ],
                assumptions: vec![],
                category: EquationCategory::BucklingStresses,
                source_module: "equations/compression.rs",
                source_function: "nominal_stress_in_regime",
            },

            Equation::NominalStressElastic => EquationMetadata {
                name: "Nominal Stress (Elastic Buckling)",
                description: "Elastic flexural buckling range",
                formula_plain: "Fn = 0.877 * Fe  (KL/r > 4.71 sqrt(E/Fy))",
                reference: CodeReference::AISC360 { year: 2016, section: "Eq. E3-3" },
                variables: vec![
                    Variable::new("Fn", "Nominal stress", "ksi"),
                    Variable::new("Fe", "Elastic buckling stress", "ksi"),
                ],
                assumptions: vec![],
                category: EquationCategory::BucklingStresses,
                source_module: "equations/compression.rs",
                source_function: "nominal_stress_in_regime",
            },

            Equation::DesignCompressiveStrength => EquationMetadata {
                name: "Design Compressive Strength",
                description: "LRFD axial capacity for buckling about one axis",
                formula_plain: "phi*Pn = Fn * A * phi",
                reference: CodeReference::AISC360 { year: 2016, section: "Eq. E3-1" },
                variables: vec![
                    Variable::new("Pn", "Nominal compressive strength", "kips"),
                    Variable::new("Fn", "Nominal stress", "ksi"),
                    Variable::new("A", "Gross area", "in^2"),
                    Variable::new("phi", "Resistance factor", "-"),
                ],
                assumptions: vec!["phi supplied by the designer (0.90 per AISC 360 E1)"],
                category: EquationCategory::DesignStrength,
                source_module: "equations/compression.rs",
                source_function: "design_compressive_strength",
            },

            Equation::GoverningCapacity => EquationMetadata {
                name: "Governing Capacity",
                description: "The weaker buckling axis controls the member",
                formula_plain: "phi*Pn = min(phi*Pnx, phi*Pny)",
                reference: CodeReference::AISC360 { year: 2016, section: "Section E1" },
                variables: vec![
                    Variable::new("phi*Pnx", "Design strength, buckling about x-axis", "kips"),
                    Variable::new("phi*Pny", "Design strength, buckling about y-axis", "kips"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignStrength,
                source_module: "calculations/box_column.rs",
                source_function: "calculate",
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
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Section properties
    Equation::ClearDimensions,
    Equation::BoxArea,
    Equation::BoxMomentOfInertiaX,
    Equation::BoxMomentOfInertiaY,
    Equation::RadiusOfGyration,
    // Element slenderness
    Equation::WallWidthToThickness,
    Equation::WallSlendernessLimit,
    // Member slenderness
    Equation::EffectiveSlenderness,
    Equation::InelasticSlendernessLimit,
    // Buckling stresses
    Equation::ElasticBucklingStress,
    Equation::NominalStressYield,
    Equation::NominalStressInelastic,
    Equation::NominalStressElastic,
    // Design strength
    Equation::DesignCompressiveStrength,
    Equation::GoverningCapacity,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where it was used (e.g., "x-axis")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Check whether an equation was applied anywhere
    pub fn contains(&self, equation: Equation) -> bool {
        self.usages.iter().any(|u| u.equation == equation)
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, in report order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();

        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// Lists every equation in the registry, organized by category, with
/// formulas, references, and source code links.
///
/// # Example
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Boxcol Equations Reference"));
/// assert!(markdown.contains("Buckling Stresses"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Boxcol Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used to check a built-up box column in axial
compression. Each equation includes its formula, code reference, source
location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Section dimensions | in |
| Clear height | m (converted with 1 in = 0.0254 m) |
| Stresses, E | ksi |
| Capacity | kips |

---

"#);

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
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
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
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
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 15);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        // Spot-check key formulas
        assert!(Equation::NominalStressInelastic.metadata().formula_plain.contains("0.658^(Fy / Fe)"));
        assert!(Equation::EffectiveSlenderness.metadata().formula_plain.contains("0.0254"));
    }

    #[test]
    fn test_every_category_has_equations() {
        for category in EquationCategory::ALL {
            assert!(!Equation::in_category(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let aisc = CodeReference::AISC360 { year: 2016, section: "Eq. E3-2" };
        assert_eq!(aisc.citation(), "AISC 360-16 Eq. E3-2");
        assert_eq!(aisc.short_form(), "AISC 360");

        let manual = CodeReference::AISCManual { edition: 16, part: 1 };
        assert_eq!(manual.citation(), "AISC Manual 16th Ed, Part 1");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ElasticBucklingStress, "x-axis");
        tracker.record(Equation::NominalStressInelastic, "x-axis");
        tracker.record(Equation::ElasticBucklingStress, "y-axis");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations().len(), 2);
        assert!(tracker.contains(Equation::NominalStressInelastic));
        assert!(!tracker.contains(Equation::NominalStressElastic));
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::DesignCompressiveStrength, "x-axis");
        tracker.record(Equation::BoxArea, "section");
        tracker.record(Equation::ElasticBucklingStress, "x-axis");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![
                EquationCategory::SectionProperties,
                EquationCategory::BucklingStresses,
                EquationCategory::DesignStrength,
            ]
        );
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Boxcol Equations Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");

        for category in EquationCategory::ALL {
            assert!(markdown.contains(&format!("## {}", category.display_name())));
        }
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(&format!("### {}", eq.metadata().name)));
        }

        assert!(markdown.contains("`A = b*d - b1*d1`"), "Missing area formula");
        assert!(markdown.contains("AISC 360-16"), "Missing AISC reference");
        assert!(markdown.contains("**Total Equations:** 15"), "Wrong equation count");
        assert!(markdown.contains("**Categories:** 5"), "Wrong category count");
    }
}

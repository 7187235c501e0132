//! # Built-Up Box Column Calculation
//!
//! Axial compression capacity of a built-up rectangular box section per
//! AISC 360 Chapter E (flexural buckling of members without slender elements).
//!
//! ## Pipeline
//!
//! ```text
//! material ─► Fy
//! geometry ─► wall check ──Slender──► NotApplicable
//!                 │
//!              Compact
//!                 ▼
//!       A ─► r ─► KL/r ─► Fe ─► Fn ─► φPn      (once per axis)
//!                                      │
//!                          governing = min(φPnx, φPny)
//! ```
//!
//! Every stage is a pure function and is public, so a presentation layer can
//! show each intermediate value individually. Stages reject inputs that would
//! produce NaN or infinity with [`CalcError::InvalidGeometry`].
//!
//! ## Assumptions
//!
//! - Walls of uniform thickness, square corners
//! - Both wall pairs are checked together: a section is compact or slender
//!   as a whole, never per axis
//! - Slender-walled sections (AISC 360 E7) are out of scope and reported as
//!   not applicable
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::box_column::{calculate, BoxColumnInput, BoxSection, MemberProperties};
//! use calc_core::materials::SteelGrade;
//!
//! let input = BoxColumnInput {
//!     label: "C-1".to_string(),
//!     section: BoxSection::new(4.0, 10.0, 0.5),
//!     material: SteelGrade::A36,
//!     member: MemberProperties {
//!         k_x: 1.0,
//!         k_y: 1.0,
//!         clear_height_m: 3.0,
//!         elastic_modulus_ksi: 29000.0,
//!         phi: 0.90,
//!     },
//! };
//!
//! let outcome = calculate(&input).unwrap();
//! let result = outcome.applicable().unwrap();
//! assert!((result.governing_capacity_kips - 315.62).abs() < 0.01);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::equations::compression::{self, BucklingRegime};
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::section as geometry;
use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelGrade;
use crate::units::{Inches, Meters};

// ============================================================================
// Geometry
// ============================================================================

/// Outer dimensions and wall thickness of a built-up box section (inches).
///
/// ## JSON Example
///
/// ```json
/// { "base_in": 4.0, "depth_in": 10.0, "wall_thickness_in": 0.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSection {
    /// Outer base b, parallel to the x-axis (in)
    pub base_in: f64,

    /// Outer depth d, parallel to the y-axis (in)
    pub depth_in: f64,

    /// Wall thickness t (in)
    pub wall_thickness_in: f64,
}

impl BoxSection {
    pub fn new(base_in: f64, depth_in: f64, wall_thickness_in: f64) -> Self {
        Self {
            base_in,
            depth_in,
            wall_thickness_in,
        }
    }

    /// Validate geometry: positive finite dimensions, and walls thin enough
    /// to leave a clear interior in both directions.
    pub fn validate(&self) -> CalcResult<()> {
        let dims = [
            ("base_in", self.base_in),
            ("depth_in", self.depth_in),
            ("wall_thickness_in", self.wall_thickness_in),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    field,
                    value.to_string(),
                    "Dimension must be a positive number",
                ));
            }
        }

        let t = self.wall_thickness_in;
        if t >= self.base_in / 2.0 {
            return Err(CalcError::invalid_geometry(
                "wall_thickness_in",
                t.to_string(),
                format!("Wall thickness must be less than half the base ({} in)", self.base_in / 2.0),
            ));
        }
        if t >= self.depth_in / 2.0 {
            return Err(CalcError::invalid_geometry(
                "wall_thickness_in",
                t.to_string(),
                format!("Wall thickness must be less than half the depth ({} in)", self.depth_in / 2.0),
            ));
        }
        Ok(())
    }

    /// Clear base b1 = b - 2t (in)
    pub fn clear_base_in(&self) -> f64 {
        geometry::clear_dimension(self.base_in, self.wall_thickness_in)
    }

    /// Clear depth d1 = d - 2t (in)
    pub fn clear_depth_in(&self) -> f64 {
        geometry::clear_dimension(self.depth_in, self.wall_thickness_in)
    }

    /// Closed outer and inner outlines for plotting, origin at the lower-left
    /// outer corner, base along x and depth along y.
    pub fn outline(&self) -> SectionOutline {
        let (b, d, t) = (self.base_in, self.depth_in, self.wall_thickness_in);
        SectionOutline {
            outer: [(0.0, 0.0), (b, 0.0), (b, d), (0.0, d), (0.0, 0.0)],
            inner: [(t, t), (b - t, t), (b - t, d - t), (t, d - t), (t, t)],
        }
    }
}

/// Closed polygons (first vertex repeated last) describing the section shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOutline {
    /// Exterior rectangle vertices (in)
    pub outer: [(f64, f64); 5],
    /// Interior void vertices (in)
    pub inner: [(f64, f64); 5],
}

// ============================================================================
// Member
// ============================================================================

/// Member-level inputs shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberProperties {
    /// Effective length factor for buckling about the x-axis
    pub k_x: f64,

    /// Effective length factor for buckling about the y-axis
    pub k_y: f64,

    /// Clear (unbraced) height in meters
    pub clear_height_m: f64,

    /// Modulus of elasticity E (ksi)
    pub elastic_modulus_ksi: f64,

    /// Resistance factor φ (0.90 for compression per AISC 360 E1)
    pub phi: f64,
}

impl MemberProperties {
    /// Validate member inputs.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, k) in [("k_x", self.k_x), ("k_y", self.k_y)] {
            if !k.is_finite() || k < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    k.to_string(),
                    "Effective length factor must be zero or positive",
                ));
            }
        }
        if !self.clear_height_m.is_finite() || self.clear_height_m < 0.0 {
            return Err(CalcError::invalid_geometry(
                "clear_height_m",
                self.clear_height_m.to_string(),
                "Clear height cannot be negative",
            ));
        }
        if !self.elastic_modulus_ksi.is_finite() || self.elastic_modulus_ksi <= 0.0 {
            return Err(CalcError::invalid_input(
                "elastic_modulus_ksi",
                self.elastic_modulus_ksi.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if !self.phi.is_finite() || self.phi <= 0.0 || self.phi > 1.0 {
            return Err(CalcError::invalid_input(
                "phi",
                self.phi.to_string(),
                "Resistance factor must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Effective length factor for buckling about `axis`
    pub fn k_for(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.k_x,
            Axis::Y => self.k_y,
        }
    }
}

/// Principal buckling axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Label used in reports and equation usage records
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "x-axis",
            Axis::Y => "y-axis",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Wall classification
// ============================================================================

/// Outcome of the wall width-to-thickness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionClassification {
    /// No wall exceeds λr; the E3 flexural buckling formulas apply
    Compact,
    /// At least one wall exceeds λr; capacity is not available
    Slender,
}

impl SectionClassification {
    /// Human-readable applicability message
    pub fn message(&self) -> &'static str {
        match self {
            SectionClassification::Compact => {
                "Section without slender walls. Compression capacity available with this app"
            }
            SectionClassification::Slender => {
                "Section with slender walls. Compression capacity NOT available with this app"
            }
        }
    }
}

/// Wall slenderness values backing a classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSlendernessCheck {
    /// Clear base b1 (in)
    pub clear_base_in: f64,
    /// Clear depth d1 (in)
    pub clear_depth_in: f64,
    /// b1/t
    pub base_ratio: f64,
    /// d1/t
    pub depth_ratio: f64,
    /// λr = 1.49√(E/Fy)
    pub limit: f64,
    pub classification: SectionClassification,
}

impl WallSlendernessCheck {
    pub fn is_compact(&self) -> bool {
        self.classification == SectionClassification::Compact
    }

    pub fn message(&self) -> &'static str {
        self.classification.message()
    }
}

/// Either a computed value, or the wall check explaining why none exists.
///
/// A slender section is a valid terminal outcome, not an error. Callers
/// must match on this before reading any capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum CapacityOutcome<T> {
    Applicable(T),
    NotApplicable(WallSlendernessCheck),
}

impl<T> CapacityOutcome<T> {
    pub fn is_applicable(&self) -> bool {
        matches!(self, CapacityOutcome::Applicable(_))
    }

    /// The computed value, if the section is compact
    pub fn applicable(&self) -> Option<&T> {
        match self {
            CapacityOutcome::Applicable(value) => Some(value),
            CapacityOutcome::NotApplicable(_) => None,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Intermediate values and capacity for buckling about one axis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "axis": "x",
///   "area_in2": 13.0,
///   "moment_of_inertia_in4": 151.08,
///   "radius_of_gyration_in": 3.409,
///   "slenderness_ratio": 34.65,
///   "elastic_buckling_stress_ksi": 238.45,
///   "nominal_stress_ksi": 33.80,
///   "regime": "inelastic",
///   "capacity_kips": 395.41
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisCapacityResult {
    pub axis: Axis,

    /// Gross area A (in²)
    pub area_in2: f64,

    /// Moment of inertia about this axis (in⁴)
    pub moment_of_inertia_in4: f64,

    /// Radius of gyration about this axis (in)
    pub radius_of_gyration_in: f64,

    /// Effective slenderness KL/r
    pub slenderness_ratio: f64,

    /// Elastic buckling stress Fe (ksi)
    pub elastic_buckling_stress_ksi: f64,

    /// Nominal stress Fn (ksi)
    pub nominal_stress_ksi: f64,

    /// Which branch of the Fn curve applied
    pub regime: BucklingRegime,

    /// Design strength φPn (kips)
    pub capacity_kips: f64,
}

/// Full input set for one box column.
///
/// Serializes flat, so a JSON input file reads like the input form:
///
/// ```json
/// {
///   "label": "C-1",
///   "base_in": 4.0,
///   "depth_in": 10.0,
///   "wall_thickness_in": 0.5,
///   "material": "ASTM A36",
///   "k_x": 1.0,
///   "k_y": 1.0,
///   "clear_height_m": 3.0,
///   "elastic_modulus_ksi": 29000.0,
///   "phi": 0.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxColumnInput {
    /// User label for this column (e.g., "C-1")
    #[serde(default)]
    pub label: String,

    #[serde(flatten)]
    pub section: BoxSection,

    pub material: SteelGrade,

    #[serde(flatten)]
    pub member: MemberProperties,
}

impl BoxColumnInput {
    /// Validate geometry and member properties.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.member.validate()
    }
}

/// Results for a compact box column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxColumnResult {
    /// Yield stress of the selected grade (ksi)
    pub yield_stress_ksi: f64,

    /// Wall slenderness check (always Compact here)
    pub wall_check: WallSlendernessCheck,

    /// Buckling about the x-axis
    pub x: AxisCapacityResult,

    /// Buckling about the y-axis
    pub y: AxisCapacityResult,

    /// Axis with the lower capacity (x on a tie)
    pub governing_axis: Axis,

    /// min(φPnx, φPny) (kips)
    pub governing_capacity_kips: f64,

    /// Equations applied, including the Fn branch taken per axis
    pub equations: EquationTracker,
}

impl BoxColumnResult {
    /// Result for the requested axis
    pub fn axis(&self, axis: Axis) -> &AxisCapacityResult {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

// ============================================================================
// Pipeline stages
// ============================================================================

/// Classify the section walls as compact or slender.
///
/// Both wall pairs are checked against λr = 1.49√(E/Fy); either one above the
/// limit makes the whole section slender.
pub fn classify(section: &BoxSection, elastic_modulus_ksi: f64, yield_stress_ksi: f64) -> CalcResult<WallSlendernessCheck> {
    section.validate()?;
    check_positive_stress("elastic_modulus_ksi", elastic_modulus_ksi)?;
    check_positive_stress("yield_stress_ksi", yield_stress_ksi)?;

    let t = section.wall_thickness_in;
    let clear_base_in = section.clear_base_in();
    let clear_depth_in = section.clear_depth_in();
    let base_ratio = clear_base_in / t;
    let depth_ratio = clear_depth_in / t;
    let limit = compression::wall_slenderness_limit(elastic_modulus_ksi, yield_stress_ksi);

    let classification = if base_ratio > limit || depth_ratio > limit {
        SectionClassification::Slender
    } else {
        SectionClassification::Compact
    };

    debug!(base_ratio, depth_ratio, limit, ?classification, "Wall slenderness check");

    Ok(WallSlendernessCheck {
        clear_base_in,
        clear_depth_in,
        base_ratio,
        depth_ratio,
        limit,
        classification,
    })
}

/// Gross area A = b·d - b1·d1 (in²)
pub fn area(section: &BoxSection) -> CalcResult<f64> {
    section.validate()?;
    let a = geometry::box_area(section.base_in, section.depth_in, section.wall_thickness_in);
    if a <= 0.0 {
        return Err(CalcError::invalid_geometry("area_in2", a.to_string(), "Area must be positive"));
    }
    Ok(a)
}

/// Moment of inertia about `axis` (in⁴)
pub fn moment_of_inertia(section: &BoxSection, axis: Axis) -> f64 {
    let (b, d, t) = (section.base_in, section.depth_in, section.wall_thickness_in);
    match axis {
        Axis::X => geometry::box_moment_of_inertia_x(b, d, t),
        Axis::Y => geometry::box_moment_of_inertia_y(b, d, t),
    }
}

/// Radius of gyration about `axis` for a given area (in)
///
/// The area is passed in rather than recomputed so a caller can reuse one
/// value across both axes.
pub fn radius_of_gyration(section: &BoxSection, area_in2: f64, axis: Axis) -> CalcResult<f64> {
    if !area_in2.is_finite() || area_in2 <= 0.0 {
        return Err(CalcError::invalid_geometry("area_in2", area_in2.to_string(), "Area must be positive"));
    }
    let i = moment_of_inertia(section, axis);
    let radicand = i / area_in2;
    if !radicand.is_finite() || radicand < 0.0 {
        return Err(CalcError::invalid_geometry(
            "moment_of_inertia_in4",
            i.to_string(),
            format!("Negative second moment about the {}; check section dimensions", axis),
        ));
    }
    Ok(geometry::radius_of_gyration(i, area_in2))
}

/// rx = √((b·d³ - b1·d1³) / 12A)
pub fn radius_of_gyration_x(section: &BoxSection, area_in2: f64) -> CalcResult<f64> {
    radius_of_gyration(section, area_in2, Axis::X)
}

/// ry = √((d·b³ - d1·b1³) / 12A)
pub fn radius_of_gyration_y(section: &BoxSection, area_in2: f64) -> CalcResult<f64> {
    radius_of_gyration(section, area_in2, Axis::Y)
}

/// Effective slenderness KL/r, with the clear height given in meters.
pub fn effective_slenderness(k: f64, clear_height_m: f64, radius_in: f64) -> CalcResult<f64> {
    if !radius_in.is_finite() || radius_in <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "radius_of_gyration_in",
            radius_in.to_string(),
            "Radius of gyration must be positive",
        ));
    }
    if !k.is_finite() || k < 0.0 {
        return Err(CalcError::invalid_input("k", k.to_string(), "Effective length factor must be zero or positive"));
    }
    if !clear_height_m.is_finite() || clear_height_m < 0.0 {
        return Err(CalcError::invalid_geometry(
            "clear_height_m",
            clear_height_m.to_string(),
            "Clear height cannot be negative",
        ));
    }

    let height = Inches::from(Meters(clear_height_m));
    Ok(compression::slenderness_ratio(k, height.value(), radius_in))
}

/// Elastic buckling stress Fe = π²E / (KL/r)² (ksi)
pub fn elastic_buckling_stress(slenderness: f64, elastic_modulus_ksi: f64) -> CalcResult<f64> {
    check_positive_slenderness(slenderness)?;
    check_positive_stress("elastic_modulus_ksi", elastic_modulus_ksi)?;
    Ok(compression::elastic_buckling_stress(slenderness, elastic_modulus_ksi))
}

/// Nominal stress Fn (ksi), three regimes:
///
/// - KL/r ≤ 25: Fn = Fy
/// - KL/r ≤ 4.71√(E/Fy): Fn = Fy·0.658^(Fy/Fe)
/// - otherwise: Fn = 0.877·Fe
pub fn nominal_stress(slenderness: f64, elastic_modulus_ksi: f64, yield_stress_ksi: f64, fe_ksi: f64) -> CalcResult<f64> {
    check_positive_slenderness(slenderness)?;
    check_positive_stress("elastic_modulus_ksi", elastic_modulus_ksi)?;
    check_positive_stress("yield_stress_ksi", yield_stress_ksi)?;
    if !fe_ksi.is_finite() || fe_ksi <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "elastic_buckling_stress_ksi",
            fe_ksi.to_string(),
            "Elastic buckling stress must be positive",
        ));
    }

    let regime = compression::buckling_regime(slenderness, elastic_modulus_ksi, yield_stress_ksi);
    Ok(compression::nominal_stress_in_regime(regime, yield_stress_ksi, fe_ksi))
}

/// Design strength φPn = Fn·A·φ (kips)
pub fn capacity(fn_ksi: f64, area_in2: f64, phi: f64) -> f64 {
    compression::design_compressive_strength(fn_ksi, area_in2, phi)
}

fn check_positive_slenderness(slenderness: f64) -> CalcResult<()> {
    if !slenderness.is_finite() || slenderness <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "slenderness_ratio",
            slenderness.to_string(),
            "Slenderness must be positive (zero K or clear height divides by zero)",
        ));
    }
    Ok(())
}

fn check_positive_stress(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Stress must be positive"));
    }
    Ok(())
}

// ============================================================================
// Orchestration
// ============================================================================

/// Compute one axis for an already-classified compact section.
fn axis_pipeline(
    section: &BoxSection,
    member: &MemberProperties,
    yield_stress_ksi: f64,
    area_in2: f64,
    axis: Axis,
    tracker: &mut EquationTracker,
) -> CalcResult<AxisCapacityResult> {
    let context = axis.label();
    let e = member.elastic_modulus_ksi;

    let moment_of_inertia_in4 = moment_of_inertia(section, axis);
    tracker.record(
        match axis {
            Axis::X => Equation::BoxMomentOfInertiaX,
            Axis::Y => Equation::BoxMomentOfInertiaY,
        },
        context,
    );

    let r = radius_of_gyration(section, area_in2, axis)?;
    tracker.record(Equation::RadiusOfGyration, context);

    let klr = effective_slenderness(member.k_for(axis), member.clear_height_m, r)?;
    tracker.record(Equation::EffectiveSlenderness, context);

    let fe = elastic_buckling_stress(klr, e)?;
    tracker.record(Equation::ElasticBucklingStress, context);

    let regime = compression::buckling_regime(klr, e, yield_stress_ksi);
    tracker.record(Equation::InelasticSlendernessLimit, context);
    let fn_ksi = nominal_stress(klr, e, yield_stress_ksi, fe)?;
    tracker.record(
        match regime {
            BucklingRegime::Yield => Equation::NominalStressYield,
            BucklingRegime::Inelastic => Equation::NominalStressInelastic,
            BucklingRegime::Elastic => Equation::NominalStressElastic,
        },
        context,
    );

    let capacity_kips = capacity(fn_ksi, area_in2, member.phi);
    tracker.record(Equation::DesignCompressiveStrength, context);

    trace!(%axis, r, klr, fe, fn_ksi, capacity_kips, "Axis pipeline");

    Ok(AxisCapacityResult {
        axis,
        area_in2,
        moment_of_inertia_in4,
        radius_of_gyration_in: r,
        slenderness_ratio: klr,
        elastic_buckling_stress_ksi: fe,
        nominal_stress_ksi: fn_ksi,
        regime,
        capacity_kips,
    })
}

/// Validate, classify, and compute the section area shared by both axes.
fn prepare(
    section: &BoxSection,
    member: &MemberProperties,
    material: SteelGrade,
    tracker: &mut EquationTracker,
) -> CalcResult<(f64, WallSlendernessCheck, f64)> {
    section.validate()?;
    member.validate()?;

    let fy = material.yield_stress_ksi();
    tracker.record(Equation::ClearDimensions, "section");

    let wall_check = classify(section, member.elastic_modulus_ksi, fy)?;
    tracker.record(Equation::WallWidthToThickness, "section");
    tracker.record(Equation::WallSlendernessLimit, "section");

    let a = area(section)?;
    tracker.record(Equation::BoxArea, "section");

    Ok((fy, wall_check, a))
}

/// Run the full pipeline for one axis.
///
/// Returns `NotApplicable` when the walls are slender, without computing any
/// axis quantity.
pub fn compute_axis_capacity(
    section: &BoxSection,
    member: &MemberProperties,
    material: SteelGrade,
    axis: Axis,
) -> CalcResult<CapacityOutcome<AxisCapacityResult>> {
    let mut tracker = EquationTracker::new();
    let (fy, wall_check, a) = prepare(section, member, material, &mut tracker)?;
    if !wall_check.is_compact() {
        return Ok(CapacityOutcome::NotApplicable(wall_check));
    }

    let result = axis_pipeline(section, member, fy, a, axis, &mut tracker)?;
    Ok(CapacityOutcome::Applicable(result))
}

/// Calculate both axes and the governing capacity of a box column.
///
/// # Returns
///
/// * `Ok(CapacityOutcome::Applicable(result))` - Compact section, capacities computed
/// * `Ok(CapacityOutcome::NotApplicable(check))` - Slender walls, no capacity
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &BoxColumnInput) -> CalcResult<CapacityOutcome<BoxColumnResult>> {
    let mut tracker = EquationTracker::new();
    let (fy, wall_check, a) = prepare(&input.section, &input.member, input.material, &mut tracker)?;

    if !wall_check.is_compact() {
        debug!(label = %input.label, "Slender walls, capacity not applicable");
        return Ok(CapacityOutcome::NotApplicable(wall_check));
    }

    let x = axis_pipeline(&input.section, &input.member, fy, a, Axis::X, &mut tracker)?;
    let y = axis_pipeline(&input.section, &input.member, fy, a, Axis::Y, &mut tracker)?;

    let (governing_axis, governing_capacity_kips) = if y.capacity_kips < x.capacity_kips {
        (Axis::Y, y.capacity_kips)
    } else {
        (Axis::X, x.capacity_kips)
    };
    tracker.record(Equation::GoverningCapacity, "member");

    debug!(
        label = %input.label,
        capacity_x = x.capacity_kips,
        capacity_y = y.capacity_kips,
        %governing_axis,
        "Box column calculated"
    );

    Ok(CapacityOutcome::Applicable(BoxColumnResult {
        yield_stress_ksi: fy,
        wall_check,
        x,
        y,
        governing_axis,
        governing_capacity_kips,
        equations: tracker,
    }))
}

/// Calculate many independent columns in parallel.
///
/// Results are returned in input order, one per input; a failing input does
/// not affect the others.
pub fn calculate_many(inputs: &[BoxColumnInput]) -> Vec<CalcResult<CapacityOutcome<BoxColumnResult>>> {
    inputs.par_iter().map(calculate).collect()
}

//! # Structural Engineering Equations
//!
//! This module contains the raw formulas used by the box column check.
//! Having equations in one place enables:
//! - Easy verification against code references (AISC 360)
//! - Documentation of assumptions and unit conventions
//! - A single implementation behind every reported step
//!
//! ## Modules
//!
//! - [`section`] - Box section properties (A, I, r)
//! - [`compression`] - Compression member formulas (b/t limit, KL/r, Fe, Fn, φPn)
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Axis Conventions
//!
//! - **x-axis**: parallel to the base `b`; buckling about it uses `Ix` (depth cubed)
//! - **y-axis**: parallel to the depth `d`; buckling about it uses `Iy` (base cubed)
//!
//! ## References
//!
//! - AISC 360-16: Specification for Structural Steel Buildings, Chapters B and E
//! - AISC Steel Construction Manual, 16th Edition, Part 1

pub mod compression;
pub mod registry;
pub mod section;

// Re-export commonly used items
pub use section::{
    box_area,
    box_moment_of_inertia_x,
    box_moment_of_inertia_y,
    clear_dimension,
    radius_of_gyration,
};

pub use compression::{
    buckling_regime,
    design_compressive_strength,
    elastic_buckling_stress,
    inelastic_slenderness_limit,
    nominal_stress_in_regime,
    slenderness_ratio,
    wall_slenderness_limit,
    BucklingRegime,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};

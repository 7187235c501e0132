//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<CapacityOutcome<*Result>, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`box_column`] - Axial compression capacity of a built-up box section (steel)

pub mod box_column;

// Re-export commonly used types
pub use box_column::{
    AxisCapacityResult, Axis, BoxColumnInput, BoxColumnResult, BoxSection, CapacityOutcome,
    MemberProperties, SectionClassification, SectionOutline, WallSlendernessCheck,
};

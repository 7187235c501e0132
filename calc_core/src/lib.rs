//! # calc_core - Built-Up Box Column Calculation Engine
//!
//! `calc_core` computes the axial compression capacity of built-up rectangular
//! box sections per AISC 360 Chapter E, with a clean, LLM-friendly API. All
//! inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Applicability**: Slender-walled sections produce a
//!   `NotApplicable` outcome, never a number
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::box_column::{calculate, BoxColumnInput};
//!
//! let input: BoxColumnInput = serde_json::from_str(r#"{
//!     "label": "C-1",
//!     "base_in": 4.0, "depth_in": 10.0, "wall_thickness_in": 0.5,
//!     "material": "ASTM A36",
//!     "k_x": 1.0, "k_y": 1.0, "clear_height_m": 3.0,
//!     "elastic_modulus_ksi": 29000.0, "phi": 0.9
//! }"#).unwrap();
//!
//! let outcome = calculate(&input).unwrap();
//! assert!(outcome.is_applicable());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The box column pipeline and its result types
//! - [`equations`] - Raw formulas and the equation registry
//! - [`materials`] - Supported steel grades
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::box_column::{calculate, calculate_many};
pub use calculations::{BoxColumnInput, BoxColumnResult, CapacityOutcome};
pub use errors::{CalcError, CalcResult};
pub use materials::SteelGrade;

//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! A slender-walled section is *not* an error. It is a valid outcome reported
//! through [`CapacityOutcome::NotApplicable`](crate::calculations::CapacityOutcome).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(t_in: f64) -> CalcResult<()> {
//!     if t_in <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "wall_thickness_in",
//!             t_in.to_string(),
//!             "Wall thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Every variant is unrecoverable for the input set that produced it: the
/// engine is deterministic, so retrying with the same values changes nothing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Material key is not one of the supported steel grades
    #[error("Unknown material: '{material_name}' (expected one of ASTM A36, ASTM A572_Gr50, ASTM A500_GrB_46)")]
    UnknownMaterial { material_name: String },

    /// Section dimensions are non-positive, the walls leave no clear interior,
    /// or a pipeline stage would divide by zero
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A member property is out of range (negative K, non-positive E, phi outside (0, 1])
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an UnknownMaterial error
    pub fn unknown_material(material_name: impl Into<String>) -> Self {
        CalcError::UnknownMaterial {
            material_name: material_name.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("wall_thickness_in", "2.5", "Wall thickness must be less than half the base");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidGeometry\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_material("A992").error_code(), "UNKNOWN_MATERIAL");
        assert_eq!(CalcError::invalid_geometry("base_in", "0", "x").error_code(), "INVALID_GEOMETRY");
        assert_eq!(CalcError::invalid_input("phi", "1.2", "x").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_material_message() {
        let msg = CalcError::unknown_material("ASTM A992").to_string();
        assert!(msg.contains("ASTM A992"));
        assert!(msg.contains("ASTM A36"));
    }
}

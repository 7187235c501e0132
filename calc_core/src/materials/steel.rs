//! Structural Steel Grades
//!
//! The three plate/tube grades a built-up box column may be fabricated from,
//! with their specified minimum yield stress per the ASTM material standards.
//!
//! The set is closed. Parsing any other name yields
//! [`CalcError::UnknownMaterial`]; there is no fallback grade.
//!
//! ## Accepted names
//!
//! Each grade has exactly one canonical name, which is what serialization
//! and [`std::fmt::Display`] produce:
//!
//! | Grade | Canonical name | Fy (ksi) |
//! |---|---|---|
//! | [`SteelGrade::A36`] | `ASTM A36` | 36 |
//! | [`SteelGrade::A572Gr50`] | `ASTM A572_Gr50` | 50 |
//! | [`SteelGrade::A500GrB46`] | `ASTM A500_GrB_46` | 46 |
//!
//! Parsing also accepts two spellings of the same three designations:
//! the `ASTM ` prefix may be omitted, and letter case and surrounding
//! whitespace are ignored. So `a572_gr50` and `  ASTM a36 ` resolve, but
//! `A572 Gr50`, `ASTM_A36` and `A36X` do not.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::steel::{resolve_yield_stress, SteelGrade};
//!
//! let grade: SteelGrade = "ASTM A572_Gr50".parse().unwrap();
//! assert_eq!(grade.yield_stress_ksi(), 50.0);
//!
//! assert_eq!(resolve_yield_stress("A36").unwrap(), 36.0);
//! assert!(resolve_yield_stress("ASTM A992").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Steel grade for the section walls
///
/// Serializes as its canonical ASTM name (e.g. `"ASTM A36"`). Deserializing
/// goes through [`FromStr`], so JSON input gets the same alias handling and
/// the same `UnknownMaterial` rejection as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SteelGrade {
    /// ASTM A36 carbon structural steel, Fy = 36 ksi
    A36,
    /// ASTM A572 Grade 50 HSLA steel, Fy = 50 ksi
    A572Gr50,
    /// ASTM A500 Grade B rectangular HSS, Fy = 46 ksi
    A500GrB46,
}

impl SteelGrade {
    /// All supported grades, in display order
    pub const ALL: [SteelGrade; 3] = [SteelGrade::A36, SteelGrade::A572Gr50, SteelGrade::A500GrB46];

    /// Specified minimum yield stress Fy (ksi)
    pub fn yield_stress_ksi(&self) -> f64 {
        match self {
            SteelGrade::A36 => 36.0,
            SteelGrade::A572Gr50 => 50.0,
            SteelGrade::A500GrB46 => 46.0,
        }
    }

    /// Canonical name, as shown in the material selector
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "ASTM A36",
            SteelGrade::A572Gr50 => "ASTM A572_Gr50",
            SteelGrade::A500GrB46 => "ASTM A500_GrB_46",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    /// Accepts the canonical name or the bare designation without the
    /// `ASTM ` prefix, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let designation = upper.strip_prefix("ASTM ").unwrap_or(&upper).trim_start();

        match designation {
            "A36" => Ok(SteelGrade::A36),
            "A572_GR50" => Ok(SteelGrade::A572Gr50),
            "A500_GRB_46" => Ok(SteelGrade::A500GrB46),
            _ => Err(CalcError::unknown_material(s)),
        }
    }
}

impl TryFrom<String> for SteelGrade {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SteelGrade> for String {
    fn from(grade: SteelGrade) -> Self {
        grade.display_name().to_string()
    }
}

/// Resolve a material name straight to its yield stress Fy (ksi)
pub fn resolve_yield_stress(material: &str) -> CalcResult<f64> {
    let grade: SteelGrade = material.parse()?;
    Ok(grade.yield_stress_ksi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_stress_table() {
        assert_eq!(resolve_yield_stress("ASTM A36").unwrap(), 36.0);
        assert_eq!(resolve_yield_stress("ASTM A572_Gr50").unwrap(), 50.0);
        assert_eq!(resolve_yield_stress("ASTM A500_GrB_46").unwrap(), 46.0);
    }

    #[test]
    fn test_short_and_case_insensitive_names() {
        assert_eq!("A36".parse::<SteelGrade>().unwrap(), SteelGrade::A36);
        assert_eq!("a572_gr50".parse::<SteelGrade>().unwrap(), SteelGrade::A572Gr50);
        assert_eq!("  astm A500_GrB_46 ".parse::<SteelGrade>().unwrap(), SteelGrade::A500GrB46);
    }

    #[test]
    fn test_alias_rules_stay_narrow() {
        for name in ["A572 Gr50", "ASTM_A36", "ASTMA36", "A500_GrB46", "ASTM  ASTM A36"] {
            assert_eq!(name.parse::<SteelGrade>().unwrap_err(), CalcError::unknown_material(name));
        }
    }

    #[test]
    fn test_unknown_material() {
        for name in ["ASTM A992", "", "steel", "A36X", "Material not defined"] {
            let err = name.parse::<SteelGrade>().unwrap_err();
            assert_eq!(err, CalcError::unknown_material(name));
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for grade in SteelGrade::ALL {
            assert_eq!(grade.to_string().parse::<SteelGrade>().unwrap(), grade);
        }
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&SteelGrade::A572Gr50).unwrap();
        assert_eq!(json, "\"ASTM A572_Gr50\"");

        let parsed: SteelGrade = serde_json::from_str("\"A36\"").unwrap();
        assert_eq!(parsed, SteelGrade::A36);

        let err = serde_json::from_str::<SteelGrade>("\"A992\"").unwrap_err();
        assert!(err.to_string().contains("Unknown material"));
    }
}

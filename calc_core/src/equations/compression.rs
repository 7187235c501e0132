//! # Compression Member Formulas (AISC 360 Chapter E)
//!
//! Flexural buckling of members without slender elements (AISC 360 E3) and
//! the width-to-thickness limit for stiffened walls in uniform compression
//! (AISC 360 Table B4.1a). Raw formulas, no validation.
//!
//! ## Notation
//!
//! - `E` = Modulus of elasticity (ksi)
//! - `Fy` = Specified minimum yield stress (ksi)
//! - `K` = Effective length factor
//! - `L` = Laterally unbraced length (in)
//! - `r` = Radius of gyration (in)
//! - `Fe` = Elastic buckling stress (ksi)
//! - `Fn` = Nominal stress (ksi)
//! - `φ` = Resistance factor

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Coefficient of the wall width-to-thickness limit, λr = 1.49·√(E/Fy)
pub const WALL_LIMIT_COEFFICIENT: f64 = 1.49;

/// Coefficient of the inelastic/elastic buckling boundary, 4.71·√(E/Fy)
pub const INELASTIC_LIMIT_COEFFICIENT: f64 = 4.71;

/// At or below this KL/r the yield stress governs outright
pub const YIELD_SLENDERNESS_CUTOFF: f64 = 25.0;

/// Base of the inelastic buckling curve, Fn = Fy·0.658^(Fy/Fe)
pub const INELASTIC_BASE: f64 = 0.658;

/// Reduction applied to Fe in the elastic range, Fn = 0.877·Fe
pub const ELASTIC_REDUCTION: f64 = 0.877;

/// Which branch of the nominal stress curve applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucklingRegime {
    /// KL/r ≤ 25: Fn = Fy
    Yield,
    /// 25 < KL/r ≤ 4.71√(E/Fy): Fn = Fy·0.658^(Fy/Fe)
    Inelastic,
    /// KL/r > 4.71√(E/Fy): Fn = 0.877·Fe
    Elastic,
}

impl BucklingRegime {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BucklingRegime::Yield => "Yielding",
            BucklingRegime::Inelastic => "Inelastic buckling",
            BucklingRegime::Elastic => "Elastic buckling",
        }
    }
}

impl std::fmt::Display for BucklingRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Limiting width-to-thickness ratio for box walls (AISC 360 Table B4.1a, Case 6)
///
/// # Formula
/// λr = 1.49·√(E/Fy)
///
/// # Example
/// ```rust
/// use calc_core::equations::compression::wall_slenderness_limit;
///
/// let limit = wall_slenderness_limit(29000.0, 36.0);
/// assert!((limit - 42.29).abs() < 0.01);
/// ```
#[inline]
pub fn wall_slenderness_limit(e_ksi: f64, fy_ksi: f64) -> f64 {
    WALL_LIMIT_COEFFICIENT * (e_ksi / fy_ksi).sqrt()
}

/// KL/r at the boundary between inelastic and elastic buckling
///
/// # Formula
/// 4.71·√(E/Fy)
#[inline]
pub fn inelastic_slenderness_limit(e_ksi: f64, fy_ksi: f64) -> f64 {
    INELASTIC_LIMIT_COEFFICIENT * (e_ksi / fy_ksi).sqrt()
}

/// Effective slenderness ratio
///
/// # Formula
/// KL/r
///
/// # Example
/// ```rust
/// use calc_core::equations::compression::slenderness_ratio;
///
/// let klr = slenderness_ratio(1.0, 120.0, 4.0);
/// assert_eq!(klr, 30.0);
/// ```
#[inline]
pub fn slenderness_ratio(k: f64, length_in: f64, r_in: f64) -> f64 {
    (k * length_in) / r_in
}

/// Elastic (Euler) buckling stress (AISC 360 Eq. E3-4)
///
/// # Formula
/// Fe = π²E / (KL/r)²
#[inline]
pub fn elastic_buckling_stress(slenderness: f64, e_ksi: f64) -> f64 {
    (PI.powi(2) * e_ksi) / slenderness.powi(2)
}

/// Select the nominal stress regime for a slenderness ratio
///
/// Boundaries are inclusive on the lower branch: KL/r = 25 is Yield and
/// KL/r = 4.71√(E/Fy) is Inelastic.
pub fn buckling_regime(slenderness: f64, e_ksi: f64, fy_ksi: f64) -> BucklingRegime {
    if slenderness <= YIELD_SLENDERNESS_CUTOFF {
        BucklingRegime::Yield
    } else if slenderness <= inelastic_slenderness_limit(e_ksi, fy_ksi) {
        BucklingRegime::Inelastic
    } else {
        BucklingRegime::Elastic
    }
}

/// Nominal stress for a known regime (AISC 360 Eq. E3-2, E3-3)
#[inline]
pub fn nominal_stress_in_regime(regime: BucklingRegime, fy_ksi: f64, fe_ksi: f64) -> f64 {
    match regime {
        BucklingRegime::Yield => fy_ksi,
        BucklingRegime::Inelastic => fy_ksi * INELASTIC_BASE.powf(fy_ksi / fe_ksi),
        BucklingRegime::Elastic => ELASTIC_REDUCTION * fe_ksi,
    }
}

/// Design compressive strength
///
/// # Formula
/// φPn = Fn·A·φ
#[inline]
pub fn design_compressive_strength(fn_ksi: f64, area_in2: f64, phi: f64) -> f64 {
    fn_ksi * area_in2 * phi
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: f64 = 29000.0;
    const FY: f64 = 36.0;

    #[test]
    fn test_wall_limit() {
        // 1.49 * sqrt(29000/36) = 1.49 * 28.382 = 42.29
        assert!((wall_slenderness_limit(E, FY) - 42.289).abs() < 0.01);
    }

    #[test]
    fn test_inelastic_limit() {
        // 4.71 * 28.382 = 133.68
        assert!((inelastic_slenderness_limit(E, FY) - 133.68).abs() < 0.01);
    }

    #[test]
    fn test_elastic_buckling_stress() {
        assert!((elastic_buckling_stress(34.6458, E) - 238.4492).abs() < 0.001);
        assert!((elastic_buckling_stress(74.0380, E) - 52.2142).abs() < 0.001);
    }

    #[test]
    fn test_regime_boundaries() {
        let limit = inelastic_slenderness_limit(E, FY);
        assert_eq!(buckling_regime(25.0, E, FY), BucklingRegime::Yield);
        assert_eq!(buckling_regime(25.000001, E, FY), BucklingRegime::Inelastic);
        assert_eq!(buckling_regime(limit, E, FY), BucklingRegime::Inelastic);
        assert_eq!(buckling_regime(limit + 1e-9, E, FY), BucklingRegime::Elastic);
    }

    #[test]
    fn test_nominal_stress_values() {
        let fn_x = nominal_stress_in_regime(BucklingRegime::Inelastic, FY, 238.4492);
        assert!((fn_x - 33.7955).abs() < 0.001);

        let fn_y = nominal_stress_in_regime(BucklingRegime::Inelastic, FY, 52.2142);
        assert!((fn_y - 26.9758).abs() < 0.001);

        assert_eq!(nominal_stress_in_regime(BucklingRegime::Yield, FY, 1000.0), FY);
        assert!((nominal_stress_in_regime(BucklingRegime::Elastic, FY, 10.0) - 8.77).abs() < 1e-12);
    }

    #[test]
    fn test_design_strength() {
        assert!((design_compressive_strength(33.7955, 13.0, 0.90) - 395.407).abs() < 0.01);
        assert!((design_compressive_strength(26.9758, 13.0, 0.90) - 315.617).abs() < 0.01);
    }
}

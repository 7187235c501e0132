//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Mixed Unit System
//!
//! Section dimensions are entered in inches and stresses in ksi, matching the
//! AISC tables. The member clear height is the one exception: it is entered in
//! meters and bridged to inches with the exact factor 1 in = 0.0254 m.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Inches, Meters};
//!
//! let height = Meters(0.0254);
//! let height_in: Inches = height.into();
//! assert!((height_in.value() - 1.0).abs() < 1e-12);
//! ```

/// Meters per inch. Kept exact; changing it shifts every slenderness ratio.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Inches(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Meters(pub f64);

impl Inches {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Meters> for Inches {
    fn from(m: Meters) -> Self {
        Inches(m.0 / METERS_PER_INCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_inches() {
        let inches: Inches = Meters(3.0).into();
        // 3 / 0.0254 = 118.1102...
        assert!((inches.value() - 118.11023622047244).abs() < 1e-9);
    }

    #[test]
    fn test_zero_height() {
        assert_eq!(Inches::from(Meters(0.0)), Inches(0.0));
    }
}

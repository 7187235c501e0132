//! # Cross-Section Property Formulas
//!
//! Geometric properties of a built-up rectangular box (hollow rectangle of
//! uniform wall thickness). These are raw formulas: they never fail and
//! perform no validation. The checked pipeline in
//! [`calculations::box_column`](crate::calculations::box_column) guards them.
//!
//! ## Notation
//!
//! - `b` = Outer base (width, parallel to the x-axis)
//! - `d` = Outer depth (height, parallel to the y-axis)
//! - `t` = Wall thickness
//! - `b1 = b - 2t`, `d1 = d - 2t` = Clear interior dimensions
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `r` = Radius of gyration (√(I/A))
//!
//! ```text
//!     ┌─────────────┐
//!     │ ┌─────────┐ │
//!     │ │         │ │
//!   d │ │   d1    │ │ ── x
//!     │ │         │ │
//!     │ └─────────┘ │
//!     └─────────────┘
//!       t    b1   t
//!            b
//! ```
//!
//! ## References
//!
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A

/// Clear interior dimension left between two walls of thickness `t`
///
/// # Formula
/// b1 = b - 2t
///
/// # Example
/// ```rust
/// use calc_core::equations::section::clear_dimension;
///
/// assert_eq!(clear_dimension(10.0, 0.5), 9.0);
/// ```
#[inline]
pub fn clear_dimension(outer: f64, t: f64) -> f64 {
    outer - 2.0 * t
}

/// Calculate cross-sectional area of a box section
///
/// The outer rectangle minus the clear interior rectangle.
///
/// # Formula
/// A = b·d - b1·d1
///
/// # Example
/// ```rust
/// use calc_core::equations::section::box_area;
///
/// // 4" x 10" box, 1/2" walls
/// let area = box_area(4.0, 10.0, 0.5);
/// assert!((area - 13.0).abs() < 1e-12);
/// ```
#[inline]
pub fn box_area(b: f64, d: f64, t: f64) -> f64 {
    let b1 = clear_dimension(b, t);
    let d1 = clear_dimension(d, t);
    b * d - b1 * d1
}

/// Moment of inertia of a box section about the x-axis (bending about the base)
///
/// # Formula
/// Ix = (b·d³ - b1·d1³) / 12
///
/// # Example
/// ```rust
/// use calc_core::equations::section::box_moment_of_inertia_x;
///
/// // (4·1000 - 3·729) / 12 = 151.083 in⁴
/// let ix = box_moment_of_inertia_x(4.0, 10.0, 0.5);
/// assert!((ix - 151.0833).abs() < 0.001);
/// ```
#[inline]
pub fn box_moment_of_inertia_x(b: f64, d: f64, t: f64) -> f64 {
    let b1 = clear_dimension(b, t);
    let d1 = clear_dimension(d, t);
    (b * d.powi(3) - b1 * d1.powi(3)) / 12.0
}

/// Moment of inertia of a box section about the y-axis (bending about the depth)
///
/// # Formula
/// Iy = (d·b³ - d1·b1³) / 12
#[inline]
pub fn box_moment_of_inertia_y(b: f64, d: f64, t: f64) -> f64 {
    let b1 = clear_dimension(b, t);
    let d1 = clear_dimension(d, t);
    (d * b.powi(3) - d1 * b1.powi(3)) / 12.0
}

/// Radius of gyration from moment of inertia and area
///
/// # Formula
/// r = √(I/A)
///
/// Returns NaN when `I/A` is negative; callers are expected to check first.
#[inline]
pub fn radius_of_gyration(i: f64, area: f64) -> f64 {
    (i / area).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_box_area() {
        assert!((box_area(4.0, 10.0, 0.5) - 13.0).abs() < EPSILON);
        // Square 6x6 with 1/2" walls: 36 - 25 = 11
        assert!((box_area(6.0, 6.0, 0.5) - 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_moments_of_inertia() {
        // Ix = (4·10³ - 3·9³)/12 = 1813/12
        assert!((box_moment_of_inertia_x(4.0, 10.0, 0.5) - 1813.0 / 12.0).abs() < EPSILON);
        // Iy = (10·4³ - 9·3³)/12 = 397/12
        assert!((box_moment_of_inertia_y(4.0, 10.0, 0.5) - 397.0 / 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_square_box_is_symmetric() {
        let ix = box_moment_of_inertia_x(8.0, 8.0, 0.375);
        let iy = box_moment_of_inertia_y(8.0, 8.0, 0.375);
        assert!((ix - iy).abs() < EPSILON);
    }

    #[test]
    fn test_radius_of_gyration() {
        let r = radius_of_gyration(1813.0 / 12.0, 13.0);
        assert!((r - 3.4090753690399502).abs() < 1e-12);
    }
}

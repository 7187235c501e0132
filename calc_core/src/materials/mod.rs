//! # Materials Database
//!
//! Material definitions and property lookups. Only structural steel is
//! supported, limited to the grades a built-up box section is fabricated from.

pub mod steel;

pub use steel::{resolve_yield_stress, SteelGrade};

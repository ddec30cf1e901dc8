//! Fixed reference data

pub mod dashboard;
pub mod materials;
pub mod rooftop;

pub use materials::{DEFAULT_JUNCTION_BOX_VALUE_USD, REFERENCE_TABLE};

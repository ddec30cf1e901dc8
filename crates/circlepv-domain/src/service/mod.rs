//! Domain services
//!
//! This module contains business logic services for the domain layer.

pub mod recycling_calculator;
pub mod rooftop_layout;

pub use recycling_calculator::{
    compute, CalculationBreakdown, MaterialContribution, RecyclingCalculator,
};
pub use rooftop_layout::{roof_bounds, save_layout};

//! Application use cases

pub mod calculation_service;

pub use calculation_service::{BatchEntry, BatchReport, CalculationService};

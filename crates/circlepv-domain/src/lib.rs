//! Domain layer: material reference data and the recycling calculator

pub mod constants;
pub mod model;
pub mod service;

pub use model::*;

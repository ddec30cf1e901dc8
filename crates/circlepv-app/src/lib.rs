//! Application service layer - config, calculation use cases, export

pub mod app;
pub mod config;
pub mod export;

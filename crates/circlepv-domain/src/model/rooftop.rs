//! Rooftop layout type definitions

use serde::{Deserialize, Serialize};

use crate::constants::rooftop::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

/// Manually entered panel layout for a selected roof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RooftopLayout {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub panels_per_row: Option<u32>,
    #[serde(default)]
    pub columns: Option<u32>,
    /// Required before the layout can be saved
    #[serde(default)]
    pub total_panels: Option<u32>,
}

impl Default for RooftopLayout {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            rows: None,
            panels_per_row: None,
            columns: None,
            total_panels: None,
        }
    }
}

/// Marker rectangle drawn around a building location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// A layout that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRooftopLayout {
    pub layout: RooftopLayout,
    pub total_panels: u32,
    pub bounds: RoofBounds,
}

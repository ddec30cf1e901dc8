//! Rooftop layout validation and marker geometry

use circlepv_types::{CalculationRequest, Error, PanelType, Result};

use crate::constants::rooftop::ROOF_MARKER_OFFSET_DEG;
use crate::model::{RoofBounds, RooftopLayout, SavedRooftopLayout};

/// Marker rectangle around a building location
pub fn roof_bounds(latitude: f64, longitude: f64) -> RoofBounds {
    RoofBounds {
        north: latitude + ROOF_MARKER_OFFSET_DEG,
        south: latitude - ROOF_MARKER_OFFSET_DEG,
        east: longitude + ROOF_MARKER_OFFSET_DEG,
        west: longitude - ROOF_MARKER_OFFSET_DEG,
    }
}

/// Validate a manually entered layout.
///
/// The total panel count is required; rows, panels per row and columns are
/// informational only.
pub fn save_layout(layout: RooftopLayout) -> Result<SavedRooftopLayout> {
    if !(-90.0..=90.0).contains(&layout.latitude) {
        return Err(Error::InvalidLayout(format!(
            "latitude {} is outside [-90, 90]",
            layout.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&layout.longitude) {
        return Err(Error::InvalidLayout(format!(
            "longitude {} is outside [-180, 180]",
            layout.longitude
        )));
    }

    let total_panels = match layout.total_panels {
        Some(n) if n > 0 => n,
        _ => {
            return Err(Error::InvalidLayout(
                "Please enter the total number of panels.".to_string(),
            ))
        }
    };

    let bounds = roof_bounds(layout.latitude, layout.longitude);
    tracing::debug!(
        latitude = layout.latitude,
        longitude = layout.longitude,
        total_panels,
        "saved rooftop layout"
    );

    Ok(SavedRooftopLayout {
        layout,
        total_panels,
        bounds,
    })
}

fn or_na(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

impl SavedRooftopLayout {
    /// Confirmation text listing the saved configuration
    pub fn summary(&self) -> String {
        format!(
            "Saved rooftop config:\n\
             Rows: {}\n\
             Panels per row: {}\n\
             Columns: {}\n\
             Total Panels: {}\n\
             Location: ({}, {})",
            or_na(self.layout.rows),
            or_na(self.layout.panels_per_row),
            or_na(self.layout.columns),
            self.total_panels,
            self.layout.latitude,
            self.layout.longitude,
        )
    }

    /// Calculator request for every panel on this roof
    pub fn to_request(&self, panel_type: PanelType, include_junction_box: bool) -> CalculationRequest {
        CalculationRequest::new(panel_type, self.total_panels).with_junction_box(include_junction_box)
    }
}

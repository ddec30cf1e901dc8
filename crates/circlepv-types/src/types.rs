//! Request and result types shared across layers

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Panel construction type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelType {
    /// Crystalline silicon panel
    #[default]
    #[value(alias = "silicon-based")]
    Silicon,
    /// Thin-film panel
    #[value(alias = "thinfilm", alias = "thin_film")]
    ThinFilm,
}

impl PanelType {
    /// Display label as shown on the calculator form
    pub fn label(&self) -> &'static str {
        match self {
            PanelType::Silicon => "Silicon-Based",
            PanelType::ThinFilm => "Thin Film",
        }
    }

    /// Parse a loosely formatted panel type name (CSV cells, form values)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "silicon" | "silicon-based" => Some(PanelType::Silicon),
            "thin-film" | "thinfilm" => Some(PanelType::ThinFilm),
            _ => None,
        }
    }
}

impl std::fmt::Display for PanelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single user-initiated calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub panel_type: PanelType,
    /// Number of panels. Callers bound this to >= 1; zero yields zero totals.
    pub panel_count: u32,
    pub include_junction_box: bool,
}

impl CalculationRequest {
    pub fn new(panel_type: PanelType, panel_count: u32) -> Self {
        Self {
            panel_type,
            panel_count,
            include_junction_box: false,
        }
    }

    pub fn with_junction_box(mut self, include: bool) -> Self {
        self.include_junction_box = include;
        self
    }
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self::new(PanelType::default(), 1)
    }
}

/// Aggregated totals for one request
///
/// Values are unrounded; round to two decimals only when displaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_carbon_footprint_kg: f64,
    pub total_recycled_value_usd: f64,
}

impl CalculationResult {
    /// Carbon footprint formatted for display (kg CO₂e, two decimals)
    pub fn carbon_display(&self) -> String {
        format!("{:.2}", self.total_carbon_footprint_kg)
    }

    /// Recycled value formatted for display (USD, two decimals)
    pub fn value_display(&self) -> String {
        format!("{:.2}", self.total_recycled_value_usd)
    }
}

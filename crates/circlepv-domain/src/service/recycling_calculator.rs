//! Recycling value and carbon footprint aggregation
//!
//! For each material the panel-type fraction is scaled by the material's
//! carbon intensity and by its mean recycled price, then multiplied by the
//! panel count:
//!
//! carbon = Σ fraction × ci × panels
//! value  = Σ fraction × mean(price tiers) × panels (+ panels × junction box value)

use circlepv_types::{CalculationRequest, CalculationResult};
use serde::Serialize;

use crate::constants::DEFAULT_JUNCTION_BOX_VALUE_USD;
use crate::model::{Material, MaterialTable};

/// One material's share of a calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialContribution {
    pub material: Material,
    pub fraction: f64,
    pub mean_price_usd: f64,
    pub carbon_kg: f64,
    pub recycled_value_usd: f64,
}

/// Totals plus how each material contributed to them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationBreakdown {
    pub request: CalculationRequest,
    pub result: CalculationResult,
    pub materials: Vec<MaterialContribution>,
    /// Accessory value added to the recycled total (0 when excluded)
    pub junction_box_value_usd: f64,
}

/// Aggregator bound to a material table and an accessory value
#[derive(Debug, Clone, Copy)]
pub struct RecyclingCalculator<'a> {
    table: &'a MaterialTable,
    junction_box_value_usd: f64,
}

impl Default for RecyclingCalculator<'static> {
    fn default() -> Self {
        Self::new(MaterialTable::reference())
    }
}

impl<'a> RecyclingCalculator<'a> {
    pub fn new(table: &'a MaterialTable) -> Self {
        Self {
            table,
            junction_box_value_usd: DEFAULT_JUNCTION_BOX_VALUE_USD,
        }
    }

    /// Override the per-panel junction box value.
    ///
    /// The value must be finite and non-negative; callers validate it when it
    /// comes from configuration.
    pub fn with_junction_box_value(mut self, value_usd: f64) -> Self {
        debug_assert!(value_usd.is_finite() && value_usd >= 0.0);
        self.junction_box_value_usd = value_usd;
        self
    }

    /// Totals for a request. Never fails.
    pub fn compute(&self, request: &CalculationRequest) -> CalculationResult {
        self.compute_breakdown(request).result
    }

    /// Totals plus per-material contributions
    pub fn compute_breakdown(&self, request: &CalculationRequest) -> CalculationBreakdown {
        let panels = f64::from(request.panel_count);
        let mut total_carbon = 0.0;
        let mut total_recycled_value = 0.0;
        let mut materials = Vec::with_capacity(self.table.profiles().len());

        for profile in self.table.profiles() {
            let fraction = profile.fraction_for(request.panel_type);
            let mean_price = profile.mean_recycled_price();

            let carbon = fraction * profile.carbon_intensity * panels;
            let recycled_value = fraction * mean_price * panels;
            total_carbon += carbon;
            total_recycled_value += recycled_value;

            materials.push(MaterialContribution {
                material: profile.material,
                fraction,
                mean_price_usd: mean_price,
                carbon_kg: carbon,
                recycled_value_usd: recycled_value,
            });
        }

        let junction_box_value = if request.include_junction_box {
            panels * self.junction_box_value_usd
        } else {
            0.0
        };
        total_recycled_value += junction_box_value;

        tracing::debug!(
            panel_type = %request.panel_type,
            panels = request.panel_count,
            junction_box = request.include_junction_box,
            total_carbon,
            total_recycled_value,
            "computed recycling totals"
        );

        CalculationBreakdown {
            request: *request,
            result: CalculationResult {
                total_carbon_footprint_kg: total_carbon,
                total_recycled_value_usd: total_recycled_value,
            },
            materials,
            junction_box_value_usd: junction_box_value,
        }
    }
}

/// Compute totals against the built-in reference table
pub fn compute(request: &CalculationRequest) -> CalculationResult {
    RecyclingCalculator::default().compute(request)
}

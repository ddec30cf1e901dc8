//! Calculation Service - recycling estimates for single requests, roofs and batches
//!
//! Resolves the material table (built-in or configured override) and the
//! junction box value once, then serves every calculation from them.

use chrono::{DateTime, Utc};
use circlepv_domain::constants::DEFAULT_JUNCTION_BOX_VALUE_USD;
use circlepv_domain::model::{MaterialTable, RooftopLayout, SavedRooftopLayout};
use circlepv_domain::service::{save_layout, CalculationBreakdown, RecyclingCalculator};
use circlepv_infra::{load_material_table, BatchRequest};
use circlepv_types::{CalculationRequest, CalculationResult, PanelType, Result};
use serde::Serialize;

use crate::config::{validate_junction_box_value, Config};

/// One labelled row of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub label: String,
    pub breakdown: CalculationBreakdown,
}

/// Results of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<BatchEntry>,
    pub total_panels: u64,
    pub totals: CalculationResult,
}

/// Calculation use cases bound to one material table
#[derive(Debug, Clone)]
pub struct CalculationService {
    table: Option<MaterialTable>,
    junction_box_value_usd: f64,
}

impl CalculationService {
    /// Fails if the junction box value is negative or not finite
    pub fn new(table: Option<MaterialTable>, junction_box_value_usd: f64) -> Result<Self> {
        Ok(Self {
            table,
            junction_box_value_usd: validate_junction_box_value(junction_box_value_usd)?,
        })
    }

    /// Build from config, loading the material table override if one is set
    pub fn from_config(config: &Config) -> Result<Self> {
        let table = match &config.material_table {
            Some(path) => Some(load_material_table(path)?),
            None => None,
        };
        Self::new(table, config.junction_box_value_usd)
    }

    pub fn table(&self) -> &MaterialTable {
        self.table.as_ref().unwrap_or(MaterialTable::reference())
    }

    pub fn uses_reference_table(&self) -> bool {
        self.table.is_none()
    }

    pub fn junction_box_value(&self) -> f64 {
        self.junction_box_value_usd
    }

    pub fn calculator(&self) -> RecyclingCalculator<'_> {
        RecyclingCalculator::new(self.table()).with_junction_box_value(self.junction_box_value_usd)
    }

    pub fn calculate(&self, request: &CalculationRequest) -> CalculationBreakdown {
        self.calculator().compute_breakdown(request)
    }

    /// Validate a roof layout and, if a panel type is given, estimate it
    pub fn rooftop(
        &self,
        layout: RooftopLayout,
        estimate: Option<(PanelType, bool)>,
    ) -> Result<(SavedRooftopLayout, Option<CalculationBreakdown>)> {
        let saved = save_layout(layout)?;
        let breakdown = estimate
            .map(|(panel_type, junction_box)| self.calculate(&saved.to_request(panel_type, junction_box)));
        Ok((saved, breakdown))
    }

    /// Calculate every request, reporting progress as (done, total)
    pub fn run_batch<F>(&self, requests: &[BatchRequest], mut on_progress: F) -> BatchReport
    where
        F: FnMut(usize, usize),
    {
        let calculator = self.calculator();
        let total = requests.len();
        let mut entries = Vec::with_capacity(total);
        let mut totals = CalculationResult::default();
        let mut total_panels = 0u64;

        for (idx, item) in requests.iter().enumerate() {
            let breakdown = calculator.compute_breakdown(&item.request);
            totals.total_carbon_footprint_kg += breakdown.result.total_carbon_footprint_kg;
            totals.total_recycled_value_usd += breakdown.result.total_recycled_value_usd;
            total_panels += u64::from(item.request.panel_count);

            entries.push(BatchEntry {
                label: item.label.clone(),
                breakdown,
            });
            on_progress(idx + 1, total);
        }

        tracing::info!(rows = total, total_panels, "batch calculation finished");

        BatchReport {
            generated_at: Utc::now(),
            entries,
            total_panels,
            totals,
        }
    }
}

impl Default for CalculationService {
    fn default() -> Self {
        Self {
            table: None,
            junction_box_value_usd: DEFAULT_JUNCTION_BOX_VALUE_USD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlepv_domain::service::compute;
    use circlepv_types::{ConfigError, Error};

    fn batch(rows: &[(&str, PanelType, u32, bool)]) -> Vec<BatchRequest> {
        rows.iter()
            .map(|(label, panel_type, count, jb)| BatchRequest {
                label: label.to_string(),
                request: CalculationRequest::new(*panel_type, *count).with_junction_box(*jb),
            })
            .collect()
    }

    #[test]
    fn test_default_service_matches_reference() {
        let service = CalculationService::default();
        assert!(service.uses_reference_table());
        let req = CalculationRequest::new(PanelType::Silicon, 3).with_junction_box(true);
        assert_eq!(service.calculate(&req).result, compute(&req));
    }

    #[test]
    fn test_junction_box_value_from_config() {
        let config = Config {
            junction_box_value_usd: 10.0,
            ..Default::default()
        };
        let service = CalculationService::from_config(&config).unwrap();
        let base = service.calculate(&CalculationRequest::new(PanelType::Silicon, 2));
        let with = service.calculate(&CalculationRequest::new(PanelType::Silicon, 2).with_junction_box(true));
        let diff = with.result.total_recycled_value_usd - base.result.total_recycled_value_usd;
        assert!((diff - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_junction_box_value_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                junction_box_value_usd: bad,
                ..Default::default()
            };
            let err = CalculationService::from_config(&config).unwrap_err();
            assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
            assert!(CalculationService::new(None, bad).is_err());
        }
    }

    #[test]
    fn test_estimates_stay_non_negative_with_free_junction_box() {
        let service = CalculationService::new(None, 0.0).unwrap();
        assert_eq!(service.junction_box_value(), 0.0);
        for panel_type in [PanelType::Silicon, PanelType::ThinFilm] {
            let req = CalculationRequest::new(panel_type, 5).with_junction_box(true);
            let result = service.calculate(&req).result;
            assert!(result.total_carbon_footprint_kg >= 0.0);
            assert!(result.total_recycled_value_usd >= 0.0);
        }
    }

    #[test]
    fn test_missing_material_table_is_error() {
        let config = Config {
            material_table: Some("/nonexistent/materials.toml".into()),
            ..Default::default()
        };
        assert!(CalculationService::from_config(&config).is_err());
    }

    #[test]
    fn test_batch_totals_and_progress() {
        let service = CalculationService::default();
        let requests = batch(&[
            ("A", PanelType::Silicon, 1, false),
            ("B", PanelType::ThinFilm, 1, false),
            ("C", PanelType::Silicon, 2, true),
        ]);

        let mut seen = Vec::new();
        let report = service.run_batch(&requests, |done, total| seen.push((done, total)));

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.total_panels, 4);

        // 2.6644 + 1.8574 + 2 × 2.6644
        assert!((report.totals.total_carbon_footprint_kg - 9.8506).abs() < 1e-9);
        // 307.473 + 299.273 + 2 × 307.473 + 2 × 3
        assert!((report.totals.total_recycled_value_usd - 1227.692).abs() < 1e-9);
    }

    #[test]
    fn test_rooftop_estimate() {
        let service = CalculationService::default();
        let layout = RooftopLayout {
            total_panels: Some(10),
            ..Default::default()
        };
        let (saved, breakdown) = service
            .rooftop(layout, Some((PanelType::Silicon, false)))
            .unwrap();
        assert_eq!(saved.total_panels, 10);
        let breakdown = breakdown.unwrap();
        assert!((breakdown.result.total_carbon_footprint_kg - 26.644).abs() < 1e-9);
    }

    #[test]
    fn test_rooftop_without_estimate() {
        let service = CalculationService::default();
        let layout = RooftopLayout {
            total_panels: Some(10),
            ..Default::default()
        };
        let (_, breakdown) = service.rooftop(layout, None).unwrap();
        assert!(breakdown.is_none());
    }
}

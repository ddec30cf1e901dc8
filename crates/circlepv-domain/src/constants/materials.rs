//! Reference material composition and pricing for end-of-life panels

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::{Material, MaterialProfile, MaterialTable};

/// Recycled value added per panel when the junction box is included (USD)
pub const DEFAULT_JUNCTION_BOX_VALUE_USD: f64 = 3.0;

fn tiers(prices: &[(&str, f64)]) -> BTreeMap<String, f64> {
    prices.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Built-in six-material table
pub static REFERENCE_TABLE: LazyLock<MaterialTable> = LazyLock::new(|| {
    MaterialTable::from_trusted(vec![
        MaterialProfile {
            material: Material::Glass,
            silicon_fraction: 0.76,
            thin_film_fraction: 0.89,
            carbon_intensity: 1.1,
            recycled_unit_prices: tiers(&[("P1", 100.0), ("P2", 600.0), ("P3", 5.0)]),
        },
        MaterialProfile {
            material: Material::Plastic,
            silicon_fraction: 0.1,
            thin_film_fraction: 0.04,
            carbon_intensity: 2.5,
            recycled_unit_prices: tiers(&[("P1", 0.0)]),
        },
        MaterialProfile {
            material: Material::Aluminum,
            silicon_fraction: 0.08,
            thin_film_fraction: 0.06,
            carbon_intensity: 10.0,
            recycled_unit_prices: tiers(&[("P1", 1500.0)]),
        },
        MaterialProfile {
            material: Material::Silicon,
            silicon_fraction: 0.05,
            thin_film_fraction: 0.0,
            carbon_intensity: 12.0,
            recycled_unit_prices: tiers(&[("P1", 50.0), ("P2", 300.0)]),
        },
        MaterialProfile {
            material: Material::Silver,
            silicon_fraction: 0.0003,
            thin_film_fraction: 0.0003,
            carbon_intensity: 458.0,
            recycled_unit_prices: tiers(&[("P1", 10.0)]),
        },
        MaterialProfile {
            material: Material::Copper,
            silicon_fraction: 0.01,
            thin_film_fraction: 0.01,
            carbon_intensity: 4.1,
            recycled_unit_prices: tiers(&[("P3", 12.0)]),
        },
    ])
});

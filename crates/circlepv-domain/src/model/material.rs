//! Material-related type definitions

use std::collections::BTreeMap;

use circlepv_types::{Error, PanelType, Result};
use serde::{Deserialize, Serialize};

use crate::constants::materials::REFERENCE_TABLE;

/// Recoverable panel materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Glass,
    Plastic,
    Aluminum,
    Silicon,
    Silver,
    Copper,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Glass,
        Material::Plastic,
        Material::Aluminum,
        Material::Silicon,
        Material::Silver,
        Material::Copper,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Material::Glass => "Glass",
            Material::Plastic => "Plastic",
            Material::Aluminum => "Aluminum",
            Material::Silicon => "Silicon",
            Material::Silver => "Silver",
            Material::Copper => "Copper",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-material reference values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    pub material: Material,
    /// Mass fraction per silicon-based panel
    pub silicon_fraction: f64,
    /// Mass fraction per thin-film panel
    pub thin_film_fraction: f64,
    /// kg CO₂e per unit mass fraction per panel
    pub carbon_intensity: f64,
    /// Price tier label -> unit price (USD)
    pub recycled_unit_prices: BTreeMap<String, f64>,
}

impl MaterialProfile {
    /// Mass fraction read for the given panel type
    pub fn fraction_for(&self, panel_type: PanelType) -> f64 {
        match panel_type {
            PanelType::Silicon => self.silicon_fraction,
            PanelType::ThinFilm => self.thin_film_fraction,
        }
    }

    /// Unweighted mean over this material's own price tiers.
    ///
    /// Tier counts differ between materials and are kept as-is. An empty
    /// tier set divides by 1 so the mean is 0 rather than NaN.
    pub fn mean_recycled_price(&self) -> f64 {
        let sum: f64 = self.recycled_unit_prices.values().sum();
        let count = self.recycled_unit_prices.len().max(1);
        sum / count as f64
    }

    fn validate(&self) -> Result<()> {
        if self.recycled_unit_prices.is_empty() {
            return Err(Error::MaterialTable(format!(
                "{} has no recycled price tiers",
                self.material
            )));
        }

        let fields = [
            ("silicon_fraction", self.silicon_fraction),
            ("thin_film_fraction", self.thin_film_fraction),
            ("carbon_intensity", self.carbon_intensity),
        ];
        for (name, value) in fields {
            check_non_negative(self.material, name, value)?;
        }
        for (tier, price) in &self.recycled_unit_prices {
            check_non_negative(self.material, &format!("price tier {}", tier), *price)?;
        }

        Ok(())
    }
}

fn check_non_negative(material: Material, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::MaterialTable(format!(
            "{} {} must be a finite non-negative number, got {}",
            material, field, value
        )));
    }
    Ok(())
}

/// The full set of material profiles used by the calculator.
///
/// Holds exactly one profile for each [`Material`]. Once built it is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialTable {
    profiles: Vec<MaterialProfile>,
}

impl MaterialTable {
    /// Build a table, checking that every material appears exactly once and
    /// has at least one price tier.
    pub fn new(profiles: Vec<MaterialProfile>) -> Result<Self> {
        for profile in &profiles {
            profile.validate()?;
        }

        for material in Material::ALL {
            let count = profiles.iter().filter(|p| p.material == material).count();
            match count {
                1 => {}
                0 => {
                    return Err(Error::MaterialTable(format!(
                        "missing profile for {}",
                        material
                    )))
                }
                _ => {
                    return Err(Error::MaterialTable(format!(
                        "duplicate profile for {}",
                        material
                    )))
                }
            }
        }

        Ok(Self { profiles })
    }

    /// Built-in reference table
    pub fn reference() -> &'static MaterialTable {
        &REFERENCE_TABLE
    }

    pub fn profiles(&self) -> &[MaterialProfile] {
        &self.profiles
    }

    pub fn get(&self, material: Material) -> Option<&MaterialProfile> {
        self.profiles.iter().find(|p| p.material == material)
    }

    pub(crate) fn from_trusted(profiles: Vec<MaterialProfile>) -> Self {
        Self { profiles }
    }
}

//! Material table overrides loaded from TOML
//!
//! Expected layout:
//!
//! ```toml
//! [[material]]
//! material = "glass"
//! silicon_fraction = 0.76
//! thin_film_fraction = 0.89
//! carbon_intensity = 1.1
//!
//! [material.recycled_unit_prices]
//! P1 = 100
//! P2 = 600
//! ```

use std::path::Path;

use circlepv_domain::model::{MaterialProfile, MaterialTable};
use circlepv_types::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MaterialTableFile {
    #[serde(default)]
    material: Vec<MaterialProfile>,
}

/// Parse and validate a material table from TOML text
pub fn parse_material_table(content: &str) -> Result<MaterialTable> {
    let file: MaterialTableFile =
        toml::from_str(content).map_err(|e| Error::MaterialTable(e.to_string()))?;
    MaterialTable::new(file.material)
}

/// Load a material table from a TOML file
pub fn load_material_table(path: &Path) -> Result<MaterialTable> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::MaterialTable(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let table = parse_material_table(&content)?;
    tracing::info!(path = %path.display(), "loaded material table override");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlepv_domain::model::Material;
    use std::io::Write;

    fn full_table_toml() -> String {
        let mut out = String::new();
        for (name, prices) in [
            ("glass", "P1 = 100\nP2 = 600\nP3 = 5"),
            ("plastic", "P1 = 0"),
            ("aluminum", "P1 = 1500"),
            ("silicon", "P1 = 50\nP2 = 300"),
            ("silver", "P1 = 10"),
            ("copper", "P3 = 12"),
        ] {
            out.push_str(&format!(
                "[[material]]\nmaterial = \"{}\"\nsilicon_fraction = 0.1\nthin_film_fraction = 0.05\ncarbon_intensity = 2.0\n\n[material.recycled_unit_prices]\n{}\n\n",
                name, prices
            ));
        }
        out
    }

    #[test]
    fn test_parse_full_table() {
        let table = parse_material_table(&full_table_toml()).unwrap();
        assert_eq!(table.profiles().len(), 6);
        let glass = table.get(Material::Glass).unwrap();
        assert_eq!(glass.recycled_unit_prices.len(), 3);
        assert!((glass.mean_recycled_price() - 235.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_empty_tiers() {
        let content = full_table_toml().replace("P3 = 12", "");
        let err = parse_material_table(&content).unwrap_err();
        assert!(err.to_string().contains("Copper has no recycled price tiers"));
    }

    #[test]
    fn test_parse_rejects_unknown_material() {
        let content = full_table_toml().replace("\"silver\"", "\"gold\"");
        assert!(matches!(
            parse_material_table(&content),
            Err(Error::MaterialTable(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(full_table_toml().as_bytes()).unwrap();
        let table = load_material_table(file.path()).unwrap();
        assert!(table.get(Material::Copper).is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_material_table(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}

//! End-to-end estimate flows through config, loaders, service and export

use circlepv_app::app::CalculationService;
use circlepv_app::config::Config;
use circlepv_app::export::export_batch_to_excel;
use circlepv_domain::model::{Material, RooftopLayout};
use circlepv_infra::load_requests_from_csv;
use circlepv_types::{CalculationRequest, Error, PanelType};
use std::path::Path;
use tempfile::tempdir;

const MATERIALS_TOML: &str = r#"
[[material]]
material = "glass"
silicon_fraction = 0.76
thin_film_fraction = 0.89
carbon_intensity = 1.1
[material.recycled_unit_prices]
P1 = 100
P2 = 600
P3 = 5

[[material]]
material = "plastic"
silicon_fraction = 0.1
thin_film_fraction = 0.04
carbon_intensity = 2.5
[material.recycled_unit_prices]
P1 = 0

[[material]]
material = "aluminum"
silicon_fraction = 0.08
thin_film_fraction = 0.06
carbon_intensity = 10
[material.recycled_unit_prices]
P1 = 1500

[[material]]
material = "silicon"
silicon_fraction = 0.05
thin_film_fraction = 0
carbon_intensity = 12
[material.recycled_unit_prices]
P1 = 50
P2 = 300

[[material]]
material = "silver"
silicon_fraction = 0.0003
thin_film_fraction = 0.0003
carbon_intensity = 458
[material.recycled_unit_prices]
P1 = 10

[[material]]
material = "copper"
silicon_fraction = 0.01
thin_film_fraction = 0.01
carbon_intensity = 4.1
[material.recycled_unit_prices]
P3 = 12
"#;

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).expect("write fixture");
}

#[test]
fn test_csv_batch_to_excel() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("sites.csv");
    write(
        &csv_path,
        "label,panel_type,panel_count,junction_box\n\
         School roof,silicon,1,false\n\
         Factory,thin-film,1,\n\
         Depot,Silicon-Based,2,true\n",
    );

    let requests = load_requests_from_csv(&csv_path).unwrap();
    assert_eq!(requests.len(), 3);

    let report = CalculationService::default().run_batch(&requests, |_, _| {});
    assert_eq!(report.total_panels, 4);
    assert!((report.totals.total_carbon_footprint_kg - 9.8506).abs() < 1e-9);
    assert!((report.totals.total_recycled_value_usd - 1227.692).abs() < 1e-9);
    assert_eq!(report.entries[0].breakdown.result.carbon_display(), "2.66");
    assert_eq!(report.entries[0].breakdown.result.value_display(), "307.47");

    let xlsx = dir.path().join("sites.xlsx");
    export_batch_to_excel(&report, &xlsx).unwrap();
    assert!(xlsx.exists());
}

#[test]
fn test_toml_table_reproduces_reference_results() {
    let dir = tempdir().unwrap();
    let toml_path = dir.path().join("materials.toml");
    write(&toml_path, MATERIALS_TOML);

    let config = Config {
        material_table: Some(toml_path),
        ..Default::default()
    };
    let custom = CalculationService::from_config(&config).unwrap();
    assert!(!custom.uses_reference_table());

    let reference = CalculationService::default();
    for panel_type in [PanelType::Silicon, PanelType::ThinFilm] {
        let req = CalculationRequest::new(panel_type, 17).with_junction_box(true);
        let a = custom.calculate(&req).result;
        let b = reference.calculate(&req).result;
        assert!((a.total_carbon_footprint_kg - b.total_carbon_footprint_kg).abs() < 1e-9);
        assert!((a.total_recycled_value_usd - b.total_recycled_value_usd).abs() < 1e-9);
    }
}

#[test]
fn test_toml_table_changes_prices() {
    let dir = tempdir().unwrap();
    let toml_path = dir.path().join("materials.toml");
    // Aluminum scrap price doubles
    write(&toml_path, &MATERIALS_TOML.replace("P1 = 1500", "P1 = 3000"));

    let config = Config {
        material_table: Some(toml_path),
        ..Default::default()
    };
    let service = CalculationService::from_config(&config).unwrap();
    assert_eq!(
        service.table().get(Material::Aluminum).unwrap().mean_recycled_price(),
        3000.0
    );

    let result = service.calculate(&CalculationRequest::new(PanelType::Silicon, 1)).result;
    // 307.473 + 0.08 × 1500
    assert!((result.total_recycled_value_usd - 427.473).abs() < 1e-9);
}

#[test]
fn test_invalid_toml_table_is_rejected() {
    let dir = tempdir().unwrap();
    let toml_path = dir.path().join("materials.toml");
    write(&toml_path, &MATERIALS_TOML.replace("P3 = 12", ""));

    let config = Config {
        material_table: Some(toml_path),
        ..Default::default()
    };
    let err = CalculationService::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::MaterialTable(_)));
}

#[test]
fn test_config_file_drives_service() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    write(&config_path, r#"{"junction_box_value_usd": 7.5}"#);

    let config = Config::load_from(&config_path).unwrap();
    let service = CalculationService::from_config(&config).unwrap();

    let without = service.calculate(&CalculationRequest::new(PanelType::ThinFilm, 4));
    let with = service.calculate(&CalculationRequest::new(PanelType::ThinFilm, 4).with_junction_box(true));
    let diff = with.result.total_recycled_value_usd - without.result.total_recycled_value_usd;
    assert!((diff - 30.0).abs() < 1e-9);
}

#[test]
fn test_negative_junction_box_value_in_config_file_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    write(&config_path, r#"{"junction_box_value_usd": -500.0}"#);

    let config = Config::load_from(&config_path).unwrap();
    let err = CalculationService::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("-500"));
}

#[test]
fn test_rooftop_layout_estimate() {
    let service = CalculationService::default();

    let missing = service.rooftop(RooftopLayout::default(), Some((PanelType::Silicon, false)));
    assert!(matches!(missing, Err(Error::InvalidLayout(_))));

    let layout = RooftopLayout {
        rows: Some(4),
        panels_per_row: Some(6),
        total_panels: Some(24),
        ..Default::default()
    };
    let (saved, breakdown) = service
        .rooftop(layout, Some((PanelType::ThinFilm, true)))
        .unwrap();
    assert!(saved.summary().contains("Total Panels: 24"));

    let result = breakdown.unwrap().result;
    // 24 × 1.8574
    assert!((result.total_carbon_footprint_kg - 44.5776).abs() < 1e-9);
    // 24 × 299.273 + 24 × 3
    assert!((result.total_recycled_value_usd - 7254.552).abs() < 1e-6);
}

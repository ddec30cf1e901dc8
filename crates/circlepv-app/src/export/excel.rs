//! Excel export functionality

use circlepv_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::app::BatchReport;

fn xlsx(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export batch results to Excel file
pub fn export_batch_to_excel(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, report)?;

    workbook.save(output_path).map_err(xlsx)?;
    tracing::info!(path = %output_path.display(), rows = report.entries.len(), "exported batch report");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &BatchReport) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("0.00");

    sheet
        .write_string_with_format(0, 0, "Circle PV Recycling Estimate", &header_format)
        .map_err(xlsx)?;

    sheet.write_string(2, 0, "Generated:").map_err(xlsx)?;
    sheet
        .write_string(2, 1, report.generated_at.to_rfc3339())
        .map_err(xlsx)?;

    sheet.write_string(3, 0, "Sites:").map_err(xlsx)?;
    sheet
        .write_number(3, 1, report.entries.len() as f64)
        .map_err(xlsx)?;

    sheet.write_string(4, 0, "Total panels:").map_err(xlsx)?;
    sheet
        .write_number(4, 1, report.total_panels as f64)
        .map_err(xlsx)?;

    sheet
        .write_string(5, 0, "Carbon footprint (kg CO2e):")
        .map_err(xlsx)?;
    sheet
        .write_number_with_format(5, 1, report.totals.total_carbon_footprint_kg, &money)
        .map_err(xlsx)?;

    sheet
        .write_string(6, 0, "Recycled value (USD):")
        .map_err(xlsx)?;
    sheet
        .write_number_with_format(6, 1, report.totals.total_recycled_value_usd, &money)
        .map_err(xlsx)?;

    sheet.set_column_width(0, 30).map_err(xlsx)?;
    sheet.set_column_width(1, 28).map_err(xlsx)?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, report: &BatchReport) -> Result<()> {
    sheet.set_name("Details").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    let money = Format::new().set_num_format("0.00");

    let headers = [
        "Label",
        "Panel Type",
        "Panels",
        "Junction Box",
        "Carbon (kg CO2e)",
        "Recycled Value (USD)",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx)?;
    }

    for (row_idx, entry) in report.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let request = &entry.breakdown.request;
        let result = &entry.breakdown.result;

        sheet.write_string(row, 0, &entry.label).map_err(xlsx)?;
        sheet
            .write_string(row, 1, request.panel_type.label())
            .map_err(xlsx)?;
        sheet
            .write_number(row, 2, f64::from(request.panel_count))
            .map_err(xlsx)?;
        sheet
            .write_string(row, 3, if request.include_junction_box { "Yes" } else { "No" })
            .map_err(xlsx)?;
        sheet
            .write_number_with_format(row, 4, result.total_carbon_footprint_kg, &money)
            .map_err(xlsx)?;
        sheet
            .write_number_with_format(row, 5, result.total_recycled_value_usd, &money)
            .map_err(xlsx)?;
    }

    sheet.set_column_width(0, 24).map_err(xlsx)?;
    sheet.set_column_width(1, 14).map_err(xlsx)?;
    sheet.set_column_width(4, 18).map_err(xlsx)?;
    sheet.set_column_width(5, 22).map_err(xlsx)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CalculationService;
    use circlepv_infra::BatchRequest;
    use circlepv_types::{CalculationRequest, PanelType};

    #[test]
    fn test_export_writes_workbook() {
        let requests = vec![
            BatchRequest {
                label: "Warehouse".to_string(),
                request: CalculationRequest::new(PanelType::Silicon, 40).with_junction_box(true),
            },
            BatchRequest {
                label: "Carport".to_string(),
                request: CalculationRequest::new(PanelType::ThinFilm, 8),
            },
        ];
        let report = CalculationService::default().run_batch(&requests, |_, _| {});

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimate.xlsx");
        export_batch_to_excel(&report, &path).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let report = CalculationService::default().run_batch(&[], |_, _| {});
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("estimate.xlsx");
        assert!(matches!(export_batch_to_excel(&report, &path), Err(Error::Excel(_))));
    }
}

//! CSV loader for batch calculation requests
//!
//! Header: `label,panel_type,panel_count,junction_box`

use std::io::Read;
use std::path::Path;

use circlepv_types::{CalculationRequest, Error, PanelType, Result};
use serde::{Deserialize, Serialize};

/// A labelled request read from a batch file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    pub label: String,
    pub request: CalculationRequest,
}

#[derive(Debug, Deserialize)]
struct RequestRow {
    label: String,
    panel_type: String,
    panel_count: u32,
    #[serde(default)]
    junction_box: Option<String>,
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value.map(|s| s.trim().to_lowercase()).as_deref() {
        None | Some("") => Some(false),
        Some("true" | "yes" | "y" | "1") => Some(true),
        Some("false" | "no" | "n" | "0") => Some(false),
        _ => None,
    }
}

/// Parse requests from any CSV reader
pub fn parse_requests<R: Read>(reader: R) -> Result<Vec<BatchRequest>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::Csv(format!("header: {}", e)))?
        .clone();

    let mut requests = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| match e.position() {
            Some(pos) => Error::Csv(format!("line {}: {}", pos.line(), e)),
            None => Error::Csv(e.to_string()),
        })?;
        // Physical line, so blank lines and multi-line quoted fields count
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: RequestRow = record
            .deserialize(Some(&headers))
            .map_err(|e| Error::Csv(format!("line {}: {}", line, e)))?;

        let panel_type = PanelType::parse(&row.panel_type).ok_or_else(|| {
            Error::Csv(format!(
                "line {}: unknown panel type '{}'",
                line, row.panel_type
            ))
        })?;
        let include_junction_box = parse_flag(row.junction_box.as_deref()).ok_or_else(|| {
            Error::Csv(format!(
                "line {}: junction_box must be true/false, got '{}'",
                line,
                row.junction_box.as_deref().unwrap_or_default()
            ))
        })?;

        requests.push(BatchRequest {
            label: row.label,
            request: CalculationRequest::new(panel_type, row.panel_count)
                .with_junction_box(include_junction_box),
        });
    }

    Ok(requests)
}

/// Load requests from a CSV file
pub fn load_requests_from_csv(path: &Path) -> Result<Vec<BatchRequest>> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::Csv(format!("Failed to open {}: {}", path.display(), e)))?;
    let requests = parse_requests(file)?;
    tracing::debug!(path = %path.display(), count = requests.len(), "loaded batch requests");
    Ok(requests)
}

//! Infrastructure layer - file loaders

pub mod material_table;
pub mod request_csv;

pub use material_table::{load_material_table, parse_material_table};
pub use request_csv::{load_requests_from_csv, parse_requests, BatchRequest};

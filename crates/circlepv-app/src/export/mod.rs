//! Report export

pub mod excel;

pub use excel::export_batch_to_excel;

//! Domain model types

pub mod dashboard;
pub mod material;
pub mod rooftop;

pub use dashboard::{EsgDashboard, MetricCard, ScoreBar, SeriesPoint, ShareSlice};
pub use material::{Material, MaterialProfile, MaterialTable};
pub use rooftop::{RoofBounds, RooftopLayout, SavedRooftopLayout};

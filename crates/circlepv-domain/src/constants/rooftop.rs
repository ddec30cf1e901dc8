//! Rooftop tool defaults

/// Initial map centre latitude
pub const DEFAULT_LATITUDE: f64 = 22.3379864;

/// Initial map centre longitude
pub const DEFAULT_LONGITUDE: f64 = 114.2632867;

/// Half-width of a roof marker in degrees (~5 m)
pub const ROOF_MARKER_OFFSET_DEG: f64 = 0.00005;

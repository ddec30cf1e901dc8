//! Canned ESG dashboard data

/// (title, subtitle)
pub const METRIC_CARDS: [(&str, &str); 3] = [
    (
        "Installed Capacity",
        "Correlates waste volume to scale of deployment",
    ),
    ("Panel Lifespan Estimate", "Projection of end-of-life timing"),
    ("Hazardous/Toxic Content", "Harmful hazardous materials"),
];

/// Waste volume line series (x, y)
pub const WASTE_VOLUME: [(u32, f64); 5] = [(1, 10.0), (2, 25.0), (3, 15.0), (4, 30.0), (5, 20.0)];

/// Repair/reuse vs disposal split (name, value, colour)
pub const DISPOSAL_SPLIT: [(&str, f64, &str); 2] = [
    ("Repair/Reuse", 70.0, "#4CAF50"),
    ("Disposal", 30.0, "#F44336"),
];

/// ESG score over time (label, score)
pub const ESG_SCORES: [(&str, f64); 5] = [
    ("T1", 60.0),
    ("T2", 75.0),
    ("T3", 85.0),
    ("T4", 90.0),
    ("T5", 95.0),
];

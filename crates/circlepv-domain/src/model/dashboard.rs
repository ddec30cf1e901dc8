//! ESG dashboard data types

use serde::{Deserialize, Serialize};

use crate::constants::dashboard::{DISPOSAL_SPLIT, ESG_SCORES, METRIC_CARDS, WASTE_VOLUME};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: u32,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBar {
    pub label: String,
    pub score: f64,
}

/// Everything the ESG dashboard page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgDashboard {
    pub metric_cards: Vec<MetricCard>,
    pub waste_volume: Vec<SeriesPoint>,
    pub disposal_split: Vec<ShareSlice>,
    pub esg_scores: Vec<ScoreBar>,
}

impl EsgDashboard {
    /// The canned sample data
    pub fn sample() -> Self {
        Self {
            metric_cards: METRIC_CARDS
                .iter()
                .map(|(title, subtitle)| MetricCard {
                    title: title.to_string(),
                    subtitle: subtitle.to_string(),
                })
                .collect(),
            waste_volume: WASTE_VOLUME
                .iter()
                .map(|&(x, y)| SeriesPoint { x, y })
                .collect(),
            disposal_split: DISPOSAL_SPLIT
                .iter()
                .map(|(name, value, color)| ShareSlice {
                    name: name.to_string(),
                    value: *value,
                    color: color.to_string(),
                })
                .collect(),
            esg_scores: ESG_SCORES
                .iter()
                .map(|(label, score)| ScoreBar {
                    label: label.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    /// Percentage of the split each slice represents, in slice order
    pub fn split_percentages(&self) -> Vec<f64> {
        let total: f64 = self.disposal_split.iter().map(|s| s.value).sum();
        self.disposal_split
            .iter()
            .map(|s| if total > 0.0 { s.value / total * 100.0 } else { 0.0 })
            .collect()
    }

    /// Peak point of the waste volume series
    pub fn peak_waste_volume(&self) -> Option<SeriesPoint> {
        self.waste_volume
            .iter()
            .copied()
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}

// src/models/chart_point.rs

/// One labelled value on a categorical chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

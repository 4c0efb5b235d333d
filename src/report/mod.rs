pub mod json;
pub mod text;

use crate::model::metrics::{Metric, metric_order};
use crate::pipeline::EvaluationOutcome;

#[derive(Debug, Clone)]
pub struct MetricRow {
    pub metric: Metric,
    pub value: f64,
    pub weight: u32,
    pub contribution: f64,
}

pub fn metric_rows(outcome: &EvaluationOutcome) -> Vec<MetricRow> {
    metric_order()
        .iter()
        .map(|&metric| MetricRow {
            metric,
            value: outcome.scores.indices.get(metric),
            weight: outcome.evaluation.weights.get(metric),
            contribution: outcome.scores.contribution(metric),
        })
        .collect()
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

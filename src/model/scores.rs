use serde::Serialize;

use crate::model::metrics::Metric;

/// The six component percentages. Not clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SubIndices {
    pub bias_index: f64,
    pub transparency_score: f64,
    pub accountability_index: f64,
    pub privacy_compliance: f64,
    pub fairness_index: f64,
    pub stakeholder_sentiment: f64,
}

impl SubIndices {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Bias => self.bias_index,
            Metric::Transparency => self.transparency_score,
            Metric::Accountability => self.accountability_index,
            Metric::Privacy => self.privacy_compliance,
            Metric::Fairness => self.fairness_index,
            Metric::Sentiment => self.stakeholder_sentiment,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub indices: SubIndices,
    pub eps: f64,
    /// Divisor actually used for `eps`, after the zero guard.
    pub weight_sum: u32,
    /// Per-metric share of `eps`, in `metric_order()`.
    pub contributions: [f64; 6],
}

impl ScoreResult {
    pub fn contribution(&self, metric: Metric) -> f64 {
        self.contributions[metric.slot()]
    }
}

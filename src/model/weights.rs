use serde::Serialize;

use crate::model::metrics::Metric;

pub const WEIGHT_MIN: u32 = 0;
pub const WEIGHT_MAX: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightSet {
    pub bias: u32,
    pub transparency: u32,
    pub accountability: u32,
    pub privacy: u32,
    pub fairness: u32,
    pub sentiment: u32,
}

impl WeightSet {
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Bias => self.bias,
            Metric::Transparency => self.transparency,
            Metric::Accountability => self.accountability,
            Metric::Privacy => self.privacy,
            Metric::Fairness => self.fairness,
            Metric::Sentiment => self.sentiment,
        }
    }

    /// Raw sum, before the zero guard.
    pub fn sum(&self) -> u32 {
        self.bias
            + self.transparency
            + self.accountability
            + self.privacy
            + self.fairness
            + self.sentiment
    }

    pub fn is_all_zero(&self) -> bool {
        self.sum() == 0
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            bias: 15,
            transparency: 10,
            accountability: 10,
            privacy: 10,
            fairness: 15,
            sentiment: 10,
        }
    }
}

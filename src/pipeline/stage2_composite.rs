use crate::model::metrics::metric_order;
use crate::model::scores::{ScoreResult, SubIndices};
use crate::model::weights::WeightSet;

pub fn guard_weight_sum(sum: u32) -> u32 {
    if sum == 0 { 1 } else { sum }
}

pub fn run_stage2(indices: &SubIndices, weights: &WeightSet) -> ScoreResult {
    if weights.is_all_zero() {
        tracing::warn!("all weights are 0; EPS collapses to 0");
    }
    let weight_sum = guard_weight_sum(weights.sum());
    let divisor = f64::from(weight_sum);

    let mut weighted_total = 0.0;
    let mut contributions = [0.0f64; 6];
    for &metric in metric_order() {
        let weighted = indices.get(metric) * f64::from(weights.get(metric));
        weighted_total += weighted;
        contributions[metric.slot()] = weighted / divisor;
    }
    let eps = weighted_total / divisor;
    tracing::debug!(eps, weight_sum, "stage2 composite");

    ScoreResult {
        indices: *indices,
        eps,
        weight_sum,
        contributions,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_composite.rs"]
mod tests;

use crate::model::recommendations::{Action, Recommendations, Tier, action_order};
use crate::model::scores::ScoreResult;
use crate::model::thresholds::RecommendationThresholds;

/// Half-open tiers: a boundary value belongs to the higher tier.
pub fn classify_tier(eps: f64, thresholds: &RecommendationThresholds) -> Tier {
    if eps < thresholds.tier_moderate_min {
        Tier::Critical
    } else if eps < thresholds.tier_strong_min {
        Tier::Moderate
    } else {
        Tier::Strong
    }
}

fn triggers(action: Action, scores: &ScoreResult, thresholds: &RecommendationThresholds) -> bool {
    let idx = &scores.indices;
    match action {
        Action::InvestigateBias => idx.bias_index > thresholds.bias_index_max,
        Action::ImproveDiversityPipeline => idx.fairness_index < thresholds.fairness_index_min,
        Action::AuditDataHandling => idx.privacy_compliance < thresholds.privacy_compliance_min,
        Action::IncreaseHumanOversight => {
            idx.accountability_index < thresholds.accountability_index_min
        }
    }
}

pub fn run_stage3(scores: &ScoreResult, thresholds: &RecommendationThresholds) -> Recommendations {
    let tier = classify_tier(scores.eps, thresholds);
    let actions = action_order()
        .iter()
        .copied()
        .filter(|&a| triggers(a, scores, thresholds))
        .collect();
    Recommendations { tier, actions }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_recommend.rs"]
mod tests;

pub mod stage1_indices;
pub mod stage2_composite;
pub mod stage3_recommend;
pub mod stage4_report;

use crate::input::Evaluation;
use crate::model::inputs::MetricInputs;
use crate::model::recommendations::Recommendations;
use crate::model::scores::ScoreResult;
use crate::model::thresholds::RecommendationThresholds;
use crate::model::weights::WeightSet;

use stage1_indices::run_stage1;
use stage2_composite::run_stage2;
use stage3_recommend::run_stage3;

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOutcome {
    pub evaluation: Evaluation,
    pub scores: ScoreResult,
    pub recommendations: Recommendations,
}

/// Sub-indices and composite EPS. Pure and total over its inputs.
pub fn compute_scores(inputs: &MetricInputs, weights: &WeightSet) -> ScoreResult {
    let indices = run_stage1(inputs);
    run_stage2(&indices, weights)
}

pub fn evaluate(
    evaluation: &Evaluation,
    thresholds: &RecommendationThresholds,
) -> EvaluationOutcome {
    let scores = compute_scores(&evaluation.inputs, &evaluation.weights);
    let recommendations = run_stage3(&scores, thresholds);
    tracing::info!(
        eps = scores.eps,
        tier = recommendations.tier.tag(),
        "evaluation complete"
    );
    EvaluationOutcome {
        evaluation: *evaluation,
        scores,
        recommendations,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
pub(crate) mod tests;

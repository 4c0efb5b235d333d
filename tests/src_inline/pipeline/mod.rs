use super::*;
use crate::model::recommendations::{Action, Tier};

pub(crate) fn scenario() -> Evaluation {
    Evaluation {
        inputs: MetricInputs {
            total_decisions: 100,
            bias_complaints: 5,
            explainable_ai: 80,
            human_reviewed: 60,
            data_transactions: 200,
            policy_violations: 10,
            diverse_hires: 30,
            total_hires: 100,
            positive_feedback: 70,
            total_feedback: 100,
        },
        weights: WeightSet::default(),
    }
}

#[test]
fn test_scenario_end_to_end() {
    let outcome = evaluate(&scenario(), &RecommendationThresholds::default_v1());
    assert!((outcome.scores.eps - 51.071_428_571_428_57).abs() < 1e-9);
    assert_eq!(outcome.recommendations.tier, Tier::Moderate);
    assert_eq!(
        outcome.recommendations.actions,
        vec![Action::ImproveDiversityPipeline]
    );
    assert_eq!(
        outcome.recommendations.tags(),
        vec!["moderate", "improve_diversity_pipeline"]
    );
}

#[test]
fn test_compute_scores_is_deterministic() {
    let e = scenario();
    let a = compute_scores(&e.inputs, &e.weights);
    let b = compute_scores(&e.inputs, &e.weights);
    assert_eq!(a, b);
}

#[test]
fn test_defaults_score_as_critical() {
    let outcome = evaluate(&Evaluation::default(), &RecommendationThresholds::default_v1());
    // Only privacy is non-zero: 100 * 10 / 70.
    assert!((outcome.scores.eps - 1000.0 / 70.0).abs() < 1e-9);
    assert_eq!(
        outcome.recommendations.tags(),
        vec!["critical", "improve_diversity_pipeline", "increase_human_oversight"]
    );
}

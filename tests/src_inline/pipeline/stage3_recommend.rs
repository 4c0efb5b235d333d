use super::*;
use crate::model::scores::SubIndices;

fn result(eps: f64, indices: SubIndices) -> ScoreResult {
    ScoreResult {
        indices,
        eps,
        weight_sum: 70,
        contributions: [0.0; 6],
    }
}

fn quiet_indices() -> SubIndices {
    SubIndices {
        bias_index: 0.0,
        transparency_score: 100.0,
        accountability_index: 100.0,
        privacy_compliance: 100.0,
        fairness_index: 100.0,
        stakeholder_sentiment: 100.0,
    }
}

#[test]
fn test_tier_boundaries() {
    let t = RecommendationThresholds::default_v1();
    assert_eq!(classify_tier(39.999, &t), Tier::Critical);
    assert_eq!(classify_tier(40.0, &t), Tier::Moderate);
    assert_eq!(classify_tier(69.999, &t), Tier::Moderate);
    assert_eq!(classify_tier(70.0, &t), Tier::Strong);
    assert_eq!(classify_tier(-50.0, &t), Tier::Critical);
    assert_eq!(classify_tier(250.0, &t), Tier::Strong);
}

#[test]
fn test_no_actions_when_all_healthy() {
    let t = RecommendationThresholds::default_v1();
    let recs = run_stage3(&result(85.0, quiet_indices()), &t);
    assert_eq!(recs.tier, Tier::Strong);
    assert!(recs.actions.is_empty());
    assert_eq!(recs.tags(), vec!["strong"]);
}

#[test]
fn test_action_thresholds_are_strict() {
    let t = RecommendationThresholds::default_v1();
    let mut idx = quiet_indices();
    idx.bias_index = 10.0;
    idx.fairness_index = 50.0;
    idx.privacy_compliance = 90.0;
    idx.accountability_index = 50.0;
    let recs = run_stage3(&result(60.0, idx), &t);
    assert!(recs.actions.is_empty());

    idx.bias_index = 10.001;
    idx.fairness_index = 49.999;
    idx.privacy_compliance = 89.999;
    idx.accountability_index = 49.999;
    let recs = run_stage3(&result(60.0, idx), &t);
    assert_eq!(
        recs.actions,
        vec![
            Action::InvestigateBias,
            Action::ImproveDiversityPipeline,
            Action::AuditDataHandling,
            Action::IncreaseHumanOversight,
        ]
    );
}

#[test]
fn test_tags_order_tier_first() {
    let t = RecommendationThresholds::default_v1();
    let mut idx = quiet_indices();
    idx.accountability_index = 10.0;
    idx.bias_index = 40.0;
    let recs = run_stage3(&result(12.0, idx), &t);
    assert_eq!(
        recs.tags(),
        vec!["critical", "investigate_bias", "increase_human_oversight"]
    );
    assert!(recs.actions.contains(&Action::InvestigateBias));
    assert!(!recs.actions.contains(&Action::AuditDataHandling));
}

#[test]
fn test_negative_privacy_triggers_audit() {
    let t = RecommendationThresholds::default_v1();
    let mut idx = quiet_indices();
    idx.privacy_compliance = -50.0;
    let recs = run_stage3(&result(75.0, idx), &t);
    assert_eq!(recs.actions, vec![Action::AuditDataHandling]);
}

use super::*;

fn scenario() -> MetricInputs {
    MetricInputs {
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
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_scenario_sub_indices() {
    let idx = run_stage1(&scenario());
    assert!(close(idx.bias_index, 5.0));
    assert!(close(idx.transparency_score, 80.0));
    assert!(close(idx.accountability_index, 60.0));
    assert!(close(idx.privacy_compliance, 95.0));
    assert!(close(idx.fairness_index, 30.0));
    assert!(close(idx.stakeholder_sentiment, 70.0));
}

#[test]
fn test_zero_total_decisions_matches_one() {
    let mut zero = MetricInputs::default();
    zero.total_decisions = 0;
    zero.bias_complaints = 1;
    zero.explainable_ai = 1;
    zero.human_reviewed = 0;
    let mut one = zero;
    one.total_decisions = 1;

    let a = run_stage1(&zero);
    let b = run_stage1(&one);
    assert_eq!(a.bias_index, b.bias_index);
    assert_eq!(a.transparency_score, b.transparency_score);
    assert_eq!(a.accountability_index, b.accountability_index);
    assert_eq!(a.bias_index, 100.0);
}

#[test]
fn test_all_zero_totals_do_not_fail() {
    let inputs = MetricInputs {
        total_decisions: 0,
        bias_complaints: 0,
        explainable_ai: 0,
        human_reviewed: 0,
        data_transactions: 0,
        policy_violations: 0,
        diverse_hires: 0,
        total_hires: 0,
        positive_feedback: 0,
        total_feedback: 0,
    };
    let idx = run_stage1(&inputs);
    assert_eq!(idx.bias_index, 0.0);
    assert_eq!(idx.privacy_compliance, 100.0);
    assert_eq!(idx.fairness_index, 0.0);
    assert_eq!(idx.stakeholder_sentiment, 0.0);
}

#[test]
fn test_negative_privacy_compliance_is_not_clamped() {
    let inputs = MetricInputs {
        data_transactions: 10,
        policy_violations: 15,
        ..MetricInputs::default()
    };
    let idx = run_stage1(&inputs);
    assert!(close(idx.privacy_compliance, -50.0));
}

#[test]
fn test_sub_index_above_hundred_is_not_clamped() {
    let inputs = MetricInputs {
        total_decisions: 10,
        bias_complaints: 25,
        ..MetricInputs::default()
    };
    let idx = run_stage1(&inputs);
    assert!(close(idx.bias_index, 250.0));
}

#[test]
fn test_guard_denominator() {
    assert_eq!(guard_denominator(0), 1);
    assert_eq!(guard_denominator(1), 1);
    assert_eq!(guard_denominator(42), 42);
}

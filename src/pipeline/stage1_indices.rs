use crate::model::inputs::MetricInputs;
use crate::model::scores::SubIndices;

/// Zero totals divide as 1 so the calculator never fails.
pub fn guard_denominator(total: u64) -> u64 {
    if total == 0 { 1 } else { total }
}

pub fn percentage(numerator: f64, denominator: u64) -> f64 {
    (numerator / denominator as f64) * 100.0
}

pub fn run_stage1(inputs: &MetricInputs) -> SubIndices {
    warn_suspicious(inputs);

    let total_decisions = guard_denominator(inputs.total_decisions);
    let data_transactions = guard_denominator(inputs.data_transactions);
    let total_hires = guard_denominator(inputs.total_hires);
    let total_feedback = guard_denominator(inputs.total_feedback);

    // Signed: violations may exceed transactions.
    let compliant = data_transactions as f64 - inputs.policy_violations as f64;

    let indices = SubIndices {
        bias_index: percentage(inputs.bias_complaints as f64, total_decisions),
        transparency_score: percentage(inputs.explainable_ai as f64, total_decisions),
        accountability_index: percentage(inputs.human_reviewed as f64, total_decisions),
        privacy_compliance: percentage(compliant, data_transactions),
        fairness_index: percentage(inputs.diverse_hires as f64, total_hires),
        stakeholder_sentiment: percentage(inputs.positive_feedback as f64, total_feedback),
    };
    tracing::debug!(?indices, "stage1 sub-indices");
    indices
}

fn warn_suspicious(inputs: &MetricInputs) {
    let totals = [
        ("total_decisions", inputs.total_decisions),
        ("data_transactions", inputs.data_transactions),
        ("total_hires", inputs.total_hires),
        ("total_feedback", inputs.total_feedback),
    ];
    for (name, value) in totals {
        if value == 0 {
            tracing::warn!("{name} is 0; dividing by 1 instead");
        }
    }

    let parts = [
        ("bias_complaints", inputs.bias_complaints, "total_decisions", inputs.total_decisions),
        ("explainable_ai", inputs.explainable_ai, "total_decisions", inputs.total_decisions),
        ("human_reviewed", inputs.human_reviewed, "total_decisions", inputs.total_decisions),
        (
            "policy_violations",
            inputs.policy_violations,
            "data_transactions",
            inputs.data_transactions,
        ),
        ("diverse_hires", inputs.diverse_hires, "total_hires", inputs.total_hires),
        (
            "positive_feedback",
            inputs.positive_feedback,
            "total_feedback",
            inputs.total_feedback,
        ),
    ];
    for (part, p, total, t) in parts {
        if p > t.max(1) {
            tracing::warn!("{part} ({p}) exceeds {total} ({t}); sub-index will leave [0, 100]");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_indices.rs"]
mod tests;

use serde::Serialize;

/// One snapshot of the raw counters behind an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricInputs {
    pub total_decisions: u64,
    pub bias_complaints: u64,
    pub explainable_ai: u64,
    pub human_reviewed: u64,
    pub data_transactions: u64,
    pub policy_violations: u64,
    pub diverse_hires: u64,
    pub total_hires: u64,
    pub positive_feedback: u64,
    pub total_feedback: u64,
}

impl Default for MetricInputs {
    fn default() -> Self {
        Self {
            total_decisions: 1,
            bias_complaints: 0,
            explainable_ai: 0,
            human_reviewed: 0,
            data_transactions: 1,
            policy_violations: 0,
            diverse_hires: 0,
            total_hires: 1,
            positive_feedback: 0,
            total_feedback: 1,
        }
    }
}

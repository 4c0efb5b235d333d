use crate::error::EpsError;
use crate::input::{RawInputs, RawWeights};
use crate::model::inputs::MetricInputs;
use crate::model::weights::{WEIGHT_MAX, WEIGHT_MIN, WeightSet};

fn count(field: &'static str, raw: Option<i64>, default: u64) -> Result<u64, EpsError> {
    match raw {
        None => Ok(default),
        Some(value) => u64::try_from(value).map_err(|_| EpsError::NegativeCount { field, value }),
    }
}

fn weight(field: &'static str, raw: Option<i64>, default: u32) -> Result<u32, EpsError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match u32::try_from(value) {
        Ok(w) if (WEIGHT_MIN..=WEIGHT_MAX).contains(&w) => Ok(w),
        _ => Err(EpsError::WeightOutOfRange {
            field,
            value,
            min: WEIGHT_MIN,
            max: WEIGHT_MAX,
        }),
    }
}

pub fn validate_inputs(raw: &RawInputs) -> Result<MetricInputs, EpsError> {
    let d = MetricInputs::default();
    Ok(MetricInputs {
        total_decisions: count("total_decisions", raw.total_decisions, d.total_decisions)?,
        bias_complaints: count("bias_complaints", raw.bias_complaints, d.bias_complaints)?,
        explainable_ai: count("explainable_ai", raw.explainable_ai, d.explainable_ai)?,
        human_reviewed: count("human_reviewed", raw.human_reviewed, d.human_reviewed)?,
        data_transactions: count(
            "data_transactions",
            raw.data_transactions,
            d.data_transactions,
        )?,
        policy_violations: count(
            "policy_violations",
            raw.policy_violations,
            d.policy_violations,
        )?,
        diverse_hires: count("diverse_hires", raw.diverse_hires, d.diverse_hires)?,
        total_hires: count("total_hires", raw.total_hires, d.total_hires)?,
        positive_feedback: count(
            "positive_feedback",
            raw.positive_feedback,
            d.positive_feedback,
        )?,
        total_feedback: count("total_feedback", raw.total_feedback, d.total_feedback)?,
    })
}

pub fn validate_weights(raw: &RawWeights) -> Result<WeightSet, EpsError> {
    let d = WeightSet::default();
    Ok(WeightSet {
        bias: weight("bias", raw.bias, d.bias)?,
        transparency: weight("transparency", raw.transparency, d.transparency)?,
        accountability: weight("accountability", raw.accountability, d.accountability)?,
        privacy: weight("privacy", raw.privacy, d.privacy)?,
        fairness: weight("fairness", raw.fairness, d.fairness)?,
        sentiment: weight("sentiment", raw.sentiment, d.sentiment)?,
    })
}

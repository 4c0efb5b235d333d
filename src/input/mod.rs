use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EpsError;
use crate::model::inputs::MetricInputs;
use crate::model::weights::WeightSet;

pub mod validate;

pub use validate::{validate_inputs, validate_weights};

// Counts as they arrive from a file or the command line, before the
// non-negativity check. `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::Args)]
#[serde(deny_unknown_fields)]
pub struct RawInputs {
    /// Total AI decisions
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub total_decisions: Option<i64>,
    /// Number of bias complaints
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub bias_complaints: Option<i64>,
    /// Explainable AI decisions
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub explainable_ai: Option<i64>,
    /// Human-reviewed decisions
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub human_reviewed: Option<i64>,
    /// Total data transactions
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub data_transactions: Option<i64>,
    /// Policy violations detected
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub policy_violations: Option<i64>,
    /// Number of diverse hires
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub diverse_hires: Option<i64>,
    /// Total hires
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub total_hires: Option<i64>,
    /// Positive feedback count
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub positive_feedback: Option<i64>,
    /// Total feedback count
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub total_feedback: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::Args)]
#[serde(deny_unknown_fields)]
pub struct RawWeights {
    /// Bias index weight [0-30]
    #[arg(long = "bias-weight", value_name = "W", allow_negative_numbers = true)]
    pub bias: Option<i64>,
    /// Transparency weight [0-30]
    #[arg(long = "transparency-weight", value_name = "W", allow_negative_numbers = true)]
    pub transparency: Option<i64>,
    /// Accountability weight [0-30]
    #[arg(long = "accountability-weight", value_name = "W", allow_negative_numbers = true)]
    pub accountability: Option<i64>,
    /// Privacy weight [0-30]
    #[arg(long = "privacy-weight", value_name = "W", allow_negative_numbers = true)]
    pub privacy: Option<i64>,
    /// Fairness weight [0-30]
    #[arg(long = "fairness-weight", value_name = "W", allow_negative_numbers = true)]
    pub fairness: Option<i64>,
    /// Sentiment weight [0-30]
    #[arg(long = "sentiment-weight", value_name = "W", allow_negative_numbers = true)]
    pub sentiment: Option<i64>,
}

/// On-disk evaluation file. Both tables are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationFile {
    pub inputs: RawInputs,
    pub weights: RawWeights,
}

/// A validated inputs + weights snapshot, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub inputs: MetricInputs,
    pub weights: WeightSet,
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub inputs: RawInputs,
    pub weights: RawWeights,
}

fn overlay(dst: &mut Option<i64>, src: Option<i64>) {
    if src.is_some() {
        *dst = src;
    }
}

impl RawInputs {
    pub fn overlay(&mut self, other: &RawInputs) {
        overlay(&mut self.total_decisions, other.total_decisions);
        overlay(&mut self.bias_complaints, other.bias_complaints);
        overlay(&mut self.explainable_ai, other.explainable_ai);
        overlay(&mut self.human_reviewed, other.human_reviewed);
        overlay(&mut self.data_transactions, other.data_transactions);
        overlay(&mut self.policy_violations, other.policy_violations);
        overlay(&mut self.diverse_hires, other.diverse_hires);
        overlay(&mut self.total_hires, other.total_hires);
        overlay(&mut self.positive_feedback, other.positive_feedback);
        overlay(&mut self.total_feedback, other.total_feedback);
    }
}

impl RawWeights {
    pub fn overlay(&mut self, other: &RawWeights) {
        overlay(&mut self.bias, other.bias);
        overlay(&mut self.transparency, other.transparency);
        overlay(&mut self.accountability, other.accountability);
        overlay(&mut self.privacy, other.privacy);
        overlay(&mut self.fairness, other.fairness);
        overlay(&mut self.sentiment, other.sentiment);
    }
}

impl EvaluationFile {
    /// Every key filled with its default value.
    pub fn defaults() -> Self {
        let i = MetricInputs::default();
        let w = WeightSet::default();
        let count = |v: u64| Some(v as i64);
        let weight = |v: u32| Some(i64::from(v));
        Self {
            inputs: RawInputs {
                total_decisions: count(i.total_decisions),
                bias_complaints: count(i.bias_complaints),
                explainable_ai: count(i.explainable_ai),
                human_reviewed: count(i.human_reviewed),
                data_transactions: count(i.data_transactions),
                policy_violations: count(i.policy_violations),
                diverse_hires: count(i.diverse_hires),
                total_hires: count(i.total_hires),
                positive_feedback: count(i.positive_feedback),
                total_feedback: count(i.total_feedback),
            },
            weights: RawWeights {
                bias: weight(w.bias),
                transparency: weight(w.transparency),
                accountability: weight(w.accountability),
                privacy: weight(w.privacy),
                fairness: weight(w.fairness),
                sentiment: weight(w.sentiment),
            },
        }
    }
}

pub fn parse_evaluation_file(text: &str, path: &Path) -> Result<EvaluationFile, EpsError> {
    toml::from_str(text).map_err(|e| EpsError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn load_evaluation_file(path: &Path) -> Result<EvaluationFile, EpsError> {
    let text = std::fs::read_to_string(path).map_err(|e| EpsError::io(path, e))?;
    parse_evaluation_file(&text, path)
}

pub fn render_template() -> Result<String, EpsError> {
    Ok(toml::to_string_pretty(&EvaluationFile::defaults())?)
}

/// Resolves defaults < evaluation file < overrides, then validates.
pub fn resolve_evaluation(
    config: Option<&Path>,
    overrides: &Overrides,
) -> Result<Evaluation, EpsError> {
    let mut raw = match config {
        Some(path) => {
            let file = load_evaluation_file(path)?;
            tracing::info!("loaded evaluation file {}", path.display());
            file
        }
        None => EvaluationFile::default(),
    };
    raw.inputs.overlay(&overrides.inputs);
    raw.weights.overlay(&overrides.weights);

    let evaluation = Evaluation {
        inputs: validate_inputs(&raw.inputs)?,
        weights: validate_weights(&raw.weights)?,
    };
    tracing::debug!(?evaluation, "resolved evaluation");
    Ok(evaluation)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

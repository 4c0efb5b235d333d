use serde::Serialize;

use crate::model::inputs::MetricInputs;
use crate::model::recommendations::{Band, Tier};
use crate::model::scores::SubIndices;
use crate::model::weights::WeightSet;
use crate::pipeline::EvaluationOutcome;

#[derive(Debug, Serialize)]
struct ScoresJson<'a> {
    #[serde(flatten)]
    indices: &'a SubIndices,
    eps: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    tool: &'static str,
    version: &'static str,
    inputs: &'a MetricInputs,
    weights: &'a WeightSet,
    scores: ScoresJson<'a>,
    weight_sum: u32,
    tier: Tier,
    band: Band,
    recommendations: Vec<&'static str>,
}

impl<'a> SummaryJson<'a> {
    pub fn new(outcome: &'a EvaluationOutcome) -> Self {
        let tier = outcome.recommendations.tier;
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            inputs: &outcome.evaluation.inputs,
            weights: &outcome.evaluation.weights,
            scores: ScoresJson {
                indices: &outcome.scores.indices,
                eps: outcome.scores.eps,
            },
            weight_sum: outcome.scores.weight_sum,
            tier,
            band: tier.band(),
            recommendations: outcome.recommendations.tags(),
        }
    }
}

pub fn render_summary_json(outcome: &EvaluationOutcome) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(&SummaryJson::new(outcome))?;
    out.push('\n');
    Ok(out)
}

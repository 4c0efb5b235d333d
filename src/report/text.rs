use crate::pipeline::EvaluationOutcome;
use crate::report::{format_f64_2, metric_rows};

pub fn render_report_text(outcome: &EvaluationOutcome) -> String {
    let scores = &outcome.scores;
    let recs = &outcome.recommendations;
    let band = recs.tier.band();
    let (lo, hi) = band.range();

    let mut out = String::new();

    out.push_str("Ethical Propensity Score Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Overall score\n");
    out.push_str(&format!("Current EPS: {} / 100\n", format_f64_2(scores.eps)));
    out.push_str(&format!(
        "Tier: {} ({} band, {}-{})\n",
        recs.tier.tag(),
        band.name(),
        lo,
        hi
    ));
    out.push_str(&format!("Weight sum: {}\n\n", scores.weight_sum));

    out.push_str("2. Sub-indices\n");
    for row in metric_rows(outcome) {
        out.push_str(&format!(
            "{}: {} (weight {}, contributes {})\n",
            row.metric.label(),
            format_f64_2(row.value),
            row.weight,
            format_f64_2(row.contribution)
        ));
    }
    out.push('\n');

    out.push_str("3. Recommendations\n");
    out.push_str(recs.tier.message());
    out.push('\n');
    for action in &recs.actions {
        out.push_str(&format!("- Action [{}]: {}\n", action.tag(), action.message()));
    }

    out
}

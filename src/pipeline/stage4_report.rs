use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::EpsError;
use crate::pipeline::EvaluationOutcome;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{format_f64_2, metric_rows};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(outcome: &EvaluationOutcome, format: OutputFormat) -> Result<String, EpsError> {
    match format {
        OutputFormat::Text => Ok(render_report_text(outcome)),
        OutputFormat::Json => Ok(render_summary_json(outcome)?),
    }
}

/// Writes `report.txt`, `summary.json` and `metrics.tsv`; returns their paths.
pub fn write_reports(outcome: &EvaluationOutcome, out_dir: &Path) -> Result<Vec<PathBuf>, EpsError> {
    fs::create_dir_all(out_dir).map_err(|e| EpsError::io(out_dir, e))?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(outcome))?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(outcome)?)?;

    let metrics_path = out_dir.join("metrics.tsv");
    write_text(&metrics_path, &render_metrics_tsv(outcome))?;

    let written = vec![report_path, summary_path, metrics_path];
    for path in &written {
        tracing::info!("wrote {}", path.display());
    }
    Ok(written)
}

pub fn render_metrics_tsv(outcome: &EvaluationOutcome) -> String {
    let mut out = String::from("metric\tvalue\tweight\tcontribution\n");
    for row in metric_rows(outcome) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            row.metric.index_name(),
            format_f64_2(row.value),
            row.weight,
            format_f64_2(row.contribution)
        ));
    }
    out.push_str(&format!(
        "eps\t{}\t{}\t{}\n",
        format_f64_2(outcome.scores.eps),
        outcome.scores.weight_sum,
        format_f64_2(outcome.scores.eps)
    ));
    out
}

fn write_text(path: &Path, contents: &str) -> Result<(), EpsError> {
    let file = File::create(path).map_err(|e| EpsError::io(path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(contents.as_bytes())
        .and_then(|()| w.flush())
        .map_err(|e| EpsError::io(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;

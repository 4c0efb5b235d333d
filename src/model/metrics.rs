#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Bias,
    Transparency,
    Accountability,
    Privacy,
    Fairness,
    Sentiment,
}

pub fn metric_order() -> &'static [Metric] {
    &[
        Metric::Bias,
        Metric::Transparency,
        Metric::Accountability,
        Metric::Privacy,
        Metric::Fairness,
        Metric::Sentiment,
    ]
}

impl Metric {
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn index_name(self) -> &'static str {
        match self {
            Metric::Bias => "bias_index",
            Metric::Transparency => "transparency_score",
            Metric::Accountability => "accountability_index",
            Metric::Privacy => "privacy_compliance",
            Metric::Fairness => "fairness_index",
            Metric::Sentiment => "stakeholder_sentiment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Bias => "Bias Index (%)",
            Metric::Transparency => "Transparency (%)",
            Metric::Accountability => "Accountability (%)",
            Metric::Privacy => "Privacy Compliance (%)",
            Metric::Fairness => "Fairness (%)",
            Metric::Sentiment => "Sentiment (%)",
        }
    }
}

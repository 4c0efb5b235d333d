#[derive(Debug, Clone)]
pub struct RecommendationThresholds {
    /// EPS below this is `critical`.
    pub tier_moderate_min: f64,
    /// EPS at or above this is `strong`.
    pub tier_strong_min: f64,
    pub bias_index_max: f64,
    pub fairness_index_min: f64,
    pub privacy_compliance_min: f64,
    pub accountability_index_min: f64,
}

impl RecommendationThresholds {
    pub fn default_v1() -> Self {
        Self {
            tier_moderate_min: 40.0,
            tier_strong_min: 70.0,
            bias_index_max: 10.0,
            fairness_index_min: 50.0,
            privacy_compliance_min: 90.0,
            accountability_index_min: 50.0,
        }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Critical,
    Moderate,
    Strong,
}

/// Gauge colour bucket of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    InvestigateBias,
    ImproveDiversityPipeline,
    AuditDataHandling,
    IncreaseHumanOversight,
}

pub fn action_order() -> &'static [Action] {
    &[
        Action::InvestigateBias,
        Action::ImproveDiversityPipeline,
        Action::AuditDataHandling,
        Action::IncreaseHumanOversight,
    ]
}

impl Tier {
    pub fn tag(self) -> &'static str {
        match self {
            Tier::Critical => "critical",
            Tier::Moderate => "moderate",
            Tier::Strong => "strong",
        }
    }

    pub fn band(self) -> Band {
        match self {
            Tier::Critical => Band::Red,
            Tier::Moderate => Band::Yellow,
            Tier::Strong => Band::Green,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Critical => {
                "Your EPS is critically low. Immediate intervention is required to reduce bias and strengthen compliance."
            }
            Tier::Moderate => {
                "Your EPS is moderate. You may need to refine data collection, expand human oversight, and improve transparency."
            }
            Tier::Strong => {
                "Your EPS is high! Maintain continuous audits and stakeholder engagement to keep ethical standards strong."
            }
        }
    }
}

impl Band {
    pub fn name(self) -> &'static str {
        match self {
            Band::Red => "red",
            Band::Yellow => "yellow",
            Band::Green => "green",
        }
    }

    /// Gauge range covered by the band, on the nominal 0-100 scale.
    pub fn range(self) -> (f64, f64) {
        match self {
            Band::Red => (0.0, 40.0),
            Band::Yellow => (40.0, 70.0),
            Band::Green => (70.0, 100.0),
        }
    }
}

impl Action {
    pub fn tag(self) -> &'static str {
        match self {
            Action::InvestigateBias => "investigate_bias",
            Action::ImproveDiversityPipeline => "improve_diversity_pipeline",
            Action::AuditDataHandling => "audit_data_handling",
            Action::IncreaseHumanOversight => "increase_human_oversight",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Action::InvestigateBias => {
                "Investigate underlying data for potential biases. Consider re-training or re-tuning your AI models."
            }
            Action::ImproveDiversityPipeline => {
                "Check pipeline diversity. Partner with community organizations or implement targeted outreach to underrepresented groups."
            }
            Action::AuditDataHandling => {
                "Audit data handling processes. Ensure alignment with GDPR, CCPA, or other relevant regulations."
            }
            Action::IncreaseHumanOversight => {
                "Increase human oversight in final selection. Consider 'human-in-the-loop' checks on borderline AI decisions."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    pub tier: Tier,
    pub actions: Vec<Action>,
}

impl Recommendations {
    /// Tier tag first, then action tags in `action_order()`.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::with_capacity(1 + self.actions.len());
        tags.push(self.tier.tag());
        for action in &self.actions {
            tags.push(action.tag());
        }
        tags
    }
}

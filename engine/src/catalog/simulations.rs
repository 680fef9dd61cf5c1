use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Confidence::High => Tone::Positive,
            Confidence::Medium => Tone::Caution,
            Confidence::Low => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub budget: &'static str,
    pub projected_reach: &'static str,
    pub projected_roas: &'static str,
    pub confidence: Confidence,
}

pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        name: "Baseline",
        budget: "$20,000",
        projected_reach: "3.1M",
        projected_roas: "3.2x",
        confidence: Confidence::High,
    },
    Scenario {
        name: "Social-heavy",
        budget: "$20,000",
        projected_reach: "4.4M",
        projected_roas: "2.7x",
        confidence: Confidence::Medium,
    },
    Scenario {
        name: "Search-first",
        budget: "$18,000",
        projected_reach: "1.9M",
        projected_roas: "4.1x",
        confidence: Confidence::Medium,
    },
    Scenario {
        name: "Aggressive scale",
        budget: "$45,000",
        projected_reach: "8.2M",
        projected_roas: "2.1x",
        confidence: Confidence::Low,
    },
];

pub const ASSUMPTIONS: [&str; 3] = [
    "Seasonality index from last 12 months",
    "CPM held at current market average",
    "Creative fatigue after 14 days",
];

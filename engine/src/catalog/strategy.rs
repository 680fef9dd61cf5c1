use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveStatus {
    OnTrack,
    AtRisk,
    Draft,
}

impl ObjectiveStatus {
    pub fn label(self) -> &'static str {
        match self {
            ObjectiveStatus::OnTrack => "on track",
            ObjectiveStatus::AtRisk => "at risk",
            ObjectiveStatus::Draft => "draft",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ObjectiveStatus::OnTrack => Tone::Positive,
            ObjectiveStatus::AtRisk => Tone::Negative,
            ObjectiveStatus::Draft => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Objective {
    pub name: &'static str,
    pub target: &'static str,
    pub progress_percent: u16,
    pub status: ObjectiveStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct AudienceSegment {
    pub name: &'static str,
    pub size: &'static str,
    pub intent: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ChannelAllocation {
    pub channel: &'static str,
    pub share_percent: u16,
}

pub const OBJECTIVES: [Objective; 3] = [
    Objective {
        name: "Grow Q1 revenue",
        target: "+20% vs Q4",
        progress_percent: 64,
        status: ObjectiveStatus::OnTrack,
    },
    Objective {
        name: "Expand brand awareness",
        target: "5M impressions",
        progress_percent: 38,
        status: ObjectiveStatus::AtRisk,
    },
    Objective {
        name: "Launch loyalty program",
        target: "10K sign-ups",
        progress_percent: 0,
        status: ObjectiveStatus::Draft,
    },
];

pub const SEGMENTS: [AudienceSegment; 4] = [
    AudienceSegment {
        name: "Outdoor Enthusiasts",
        size: "1.2M",
        intent: "high",
    },
    AudienceSegment {
        name: "Urban Commuters",
        size: "860K",
        intent: "medium",
    },
    AudienceSegment {
        name: "Returning Customers",
        size: "240K",
        intent: "high",
    },
    AudienceSegment {
        name: "Deal Seekers",
        size: "2.1M",
        intent: "low",
    },
];

pub const CHANNEL_MIX: [ChannelAllocation; 4] = [
    ChannelAllocation {
        channel: "Social",
        share_percent: 40,
    },
    ChannelAllocation {
        channel: "Search",
        share_percent: 30,
    },
    ChannelAllocation {
        channel: "Display",
        share_percent: 20,
    },
    ChannelAllocation {
        channel: "Email",
        share_percent: 10,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mix_sums_to_hundred() {
        let total: u16 = CHANNEL_MIX.iter().map(|c| c.share_percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_progress_is_a_percentage() {
        assert!(OBJECTIVES.iter().all(|o| o.progress_percent <= 100));
    }
}

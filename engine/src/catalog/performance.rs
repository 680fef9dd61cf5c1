use super::{Metric, Performance, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignState {
    Active,
    Completed,
}

impl CampaignState {
    pub fn label(self) -> &'static str {
        match self {
            CampaignState::Active => "active",
            CampaignState::Completed => "completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            CampaignState::Active => Tone::Positive,
            CampaignState::Completed => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CampaignRow {
    pub name: &'static str,
    pub state: CampaignState,
    pub impressions: &'static str,
    pub clicks: &'static str,
    pub conversions: &'static str,
    pub spend: &'static str,
    pub roas: &'static str,
    pub performance: Performance,
}

pub const KEY_METRICS: [Metric; 6] = [
    Metric {
        title: "Total Impressions",
        value: "12.4M",
        change: "+18.2%",
    },
    Metric {
        title: "Click-Through Rate",
        value: "2.8%",
        change: "+0.4%",
    },
    Metric {
        title: "Conversion Rate",
        value: "4.1%",
        change: "+1.2%",
    },
    Metric {
        title: "Total Spend",
        value: "$24,580",
        change: "+8.7%",
    },
    Metric {
        title: "ROAS",
        value: "3.2x",
        change: "+0.8x",
    },
    Metric {
        title: "Cost per Click",
        value: "$0.42",
        change: "-$0.08",
    },
];

pub const CAMPAIGNS: [CampaignRow; 3] = [
    CampaignRow {
        name: "Holiday Sale 2024",
        state: CampaignState::Active,
        impressions: "2.1M",
        clicks: "45.2K",
        conversions: "1,234",
        spend: "$5,680",
        roas: "4.2x",
        performance: Performance::Excellent,
    },
    CampaignRow {
        name: "Brand Awareness Q1",
        state: CampaignState::Active,
        impressions: "1.8M",
        clicks: "38.7K",
        conversions: "892",
        spend: "$4,230",
        roas: "3.1x",
        performance: Performance::Good,
    },
    CampaignRow {
        name: "Product Launch",
        state: CampaignState::Completed,
        impressions: "3.2M",
        clicks: "68.9K",
        conversions: "2,156",
        spend: "$8,940",
        roas: "3.8x",
        performance: Performance::Excellent,
    },
];

use super::{Metric, Performance, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Running,
    Pending,
    Completed,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Running => "running",
            CampaignStatus::Pending => "pending",
            CampaignStatus::Completed => "completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            CampaignStatus::Running => Tone::Positive,
            CampaignStatus::Pending => Tone::Caution,
            CampaignStatus::Completed => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecentCampaign {
    pub name: &'static str,
    pub status: CampaignStatus,
    pub performance: Performance,
    pub spend: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Insight {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric {
        title: "Active Campaigns",
        value: "12",
        change: "+2",
    },
    Metric {
        title: "Total Impressions",
        value: "2.4M",
        change: "+15.2%",
    },
    Metric {
        title: "Conversion Rate",
        value: "3.2%",
        change: "+0.8%",
    },
    Metric {
        title: "Active Agents",
        value: "8",
        change: "+1",
    },
];

pub const RECENT_CAMPAIGNS: [RecentCampaign; 4] = [
    RecentCampaign {
        name: "Holiday Sale 2024",
        status: CampaignStatus::Running,
        performance: Performance::Excellent,
        spend: "$2,400",
    },
    RecentCampaign {
        name: "Brand Awareness Q1",
        status: CampaignStatus::Pending,
        performance: Performance::Good,
        spend: "$1,800",
    },
    RecentCampaign {
        name: "Product Launch",
        status: CampaignStatus::Completed,
        performance: Performance::Excellent,
        spend: "$3,200",
    },
    RecentCampaign {
        name: "Retargeting Campaign",
        status: CampaignStatus::Running,
        performance: Performance::Good,
        spend: "$950",
    },
];

pub const CHART_RANGES: [&str; 3] = ["7D", "30D", "90D"];

/// Range highlighted in the overview header.
pub const DEFAULT_CHART_RANGE: &str = "30D";

pub const INSIGHTS: [Insight; 3] = [
    Insight {
        title: "Causal Relationships",
        detail: "24 connections identified",
    },
    Insight {
        title: "Pattern Recognition",
        detail: "8 trends detected",
    },
    Insight {
        title: "Optimization Opportunities",
        detail: "12 recommendations",
    },
];

use super::{Performance, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    Active,
    Pending,
    Inactive,
}

impl AgentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Pending => "pending",
            AgentStatus::Inactive => "inactive",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AgentStatus::Active => Tone::Positive,
            AgentStatus::Pending => Tone::Caution,
            AgentStatus::Inactive => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Negative,
            Priority::Medium => Tone::Caution,
            Priority::Low => Tone::Positive,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub status: AgentStatus,
    pub permissions: &'static [&'static str],
    pub last_active: &'static str,
    pub performance: Performance,
    pub tasks_completed: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PendingApproval {
    pub campaign: &'static str,
    pub agent: &'static str,
    pub action: &'static str,
    pub requested: &'static str,
    pub priority: Priority,
}

pub const AGENTS: [Agent; 4] = [
    Agent {
        name: "Content Creator Agent",
        role: "Creative Generation",
        status: AgentStatus::Active,
        permissions: &["create_campaigns", "edit_creatives", "view_analytics"],
        last_active: "2 hours ago",
        performance: Performance::Excellent,
        tasks_completed: 45,
    },
    Agent {
        name: "Performance Optimizer",
        role: "Campaign Optimization",
        status: AgentStatus::Active,
        permissions: &["optimize_campaigns", "view_analytics", "generate_reports"],
        last_active: "15 minutes ago",
        performance: Performance::Good,
        tasks_completed: 32,
    },
    Agent {
        name: "Strategy Analyst",
        role: "Strategic Planning",
        status: AgentStatus::Pending,
        permissions: &["create_strategies", "approve_campaigns", "view_all_data"],
        last_active: "1 day ago",
        performance: Performance::Fair,
        tasks_completed: 28,
    },
    Agent {
        name: "Quality Assurance Bot",
        role: "Content Review",
        status: AgentStatus::Inactive,
        permissions: &["review_content", "approve_creatives"],
        last_active: "3 days ago",
        performance: Performance::Good,
        tasks_completed: 15,
    },
];

pub const PENDING_APPROVALS: [PendingApproval; 3] = [
    PendingApproval {
        campaign: "Holiday Sale Campaign",
        agent: "Content Creator Agent",
        action: "Create new ad creative",
        requested: "10 minutes ago",
        priority: Priority::High,
    },
    PendingApproval {
        campaign: "Brand Awareness Q1",
        agent: "Performance Optimizer",
        action: "Adjust budget allocation",
        requested: "1 hour ago",
        priority: Priority::Medium,
    },
    PendingApproval {
        campaign: "Product Launch",
        agent: "Strategy Analyst",
        action: "Modify targeting parameters",
        requested: "2 hours ago",
        priority: Priority::Low,
    },
];

/// Number of agents currently marked active.
pub fn active_count() -> usize {
    AGENTS
        .iter()
        .filter(|agent| agent.status == AgentStatus::Active)
        .count()
}
